// src/corpus/driver.rs

use crate::corpus::files;
use crate::extractors::{build_record, split_documents, Record};
use crate::storage::CsvStorage;
use crate::utils::AppError;
use std::path::Path;

/// Runs the whole extraction pipeline: scan `input_dir`, parse each archive
/// into records, sort, and write the CSV at `output_path`.
///
/// Returns the number of rows written. Records without an id sort after all
/// records that have one; ties keep their aggregation order.
pub fn run(input_dir: &Path, output_path: &Path) -> Result<usize, AppError> {
    let archives = files::find_archive_files(input_dir)?;
    tracing::info!("Found {} archive files in {}", archives.len(), input_dir.display());

    let mut records: Vec<Record> = Vec::new();
    for path in &archives {
        tracing::info!("Parsing {} ...", path.display());
        let raw = files::read_archive_text(path);
        let blocks = split_documents(&raw);
        tracing::debug!("{}: {} document blocks", path.display(), blocks.len());
        records.extend(blocks.iter().map(|block| build_record(block)));
    }

    records.sort_by_key(|r| (r.id.is_none(), r.id));

    let storage = CsvStorage::new(output_path);
    storage.save_records(&records)?;
    tracing::info!("Saved {} rows to {}", records.len(), output_path.display());

    Ok(records.len())
}
