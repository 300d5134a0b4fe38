// src/storage/mod.rs
use crate::extractors::record::Record;
use crate::utils::error::StorageError;
use std::fs;
use std::path::{Path, PathBuf};

// Column order must match the Record field order used by `serialize`.
const CSV_HEADER: [&str; 7] = [
    "id",
    "date",
    "article_title",
    "article_text",
    "author",
    "places",
    "topics",
];

pub struct CsvStorage {
    output_path: PathBuf,
}

impl CsvStorage {
    /// Creates a new CsvStorage targeting the specified output file
    pub fn new<P: AsRef<Path>>(output_path: P) -> Self {
        Self { output_path: output_path.as_ref().to_path_buf() }
    }

    /// Writes all records to the output file in one pass.
    ///
    /// The header row is written explicitly so that an empty corpus still
    /// produces a header-only file. A `None` id serializes as an empty
    /// field.
    pub fn save_records(&self, records: &[Record]) -> Result<PathBuf, StorageError> {
        // Create the parent directory if it doesn't exist
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StorageError::IoError)?;
            }
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.output_path)?;

        writer.write_record(CSV_HEADER)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush().map_err(StorageError::IoError)?;

        tracing::info!("Wrote CSV to {}", self.output_path.display());

        Ok(self.output_path.clone())
    }
}
