// src/corpus/files.rs

use crate::utils::error::CorpusError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

// Archive files are named reut2-000.sgm through reut2-021.sgm in the
// published corpus; the width of the numeric suffix is not assumed.
static ARCHIVE_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^reut2-\d+\.sgm$").expect("Failed to compile ARCHIVE_NAME_RE")
});

/// Lists the archive files in `dir`, sorted lexicographically by name.
///
/// Entries not matching the corpus naming convention are skipped. A missing
/// or non-directory input path is the one fatal error of the whole run.
pub fn find_archive_files(dir: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    if !dir.is_dir() {
        return Err(CorpusError::MissingInputDir(dir.display().to_string()));
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if ARCHIVE_NAME_RE.is_match(name) {
            paths.push(entry.path());
        }
    }
    paths.sort();
    Ok(paths)
}

/// Reads one archive as text, decoding invalid byte sequences lossily.
///
/// An unreadable file is logged and contributes no content; a single bad
/// file must not abort the run.
pub fn read_archive_text(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            String::new()
        }
    }
}
