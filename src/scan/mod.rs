// src/scan/mod.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::error::SummaryError;

/// List the `.json` report files directly inside `dir`, sorted by file name.
///
/// - Suffix match only, case-sensitive; subdirectories and other extensions
///   are skipped silently. No recursive descent.
/// - An empty directory yields an empty vec, not an error.
/// - The sort makes row order independent of the OS directory-listing order,
///   so repeated runs produce identical output.
pub fn scan_reports(dir: &Path) -> Result<Vec<PathBuf>, SummaryError> {
    let entries = fs::read_dir(dir).map_err(|source| SummaryError::DirectoryNotFound {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut reports = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SummaryError::DirectoryNotFound {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => continue,
        };
        if !name.ends_with(".json") || !path.is_file() {
            continue;
        }
        reports.push(path);
    }

    reports.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(dir = ?dir, count = reports.len(), "scanned report directory");
    Ok(reports)
}
