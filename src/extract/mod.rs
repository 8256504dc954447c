// src/extract/mod.rs

use std::{fs::File, io::BufReader, path::Path};

use serde_json::Value;
use tracing::trace;

use crate::error::SummaryError;

/// Top-level key holding the scaffold contamination stats block.
pub const STATS_KEY: &str = "scaffoldStats1.txt";
/// Key of the description mapping beneath [`STATS_KEY`].
pub const DESC_KEY: &str = "desc";

/// One extracted row of per-sample statistics.
///
/// The four stat fields keep whatever scalar type the report used
/// (integer, float or string); they are carried through to the CSV
/// unconverted.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Base name of the source report, `.json` suffix retained.
    pub sample_id: String,
    pub total_reads: Value,
    pub total_bases: Value,
    pub contaminants: Value,
    pub percent_contaminants: Value,
}

/// Parse one report file and pull the four contamination stats out of
/// `root["scaffoldStats1.txt"]["desc"]`.
///
/// Malformed JSON or any missing key along that path aborts the whole
/// run; there is no per-file skip.
pub fn extract_record(path: &Path) -> Result<Record, SummaryError> {
    let file = File::open(path).map_err(|source| SummaryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| SummaryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let desc = doc
        .get(STATS_KEY)
        .ok_or_else(|| missing(path, STATS_KEY))?
        .get(DESC_KEY)
        .ok_or_else(|| missing(path, DESC_KEY))?;

    let sample_id = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let record = Record {
        sample_id,
        total_reads: stat(path, desc, "TotalReads")?,
        total_bases: stat(path, desc, "TotalBases")?,
        contaminants: stat(path, desc, "ReadsMatched")?,
        percent_contaminants: stat(path, desc, "PctReadsMatched")?,
    };
    trace!(sample = %record.sample_id, "extracted record");
    Ok(record)
}

fn stat(path: &Path, desc: &Value, key: &'static str) -> Result<Value, SummaryError> {
    desc.get(key).cloned().ok_or_else(|| missing(path, key))
}

fn missing(path: &Path, key: &'static str) -> SummaryError {
    SummaryError::Schema {
        path: path.to_path_buf(),
        key,
    }
}
