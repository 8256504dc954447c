// src/lib.rs
//
// Consolidates per-sample RQC JSON reports into one CSV summary table:
// scan the input directory, extract the scaffold contamination stats
// from each report, write one row per sample.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub mod error;
pub mod extract;
pub mod scan;
pub mod summary;

pub use error::SummaryError;

/// Default input directory, relative to the working directory.
pub const DEFAULT_INPUT_DIR: &str = "rqc_data";
/// Default name of the CSV written inside the input directory.
pub const DEFAULT_OUTPUT_NAME: &str = "parse_json.csv";

/// What a successful run produced, for top-level reporting.
#[derive(Debug)]
pub struct RunSummary {
    pub rows: usize,
    pub output: PathBuf,
}

/// Run the whole pipeline: scan `input_dir`, extract every report, then
/// write `input_dir/<output_name>`.
///
/// Extraction is completed for all files before any output I/O happens,
/// so a bad report aborts the run with the previous table (if any) left
/// untouched.
pub fn run(input_dir: &Path, output_name: &str) -> Result<RunSummary, SummaryError> {
    let reports = scan::scan_reports(input_dir)?;
    info!(dir = ?input_dir, files = reports.len(), "found report files");

    let mut records = Vec::with_capacity(reports.len());
    for path in &reports {
        let record = extract::extract_record(path)?;
        debug!(sample = %record.sample_id, "extracted");
        records.push(record);
    }

    let output = input_dir.join(output_name);
    summary::write_summary(&records, &output)?;
    info!(rows = records.len(), output = ?output, "wrote summary table");

    Ok(RunSummary {
        rows: records.len(),
        output,
    })
}
