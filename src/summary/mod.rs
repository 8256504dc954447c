// src/summary/mod.rs

use std::path::Path;

use csv::Writer;
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::{error::SummaryError, extract::Record};

/// CSV header. The leading empty cell names the 0-based index column,
/// kept for compatibility with downstream consumers of the original
/// table layout.
pub const HEADER: [&str; 6] = [
    "",
    "SampleID",
    "TotalReads",
    "TotalBases",
    "Contaminants",
    "Percent_Contaminants",
];

/// Serialize `records` (in order) to a CSV table at `target`.
///
/// Rows are staged in a temp file in the target's directory and renamed
/// over `target` only after everything is flushed, so a failed run never
/// leaves a partial table and never clobbers a pre-existing one.
pub fn write_summary(records: &[Record], target: &Path) -> Result<(), SummaryError> {
    let dir = target.parent().filter(|p| !p.as_os_str().is_empty());
    let tmp = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))
        .map_err(|e| write_err(target, e.into()))?;

    let mut wtr = Writer::from_writer(tmp);
    wtr.write_record(HEADER)
        .map_err(|e| write_err(target, e))?;
    for (idx, record) in records.iter().enumerate() {
        wtr.write_record([
            idx.to_string(),
            record.sample_id.clone(),
            scalar_field(&record.total_reads),
            scalar_field(&record.total_bases),
            scalar_field(&record.contaminants),
            scalar_field(&record.percent_contaminants),
        ])
        .map_err(|e| write_err(target, e))?;
    }

    // into_inner flushes; persist renames the temp file over the target
    let tmp = wtr
        .into_inner()
        .map_err(|e| write_err(target, e.into_error().into()))?;
    tmp.persist(target)
        .map_err(|e| write_err(target, e.error.into()))?;

    debug!(rows = records.len(), target = ?target, "summary table written");
    Ok(())
}

/// Render a JSON scalar the way it appeared in the source report:
/// strings bare, numbers in their JSON notation.
fn scalar_field(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn write_err(target: &Path, source: csv::Error) -> SummaryError {
    SummaryError::Write {
        path: target.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn record(sample_id: &str) -> Record {
        Record {
            sample_id: sample_id.to_string(),
            total_reads: json!(100),
            total_bases: json!(5000),
            contaminants: json!(3),
            percent_contaminants: json!(0.03),
        }
    }

    #[test]
    fn empty_input_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("parse_json.csv");

        write_summary(&[], &target).unwrap();

        let contents = fs::read_to_string(&target).unwrap();
        assert_eq!(
            contents,
            ",SampleID,TotalReads,TotalBases,Contaminants,Percent_Contaminants\n"
        );
    }

    #[test]
    fn rows_carry_index_and_stats() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("parse_json.csv");

        write_summary(&[record("sample1.json"), record("sample2.json")], &target).unwrap();

        let contents = fs::read_to_string(&target).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "0,sample1.json,100,5000,3,0.03");
        assert_eq!(lines[2], "1,sample2.json,100,5000,3,0.03");
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("parse_json.csv");

        let mut rec = record("odd,name.json");
        rec.percent_contaminants = json!("0.03, approx");
        write_summary(&[rec], &target).unwrap();

        let contents = fs::read_to_string(&target).unwrap();
        assert_eq!(
            contents.lines().nth(1).unwrap(),
            "0,\"odd,name.json\",100,5000,3,\"0.03, approx\""
        );
    }

    #[test]
    fn overwrites_previous_table() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("parse_json.csv");
        fs::write(&target, "stale contents\n").unwrap();

        write_summary(&[record("s.json")], &target).unwrap();

        let contents = fs::read_to_string(&target).unwrap();
        assert!(contents.starts_with(",SampleID,"));
        assert!(!contents.contains("stale"));
    }
}
