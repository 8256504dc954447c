// src/error.rs

use std::{io, path::PathBuf};
use thiserror::Error;

/// Everything that can abort a summary run. All variants are fatal;
/// nothing is retried or downgraded to a warning.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("input directory {path:?} does not exist or is not listable: {source}")]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("opening report {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("report {path:?} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("report {path:?} is missing required key {key:?}")]
    Schema { path: PathBuf, key: &'static str },

    #[error("writing summary {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
