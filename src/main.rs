use anyhow::Result;
use clap::Parser;
use rqcstats::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_NAME};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Consolidate per-sample RQC JSON reports into a single CSV summary.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory containing the per-sample `.json` reports.
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Name of the CSV summary written inside the input directory.
    #[arg(long, default_value = DEFAULT_OUTPUT_NAME)]
    output: String,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) run the pipeline ─────────────────────────────────────────
    let args = Args::parse();
    let summary = rqcstats::run(&args.input_dir, &args.output)?;
    info!(
        rows = summary.rows,
        output = %summary.output.display(),
        "done"
    );
    Ok(())
}
