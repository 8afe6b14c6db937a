//! `assay`: score a score-ready JSON document and write the calibrated report.

mod io;
mod tracing_setup;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use assay_scoring::ScoringEngine;

#[derive(Parser, Debug)]
#[command(name = "assay", version, about = "Evidentiary scoring and statistical calibration")]
struct Cli {
    /// Score-ready JSON document to read.
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the scored document.
    #[arg(short, long)]
    output: PathBuf,

    /// Indent the output JSON.
    #[arg(long)]
    pretty: bool,

    /// Emit logs as JSON lines on stderr.
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.log_json);
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let started = Instant::now();

    let input = io::read_input(&cli.input)?;
    let output = ScoringEngine::new()
        .score_value(&input)
        .with_context(|| format!("failed to score {}", cli.input.display()))?;
    io::write_output(&cli.output, &output, cli.pretty)?;

    info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "wrote scored document"
    );
    Ok(())
}
