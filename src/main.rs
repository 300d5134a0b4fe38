// src/main.rs
mod corpus;
mod extractors;
mod storage;
mod utils;

use clap::Parser;
use std::path::PathBuf;
use utils::AppError;

/// Command Line Interface for the Reuters-21578 corpus extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing the reut2-NNN.sgm archive files
    #[arg(short, long, default_value = "./reuters21578")]
    input_dir: PathBuf,

    /// Path of the CSV file to write
    #[arg(short, long, default_value = "./reuters_regions.csv")]
    output: PathBuf,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting extraction for args: {:?}", args);

    // 3. Run the corpus pipeline and report the outcome
    let rows = corpus::driver::run(&args.input_dir, &args.output)?;
    tracing::info!("Extraction finished. Rows written: {} -> {}", rows, args.output.display());

    Ok(())
}
