//! Converts embedded elements into `{id, values, metadata}` records tagged
//! with the report's corporate and year.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sustainvec_cli::{load_dotenv, logging};
use sustainvec_core::io::{read_elements, write_json_pretty};
use sustainvec_pinecone::format_records;

#[derive(Parser)]
#[command(name = "format-records")]
#[command(about = "Format embedded elements as vector records")]
#[command(version)]
struct Args {
    /// Element file with embeddings merged in
    #[arg(long)]
    input_file: PathBuf,

    #[arg(long)]
    output_file: PathBuf,
}

fn main() -> Result<()> {
    logging::init();
    load_dotenv();
    let args = Args::parse();

    let elements = read_elements(&args.input_file)
        .with_context(|| format!("reading {}", args.input_file.display()))?;
    let records = format_records(&elements);
    write_json_pretty(&args.output_file, &records)?;

    tracing::info!(
        output = %args.output_file.display(),
        skipped = elements.len() - records.len(),
        "formatted {} vector records",
        records.len()
    );
    Ok(())
}
