//! Replaces table text with the markdown descriptions from a completed
//! enrichment batch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sustainvec_cli::{load_dotenv, logging};
use sustainvec_enrich::{merge_result_file, ResultKind};

#[derive(Parser)]
#[command(name = "merge-tables")]
#[command(about = "Merge table enrichment results into an element file")]
#[command(version)]
struct Args {
    /// JSONL output of the table enrichment batch
    #[arg(long)]
    batch_output_file: PathBuf,

    /// Element file the batch was built from
    #[arg(long)]
    init_text_chunk_file: PathBuf,

    #[arg(long)]
    output_file: PathBuf,
}

fn main() -> Result<()> {
    logging::init();
    load_dotenv();
    let args = Args::parse();

    let updated = merge_result_file(
        &args.batch_output_file,
        &args.init_text_chunk_file,
        &args.output_file,
        ResultKind::Completion,
    )
    .with_context(|| format!("merging {}", args.batch_output_file.display()))?;

    tracing::info!(output = %args.output_file.display(), "updated {updated} elements");
    Ok(())
}
