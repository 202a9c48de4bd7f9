//! Attaches vectors from a completed embedding batch to their elements.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sustainvec_cli::{load_dotenv, logging};
use sustainvec_enrich::{merge_result_file, ResultKind};

#[derive(Parser)]
#[command(name = "merge-embeddings")]
#[command(about = "Merge embedding results into an element file")]
#[command(version)]
struct Args {
    /// JSONL output of the embedding batch
    #[arg(long)]
    input_embedding: PathBuf,

    /// Element file the batch was built from
    #[arg(long)]
    input_text_chunk: PathBuf,

    #[arg(long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    logging::init();
    load_dotenv();
    let args = Args::parse();

    let updated = merge_result_file(
        &args.input_embedding,
        &args.input_text_chunk,
        &args.output,
        ResultKind::Embedding,
    )
    .with_context(|| format!("merging {}", args.input_embedding.display()))?;

    tracing::info!(output = %args.output.display(), "updated {updated} elements");
    Ok(())
}
