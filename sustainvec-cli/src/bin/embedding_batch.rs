//! Writes one embedding batch request per element that has an id and text.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sustainvec_cli::{for_each_input, load_dotenv, logging};
use sustainvec_core::io::{derived_output, ensure_dir, read_elements};
use sustainvec_enrich::request::DEFAULT_EMBEDDING_MODEL;
use sustainvec_enrich::{build_embedding_requests, write_batch_file, EmbeddingRequestConfig};

#[derive(Parser)]
#[command(name = "embedding-batch")]
#[command(about = "Create embedding batch files for context-aware chunks")]
#[command(version)]
struct Args {
    /// Element JSON file, or a folder of element JSON files
    #[arg(long)]
    input_path: PathBuf,

    /// Folder receiving `<stem>_embedding_requests.jsonl`
    #[arg(long)]
    output_folder: PathBuf,

    #[arg(long, env = "SUSTAINVEC_EMBEDDING_MODEL", default_value = DEFAULT_EMBEDDING_MODEL)]
    model: String,
}

fn main() -> Result<()> {
    logging::init();
    load_dotenv();
    let args = Args::parse();

    let config = EmbeddingRequestConfig { model: args.model };

    let summary = for_each_input(&args.input_path, |input| {
        let elements = read_elements(input)?;
        let requests = build_embedding_requests(&elements, &config);

        ensure_dir(&args.output_folder)?;
        let output = derived_output(&args.output_folder, input, "_embedding_requests.jsonl");
        let written = write_batch_file(&output, &requests)?;
        tracing::info!(output = %output.display(), "created batch file with {written} requests");
        Ok(())
    })?;

    tracing::info!(processed = summary.processed, failed = summary.failed, "done");
    Ok(())
}
