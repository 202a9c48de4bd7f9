//! Writes one chat-completion batch request per table element, asking for a
//! markdown rendering that uses the surrounding text as context.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sustainvec_cli::{for_each_input, load_dotenv, logging, require_env, OPENAI_API_KEY};
use sustainvec_core::io::{derived_output, ensure_dir, read_elements};
use sustainvec_enrich::request::{DEFAULT_MAX_TOKENS, DEFAULT_TABLE_MODEL};
use sustainvec_enrich::{build_table_requests, write_batch_file, TableRequestConfig};

#[derive(Parser)]
#[command(name = "table-batch")]
#[command(about = "Create table enrichment batch files")]
#[command(version)]
struct Args {
    /// Element JSON file, or a folder of element JSON files
    #[arg(long)]
    input_path: PathBuf,

    /// Folder receiving `<stem>_markdown_requests.jsonl`
    #[arg(long)]
    output_folder: PathBuf,

    /// Completion budget per table
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    #[arg(long, env = "SUSTAINVEC_TABLE_MODEL", default_value = DEFAULT_TABLE_MODEL)]
    model: String,
}

fn main() -> Result<()> {
    logging::init();
    load_dotenv();
    let args = Args::parse();
    require_env(OPENAI_API_KEY)?;

    let config = TableRequestConfig {
        model: args.model,
        max_tokens: args.max_tokens,
    };

    let summary = for_each_input(&args.input_path, |input| {
        tracing::info!(input = %input.display(), "processing file");
        let elements = read_elements(input)?;
        if elements.is_empty() {
            tracing::info!(input = %input.display(), "no data found");
            return Ok(());
        }

        let requests = build_table_requests(&elements, &config);
        ensure_dir(&args.output_folder)?;
        let output = derived_output(&args.output_folder, input, "_markdown_requests.jsonl");
        let written = write_batch_file(&output, &requests)?;
        tracing::info!(output = %output.display(), "created batch file with {written} requests");
        Ok(())
    })?;

    tracing::info!(processed = summary.processed, failed = summary.failed, "done");
    Ok(())
}
