//! Uploads formatted vector records to a Pinecone index in fixed-size chunks.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use sustainvec_cli::{load_dotenv, logging, require_env, PINECONE_API_KEY};
use sustainvec_core::io::read_json;
use sustainvec_core::VectorRecord;
use sustainvec_pinecone::{PineconeVectorStore, DEFAULT_UPSERT_BATCH_SIZE};

#[derive(Parser)]
#[command(name = "upsert-records")]
#[command(about = "Upsert vector records into a Pinecone index")]
#[command(version)]
#[command(group(ArgGroup::new("index").required(true).args(["index_name", "index_host"])))]
struct Args {
    /// Output of `format-records`
    #[arg(long)]
    input_file: PathBuf,

    /// Index to resolve through the control plane
    #[arg(long, env = "PINECONE_INDEX_NAME")]
    index_name: Option<String>,

    /// Data plane host, skips name resolution
    #[arg(long, env = "PINECONE_INDEX_HOST")]
    index_host: Option<String>,

    #[arg(long, env = "PINECONE_NAMESPACE")]
    namespace: Option<String>,

    /// Records per upsert request
    #[arg(long, default_value_t = DEFAULT_UPSERT_BATCH_SIZE)]
    chunk_size: usize,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init();
    load_dotenv();
    let args = Args::parse();
    let api_key = require_env(PINECONE_API_KEY)?;

    let records: Vec<VectorRecord> = read_json(&args.input_file)
        .with_context(|| format!("reading {}", args.input_file.display()))?;
    tracing::info!(input = %args.input_file.display(), "loaded {} vectors", records.len());

    let mut builder = PineconeVectorStore::builder()
        .api_key(api_key)
        .max_batch_size(args.chunk_size);
    if let Some(host) = args.index_host {
        builder = builder.base_url(host);
    }
    if let Some(name) = args.index_name {
        builder = builder.index_name(name);
    }
    if let Some(namespace) = args.namespace {
        builder = builder.namespace(namespace);
    }
    let store = builder.build().await.context("connecting to pinecone")?;

    let upserted = store.upsert_records(&records).await?;
    tracing::info!(host = store.host(), upserted, "upsert completed successfully");
    Ok(())
}
