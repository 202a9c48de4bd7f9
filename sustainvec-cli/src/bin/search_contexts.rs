//! Answers the TCFD questionnaire for each (corporate, year) report by
//! retrieving the closest chunks of that report, and saves the contexts.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use sustainvec_cli::{load_dotenv, logging, require_env, OPENAI_API_KEY, PINECONE_API_KEY};
use sustainvec_embeddings::{OpenAiEmbedding, DEFAULT_EMBEDDING_DIMENSION, DEFAULT_EMBEDDING_MODEL};
use sustainvec_pinecone::PineconeVectorStore;
use sustainvec_retrieval::{collect_and_save, report_keys, Retriever, DEFAULT_TOP_K, TCFD_QUESTIONS};

#[derive(Parser)]
#[command(name = "search-contexts")]
#[command(about = "Retrieve TCFD question contexts per report from Pinecone")]
#[command(version)]
#[command(group(ArgGroup::new("index").required(true).args(["index_name", "index_host"])))]
struct Args {
    #[arg(long, env = "PINECONE_INDEX_NAME")]
    index_name: Option<String>,

    #[arg(long, env = "PINECONE_INDEX_HOST")]
    index_host: Option<String>,

    #[arg(long, env = "PINECONE_NAMESPACE")]
    namespace: Option<String>,

    #[arg(long, required = true, num_args = 1..)]
    corporates: Vec<String>,

    #[arg(long, required = true, num_args = 1..)]
    years: Vec<u16>,

    /// JSON file to create or update
    #[arg(long)]
    output_file: PathBuf,

    /// Passages retrieved per question
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    #[arg(long, env = "SUSTAINVEC_EMBEDDING_MODEL", default_value = DEFAULT_EMBEDDING_MODEL)]
    model: String,

    #[arg(long, default_value_t = DEFAULT_EMBEDDING_DIMENSION)]
    dimension: usize,

    /// OpenAI-compatible API base, e.g. a proxy
    #[arg(long, env = "OPENAI_API_BASE")]
    openai_api_base: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init();
    load_dotenv();
    let args = Args::parse();
    let openai_key = require_env(OPENAI_API_KEY)?;
    let pinecone_key = require_env(PINECONE_API_KEY)?;

    let embedder = match &args.openai_api_base {
        Some(base) => OpenAiEmbedding::with_api_base(
            openai_key,
            base.clone(),
            args.model.clone(),
            args.dimension,
        ),
        None => OpenAiEmbedding::new(openai_key, args.model.clone(), args.dimension),
    };

    let mut builder = PineconeVectorStore::builder().api_key(pinecone_key);
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

    let retriever = Retriever::new(embedder, store);
    let keys = report_keys(&args.corporates, &args.years);
    let saved = collect_and_save(
        &retriever,
        &keys,
        &TCFD_QUESTIONS,
        args.top_k,
        &args.output_file,
    )
    .await
    .with_context(|| format!("writing {}", args.output_file.display()))?;

    tracing::info!(output = %args.output_file.display(), reports = saved, "saved contexts");
    Ok(())
}
