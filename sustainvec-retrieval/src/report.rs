//! Per-report context collection and the shared context file.
//!
//! The context file maps `"<corporate>_<year>"` to an object holding one
//! context per answered question plus the concatenation of all of them under
//! the same `"<corporate>_<year>"` key.

use std::fmt;
use std::path::Path;

use serde_json::Map;
use sustainvec_core::io::{read_json, write_json_pretty};
use sustainvec_core::{Embedding, MetadataFilter, PipelineError, Value, VectorStore};

use crate::questionnaire::Question;
use crate::{Retriever, RetrievalError, RetrievalResult};

pub const DEFAULT_TOP_K: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReportKey {
    pub corporate: String,
    pub year: u16,
}

impl ReportKey {
    pub fn new(corporate: impl Into<String>, year: u16) -> Self {
        Self {
            corporate: corporate.into(),
            year,
        }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Exact match on both tags written by the record formatter.
    pub fn filter(&self) -> MetadataFilter {
        MetadataFilter::All(vec![
            MetadataFilter::eq("corporate", self.corporate.as_str()),
            MetadataFilter::eq("year", self.year),
        ])
    }
}

impl fmt::Display for ReportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.corporate, self.year)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportContexts {
    /// `(question id, context)` in questionnaire order, answered questions only.
    pub answers: Vec<(String, String)>,
    /// Every context followed by a newline.
    pub combined: String,
}

impl ReportContexts {
    pub fn to_value(&self, key: &ReportKey) -> Value {
        let mut object = Map::new();
        for (question_id, context) in &self.answers {
            object.insert(question_id.clone(), Value::String(context.clone()));
        }
        object.insert(key.label(), Value::String(self.combined.clone()));
        Value::Object(object)
    }
}

/// Runs every question against the index, scoped to one report.
///
/// Questions are asked in order, one at a time. A question with no usable
/// matches is logged and left out; the first embedding or store failure
/// aborts the report.
pub async fn collect_contexts<E, S>(
    retriever: &Retriever<E, S>,
    key: &ReportKey,
    questions: &[Question],
    top_k: usize,
) -> RetrievalResult<ReportContexts>
where
    E: Embedding,
    S: VectorStore,
{
    let filter = key.filter();
    let mut contexts = ReportContexts::default();

    for question in questions {
        let passages = retriever.passages(question.text, top_k, Some(&filter)).await?;
        if passages.is_empty() {
            tracing::info!(
                corporate = %key.corporate,
                year = key.year,
                question = question.id,
                "no matches found"
            );
            continue;
        }

        let lines = passages
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()
            .map_err(PipelineError::from)?;
        let context = lines.join("\n");

        contexts.combined.push_str(&context);
        contexts.combined.push('\n');
        contexts.answers.push((question.id.to_string(), context));
    }

    Ok(contexts)
}

/// Stores `contexts` under `key` in the JSON object at `path`, keeping every
/// other key already there. A missing file starts empty.
pub fn merge_into_file(
    path: &Path,
    key: &ReportKey,
    contexts: &ReportContexts,
) -> RetrievalResult<()> {
    let mut document = if path.exists() {
        match read_json::<Value>(path)? {
            Value::Object(map) => map,
            _ => {
                return Err(RetrievalError::NotAnObject {
                    path: path.to_path_buf(),
                })
            }
        }
    } else {
        Map::new()
    };

    document.insert(key.label(), contexts.to_value(key));
    write_json_pretty(path, &document)?;
    Ok(())
}

/// Collects and saves contexts for every `(corporate, year)` pair, corporates
/// outer and years inner. The file is rewritten after each pair.
pub async fn collect_and_save<E, S>(
    retriever: &Retriever<E, S>,
    keys: &[ReportKey],
    questions: &[Question],
    top_k: usize,
    output: &Path,
) -> RetrievalResult<usize>
where
    E: Embedding,
    S: VectorStore,
{
    for key in keys {
        let contexts = collect_contexts(retriever, key, questions, top_k).await?;
        merge_into_file(output, key, &contexts)?;
        tracing::info!(
            report = %key,
            answered = contexts.answers.len(),
            path = %output.display(),
            "saved report contexts"
        );
    }
    Ok(keys.len())
}

/// Cartesian product of corporates and years, corporates outer.
pub fn report_keys(corporates: &[String], years: &[u16]) -> Vec<ReportKey> {
    corporates
        .iter()
        .flat_map(|corporate| years.iter().map(move |year| ReportKey::new(corporate.clone(), *year)))
        .collect()
}
