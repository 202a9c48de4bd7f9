//! Correlation of asynchronous batch results with the elements that produced
//! the requests.
//!
//! Results are loaded into an id → payload map once, then every element is
//! probed by its `element_id`. Both inputs are fully parsed before the output
//! is opened, so a malformed line in either one leaves nothing behind.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use sustainvec_core::io::{read_elements, write_json_pretty};
use sustainvec_core::{Element, Value};

use crate::{EnrichError, EnrichResult};

/// Which provider payload a result file carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultKind {
    /// `response.body.choices[0].message.content`, merged into `text`.
    Completion,
    /// `response.body.data[0].embedding`, merged into `embedding`.
    Embedding,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResultPayload {
    Text(String),
    Embedding(Vec<f64>),
}

#[derive(Debug, Deserialize)]
struct ResultLine {
    #[serde(default)]
    custom_id: Option<String>,
    #[serde(default)]
    response: Option<ResultResponse>,
    #[serde(default)]
    error: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ResultResponse {
    body: Value,
}

#[derive(Debug, Deserialize)]
struct CompletionBody {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct EmbeddingListBody {
    data: Vec<EmbeddingItem>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingItem {
    embedding: Vec<f64>,
}

fn extract_payload(kind: ResultKind, body: Value) -> Result<ResultPayload, String> {
    match kind {
        ResultKind::Completion => {
            let body: CompletionBody = serde_json::from_value(body)
                .map_err(|err| format!("response.body is not a chat completion: {err}"))?;
            body.choices
                .into_iter()
                .next()
                .map(|choice| ResultPayload::Text(choice.message.content))
                .ok_or_else(|| "response.body.choices is empty".to_string())
        }
        ResultKind::Embedding => {
            let body: EmbeddingListBody = serde_json::from_value(body)
                .map_err(|err| format!("response.body is not an embedding list: {err}"))?;
            body.data
                .into_iter()
                .next()
                .map(|item| ResultPayload::Embedding(item.embedding))
                .ok_or_else(|| "response.body.data is empty".to_string())
        }
    }
}

/// Parses a batch result file into an id → payload map.
///
/// A later line for the same id replaces an earlier one. Lines without a
/// `response` (requests the provider failed) and lines without `custom_id`
/// are skipped with a warning. Anything else that does not parse fails the
/// whole read.
pub fn read_batch_results<R: BufRead>(
    reader: R,
    kind: ResultKind,
) -> EnrichResult<HashMap<String, ResultPayload>> {
    let mut results = HashMap::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|err| EnrichError::MalformedResult {
            line: line_no,
            reason: err.to_string(),
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let entry: ResultLine =
            serde_json::from_str(&line).map_err(|err| EnrichError::MalformedResult {
                line: line_no,
                reason: err.to_string(),
            })?;

        let Some(custom_id) = entry.custom_id else {
            tracing::warn!(line = line_no, "batch result without custom_id, skipping");
            continue;
        };
        let Some(response) = entry.response else {
            tracing::warn!(
                line = line_no,
                custom_id = %custom_id,
                error = ?entry.error,
                "batch result has no response, skipping"
            );
            continue;
        };

        let payload = extract_payload(kind, response.body).map_err(|reason| {
            EnrichError::MalformedResult {
                line: line_no,
                reason,
            }
        })?;
        results.insert(custom_id, payload);
    }
    Ok(results)
}

/// Writes each matching payload onto its element and returns how many
/// elements changed. Elements with no matching id are left untouched.
pub fn merge_results(elements: &mut [Element], results: &HashMap<String, ResultPayload>) -> usize {
    let mut updated = 0usize;
    for element in elements.iter_mut() {
        let Some(payload) = element
            .element_id
            .as_deref()
            .and_then(|id| results.get(id))
        else {
            continue;
        };
        match payload {
            ResultPayload::Text(text) => element.text = Some(text.clone()),
            ResultPayload::Embedding(vector) => element.embedding = Some(vector.clone()),
        }
        updated += 1;
    }
    updated
}

/// Full merge step: result file + element file → updated element file.
pub fn merge_result_file(
    results_path: &Path,
    elements_path: &Path,
    output_path: &Path,
    kind: ResultKind,
) -> EnrichResult<usize> {
    let file = File::open(results_path).map_err(|err| EnrichError::io(results_path, err))?;
    let results = read_batch_results(BufReader::new(file), kind)?;
    tracing::info!(
        results = results.len(),
        path = %results_path.display(),
        "loaded batch results"
    );

    let mut elements = read_elements(elements_path)?;
    let updated = merge_results(&mut elements, &results);
    write_json_pretty(output_path, &elements)?;
    Ok(updated)
}
