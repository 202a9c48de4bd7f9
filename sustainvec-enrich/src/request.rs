use serde::{Deserialize, Serialize};
use sustainvec_core::{Element, ElementType, PipelineError};

use crate::context::context_window_at;
use crate::prompt::{table_prompt, TABLE_SYSTEM_PROMPT};
use crate::EnrichError;

pub const DEFAULT_TABLE_MODEL: &str = "gpt-4o";
pub const DEFAULT_MAX_TOKENS: u32 = 1700;
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchEndpoint {
    ChatCompletions,
    Embeddings,
}

impl BatchEndpoint {
    pub fn url(self) -> &'static str {
        match self {
            BatchEndpoint::ChatCompletions => "/v1/chat/completions",
            BatchEndpoint::Embeddings => "/v1/embeddings",
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ChatCompletionBody {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct EmbeddingBody {
    pub model: String,
    pub input: String,
    pub encoding_format: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum RequestBody {
    ChatCompletion(ChatCompletionBody),
    Embedding(EmbeddingBody),
}

/// One line of a provider batch file. `custom_id` carries the element id so
/// the asynchronous result can be joined back later.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct BatchRequest {
    pub custom_id: String,
    pub method: String,
    pub url: String,
    pub body: RequestBody,
}

impl BatchRequest {
    pub fn new(custom_id: impl Into<String>, endpoint: BatchEndpoint, body: RequestBody) -> Self {
        Self {
            custom_id: custom_id.into(),
            method: "POST".to_string(),
            url: endpoint.url().to_string(),
            body,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TableRequestConfig {
    pub model: String,
    pub max_tokens: u32,
}

impl Default for TableRequestConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_TABLE_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EmbeddingRequestConfig {
    pub model: String,
}

impl Default for EmbeddingRequestConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
        }
    }
}

/// Enrichment request for the table at `position`.
///
/// `Ok(None)` means the element is not an enrichable table: wrong type, no
/// metadata, or no `element_id`. A table that has those but lacks its HTML
/// rendering or text is an error for that record only.
pub fn build_table_request(
    elements: &[Element],
    position: usize,
    config: &TableRequestConfig,
) -> Result<Option<BatchRequest>, EnrichError> {
    let Some(element) = elements.get(position) else {
        return Ok(None);
    };
    if !element.is(&ElementType::Table) {
        return Ok(None);
    }
    let Some(metadata) = element.metadata.as_ref() else {
        return Ok(None);
    };
    let Some(element_id) = element.element_id.as_deref().filter(|id| !id.is_empty()) else {
        return Ok(None);
    };

    let html_table = metadata
        .text_as_html
        .as_deref()
        .ok_or_else(|| PipelineError::missing(Some(element_id), "text_as_html"))?;
    let table_text = element
        .text
        .as_deref()
        .ok_or_else(|| PipelineError::missing(Some(element_id), "text"))?;

    let context = context_window_at(elements, position);
    let body = ChatCompletionBody {
        model: config.model.clone(),
        messages: vec![
            Message {
                role: Role::System,
                content: TABLE_SYSTEM_PROMPT.to_string(),
            },
            Message {
                role: Role::User,
                content: table_prompt(html_table, table_text, &context),
            },
        ],
        max_tokens: config.max_tokens,
    };

    Ok(Some(BatchRequest::new(
        element_id,
        BatchEndpoint::ChatCompletions,
        RequestBody::ChatCompletion(body),
    )))
}

/// Enrichment requests for every table in one document, in reading order.
/// Tables that fail to build are logged with their id and left out.
pub fn build_table_requests(elements: &[Element], config: &TableRequestConfig) -> Vec<BatchRequest> {
    let mut requests = Vec::new();
    for (position, element) in elements.iter().enumerate() {
        match build_table_request(elements, position, config) {
            Ok(Some(request)) => requests.push(request),
            Ok(None) => {}
            Err(err) => {
                tracing::error!(
                    element_id = element.element_id.as_deref().unwrap_or("<none>"),
                    error = %err,
                    "error processing table"
                );
            }
        }
    }
    requests
}

pub fn build_embedding_request(
    element: &Element,
    config: &EmbeddingRequestConfig,
) -> Result<BatchRequest, PipelineError> {
    let element_id = element
        .element_id
        .as_deref()
        .ok_or_else(|| PipelineError::missing(None, "element_id"))?;
    let text = element
        .text
        .as_deref()
        .ok_or_else(|| PipelineError::missing(Some(element_id), "text"))?;

    let body = EmbeddingBody {
        model: config.model.clone(),
        input: text.to_string(),
        encoding_format: "float".to_string(),
    };
    Ok(BatchRequest::new(
        element_id,
        BatchEndpoint::Embeddings,
        RequestBody::Embedding(body),
    ))
}

/// Embedding requests for every element carrying both an id and text.
pub fn build_embedding_requests(
    elements: &[Element],
    config: &EmbeddingRequestConfig,
) -> Vec<BatchRequest> {
    elements
        .iter()
        .filter_map(|element| match build_embedding_request(element, config) {
            Ok(request) => Some(request),
            Err(err) => {
                tracing::warn!(error = %err, "skipping element due to missing data");
                None
            }
        })
        .collect()
}
