use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::PineconeStoreError;

/// The Pinecone calls the pipeline makes. `DescribeIndex` goes to the control
/// plane, the rest to an index host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint<'a> {
    DescribeIndex(&'a str),
    DescribeIndexStats,
    Upsert,
    Query,
}

impl Endpoint<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::DescribeIndex(_) => "describe_index",
            Endpoint::DescribeIndexStats => "describe_index_stats",
            Endpoint::Upsert => "upsert",
            Endpoint::Query => "query",
        }
    }

    fn method(&self) -> Method {
        match self {
            Endpoint::DescribeIndex(_) => Method::GET,
            _ => Method::POST,
        }
    }

    fn path(&self) -> String {
        match self {
            Endpoint::DescribeIndex(index) => format!("/indexes/{index}"),
            Endpoint::DescribeIndexStats => "/describe_index_stats".to_string(),
            Endpoint::Upsert => "/vectors/upsert".to_string(),
            Endpoint::Query => "/query".to_string(),
        }
    }
}

/// JSON client bound to one Pinecone base URL (an index host or the control
/// plane).
#[derive(Clone, Debug)]
pub struct PineconeHttpClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl PineconeHttpClient {
    pub fn new(base_url: String, api_key: String) -> Result<Self, PineconeStoreError> {
        if api_key.trim().is_empty() {
            return Err(PineconeStoreError::Config("api key is blank".to_string()));
        }
        if let Err(err) = reqwest::Url::parse(&base_url) {
            return Err(PineconeStoreError::Config(format!(
                "{base_url:?} is not a url: {err}"
            )));
        }

        Ok(Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bodiless call, used for control plane lookups.
    pub async fn fetch<Resp>(&self, endpoint: Endpoint<'_>) -> Result<Resp, PineconeStoreError>
    where
        Resp: DeserializeOwned,
    {
        self.call(endpoint, None::<&Value>, None).await
    }

    /// Sends `body` to `endpoint`. `namespace` is only used to label errors.
    pub async fn send_json<Req, Resp>(
        &self,
        endpoint: Endpoint<'_>,
        body: &Req,
        namespace: Option<&str>,
    ) -> Result<Resp, PineconeStoreError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        self.call(endpoint, Some(body), namespace).await
    }

    async fn call<Req, Resp>(
        &self,
        endpoint: Endpoint<'_>,
        body: Option<&Req>,
        namespace: Option<&str>,
    ) -> Result<Resp, PineconeStoreError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint.path());
        let mut request = self
            .http
            .request(endpoint.method(), url)
            .header("Api-Key", &self.api_key);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|err| PineconeStoreError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response.json::<Resp>().await.map_err(|err| {
                PineconeStoreError::Malformed(format!("{} body: {err}", endpoint.name()))
            });
        }

        let retry_after_seconds = retry_after(response.headers());
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        Err(PineconeStoreError::Api {
            endpoint: endpoint.name(),
            status: status.as_u16(),
            message: error_message(&body),
            retry_after_seconds,
            namespace: namespace.map(str::to_string),
        })
    }
}

fn retry_after(headers: &HeaderMap) -> Option<u64> {
    headers.get(RETRY_AFTER)?.to_str().ok()?.trim().parse().ok()
}

/// Pinecone reports errors as `{"message"}`, `{"error": "..."}` or
/// `{"error": {"message"}}` depending on the API version.
fn error_message(body: &Value) -> String {
    let message = match body.get("error") {
        Some(Value::String(message)) => Some(message.as_str()),
        Some(nested) => nested.get("message").and_then(Value::as_str),
        None => None,
    };
    body.get("message")
        .and_then(Value::as_str)
        .or(message)
        .unwrap_or("no error message")
        .to_string()
}
