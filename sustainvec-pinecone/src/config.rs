use crate::client::{Endpoint, PineconeHttpClient};
use crate::store::PineconeVectorStore;
use crate::types::IndexDescription;
use crate::PineconeStoreError;

pub const DEFAULT_CONTROL_PLANE_URL: &str = "https://api.pinecone.io";
pub const DEFAULT_UPSERT_BATCH_SIZE: usize = 300;

/// Collects connection settings for a [`PineconeVectorStore`].
///
/// The index is reached either through its data plane host or by name, in
/// which case `build` asks the control plane for the host.
pub struct PineconeStoreBuilder {
    host: Option<String>,
    index_name: Option<String>,
    control_plane_url: String,
    api_key: Option<String>,
    namespace: Option<String>,
    dimension: Option<usize>,
    validate_dimension: bool,
    max_batch_size: usize,
}

impl Default for PineconeStoreBuilder {
    fn default() -> Self {
        Self {
            host: None,
            index_name: None,
            control_plane_url: DEFAULT_CONTROL_PLANE_URL.to_string(),
            api_key: None,
            namespace: None,
            dimension: None,
            validate_dimension: false,
            max_batch_size: DEFAULT_UPSERT_BATCH_SIZE,
        }
    }
}

impl PineconeStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Data plane host of the index. Wins over `index_name`.
    pub fn base_url(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn index_name(mut self, name: impl Into<String>) -> Self {
        self.index_name = Some(name.into());
        self
    }

    pub fn control_plane_url(mut self, url: impl Into<String>) -> Self {
        self.control_plane_url = url.into();
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Expected vector length. Records of any other length are rejected
    /// before upload.
    pub fn dimension(mut self, dimension: usize) -> Self {
        self.dimension = Some(dimension);
        self
    }

    /// Compare `dimension` with the index's own on build. A mismatch is only
    /// logged.
    pub fn validate_dimension(mut self, enabled: bool) -> Self {
        self.validate_dimension = enabled;
        self
    }

    pub fn max_batch_size(mut self, records: usize) -> Self {
        self.max_batch_size = records;
        self
    }

    pub fn base_url_from_env(mut self, var: &str) -> Self {
        self.host = env_value(var).or(self.host);
        self
    }

    pub fn index_name_from_env(mut self, var: &str) -> Self {
        self.index_name = env_value(var).or(self.index_name);
        self
    }

    pub fn api_key_from_env(mut self, var: &str) -> Self {
        self.api_key = env_value(var).or(self.api_key);
        self
    }

    pub async fn build(self) -> Result<PineconeVectorStore, PineconeStoreError> {
        let Some(api_key) = self.api_key else {
            return Err(PineconeStoreError::Config("api key is required".to_string()));
        };
        if self.max_batch_size == 0 {
            return Err(PineconeStoreError::Config(
                "upsert chunks need at least one record".to_string(),
            ));
        }

        let host = if let Some(host) = self.host {
            with_scheme(&host)
        } else if let Some(index_name) = &self.index_name {
            resolve_index_host(&self.control_plane_url, &api_key, index_name).await?
        } else {
            return Err(PineconeStoreError::Config(
                "either base_url or index_name is required".to_string(),
            ));
        };

        let store = PineconeVectorStore::new(
            PineconeHttpClient::new(host, api_key)?,
            self.namespace,
            self.index_name,
            self.dimension,
            self.max_batch_size,
        );
        if self.validate_dimension {
            store.validate_dimension_on_init().await;
        }
        Ok(store)
    }
}

fn env_value(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}

async fn resolve_index_host(
    control_plane_url: &str,
    api_key: &str,
    index_name: &str,
) -> Result<String, PineconeStoreError> {
    let control_plane = PineconeHttpClient::new(control_plane_url.to_string(), api_key.to_string())?;
    let IndexDescription { host } = control_plane
        .fetch(Endpoint::DescribeIndex(index_name))
        .await?;
    if host.trim().is_empty() {
        return Err(PineconeStoreError::Malformed(format!(
            "index {index_name:?} has no host yet"
        )));
    }
    tracing::info!(%index_name, %host, "resolved index host");
    Ok(with_scheme(&host))
}

/// The control plane reports bare hostnames.
fn with_scheme(host: &str) -> String {
    if host.contains("://") {
        host.to_string()
    } else {
        format!("https://{host}")
    }
}
