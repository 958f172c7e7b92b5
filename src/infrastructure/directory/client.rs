//! Directory service HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url, header};
use tracing::{debug, warn};

use crate::domain::entities::{DirectoryRecord, DirectoryResponse};
use crate::domain::errors::DirectoryError;
use crate::domain::ports::DirectoryPort;
use crate::infrastructure::config::DirectoryConfig;

const USER_AGENT: &str = concat!("gtavatar/", env!("CARGO_PKG_VERSION"));

/// Directory service client.
pub struct DirectoryClient {
    client: Client,
    base_url: Url,
    by_name_path: String,
    by_id_path: String,
}

impl DirectoryClient {
    /// Creates client from configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or HTTP client creation fails.
    pub fn new(config: &DirectoryConfig) -> Result<Self, DirectoryError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            DirectoryError::unexpected(format!("invalid directory URL {}: {e}", config.base_url))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(DirectoryError::unexpected(format!(
                "directory URL {} cannot carry a path",
                config.base_url
            )));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DirectoryError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            by_name_path: config.by_name_path.clone(),
            by_id_path: config.by_id_path.clone(),
        })
    }

    /// Expands `template` against the base URL, substituting `value` for the
    /// segment equal to `placeholder`. The value is percent-encoded as one segment.
    fn endpoint(&self, template: &str, placeholder: &str, value: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            for segment in template.split('/').filter(|s| !s.is_empty()) {
                segments.push(if segment == placeholder { value } else { segment });
            }
        }
        url
    }

    async fn fetch(&self, url: Url) -> Result<DirectoryRecord, DirectoryError> {
        debug!(url = %url, "Querying directory");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach directory service");
                DirectoryError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body: DirectoryResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse directory response");
            DirectoryError::decode(e.to_string())
        })?;

        body.into_first().ok_or(DirectoryError::Empty)
    }
}

#[async_trait]
impl DirectoryPort for DirectoryClient {
    async fn by_id(&self, id: &str) -> Result<DirectoryRecord, DirectoryError> {
        self.fetch(self.endpoint(&self.by_id_path, "{id}", id)).await
    }

    async fn by_name(&self, name: &str) -> Result<DirectoryRecord, DirectoryError> {
        self.fetch(self.endpoint(&self.by_name_path, "{name}", name)).await
    }
}
