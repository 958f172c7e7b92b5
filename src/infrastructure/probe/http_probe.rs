//! HEAD-request image probe.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::trace;

use crate::domain::errors::ProbeError;
use crate::domain::ports::{ImageProbePort, ProbeOutcome};
use crate::infrastructure::config::ProbeConfig;

/// Checks image existence with `HEAD` requests; no body is transferred.
///
/// Holds only a connection pool, so one instance serves concurrent probes.
#[derive(Debug, Clone)]
pub struct HttpImageProbe {
    client: Client,
}

impl HttpImageProbe {
    /// Creates a probe from configuration.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProbeError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ImageProbePort for HttpImageProbe {
    async fn probe(&self, url: &str) -> Result<ProbeOutcome, ProbeError> {
        let response = self.client.head(url).send().await?;
        let status = response.status();
        trace!(url, status = status.as_u16(), "HEAD answered");

        Ok(if status.is_success() {
            ProbeOutcome::Found
        } else {
            ProbeOutcome::Missing {
                status: status.as_u16(),
            }
        })
    }
}
