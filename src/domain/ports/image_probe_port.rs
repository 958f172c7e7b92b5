//! Image existence probe port definition.

use async_trait::async_trait;

use crate::domain::errors::ProbeError;

/// Answer of a completed existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The resource answered with a success status.
    Found,
    /// The resource answered with a non-success status.
    Missing {
        /// HTTP status code returned.
        status: u16,
    },
}

impl ProbeOutcome {
    /// Returns true for [`ProbeOutcome::Found`].
    #[must_use]
    pub const fn exists(self) -> bool {
        matches!(self, Self::Found)
    }
}

/// Port for metadata-only existence checks.
/// Implementations must be safe to call concurrently.
#[async_trait]
pub trait ImageProbePort: Send + Sync {
    /// Checks whether `url` resolves to an existing resource.
    async fn probe(&self, url: &str) -> Result<ProbeOutcome, ProbeError>;
}
