//! Image probe error types.

use thiserror::Error;

/// Failure to complete an existence check.
///
/// A completed check that answered "missing" is not an error; see
/// [`crate::domain::ports::ProbeOutcome`].
#[derive(Debug, Clone, Error)]
pub enum ProbeError {
    /// The request did not complete in time.
    #[error("probe timed out")]
    Timeout,
    /// Connection or protocol failure.
    #[error("probe failed: {0}")]
    Network(String),
}

impl From<reqwest::Error> for ProbeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(e.to_string())
        }
    }
}
