//! Directory service error types.

use thiserror::Error;

/// Directory lookup error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum DirectoryError {
    #[error("network error while querying directory: {message}")]
    NetworkError { message: String },

    #[error("directory request timed out")]
    Timeout,

    #[error("directory returned HTTP {status}")]
    BadStatus { status: u16 },

    #[error("failed to decode directory response: {message}")]
    Decode { message: String },

    #[error("directory returned no records")]
    Empty,

    #[error("unexpected directory error: {message}")]
    Unexpected { message: String },
}

impl DirectoryError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the error came from the transport rather than the payload.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout)
    }

    /// Returns whether the service answered but knew nothing about the player.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Empty | Self::BadStatus { status: 404 })
    }
}

impl From<reqwest::Error> for DirectoryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::decode(e.to_string())
        } else {
            Self::network(e.to_string())
        }
    }
}
