//! Key-value store error types.

use thiserror::Error;

/// Key-value store error variants.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store: {0}")]
    Io(#[from] std::io::Error),

    #[error("store contents are corrupt: {0}")]
    Corrupt(String),

    #[error("failed to encode value: {0}")]
    Encode(String),

    #[error("store not available: {0}")]
    NotAvailable(String),
}
