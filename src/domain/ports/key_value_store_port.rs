//! Key-value store port definition.

use async_trait::async_trait;

use crate::domain::errors::StoreError;

/// Port for small persisted text values.
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Reads the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes the value stored under `key`.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
