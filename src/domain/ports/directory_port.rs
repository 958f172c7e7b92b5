//! Directory service port definition.

use async_trait::async_trait;

use crate::domain::entities::DirectoryRecord;
use crate::domain::errors::DirectoryError;

/// Port for the third-party player directory.
#[async_trait]
pub trait DirectoryPort: Send + Sync {
    /// Looks a player up by numeric identifier.
    async fn by_id(&self, id: &str) -> Result<DirectoryRecord, DirectoryError>;

    /// Looks a player up by display name.
    async fn by_name(&self, name: &str) -> Result<DirectoryRecord, DirectoryError>;
}
