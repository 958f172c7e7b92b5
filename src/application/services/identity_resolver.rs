//! Player identity resolution against the directory service.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{DirectoryRecord, PlayerToken, ResolvedIdentity};
use crate::domain::errors::DirectoryError;
use crate::domain::ports::DirectoryPort;

/// Resolves a raw token into an identifier and display name.
///
/// Directory failures never escape: a failed query simply leaves the fields it
/// would have filled undiscovered.
#[derive(Clone)]
pub struct IdentityResolver {
    directory: Arc<dyn DirectoryPort>,
}

impl IdentityResolver {
    /// Creates a resolver backed by `directory`.
    #[must_use]
    pub const fn new(directory: Arc<dyn DirectoryPort>) -> Self {
        Self { directory }
    }

    /// Resolves `token`.
    ///
    /// For an identifier token the identifier is the token itself and only the
    /// name is looked up. For a name token the identifier is looked up and the
    /// caller's name is kept once the directory has answered.
    pub async fn resolve(&self, token: &PlayerToken) -> ResolvedIdentity {
        match token {
            PlayerToken::Id(id) => {
                debug!(id = %id, "Resolving name for identifier");
                let name = Self::settle(self.directory.by_id(id.as_str()).await, token)
                    .and_then(|record| record.display_name().map(str::to_string));

                ResolvedIdentity::new(Some(id.clone()), name)
            }
            PlayerToken::Name(name) => {
                debug!(name = %name, "Resolving identifier for name");
                let Some(record) = Self::settle(self.directory.by_name(name).await, token) else {
                    return ResolvedIdentity::unresolved();
                };

                let id = record.player_id();
                if id.is_none() {
                    debug!(name = %name, "Directory record carries no identifier");
                }

                let name = if name.is_empty() {
                    record.display_name().map(str::to_string)
                } else {
                    Some(name.clone())
                };

                ResolvedIdentity::new(id, name)
            }
        }
    }

    fn settle(
        result: Result<DirectoryRecord, DirectoryError>,
        token: &PlayerToken,
    ) -> Option<DirectoryRecord> {
        match result {
            Ok(record) => Some(record),
            Err(e) if e.is_not_found() => {
                debug!(token = %token, "Player not found in directory");
                None
            }
            Err(e) => {
                warn!(token = %token, error = %e, "Directory lookup failed");
                None
            }
        }
    }
}
