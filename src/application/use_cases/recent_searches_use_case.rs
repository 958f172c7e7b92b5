//! Recent search history use case.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{AvatarLookup, HistoryEntry, SearchHistory};
use crate::domain::errors::StoreError;
use crate::domain::ports::KeyValueStorePort;

/// Key the history list is stored under.
pub const HISTORY_KEY: &str = "recentSearches";

/// Keeps the recent search list in sync with a key-value store.
///
/// The list is read once on [`RecentSearchesUseCase::load`] and written back
/// after every change.
pub struct RecentSearchesUseCase {
    store: Arc<dyn KeyValueStorePort>,
    history: SearchHistory,
}

impl RecentSearchesUseCase {
    /// Loads the stored history. Unreadable or corrupt contents start an empty list.
    pub async fn load(store: Arc<dyn KeyValueStorePort>, capacity: usize) -> Self {
        let history = match store.get(HISTORY_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(entries) => SearchHistory::from_entries(entries, capacity),
                Err(e) => {
                    warn!(error = %e, "Stored search history is corrupt, starting empty");
                    SearchHistory::new(capacity)
                }
            },
            Ok(None) => {
                debug!("No stored search history");
                SearchHistory::new(capacity)
            }
            Err(e) => {
                warn!(error = %e, "Failed to read search history, starting empty");
                SearchHistory::new(capacity)
            }
        };

        debug!(entries = history.len(), "Search history loaded");
        Self { store, history }
    }

    /// Current history, newest first.
    #[must_use]
    pub const fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Records a search and persists the list.
    ///
    /// # Errors
    /// Returns error if the list cannot be written; the in-memory list is updated regardless.
    pub async fn record(
        &mut self,
        term: impl Into<String>,
        avatars: AvatarLookup,
    ) -> Result<(), StoreError> {
        self.history.record(term, avatars);
        self.flush().await
    }

    /// Forgets every search.
    ///
    /// # Errors
    /// Returns error if the stored list cannot be removed.
    pub async fn clear(&mut self) -> Result<(), StoreError> {
        self.history.clear();
        self.store.remove(HISTORY_KEY).await
    }

    async fn flush(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(self.history.entries())
            .map_err(|e| StoreError::Encode(e.to_string()))?;
        self.store.set(HISTORY_KEY, &raw).await
    }
}
