//! Recent search history.

use serde::{Deserialize, Serialize};

use super::avatar::AvatarLookup;

/// Default number of searches kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// One remembered search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Search term as typed.
    pub term: String,
    /// Result shown for the term.
    pub avatars: AvatarLookup,
}

/// Most-recent-first list of searches, unique by term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl SearchHistory {
    /// Creates an empty history holding at most `capacity` entries.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Rebuilds a history from stored entries, dropping duplicates and overflow.
    #[must_use]
    pub fn from_entries(entries: Vec<HistoryEntry>, capacity: usize) -> Self {
        let mut history = Self::new(capacity);
        for entry in entries {
            if history.entries.len() >= capacity {
                break;
            }
            if !history.contains(&entry.term) {
                history.entries.push(entry);
            }
        }
        history
    }

    /// Records a search at the front. A repeated term moves to the front.
    pub fn record(&mut self, term: impl Into<String>, avatars: AvatarLookup) {
        let term = term.into();
        self.entries.retain(|entry| entry.term != term);
        self.entries.insert(0, HistoryEntry { term, avatars });
        self.entries.truncate(self.capacity);
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns whether `term` is remembered.
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.entries.iter().any(|entry| entry.term == term)
    }

    /// Entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing is remembered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> AvatarLookup {
        AvatarLookup::unresolved(Some(name.to_string()))
    }

    fn terms(history: &SearchHistory) -> Vec<&str> {
        history.entries().iter().map(|e| e.term.as_str()).collect()
    }

    #[test]
    fn test_record_newest_first() {
        let mut history = SearchHistory::default();
        history.record("a", lookup("a"));
        history.record("b", lookup("b"));

        assert_eq!(terms(&history), vec!["b", "a"]);
    }

    #[test]
    fn test_repeat_moves_to_front() {
        let mut history = SearchHistory::default();
        history.record("a", lookup("a"));
        history.record("b", lookup("b"));
        history.record("a", lookup("a2"));

        assert_eq!(terms(&history), vec!["a", "b"]);
        assert_eq!(history.entries()[0].avatars.name.as_deref(), Some("a2"));
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = SearchHistory::default();
        for i in 0..12 {
            history.record(i.to_string(), lookup("x"));
        }

        assert_eq!(history.len(), DEFAULT_HISTORY_CAPACITY);
        assert_eq!(history.entries()[0].term, "11");
        assert!(!history.contains("0"));
        assert!(!history.contains("1"));
        assert!(history.contains("2"));
    }

    #[test]
    fn test_from_entries_dedupes_and_caps() {
        let entries = vec![
            HistoryEntry { term: "a".into(), avatars: lookup("1") },
            HistoryEntry { term: "a".into(), avatars: lookup("2") },
            HistoryEntry { term: "b".into(), avatars: lookup("3") },
            HistoryEntry { term: "c".into(), avatars: lookup("4") },
        ];
        let history = SearchHistory::from_entries(entries, 2);

        assert_eq!(terms(&history), vec!["a", "b"]);
        assert_eq!(history.entries()[0].avatars.name.as_deref(), Some("1"));
    }

    #[test]
    fn test_entry_wire_shape() {
        let entry = HistoryEntry {
            term: "Driver".into(),
            avatars: lookup("Driver"),
        };
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["term"], "Driver");
        assert_eq!(json["avatars"]["name"], "Driver");
        assert!(json["avatars"]["legacy"]["primary"].is_null());
    }
}
