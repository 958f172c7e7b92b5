//! Directory service record shapes.

use serde::Deserialize;

use super::player::PlayerId;
use crate::domain::serde_utils::{lenient_string, string_or_number};

/// One player record returned by the directory service.
///
/// The service is loose about field names, so every known synonym is kept and
/// resolved in a fixed priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DirectoryRecord {
    /// Numeric identifier, as string or number.
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    pub id: Option<String>,
    /// Alternate identifier key.
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    pub rid: Option<String>,
    /// Preferred name key.
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub name: Option<String>,
    /// Second name key.
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub username: Option<String>,
    /// Third name key.
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub nickname: Option<String>,
    /// Fourth name key, snake case.
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub display_name: Option<String>,
    /// Last name key, camel case.
    #[serde(
        default,
        rename = "displayName",
        deserialize_with = "lenient_string::deserialize"
    )]
    pub display_name_camel: Option<String>,
}

impl DirectoryRecord {
    /// Returns the first non-empty name in priority order:
    /// `name`, `username`, `nickname`, `display_name`, `displayName`.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        [
            &self.name,
            &self.username,
            &self.nickname,
            &self.display_name,
            &self.display_name_camel,
        ]
        .into_iter()
        .filter_map(Option::as_deref)
        .find(|name| !name.trim().is_empty())
    }

    /// Returns the first identifier key holding a numeric identifier.
    #[must_use]
    pub fn player_id(&self) -> Option<PlayerId> {
        [&self.id, &self.rid]
            .into_iter()
            .filter_map(Option::as_deref)
            .find_map(PlayerId::new)
    }
}

/// Directory payload: either one record or a list of records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DirectoryResponse {
    /// List-shaped response; only the first element is used.
    Many(Vec<DirectoryRecord>),
    /// Single record.
    One(DirectoryRecord),
}

impl DirectoryResponse {
    /// Returns the record this response stands for, if any.
    #[must_use]
    pub fn into_first(self) -> Option<DirectoryRecord> {
        match self {
            Self::Many(records) => records.into_iter().next(),
            Self::One(record) => Some(record),
        }
    }
}
