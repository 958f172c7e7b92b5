//! Lookup presentation DTOs.

use crate::domain::entities::{AvatarLookup, PlayerToken};

/// Outcome of a search as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    /// Lookup completed but neither edition has an image.
    NoAvatars,
    /// At least one image was found.
    Loaded,
    /// The lookup call itself did not complete.
    Failed,
}

impl LookupStatus {
    /// Classifies a completed lookup.
    #[must_use]
    pub const fn of(lookup: &AvatarLookup) -> Self {
        if lookup.has_avatars() {
            Self::Loaded
        } else {
            Self::NoAvatars
        }
    }

    /// Returns human-readable description.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NoAvatars => "No avatars found",
            Self::Loaded => "Avatars loaded",
            Self::Failed => "Failed to fetch",
        }
    }
}

impl std::fmt::Display for LookupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Returns the line describing what the lookup discovered about the player.
///
/// A numeric search shows the username, a name search shows the identifier.
/// Nothing is shown when neither was resolved.
#[must_use]
pub fn identity_caption(token: &PlayerToken, lookup: &AvatarLookup) -> Option<String> {
    if lookup.id.is_none() && lookup.name.is_none() {
        return None;
    }

    Some(if token.is_id() {
        format!("Username: {}", lookup.name.as_deref().unwrap_or("Unknown"))
    } else {
        format!(
            "RID: {}",
            lookup.id.as_ref().map_or("Unknown", |id| id.as_str())
        )
    })
}
