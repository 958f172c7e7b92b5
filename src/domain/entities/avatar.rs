//! Avatar editions, slots and the lookup result record.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

const CLOUD_BASE: &str = "https://prod.cloud.rockstargames.com/members/sc";

/// Game client generation; each keeps avatars under its own member namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edition {
    /// Original PC release.
    Legacy,
    /// Enhanced PC release.
    Enhanced,
}

impl Edition {
    /// Both editions in display order.
    pub const ALL: [Self; 2] = [Self::Legacy, Self::Enhanced];

    /// Member namespace segment in the cloud path.
    #[must_use]
    pub const fn namespace(self) -> &'static str {
        match self {
            Self::Legacy => "6266",
            Self::Enhanced => "0807",
        }
    }

    const fn file_suffix(self) -> &'static str {
        match self {
            Self::Legacy => "",
            Self::Enhanced => "_pcrosalt",
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Legacy => "Legacy",
            Self::Enhanced => "Enhanced Edition",
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Character slot within an edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// First character.
    Primary,
    /// Second character.
    Secondary,
}

impl Slot {
    /// Index used in the image file name.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Primary => 0,
            Self::Secondary => 1,
        }
    }
}

/// Builds the avatar URL for one edition and slot.
#[must_use]
pub fn avatar_url(id: &PlayerId, edition: Edition, slot: Slot) -> String {
    format!(
        "{CLOUD_BASE}/{}/{id}/publish/gta5/mpchars/{}{}.png",
        edition.namespace(),
        slot.index(),
        edition.file_suffix()
    )
}

/// The two slot URLs of one edition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotUrls {
    /// URL of the first character image.
    pub primary: String,
    /// URL of the second character image.
    pub secondary: String,
}

/// The fixed four-URL candidate set for an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateUrls {
    /// Legacy edition URLs.
    pub legacy: SlotUrls,
    /// Enhanced edition URLs.
    pub enhanced: SlotUrls,
}

impl CandidateUrls {
    /// Derives the candidate set for `id`.
    #[must_use]
    pub fn for_id(id: &PlayerId) -> Self {
        let slots = |edition| SlotUrls {
            primary: avatar_url(id, edition, Slot::Primary),
            secondary: avatar_url(id, edition, Slot::Secondary),
        };

        Self {
            legacy: slots(Edition::Legacy),
            enhanced: slots(Edition::Enhanced),
        }
    }
}

/// Verified avatar URLs of one edition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionAvatars {
    /// Image to show first; falls back to the second slot when the first is missing.
    pub primary: Option<String>,
    /// Second slot image, only when it exists.
    pub secondary: Option<String>,
}

impl EditionAvatars {
    /// Merges the two slot probe outcomes of one edition.
    ///
    /// A missing first slot promotes the second slot into `primary`; `secondary`
    /// is never filled from the first slot.
    #[must_use]
    pub fn merge(urls: &SlotUrls, primary_exists: bool, secondary_exists: bool) -> Self {
        let secondary = secondary_exists.then(|| urls.secondary.clone());
        let primary = if primary_exists {
            Some(urls.primary.clone())
        } else {
            secondary.clone()
        };

        Self { primary, secondary }
    }

    /// Returns true when neither slot has an image.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }
}

/// Result record of one lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarLookup {
    /// Legacy edition avatars.
    pub legacy: EditionAvatars,
    /// Enhanced edition avatars.
    pub enhanced: EditionAvatars,
    /// Resolved numeric identifier.
    pub id: Option<PlayerId>,
    /// Resolved display name.
    pub name: Option<String>,
}

impl AvatarLookup {
    /// Record for a token whose identifier could not be resolved.
    #[must_use]
    pub fn unresolved(name: Option<String>) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Returns the avatars of `edition`.
    #[must_use]
    pub const fn edition(&self, edition: Edition) -> &EditionAvatars {
        match edition {
            Edition::Legacy => &self.legacy,
            Edition::Enhanced => &self.enhanced,
        }
    }

    /// Returns true when at least one image was found in either edition.
    #[must_use]
    pub const fn has_avatars(&self) -> bool {
        !self.legacy.is_empty() || !self.enhanced.is_empty()
    }
}
