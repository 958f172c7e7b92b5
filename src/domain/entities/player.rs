//! Player token and identity value objects.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static NUMERIC_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("numeric id pattern is valid"));

/// Numeric player identifier, kept as text exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Creates an identifier when `value` consists solely of ASCII digits.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        NUMERIC_ID_RE.is_match(&value).then_some(Self(value))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw search input, classified as either an identifier or a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerToken {
    /// Token made entirely of decimal digits.
    Id(PlayerId),
    /// Anything else.
    Name(String),
}

impl PlayerToken {
    /// Classifies a raw token. Returns `None` for an empty token.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        Some(PlayerId::new(raw).map_or_else(|| Self::Name(raw.to_string()), Self::Id))
    }

    /// Returns the token text verbatim.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Id(id) => id.as_str(),
            Self::Name(name) => name,
        }
    }

    /// Returns whether the token was classified as an identifier.
    #[must_use]
    pub const fn is_id(&self) -> bool {
        matches!(self, Self::Id(_))
    }
}

impl fmt::Display for PlayerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier and display name discovered for a token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedIdentity {
    /// Numeric identifier, if one could be determined.
    pub id: Option<PlayerId>,
    /// Display name, if one could be determined.
    pub name: Option<String>,
}

impl ResolvedIdentity {
    /// Creates a resolved identity.
    #[must_use]
    pub const fn new(id: Option<PlayerId>, name: Option<String>) -> Self {
        Self { id, name }
    }

    /// Identity with nothing discovered.
    #[must_use]
    pub const fn unresolved() -> Self {
        Self { id: None, name: None }
    }
}
