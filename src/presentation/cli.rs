//! Terminal rendering of lookups and history.

use std::fmt::Write;

use crate::application::{LookupStatus, identity_caption};
use crate::domain::entities::{AvatarLookup, Edition, PlayerToken, SearchHistory};

/// Renders a finished lookup for the terminal.
#[must_use]
pub fn render_lookup(token: &PlayerToken, lookup: &AvatarLookup) -> String {
    let mut out = String::new();

    for edition in Edition::ALL {
        let avatars = lookup.edition(edition);
        let _ = writeln!(out, "{edition}");
        if avatars.is_empty() {
            let _ = writeln!(out, "  No {} Avatar", short_label(edition));
            continue;
        }
        if let Some(primary) = &avatars.primary {
            let _ = writeln!(out, "  primary:   {primary}");
        }
        if let Some(secondary) = &avatars.secondary {
            let _ = writeln!(out, "  secondary: {secondary}");
        }
    }

    if let Some(caption) = identity_caption(token, lookup) {
        let _ = writeln!(out, "{caption}");
    }
    let _ = write!(out, "{}", LookupStatus::of(lookup));

    out
}

/// Renders the recent search list, newest first.
#[must_use]
pub fn render_history(history: &SearchHistory) -> String {
    if history.is_empty() {
        return "No recent searches".to_string();
    }

    let mut out = String::new();
    for (index, entry) in history.entries().iter().enumerate() {
        let id = entry.avatars.id.as_ref().map_or("-", |id| id.as_str());
        let _ = writeln!(
            out,
            "{:>2}. {} (RID {id}) {}",
            index + 1,
            entry.term,
            LookupStatus::of(&entry.avatars)
        );
    }
    out.truncate(out.trim_end().len());
    out
}

const fn short_label(edition: Edition) -> &'static str {
    match edition {
        Edition::Legacy => "Legacy",
        Edition::Enhanced => "Enhanced",
    }
}
