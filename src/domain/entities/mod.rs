//! Domain entity definitions.

mod avatar;
mod directory;
mod history;
mod player;

pub use avatar::{
    AvatarLookup, CandidateUrls, Edition, EditionAvatars, Slot, SlotUrls, avatar_url,
};
pub use directory::{DirectoryRecord, DirectoryResponse};
pub use history::{DEFAULT_HISTORY_CAPACITY, HistoryEntry, SearchHistory};
pub use player::{PlayerId, PlayerToken, ResolvedIdentity};
