//! Use case implementations.

mod lookup_avatars_use_case;
mod recent_searches_use_case;

pub use lookup_avatars_use_case::LookupAvatarsUseCase;
pub use recent_searches_use_case::{HISTORY_KEY, RecentSearchesUseCase};
