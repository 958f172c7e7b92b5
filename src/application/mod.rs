//! Application layer with services, use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Stateless services composed by the use cases.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{LookupStatus, identity_caption};
pub use services::{AvatarAssembler, IdentityResolver};
pub use use_cases::{LookupAvatarsUseCase, RecentSearchesUseCase};
