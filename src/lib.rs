//! gtavatar - GTA Online player avatar lookup.
//!
//! Resolves a player by username or RID against a public directory service,
//! derives the Legacy and Enhanced edition avatar URLs and keeps the ones that
//! exist. Exposed as a small HTTP endpoint and a command line tool.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing services, use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing the HTTP endpoint and terminal output.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "gtavatar";
