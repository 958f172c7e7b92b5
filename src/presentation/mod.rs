//! Presentation layer: HTTP endpoint and terminal output.

/// Terminal rendering.
pub mod cli;
/// HTTP routes and handlers.
pub mod http;

pub use http::build_router;
