//! HTTP boundary.

mod error;
mod handlers;
mod router;

pub use error::ApiError;
pub use handlers::LookupQuery;
pub use router::{ApiState, build_router};
