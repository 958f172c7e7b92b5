//! Domain error types.

mod directory_error;
mod probe_error;
mod store_error;

pub use directory_error::DirectoryError;
pub use probe_error::ProbeError;
pub use store_error::StoreError;
