//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;

pub use entities::{AvatarLookup, PlayerId, PlayerToken, ResolvedIdentity};
pub use errors::{DirectoryError, ProbeError, StoreError};
pub use ports::{DirectoryPort, ImageProbePort, KeyValueStorePort};
