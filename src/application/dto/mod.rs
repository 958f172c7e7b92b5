//! Data transfer objects.

mod lookup_dto;

pub use lookup_dto::{LookupStatus, identity_caption};
