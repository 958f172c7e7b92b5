pub mod avatar_assembler;
pub mod identity_resolver;

pub use avatar_assembler::{AssembledAvatars, AvatarAssembler, DEFAULT_PROBE_DEADLINE};
pub use identity_resolver::IdentityResolver;
