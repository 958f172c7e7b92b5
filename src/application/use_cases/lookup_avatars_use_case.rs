//! Avatar lookup use case.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::services::{AvatarAssembler, IdentityResolver};
use crate::domain::entities::{AvatarLookup, PlayerToken};
use crate::domain::ports::{DirectoryPort, ImageProbePort};

/// Resolves a player and collects their avatars.
#[derive(Clone)]
pub struct LookupAvatarsUseCase {
    resolver: IdentityResolver,
    assembler: AvatarAssembler,
}

impl LookupAvatarsUseCase {
    /// Creates new use case from ports.
    #[must_use]
    pub const fn new(directory: Arc<dyn DirectoryPort>, probe: Arc<dyn ImageProbePort>) -> Self {
        Self::with_components(IdentityResolver::new(directory), AvatarAssembler::new(probe))
    }

    /// Creates new use case from prepared components.
    #[must_use]
    pub const fn with_components(resolver: IdentityResolver, assembler: AvatarAssembler) -> Self {
        Self {
            resolver,
            assembler,
        }
    }

    /// Executes the lookup.
    ///
    /// Never fails: anything that could not be resolved or verified is absent
    /// in the returned record. Without an identifier nothing is probed.
    pub async fn execute(&self, token: &PlayerToken) -> AvatarLookup {
        let identity = self.resolver.resolve(token).await;

        let Some(id) = identity.id else {
            info!(token = %token, "No identifier resolved, skipping avatar probes");
            return AvatarLookup::unresolved(identity.name);
        };

        debug!(token = %token, id = %id, "Identifier resolved, probing avatars");
        let avatars = self.assembler.assemble(&id).await;

        let lookup = AvatarLookup {
            legacy: avatars.legacy,
            enhanced: avatars.enhanced,
            id: Some(id),
            name: identity.name,
        };

        info!(
            token = %token,
            found = lookup.has_avatars(),
            "Avatar lookup finished"
        );

        lookup
    }
}
