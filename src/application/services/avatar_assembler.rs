//! Candidate avatar probing and slot merging.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::domain::entities::{CandidateUrls, EditionAvatars, PlayerId};
use crate::domain::ports::ImageProbePort;

/// Default upper bound for a single probe.
pub const DEFAULT_PROBE_DEADLINE: Duration = Duration::from_secs(10);

/// Verified avatars of both editions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssembledAvatars {
    /// Legacy edition avatars.
    pub legacy: EditionAvatars,
    /// Enhanced edition avatars.
    pub enhanced: EditionAvatars,
}

/// Builds the candidate URLs for an identifier and keeps the ones that exist.
#[derive(Clone)]
pub struct AvatarAssembler {
    probe: Arc<dyn ImageProbePort>,
    deadline: Duration,
}

impl AvatarAssembler {
    /// Creates an assembler probing through `probe`.
    #[must_use]
    pub const fn new(probe: Arc<dyn ImageProbePort>) -> Self {
        Self {
            probe,
            deadline: DEFAULT_PROBE_DEADLINE,
        }
    }

    /// Overrides the per-probe deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Probes all four candidates of `id` concurrently and merges the outcomes.
    pub async fn assemble(&self, id: &PlayerId) -> AssembledAvatars {
        let urls = CandidateUrls::for_id(id);

        let (legacy_primary, legacy_secondary, enhanced_primary, enhanced_secondary) = tokio::join!(
            self.exists(&urls.legacy.primary),
            self.exists(&urls.legacy.secondary),
            self.exists(&urls.enhanced.primary),
            self.exists(&urls.enhanced.secondary),
        );

        debug!(
            id = %id,
            legacy_primary,
            legacy_secondary,
            enhanced_primary,
            enhanced_secondary,
            "Avatar probes finished"
        );

        AssembledAvatars {
            legacy: EditionAvatars::merge(&urls.legacy, legacy_primary, legacy_secondary),
            enhanced: EditionAvatars::merge(&urls.enhanced, enhanced_primary, enhanced_secondary),
        }
    }

    async fn exists(&self, url: &str) -> bool {
        match tokio::time::timeout(self.deadline, self.probe.probe(url)).await {
            Ok(Ok(outcome)) => {
                trace!(url, ?outcome, "Probe answered");
                outcome.exists()
            }
            Ok(Err(e)) => {
                warn!(url, error = %e, "Avatar probe failed");
                false
            }
            Err(_) => {
                warn!(url, deadline = ?self.deadline, "Avatar probe exceeded deadline");
                false
            }
        }
    }
}
