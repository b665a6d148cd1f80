//! Compose-event orchestration.

use tracing::{debug, instrument, warn};

use lilly_signature_core::UserProfile;

use crate::cache;
use crate::clock::{Clock, SystemClock};
use crate::fetch::{ProfileSource, map_directory_user};
use crate::remap::remap_identity;
use crate::render::render_template;
use crate::select::select_template;
use crate::store::{RoamingStore, SessionStore};

/// The current-user context read from the compose host at event time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailboxIdentity {
    pub email: String,
    pub display_name: String,
}

/// Host surface for one compose event: identity and HTML insertion.
///
/// `insert_signature` must signal event completion to the host once the body
/// (and logo attachment, when present) has been handed over.
pub trait ComposeHost {
    /// Read the composing user's identity.
    fn identity(&self) -> MailboxIdentity;

    /// Insert the rendered signature into the message body.
    fn insert_signature(&self, artifact: &crate::render::SignatureArtifact);
}

/// Resolves and inserts a signature per compose event.
///
/// Holds the injected host seams. The session tier is optional because some
/// hosts do not provide session storage; that tier then always misses.
pub struct SignatureResolver<R, S, F, C = SystemClock> {
    roaming: R,
    session: Option<S>,
    source: F,
    clock: C,
}

impl<R, S, F> SignatureResolver<R, S, F, SystemClock>
where
    R: RoamingStore,
    S: SessionStore,
    F: ProfileSource,
{
    /// Create a resolver on the system clock.
    pub const fn new(roaming: R, session: Option<S>, source: F) -> Self {
        Self {
            roaming,
            session,
            source,
            clock: SystemClock,
        }
    }
}

impl<R, S, F, C> SignatureResolver<R, S, F, C>
where
    R: RoamingStore,
    S: SessionStore,
    F: ProfileSource,
    C: Clock,
{
    /// Create a resolver with an explicit clock.
    pub const fn with_clock(roaming: R, session: Option<S>, source: F, clock: C) -> Self {
        Self {
            roaming,
            session,
            source,
            clock,
        }
    }

    /// Resolve the user's profile and insert a rendered signature.
    ///
    /// Priority order, first satisfied branch short-circuits:
    /// session cache, fresh roaming cache (promoted to session on hit),
    /// remote fetch (persisted to both tiers on success), static fallback.
    /// Never fails: every error degrades to the next tier and insertion
    /// always happens.
    #[instrument(skip_all, fields(mailbox = %host.identity().email))]
    pub async fn resolve_and_insert(&self, host: &impl ComposeHost) {
        let mut identity = host.identity();
        // Shared-mailbox aliases are remapped before any lookup or keying.
        identity.email = remap_identity(&identity.email);

        if let Some(payload) = cache::read_session(self.session.as_ref()) {
            let (profile, wrapper_preference) = payload.into_parts();
            // A wrapper preference bypasses auto-detection; without one the
            // persisted roaming preference is consulted.
            let explicit =
                wrapper_preference.or_else(|| cache::roaming_preference(&self.roaming));
            let letter = select_template(&profile, explicit);
            debug!(%letter, "session cache hit");
            host.insert_signature(&render_template(letter, &profile));
            return;
        }

        if let Some((raw, profile)) = cache::read_roaming(&self.roaming, self.clock.now_ms()) {
            cache::promote_to_session(self.session.as_ref(), &raw);
            let letter = select_template(&profile, cache::roaming_preference(&self.roaming));
            debug!(%letter, "roaming cache hit, promoted to session");
            host.insert_signature(&render_template(letter, &profile));
            return;
        }

        let preference = cache::roaming_preference(&self.roaming);
        let profile = match self.source.fetch(&identity.email).await {
            Ok(user) => {
                let profile = map_directory_user(user, &identity);
                cache::persist(
                    &self.roaming,
                    self.session.as_ref(),
                    &profile,
                    preference,
                    self.clock.now_ms(),
                );
                debug!("profile fetched and persisted to both tiers");
                profile
            }
            Err(error) => {
                warn!(%error, "profile fetch failed, using fallback profile");
                UserProfile::fallback(&identity.display_name, &identity.email)
            }
        };

        let letter = select_template(&profile, preference);
        host.insert_signature(&render_template(letter, &profile));
    }
}
