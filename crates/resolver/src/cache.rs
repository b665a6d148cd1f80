//! Two-tier cache reads and writes over the host stores.
//!
//! Tier order is session, then roaming, then network. Reads never fail: a
//! malformed or stale entry is logged and reported as a miss so the caller
//! falls through to the next tier.

use tracing::debug;

use lilly_signature_core::{
    PREFERENCE_KEYS, PROFILE_KEYS, SESSION_KEY, SessionPayload, TIMESTAMP_KEY, TemplateLetter,
    UserProfile, is_fresh,
};

use crate::store::{RoamingStore, SessionStore};

/// First non-empty value among `keys`, read through `get`.
///
/// An empty string under a higher-priority key does not shadow a populated
/// lower-priority one; some stores clear entries by blanking the value.
fn first_non_empty(get: impl Fn(&str) -> Option<String>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| get(key).filter(|value| !value.is_empty()))
}

/// Read the session tier. `None` on absence or a malformed payload.
pub fn read_session(session: Option<&impl SessionStore>) -> Option<SessionPayload> {
    let raw = session?.get(SESSION_KEY)?;
    match serde_json::from_str::<SessionPayload>(&raw) {
        Ok(payload) => Some(payload),
        Err(error) => {
            debug!(%error, "session cache entry is malformed, treating as miss");
            None
        }
    }
}

/// Read the roaming tier.
///
/// Returns the raw serialized value (for verbatim promotion into the session
/// tier) alongside the parsed profile. `None` when the entry is absent,
/// malformed, has no parseable timestamp, or is at least seven days old.
pub fn read_roaming(
    roaming: &impl RoamingStore,
    now_ms: i64,
) -> Option<(String, UserProfile)> {
    let raw = first_non_empty(|k| roaming.get(k), PROFILE_KEYS)?;

    let written_ms = roaming
        .get(TIMESTAMP_KEY)
        .and_then(|ts| ts.trim().parse::<i64>().ok())?;

    if !is_fresh(written_ms, now_ms) {
        debug!(written_ms, now_ms, "roaming cache entry is stale");
        return None;
    }

    // Roaming entries historically hold either payload shape.
    match serde_json::from_str::<SessionPayload>(&raw) {
        Ok(payload) => {
            let (profile, _) = payload.into_parts();
            Some((raw, profile))
        }
        Err(error) => {
            debug!(%error, "roaming cache entry is malformed, treating as miss");
            None
        }
    }
}

/// Read the persisted template preference from the roaming store.
pub fn roaming_preference(roaming: &impl RoamingStore) -> Option<TemplateLetter> {
    first_non_empty(|k| roaming.get(k), PREFERENCE_KEYS)
        .as_deref()
        .and_then(TemplateLetter::parse)
}

/// Copy a raw roaming value into the session slot so subsequent compose
/// events in this session skip the roaming read.
pub fn promote_to_session(session: Option<&impl SessionStore>, raw: &str) {
    if let Some(session) = session {
        session.set(SESSION_KEY, raw);
    }
}

/// Persist a freshly fetched profile to both tiers.
///
/// The profile blob is written before its timestamp; the stores are
/// last-writer-wins with no transactional guarantee between the two keys.
pub fn persist(
    roaming: &impl RoamingStore,
    session: Option<&impl SessionStore>,
    profile: &UserProfile,
    preference: Option<TemplateLetter>,
    now_ms: i64,
) {
    match serde_json::to_string(profile) {
        Ok(json) => {
            roaming.set(PROFILE_KEYS[0], &json);
            roaming.set(TIMESTAMP_KEY, &now_ms.to_string());
        }
        Err(error) => debug!(%error, "failed to serialize profile for roaming store"),
    }

    if let Some(session) = session {
        let payload = SessionPayload::new(profile.clone(), preference);
        match serde_json::to_string(&payload) {
            Ok(json) => session.set(SESSION_KEY, &json),
            Err(error) => debug!(%error, "failed to serialize profile for session store"),
        }
    }
}
