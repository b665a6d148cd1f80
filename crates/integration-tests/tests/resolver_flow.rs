//! End-to-end resolver scenarios over in-memory stores.
//!
//! These tests drive `resolve_and_insert` through its full tier order:
//! session cache, roaming cache with staleness, remote fetch, and the static
//! fallback, verifying cache population and promotion along the way.

#![allow(clippy::unwrap_used)]

use lilly_signature_core::{
    FRESHNESS_WINDOW_MS, PROFILE_KEYS, SESSION_KEY, TIMESTAMP_KEY, UserProfile,
};
use lilly_signature_integration_tests::{
    RecordingHost, ScriptedSource, contractor_response, employee_response,
};
use lilly_signature_resolver::{
    FetchError, InMemoryStore, ManualClock, RoamingStore, SessionStore, SignatureResolver,
};

const NOW_MS: i64 = 1_700_000_000_000;

fn resolver<'a>(
    roaming: &'a InMemoryStore,
    session: Option<&'a InMemoryStore>,
    source: &'a ScriptedSource,
    clock: &'a ManualClock,
) -> SignatureResolver<&'a InMemoryStore, &'a InMemoryStore, &'a ScriptedSource, &'a ManualClock> {
    SignatureResolver::with_clock(roaming, session, source, clock)
}

// =============================================================================
// Cold Environment
// =============================================================================

#[tokio::test]
async fn test_cold_fetch_success_renders_a_and_populates_both_caches() {
    let roaming = InMemoryStore::new();
    let session = InMemoryStore::new();
    let source = ScriptedSource::new(vec![Ok(employee_response())]);
    let clock = ManualClock::new(NOW_MS);
    let host = RecordingHost::new("jdoe@lilly.com", "Jordan Doe");

    resolver(&roaming, Some(&session), &source, &clock)
        .resolve_and_insert(&host)
        .await;

    assert_eq!(source.call_count(), 1);

    // Employee with no companyName: Template A, the logo-bearing variant.
    let inserted = host.inserted();
    assert_eq!(inserted.len(), 1);
    let artifact = inserted.first().unwrap();
    assert!(artifact.logo.is_some());
    assert!(artifact.html.contains("Jordan Doe"));
    assert!(artifact.html.contains("Lilly Corporate Center"));

    // Both tiers populated with a fresh timestamp.
    assert!(RoamingStore::get(&roaming, PROFILE_KEYS[0]).is_some());
    assert_eq!(
        RoamingStore::get(&roaming, TIMESTAMP_KEY),
        Some(NOW_MS.to_string())
    );
    assert!(SessionStore::get(&session, SESSION_KEY).is_some());
}

#[tokio::test]
async fn test_second_event_serves_from_session_without_network() {
    let roaming = InMemoryStore::new();
    let session = InMemoryStore::new();
    let source = ScriptedSource::new(vec![Ok(employee_response())]);
    let clock = ManualClock::new(NOW_MS);
    let host = RecordingHost::new("jdoe@lilly.com", "Jordan Doe");

    let resolver = resolver(&roaming, Some(&session), &source, &clock);
    resolver.resolve_and_insert(&host).await;
    resolver.resolve_and_insert(&host).await;

    // One fetch total; the second compose event hit the session tier.
    assert_eq!(source.call_count(), 1);
    assert_eq!(host.inserted().len(), 2);
}

// =============================================================================
// Fetch Failure
// =============================================================================

#[tokio::test]
async fn test_fetch_failure_falls_back_and_still_inserts() {
    let roaming = InMemoryStore::new();
    let session = InMemoryStore::new();
    let source = ScriptedSource::new(vec![Err(FetchError::Status(502))]);
    let clock = ManualClock::new(NOW_MS);
    let host = RecordingHost::new("jdoe@lilly.com", "Jordan Doe");

    resolver(&roaming, Some(&session), &source, &clock)
        .resolve_and_insert(&host)
        .await;

    // Fallback profile has no companyName: Template A.
    let inserted = host.inserted();
    assert_eq!(inserted.len(), 1);
    let artifact = inserted.first().unwrap();
    assert!(artifact.logo.is_some());
    assert!(artifact.html.contains("Jordan Doe"));

    // Failed fetches leave the caches untouched.
    assert!(roaming.is_empty());
    assert!(session.is_empty());
}

// =============================================================================
// Roaming Staleness Boundary
// =============================================================================

fn seed_roaming(roaming: &InMemoryStore, written_ms: i64) {
    let profile = UserProfile {
        name: "Roaming User".to_owned(),
        email: "jdoe@lilly.com".to_owned(),
        ..UserProfile::default()
    };
    RoamingStore::set(
        roaming,
        PROFILE_KEYS[0],
        &serde_json::to_string(&profile).unwrap(),
    );
    RoamingStore::set(roaming, TIMESTAMP_KEY, &written_ms.to_string());
}

#[tokio::test]
async fn test_roaming_entry_one_ms_inside_window_is_served() {
    let roaming = InMemoryStore::new();
    let session = InMemoryStore::new();
    seed_roaming(&roaming, NOW_MS - FRESHNESS_WINDOW_MS + 1);

    let source = ScriptedSource::new(vec![Ok(employee_response())]);
    let clock = ManualClock::new(NOW_MS);
    let host = RecordingHost::new("jdoe@lilly.com", "Jordan Doe");

    resolver(&roaming, Some(&session), &source, &clock)
        .resolve_and_insert(&host)
        .await;

    assert_eq!(source.call_count(), 0);
    assert!(host.inserted().first().unwrap().html.contains("Roaming User"));

    // Roaming hit is promoted into the session slot for later events.
    assert!(SessionStore::get(&session, SESSION_KEY).is_some());
}

#[tokio::test]
async fn test_roaming_entry_one_ms_past_window_triggers_fetch() {
    let roaming = InMemoryStore::new();
    let session = InMemoryStore::new();
    seed_roaming(&roaming, NOW_MS - FRESHNESS_WINDOW_MS - 1);

    let source = ScriptedSource::new(vec![Ok(employee_response())]);
    let clock = ManualClock::new(NOW_MS);
    let host = RecordingHost::new("jdoe@lilly.com", "Jordan Doe");

    resolver(&roaming, Some(&session), &source, &clock)
        .resolve_and_insert(&host)
        .await;

    assert_eq!(source.call_count(), 1);
    // The stale entry was overwritten with the fetched profile.
    assert_eq!(
        RoamingStore::get(&roaming, TIMESTAMP_KEY),
        Some(NOW_MS.to_string())
    );
}

#[tokio::test]
async fn test_absent_session_tier_is_a_permanent_miss() {
    let roaming = InMemoryStore::new();
    seed_roaming(&roaming, NOW_MS - 1_000);

    let source = ScriptedSource::new(vec![]);
    let clock = ManualClock::new(NOW_MS);
    let host = RecordingHost::new("jdoe@lilly.com", "Jordan Doe");

    let resolver = SignatureResolver::with_clock(
        &roaming,
        None::<&InMemoryStore>,
        &source,
        &clock,
    );
    resolver.resolve_and_insert(&host).await;
    resolver.resolve_and_insert(&host).await;

    // No session tier to promote into; both events read roaming, no network.
    assert_eq!(source.call_count(), 0);
    assert_eq!(host.inserted().len(), 2);
}

// =============================================================================
// Identity Remap
// =============================================================================

#[tokio::test]
async fn test_shared_mailbox_is_remapped_before_fetch() {
    let roaming = InMemoryStore::new();
    let session = InMemoryStore::new();
    let source = ScriptedSource::new(vec![Ok(employee_response())]);
    let clock = ManualClock::new(NOW_MS);
    // The compose event reports the shared mailbox, not the signer.
    let host = RecordingHost::new("medinfo_us@lilly.com", "US Med Info");

    resolver(&roaming, Some(&session), &source, &clock)
        .resolve_and_insert(&host)
        .await;

    assert_eq!(
        source.requested_emails(),
        vec!["medinfo.us.lead@lilly.com".to_owned()]
    );
}

// =============================================================================
// Template Preference & Contractor Override
// =============================================================================

#[tokio::test]
async fn test_roaming_preference_selects_template_b() {
    let roaming = InMemoryStore::new();
    let session = InMemoryStore::new();
    RoamingStore::set(&roaming, "lilly_newMail", "B");

    let source = ScriptedSource::new(vec![Ok(employee_response())]);
    let clock = ManualClock::new(NOW_MS);
    let host = RecordingHost::new("jdoe@lilly.com", "Jordan Doe");

    resolver(&roaming, Some(&session), &source, &clock)
        .resolve_and_insert(&host)
        .await;

    // Template B: no logo, brand accent on the company name.
    let inserted = host.inserted();
    let artifact = inserted.first().unwrap();
    assert!(artifact.logo.is_none());
    assert!(artifact.html.contains("#D52B1E"));
}

#[tokio::test]
async fn test_contractor_overrides_stored_preference() {
    let roaming = InMemoryStore::new();
    let session = InMemoryStore::new();
    RoamingStore::set(&roaming, "newMail", "A");

    let source = ScriptedSource::new(vec![Ok(contractor_response())]);
    let clock = ManualClock::new(NOW_MS);
    let host = RecordingHost::new("sam.rivera@acme.example.com", "Sam Rivera");

    resolver(&roaming, Some(&session), &source, &clock)
        .resolve_and_insert(&host)
        .await;

    // Stored A is discarded for a contractor: Template C renders.
    let inserted = host.inserted();
    let artifact = inserted.first().unwrap();
    assert!(artifact.logo.is_none());
    assert!(artifact.html.contains("Contractor for Eli Lilly and Company"));
    assert!(artifact.html.contains("Acme Consulting"));
}

#[tokio::test]
async fn test_session_wrapper_preference_wins_over_roaming() {
    let roaming = InMemoryStore::new();
    let session = InMemoryStore::new();
    RoamingStore::set(&roaming, "lilly_newMail", "A");

    // Session wrapper pins B; it outranks the roaming preference.
    let profile = UserProfile {
        name: "Jordan Doe".to_owned(),
        email: "jdoe@lilly.com".to_owned(),
        ..UserProfile::default()
    };
    let wrapper = format!(
        r#"{{"profile":{},"templatePreference":"B"}}"#,
        serde_json::to_string(&profile).unwrap()
    );
    SessionStore::set(&session, SESSION_KEY, &wrapper);

    let source = ScriptedSource::new(vec![]);
    let clock = ManualClock::new(NOW_MS);
    let host = RecordingHost::new("jdoe@lilly.com", "Jordan Doe");

    resolver(&roaming, Some(&session), &source, &clock)
        .resolve_and_insert(&host)
        .await;

    assert_eq!(source.call_count(), 0);
    let inserted = host.inserted();
    let artifact = inserted.first().unwrap();
    assert!(artifact.logo.is_none());
    assert!(artifact.html.contains("#D52B1E"));
}

#[tokio::test]
async fn test_legacy_bare_session_payload_is_accepted() {
    let roaming = InMemoryStore::new();
    let session = InMemoryStore::new();

    // First-generation session entries were the bare profile object.
    let profile = UserProfile {
        name: "Legacy User".to_owned(),
        email: "jdoe@lilly.com".to_owned(),
        ..UserProfile::default()
    };
    SessionStore::set(
        &session,
        SESSION_KEY,
        &serde_json::to_string(&profile).unwrap(),
    );

    let source = ScriptedSource::new(vec![]);
    let clock = ManualClock::new(NOW_MS);
    let host = RecordingHost::new("jdoe@lilly.com", "Jordan Doe");

    resolver(&roaming, Some(&session), &source, &clock)
        .resolve_and_insert(&host)
        .await;

    assert_eq!(source.call_count(), 0);
    assert!(host.inserted().first().unwrap().html.contains("Legacy User"));
}
