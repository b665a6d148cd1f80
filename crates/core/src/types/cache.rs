//! Cache payload shapes and key names.
//!
//! The add-in has gone through two generations of store layouts. Reads must
//! accept both; writes use the current shape only. Candidate keys for the
//! same logical value are kept as ordered slices (first present wins) rather
//! than ad-hoc branches at each read site.

use serde::{Deserialize, Serialize};

use super::profile::UserProfile;
use super::template::TemplateLetter;

/// Roaming-store keys that may hold the serialized profile, in priority order.
pub const PROFILE_KEYS: &[&str] = &["lilly_user_info", "user_info_cache"];

/// Roaming-store key holding the profile write timestamp (epoch milliseconds).
pub const TIMESTAMP_KEY: &str = "user_info_timestamp";

/// Roaming-store keys that may hold the persisted template letter, in
/// priority order.
pub const PREFERENCE_KEYS: &[&str] = &["lilly_newMail", "newMail"];

/// Session-store key holding the serialized [`SessionPayload`].
pub const SESSION_KEY: &str = "user_info_session_cache";

/// How long a roaming entry stays valid: 7 days, in milliseconds.
pub const FRESHNESS_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Whether a roaming entry written at `written_ms` is still fresh at `now_ms`.
///
/// Strict comparison: an entry aged exactly seven days is stale.
#[must_use]
pub const fn is_fresh(written_ms: i64, now_ms: i64) -> bool {
    now_ms - written_ms < FRESHNESS_WINDOW_MS
}

/// The session-store value, in either of its historical shapes.
///
/// The first release wrote a bare profile object; later releases wrap it with
/// the template preference that was in force when the entry was written. Both
/// deserialize transparently. New writes always use the wrapper.
///
/// Deserialization rejects objects that carry neither a name nor an email:
/// every field of [`UserProfile`] is defaulted, so without the check any JSON
/// object would pass as a bare profile and an arbitrary cache value would
/// masquerade as a hit. An unknown preference letter in the wrapper degrades
/// to no preference rather than failing the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SessionPayload {
    Wrapped {
        profile: UserProfile,
        #[serde(rename = "templatePreference", skip_serializing_if = "Option::is_none")]
        template_preference: Option<TemplateLetter>,
    },
    Bare(UserProfile),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PayloadRepr {
    Wrapped {
        profile: UserProfile,
        #[serde(
            rename = "templatePreference",
            default,
            deserialize_with = "lenient_letter"
        )]
        template_preference: Option<TemplateLetter>,
    },
    Bare(UserProfile),
}

/// Parse a stored preference leniently: unknown letters become `None`.
fn lenient_letter<'de, D>(deserializer: D) -> Result<Option<TemplateLetter>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(TemplateLetter::parse))
}

fn has_identity(profile: &UserProfile) -> bool {
    !profile.name.is_empty() || !profile.email.is_empty()
}

impl<'de> Deserialize<'de> for SessionPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let payload = match PayloadRepr::deserialize(deserializer)? {
            PayloadRepr::Wrapped {
                profile,
                template_preference,
            } => Self::Wrapped {
                profile,
                template_preference,
            },
            PayloadRepr::Bare(profile) => Self::Bare(profile),
        };

        if has_identity(payload.profile()) {
            Ok(payload)
        } else {
            Err(serde::de::Error::custom(
                "payload object carries no name or email",
            ))
        }
    }
}

impl SessionPayload {
    /// Build the current (wrapper) shape.
    #[must_use]
    pub const fn new(profile: UserProfile, template_preference: Option<TemplateLetter>) -> Self {
        Self::Wrapped {
            profile,
            template_preference,
        }
    }

    /// The profile, regardless of shape.
    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        match self {
            Self::Wrapped { profile, .. } | Self::Bare(profile) => profile,
        }
    }

    /// The stored preference, if this is a wrapper entry that carries one.
    #[must_use]
    pub const fn template_preference(&self) -> Option<TemplateLetter> {
        match self {
            Self::Wrapped {
                template_preference,
                ..
            } => *template_preference,
            Self::Bare(_) => None,
        }
    }

    /// Consume the payload, returning the profile and any preference.
    #[must_use]
    pub fn into_parts(self) -> (UserProfile, Option<TemplateLetter>) {
        match self {
            Self::Wrapped {
                profile,
                template_preference,
            } => (profile, template_preference),
            Self::Bare(profile) => (profile, None),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            name: "Jordan Doe".to_owned(),
            email: "jdoe@lilly.com".to_owned(),
            job_title: "Research Scientist".to_owned(),
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_freshness_boundary() {
        let now = 1_700_000_000_000_i64;
        // 1ms inside the window is fresh, exactly at and 1ms past are stale.
        assert!(is_fresh(now - FRESHNESS_WINDOW_MS + 1, now));
        assert!(!is_fresh(now - FRESHNESS_WINDOW_MS, now));
        assert!(!is_fresh(now - FRESHNESS_WINDOW_MS - 1, now));
    }

    #[test]
    fn test_bare_shape_round_trip() {
        let profile = sample_profile();
        let json = serde_json::to_string(&profile).unwrap();

        let payload: SessionPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(payload.profile(), &profile);
        assert_eq!(payload.template_preference(), None);
    }

    #[test]
    fn test_wrapped_shape_round_trip() {
        let payload = SessionPayload::new(sample_profile(), Some(TemplateLetter::B));
        let json = serde_json::to_string(&payload).unwrap();

        let back: SessionPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
        assert_eq!(back.template_preference(), Some(TemplateLetter::B));
    }

    #[test]
    fn test_wrapped_without_preference() {
        let json = format!(
            r#"{{"profile":{}}}"#,
            serde_json::to_string(&sample_profile()).unwrap()
        );
        let payload: SessionPayload = serde_json::from_str(&json).unwrap();
        assert!(matches!(payload, SessionPayload::Wrapped { .. }));
        assert_eq!(payload.template_preference(), None);
    }

    #[test]
    fn test_unrecognized_object_is_rejected() {
        // Every profile field is defaulted, so without the identity check an
        // arbitrary object would deserialize as an all-empty bare profile.
        assert!(serde_json::from_str::<SessionPayload>(r#"{"foo":1}"#).is_err());
        assert!(serde_json::from_str::<SessionPayload>("{}").is_err());
        assert!(
            serde_json::from_str::<SessionPayload>(r#"{"profile":{"title":"Dr"}}"#).is_err()
        );
    }

    #[test]
    fn test_unknown_wrapper_preference_degrades_to_none() {
        let json = format!(
            r#"{{"profile":{},"templatePreference":"Z"}}"#,
            serde_json::to_string(&sample_profile()).unwrap()
        );

        let payload: SessionPayload = serde_json::from_str(&json).unwrap();
        // The wrapper's profile survives; only the bad letter is dropped.
        assert!(matches!(payload, SessionPayload::Wrapped { .. }));
        assert_eq!(payload.profile(), &sample_profile());
        assert_eq!(payload.template_preference(), None);
    }

    #[test]
    fn test_writes_use_wrapper_shape() {
        let payload = SessionPayload::new(sample_profile(), None);
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.starts_with(r#"{"profile":"#));
        // No preference: key omitted entirely, legacy readers tolerate it.
        assert!(!json.contains("templatePreference"));
    }

    #[test]
    fn test_key_priority_order() {
        assert_eq!(PROFILE_KEYS, &["lilly_user_info", "user_info_cache"]);
        assert_eq!(PREFERENCE_KEYS, &["lilly_newMail", "newMail"]);
    }
}
