//! Shared types for signature resolution.
//!
//! Serialized shapes here must stay byte-compatible with the payloads the
//! add-in has historically written to the Office roaming and session stores,
//! so field names use camelCase renames rather than Rust conventions.

mod cache;
mod email;
mod profile;
mod template;

pub use cache::{
    FRESHNESS_WINDOW_MS, PROFILE_KEYS, PREFERENCE_KEYS, SESSION_KEY, SessionPayload,
    TIMESTAMP_KEY, is_fresh,
};
pub use email::{Email, EmailError};
pub use profile::UserProfile;
pub use template::TemplateLetter;
