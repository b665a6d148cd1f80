//! Lilly Signature Resolver - compose-time signature resolution.
//!
//! On a new-message compose event the resolver produces and inserts an HTML
//! signature with minimal latency, resolving the user's directory profile
//! through a cache hierarchy before falling back to a remote fetch:
//!
//! 1. Session store (fast, non-durable, single slot)
//! 2. Roaming store (durable, device-synced, 7-day freshness window)
//! 3. Remote profile fetch against the signature service
//! 4. Static fallback profile built from the host identity
//!
//! Every failure mode degrades to the next tier; insertion always completes,
//! so a compose window is never left without a signature attempt.
//!
//! Host seams (stores, compose host, profile source, clock) are traits so
//! embedders bind them to Office.js interop and tests bind them to in-memory
//! fakes with a controllable clock.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod cache;
mod clock;
mod fetch;
mod remap;
mod resolver;
mod select;
mod store;

pub mod render;

pub use clock::{Clock, ManualClock, SystemClock};
pub use fetch::{DirectoryUser, FetchError, HttpProfileSource, ProfileSource, map_directory_user};
pub use remap::remap_identity;
pub use resolver::{ComposeHost, MailboxIdentity, SignatureResolver};
pub use select::select_template;
pub use store::{InMemoryStore, RoamingStore, SessionStore};
