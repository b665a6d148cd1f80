//! Host key-value store seams.
//!
//! Office exposes two string stores to an add-in: a roaming store synced
//! across the user's devices and a session store scoped to the current
//! browser session. Both are modeled as traits so production code binds them
//! to host interop and tests supply [`InMemoryStore`].

use std::collections::HashMap;
use std::sync::Mutex;

/// Durable, device-synced key-value store (Office roaming settings).
///
/// Last-writer-wins; there is no transactional guarantee between writes to
/// related keys.
pub trait RoamingStore {
    /// Read a value. `None` when the key is absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, overwriting any previous one.
    fn set(&self, key: &str, value: &str);
}

/// Session-scoped key-value store, cleared when the browser session ends.
///
/// Some hosts do not provide this tier at all; the resolver treats an absent
/// session store as a permanent cache miss for that tier.
pub trait SessionStore {
    /// Read a value. `None` when the key is absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, overwriting any previous one.
    fn set(&self, key: &str, value: &str);
}

impl<T: RoamingStore> RoamingStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (*self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (*self).set(key, value);
    }
}

impl<T: SessionStore> SessionStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (*self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (*self).set(key, value);
    }
}

/// In-memory store backing both tiers, for tests and local harnesses.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().expect("store lock poisoned").len()
    }

    /// Whether the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RoamingStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .insert(key.to_owned(), value.to_owned());
    }
}

impl SessionStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        RoamingStore::get(self, key)
    }

    fn set(&self, key: &str, value: &str) {
        RoamingStore::set(self, key, value);
    }
}
