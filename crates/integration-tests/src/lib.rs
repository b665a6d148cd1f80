//! Shared fixtures for signature integration tests.
//!
//! A scripted profile source and a recording compose host let scenario tests
//! drive the resolver end to end without a network or an Office host.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use lilly_signature_resolver::render::SignatureArtifact;
use lilly_signature_resolver::{
    ComposeHost, DirectoryUser, FetchError, MailboxIdentity, ProfileSource,
};

/// Profile source that replays queued responses and records each call.
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Result<DirectoryUser, FetchError>>>,
    requested: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    /// Queue the given responses, served in order. Once exhausted, further
    /// calls answer with a 500 status.
    #[must_use]
    pub fn new(responses: Vec<Result<DirectoryUser, FetchError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requested: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// How many fetches the resolver performed.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The email addresses fetched, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn requested_emails(&self) -> Vec<String> {
        self.requested.lock().expect("lock poisoned").clone()
    }
}

impl ProfileSource for &ScriptedSource {
    async fn fetch(&self, email: &str) -> Result<DirectoryUser, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested
            .lock()
            .expect("lock poisoned")
            .push(email.to_owned());
        self.responses
            .lock()
            .expect("lock poisoned")
            .pop_front()
            .unwrap_or(Err(FetchError::Status(500)))
    }
}

/// Compose host that records every inserted artifact.
pub struct RecordingHost {
    identity: MailboxIdentity,
    inserted: Mutex<Vec<SignatureArtifact>>,
}

impl RecordingHost {
    /// A host whose current-user context reports the given identity.
    #[must_use]
    pub fn new(email: &str, display_name: &str) -> Self {
        Self {
            identity: MailboxIdentity {
                email: email.to_owned(),
                display_name: display_name.to_owned(),
            },
            inserted: Mutex::new(Vec::new()),
        }
    }

    /// Artifacts inserted so far, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn inserted(&self) -> Vec<SignatureArtifact> {
        self.inserted.lock().expect("lock poisoned").clone()
    }
}

impl ComposeHost for RecordingHost {
    fn identity(&self) -> MailboxIdentity {
        self.identity.clone()
    }

    fn insert_signature(&self, artifact: &SignatureArtifact) {
        self.inserted
            .lock()
            .expect("lock poisoned")
            .push(artifact.clone());
    }
}

/// Directory response for a plain employee (no company attribute).
#[must_use]
pub fn employee_response() -> DirectoryUser {
    DirectoryUser {
        display_name: Some("Jordan Doe".to_owned()),
        mail: Some("jdoe@lilly.com".to_owned()),
        job_title: Some("Research Scientist".to_owned()),
        department: Some("Discovery Chemistry".to_owned()),
        office_location: Some("MC/B1".to_owned()),
        business_phones: vec!["+13175550000".to_owned()],
        ..DirectoryUser::default()
    }
}

/// Directory response for a contractor.
#[must_use]
pub fn contractor_response() -> DirectoryUser {
    DirectoryUser {
        display_name: Some("Sam Rivera".to_owned()),
        mail: Some("sam.rivera@acme.example.com".to_owned()),
        company_name: Some("Acme Consulting".to_owned()),
        ..DirectoryUser::default()
    }
}
