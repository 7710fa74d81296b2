//! Scoped client sessions.
//!
//! A `ClientSession` owns one `ObjectsClient` for the duration of a single
//! scenario. Dropping the session releases the client, so release happens on
//! every exit path, including early returns from failed assertions and
//! panics. The shared `SessionTracker` counts opens and releases so a leak is
//! observable from the outside.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use restful_objects_client::{ClientConfig, ObjectsClient};
use tracing::debug;

use crate::error::HarnessError;

/// Counts sessions opened and released.
#[derive(Debug, Default)]
pub struct SessionTracker {
    opened: AtomicUsize,
    released: AtomicUsize,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions opened so far.
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// Number of sessions released so far.
    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Sessions currently open.
    pub fn active(&self) -> usize {
        self.opened().saturating_sub(self.released())
    }

    /// Count a new session and return its 1-based ID.
    fn register(&self) -> u64 {
        self.opened.fetch_add(1, Ordering::SeqCst) as u64 + 1
    }

    fn release(&self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// A client owned exclusively by one scenario run.
#[derive(Debug)]
pub struct ClientSession {
    id: u64,
    client: ObjectsClient,
    tracker: Arc<SessionTracker>,
}

impl ClientSession {
    /// Build a fresh client and register it with the tracker.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Api` if the client cannot be built, for example
    /// because the base URL does not parse. Nothing is registered in that case.
    pub fn open(config: &ClientConfig, tracker: Arc<SessionTracker>) -> Result<Self, HarnessError> {
        let client = ObjectsClient::builder().config(config.clone()).build()?;
        let id = tracker.register();

        debug!(session = id, base_url = %client.base_url(), "Opened client session");

        Ok(Self {
            id,
            client,
            tracker,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn client(&self) -> &ObjectsClient {
        &self.client
    }
}

impl Drop for ClientSession {
    fn drop(&mut self) {
        self.tracker.release();
        debug!(session = self.id, "Released client session");
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
