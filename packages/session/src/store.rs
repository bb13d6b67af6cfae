//! Persistent storage for the session record.
//!
//! [`SessionStore`] is a synchronous key-less interface over one named JSON
//! record. Writes are best-effort and assumed not to fail; a record that does
//! not parse degrades to "no session". Implementations:
//!
//! - [`MemoryStore`]: in-process, used on native builds and in tests.
//! - [`LocalStore`](crate::LocalStore): browser localStorage, `web` feature.

use std::sync::{Arc, Mutex};

use crate::state::PersistedSession;

/// Storage backend holding the single persisted session record.
pub trait SessionStore {
    fn load(&self) -> Option<PersistedSession>;
    fn save(&self, session: &PersistedSession);
    fn clear(&self);
}

/// In-memory SessionStore for testing and native fallback.
///
/// The record is kept as serialized JSON so tests exercise the same
/// round-trip a real storage backend would.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    record: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw serialized record, if one is stored.
    pub fn raw(&self) -> Option<String> {
        self.record
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<PersistedSession> {
        let record = self.record.lock().unwrap_or_else(|e| e.into_inner());
        serde_json::from_str(record.as_deref()?).ok()
    }

    fn save(&self, session: &PersistedSession) {
        let Ok(raw) = serde_json::to_string(session) else {
            return;
        };
        *self.record.lock().unwrap_or_else(|e| e.into_inner()) = Some(raw);
    }

    fn clear(&self) {
        *self.record.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}
