//! localStorage-backed session record for the web platform.
//!
//! The record lives under the fixed key [`STORAGE_KEY`](crate::STORAGE_KEY)
//! and survives page reloads and process restarts. All methods silently
//! swallow storage errors: a blocked or unavailable localStorage degrades to
//! "no persisted session" rather than crashing the client.

use crate::state::{PersistedSession, STORAGE_KEY};
use crate::store::SessionStore;

/// Browser localStorage SessionStore.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStore {
    fn load(&self) -> Option<PersistedSession> {
        let raw = Self::storage()?.get_item(STORAGE_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, session: &PersistedSession) {
        let Ok(raw) = serde_json::to_string(session) else {
            return;
        };
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(STORAGE_KEY, &raw);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
