//! Session state and its persisted projection.

use api::User;
use serde::{Deserialize, Serialize};

/// Storage key for the persisted session record.
pub const STORAGE_KEY: &str = "rentme-auth";

/// The client's record of the logged-in user and credential token.
///
/// Invariant: `is_authenticated` is true iff both `user` and `token` are
/// present and were set by a successful login, registration or restore.
/// `is_loading` is transient and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl SessionState {
    /// The subset written through to persistent storage.
    pub fn persisted(&self) -> PersistedSession {
        PersistedSession {
            user: self.user.clone(),
            token: self.token.clone(),
            is_authenticated: self.is_authenticated,
        }
    }
}

/// Durable subset of [`SessionState`], stored as one JSON record under
/// [`STORAGE_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersistedSession {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

impl From<PersistedSession> for SessionState {
    fn from(persisted: PersistedSession) -> Self {
        // Re-check the invariant on the way in: a record that claims to be
        // authenticated without a user and token degrades to logged-out.
        let is_authenticated =
            persisted.is_authenticated && persisted.user.is_some() && persisted.token.is_some();
        SessionState {
            user: persisted.user,
            token: persisted.token,
            is_authenticated,
            is_loading: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            phone: None,
        }
    }

    #[test]
    fn test_persisted_subset_drops_loading_flag() {
        let state = SessionState {
            user: Some(user()),
            token: Some("tok1".to_string()),
            is_authenticated: true,
            is_loading: true,
        };

        let restored = SessionState::from(state.persisted());
        assert_eq!(restored.user, state.user);
        assert_eq!(restored.token, state.token);
        assert!(restored.is_authenticated);
        assert!(!restored.is_loading);
    }

    #[test]
    fn test_restore_rejects_authenticated_record_without_token() {
        let record = PersistedSession {
            user: Some(user()),
            token: None,
            is_authenticated: true,
        };

        let state = SessionState::from(record);
        assert!(!state.is_authenticated);
    }
}
