//! # Session manager: login, registration, logout, expiry detection
//!
//! [`Session`] is the single owner of the client's authentication state. It
//! is constructor-injected wherever it is needed (no ambient singleton): the
//! web shell builds one at startup and hands it out through context, tests
//! build one around a stub API.
//!
//! ## Operations
//!
//! | Operation | Network | Effect |
//! |-----------|---------|--------|
//! | [`login`](Session::login) | `POST /auth/login` | On success stores user + token, flips `is_authenticated`, persists. |
//! | [`register`](Session::register) | `POST /auth/register` | Same resulting session shape as `login`. |
//! | [`logout`](Session::logout) | none | Synchronously clears everything, idempotent. |
//! | [`fetch_user`](Session::fetch_user) | `GET /auth/me` | Refreshes `user` only; any failure forces a logout. |
//! | [`restore`](Session::restore) | none | Hydrates from the persisted record at startup. |
//!
//! Every mutating operation writes the `{user, token, is_authenticated}`
//! subset through to the [`SessionStore`] immediately after the in-memory
//! change.
//!
//! ## Serialized transitions
//!
//! State-setting transitions bump an epoch counter. An async operation
//! captures the epoch when it starts and its completion is discarded if the
//! epoch moved underneath it, so a `logout` issued while a `login` is in
//! flight always wins.
//!
//! A failed `fetch_user` is the session's sole expiry detection: any error
//! (expired token, malformed token, network outage) is treated as "session
//! invalid" and drops the session silently.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use api::{ApiError, AuthPayload, NewAccount, User};

use crate::state::SessionState;
use crate::store::SessionStore;

/// Fallback shown when a login fails without server-supplied detail.
const LOGIN_FALLBACK: &str = "Could not sign in. Please try again.";
/// Fallback shown when a registration fails without server-supplied detail.
const REGISTER_FALLBACK: &str = "Could not create your account. Please try again.";

/// The slice of the API client the session depends on. Implemented by
/// [`api::Client`]; tests substitute a stub.
pub trait AuthApi {
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthPayload, ApiError>>;
    fn register(
        &self,
        account: &NewAccount,
    ) -> impl Future<Output = Result<AuthPayload, ApiError>>;
    fn current_user(&self) -> impl Future<Output = Result<User, ApiError>>;
    /// Install or clear the bearer token used for subsequent requests.
    fn set_token(&self, token: Option<&str>);
}

impl AuthApi for api::Client {
    async fn login(&self, email: &str, password: &str) -> Result<AuthPayload, ApiError> {
        api::Client::login(self, email, password).await
    }

    async fn register(&self, account: &NewAccount) -> Result<AuthPayload, ApiError> {
        api::Client::register(self, account).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        api::Client::current_user(self).await
    }

    fn set_token(&self, token: Option<&str>) {
        api::Client::set_token(self, token);
    }
}

/// Failure of a session operation, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The server rejected the operation; the message is the server detail
    /// or a generic fallback.
    #[error("{0}")]
    Rejected(String),
    /// Another state transition (e.g. a logout) landed while this operation
    /// was in flight; its completion was discarded.
    #[error("The session changed before the request finished")]
    Superseded,
}

struct Inner {
    state: SessionState,
    epoch: u64,
}

/// Authentication/session store. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct Session<A: AuthApi> {
    api: A,
    store: Arc<dyn SessionStore>,
    inner: Arc<Mutex<Inner>>,
}

impl<A: AuthApi> Session<A> {
    pub fn new(api: A, store: Arc<dyn SessionStore>) -> Self {
        Self {
            api,
            store,
            inner: Arc::new(Mutex::new(Inner {
                state: SessionState::default(),
                epoch: 0,
            })),
        }
    }

    /// The API client this session drives.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.lock().state.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Mark an async operation as started: raises `is_loading` and returns
    /// the epoch its completion must match.
    fn begin(&self) -> u64 {
        let mut inner = self.lock();
        inner.state.is_loading = true;
        inner.epoch
    }

    /// Hydrate state from the persisted record. Called once at startup,
    /// before the first guard evaluation.
    pub fn restore(&self) {
        let Some(record) = self.store.load() else {
            return;
        };
        let mut inner = self.lock();
        if let Some(token) = record.token.as_deref() {
            self.api.set_token(Some(token));
        }
        inner.state = SessionState::from(record);
        inner.epoch += 1;
    }

    /// Exchange credentials for a session.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), SessionError> {
        let epoch = self.begin();
        let result = self.api.login(email, password).await;
        self.finish_auth(epoch, result, LOGIN_FALLBACK)
    }

    /// Create an account. The success path is indistinguishable from
    /// [`login`](Session::login)'s.
    pub async fn register(&self, account: &NewAccount) -> Result<(), SessionError> {
        let epoch = self.begin();
        let result = self.api.register(account).await;
        self.finish_auth(epoch, result, REGISTER_FALLBACK)
    }

    fn finish_auth(
        &self,
        epoch: u64,
        result: Result<AuthPayload, ApiError>,
        fallback: &str,
    ) -> Result<(), SessionError> {
        let mut inner = self.lock();
        if inner.epoch != epoch {
            tracing::debug!("auth completion discarded: session changed while in flight");
            return Err(SessionError::Superseded);
        }
        inner.state.is_loading = false;
        match result {
            Ok(payload) => {
                self.api.set_token(Some(&payload.access_token));
                inner.state.user = Some(payload.user);
                inner.state.token = Some(payload.access_token);
                inner.state.is_authenticated = true;
                inner.epoch += 1;
                self.store.save(&inner.state.persisted());
                Ok(())
            }
            Err(err) => {
                // Credentials state is left untouched on failure.
                let message = err.server_message().unwrap_or(fallback).to_string();
                Err(SessionError::Rejected(message))
            }
        }
    }

    /// Drop the session. Synchronous, idempotent, no network call.
    pub fn logout(&self) {
        let mut inner = self.lock();
        inner.state = SessionState::default();
        inner.epoch += 1;
        self.api.set_token(None);
        self.store.clear();
    }

    /// Refresh the user record behind the current token. No-op without a
    /// token. Replaces `user` only on success; any failure drops the whole
    /// session, which is the sole expiry-detection mechanism.
    pub async fn fetch_user(&self) {
        let epoch = {
            let inner = self.lock();
            if inner.state.token.is_none() {
                return;
            }
            inner.epoch
        };

        match self.api.current_user().await {
            Ok(user) => {
                let mut inner = self.lock();
                if inner.epoch != epoch {
                    return;
                }
                inner.state.user = Some(user);
                inner.epoch += 1;
                self.store.save(&inner.state.persisted());
            }
            Err(err) => {
                tracing::debug!("current-user fetch failed, dropping session: {err}");
                {
                    let inner = self.lock();
                    if inner.epoch != epoch {
                        return;
                    }
                }
                self.logout();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn user() -> User {
        User {
            id: 1,
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            phone: None,
        }
    }

    fn payload() -> AuthPayload {
        AuthPayload {
            access_token: "tok1".to_string(),
            user: user(),
        }
    }

    #[derive(Default)]
    struct StubInner {
        login_result: Option<Result<AuthPayload, ApiError>>,
        register_result: Option<Result<AuthPayload, ApiError>>,
        me_result: Option<Result<User, ApiError>>,
        token: Option<String>,
        login_calls: u32,
        register_calls: u32,
        me_calls: u32,
    }

    /// Scripted AuthApi. `hold_login` keeps the login call pending until
    /// released, so tests can interleave a logout deterministically.
    #[derive(Clone, Default)]
    struct StubApi {
        inner: Arc<Mutex<StubInner>>,
        hold_login: Arc<AtomicBool>,
    }

    impl StubApi {
        fn with_login(result: Result<AuthPayload, ApiError>) -> Self {
            let stub = Self::default();
            stub.inner.lock().unwrap().login_result = Some(result);
            stub
        }

        fn login_calls(&self) -> u32 {
            self.inner.lock().unwrap().login_calls
        }

        fn me_calls(&self) -> u32 {
            self.inner.lock().unwrap().me_calls
        }

        fn token(&self) -> Option<String> {
            self.inner.lock().unwrap().token.clone()
        }
    }

    impl AuthApi for StubApi {
        async fn login(&self, _email: &str, _password: &str) -> Result<AuthPayload, ApiError> {
            self.inner.lock().unwrap().login_calls += 1;
            while self.hold_login.load(Ordering::SeqCst) {
                tokio::task::yield_now().await;
            }
            self.inner
                .lock()
                .unwrap()
                .login_result
                .clone()
                .unwrap_or_else(|| Ok(payload()))
        }

        async fn register(&self, _account: &NewAccount) -> Result<AuthPayload, ApiError> {
            self.inner.lock().unwrap().register_calls += 1;
            self.inner
                .lock()
                .unwrap()
                .register_result
                .clone()
                .unwrap_or_else(|| Ok(payload()))
        }

        async fn current_user(&self) -> Result<User, ApiError> {
            self.inner.lock().unwrap().me_calls += 1;
            self.inner
                .lock()
                .unwrap()
                .me_result
                .clone()
                .unwrap_or_else(|| Ok(user()))
        }

        fn set_token(&self, token: Option<&str>) {
            self.inner.lock().unwrap().token = token.map(String::from);
        }
    }

    fn session(stub: &StubApi) -> (Session<StubApi>, MemoryStore) {
        let store = MemoryStore::new();
        (Session::new(stub.clone(), Arc::new(store.clone())), store)
    }

    #[tokio::test]
    async fn test_login_success_sets_session_and_persists() {
        let stub = StubApi::with_login(Ok(payload()));
        let (session, store) = session(&stub);

        session.login("a@b.com", "secret1").await.unwrap();

        let state = session.state();
        assert_eq!(state.user, Some(user()));
        assert_eq!(state.token.as_deref(), Some("tok1"));
        assert!(state.is_authenticated);
        assert!(!state.is_loading);
        assert_eq!(stub.token().as_deref(), Some("tok1"));

        let persisted = store.load().unwrap();
        assert_eq!(persisted, state.persisted());
        assert!(persisted.is_authenticated);
    }

    #[tokio::test]
    async fn test_login_failure_leaves_session_untouched() {
        let stub = StubApi::with_login(Err(ApiError::Unauthorized {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        }));
        let (session, store) = session(&stub);

        let err = session.login("a@b.com", "wrong").await.unwrap_err();
        assert_eq!(err, SessionError::Rejected("Invalid credentials".to_string()));

        let state = session.state();
        assert_eq!(state, SessionState::default());
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_login_failure_without_detail_uses_fallback() {
        let stub = StubApi::with_login(Err(ApiError::Transport {
            status: None,
            message: None,
        }));
        let (session, _) = session(&stub);

        let err = session.login("a@b.com", "secret1").await.unwrap_err();
        assert_eq!(err, SessionError::Rejected(LOGIN_FALLBACK.to_string()));
    }

    #[tokio::test]
    async fn test_logout_restores_initial_state_exactly() {
        let stub = StubApi::default();
        let (session, store) = session(&stub);

        session.login("a@b.com", "secret1").await.unwrap();
        session.fetch_user().await;
        session.logout();
        session.logout(); // idempotent

        assert_eq!(session.state(), SessionState::default());
        assert!(store.load().is_none());
        assert_eq!(stub.token(), None);
    }

    #[tokio::test]
    async fn test_failed_fetch_user_forces_logout() {
        let stub = StubApi::default();
        stub.inner.lock().unwrap().me_result = Some(Err(ApiError::Unauthorized {
            status: 401,
            message: None,
        }));
        let (session, store) = session(&stub);

        session.login("a@b.com", "secret1").await.unwrap();
        session.fetch_user().await;

        let state = session.state();
        assert!(!state.is_authenticated);
        assert_eq!(state.token, None);
        assert_eq!(state.user, None);
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_fetch_user_without_token_is_a_noop() {
        let stub = StubApi::default();
        let (session, _) = session(&stub);

        session.fetch_user().await;

        assert_eq!(stub.me_calls(), 0);
        assert_eq!(session.state(), SessionState::default());
    }

    #[tokio::test]
    async fn test_fetch_user_replaces_user_only() {
        let stub = StubApi::default();
        stub.inner.lock().unwrap().me_result = Some(Ok(User {
            name: "A. Updated".to_string(),
            ..user()
        }));
        let (session, store) = session(&stub);

        session.login("a@b.com", "secret1").await.unwrap();
        session.fetch_user().await;

        let state = session.state();
        assert_eq!(state.user.unwrap().name, "A. Updated");
        assert_eq!(state.token.as_deref(), Some("tok1"));
        assert!(state.is_authenticated);
        assert_eq!(store.load().unwrap().user.unwrap().name, "A. Updated");
    }

    #[tokio::test]
    async fn test_restore_rehydrates_from_persisted_record() {
        let stub = StubApi::default();
        let (session, store) = session(&stub);
        session.login("a@b.com", "secret1").await.unwrap();

        // A fresh session over the same store picks the record up.
        let fresh = Session::new(stub.clone(), Arc::new(store.clone()));
        fresh.restore();

        assert_eq!(fresh.state(), session.state());
        assert_eq!(stub.token().as_deref(), Some("tok1"));
    }

    #[tokio::test]
    async fn test_logout_during_login_discards_the_completion() {
        let stub = StubApi::with_login(Ok(payload()));
        stub.hold_login.store(true, Ordering::SeqCst);
        let (session, store) = session(&stub);

        let (result, ()) = tokio::join!(session.login("a@b.com", "secret1"), async {
            // Let the login reach the network call, then pull the rug.
            tokio::task::yield_now().await;
            session.logout();
            stub.hold_login.store(false, Ordering::SeqCst);
        });

        assert_eq!(result.unwrap_err(), SessionError::Superseded);
        assert_eq!(stub.login_calls(), 1);
        assert_eq!(session.state(), SessionState::default());
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_register_matches_login_shape() {
        let stub = StubApi::default();
        let (session, store) = session(&stub);

        let account = NewAccount {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
            phone: None,
        };
        session.register(&account).await.unwrap();

        let state = session.state();
        assert!(state.is_authenticated);
        assert_eq!(state.token.as_deref(), Some("tok1"));
        assert_eq!(store.load().unwrap(), state.persisted());
    }
}
