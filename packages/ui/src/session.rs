//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] builds the session (API client + platform storage)
//! once at startup, restores any persisted record, refreshes the user in the
//! background, and hands a [`SessionContext`] to every component below it.
//! Components read reactively through [`use_session`]; the wrapped signal
//! updates after every session operation.

use std::sync::Arc;

use api::{Client, NewAccount};
use dioxus::prelude::*;
use session::{Session, SessionError, SessionState, SessionStore};

/// The concrete session type used by the apps.
pub type AppSession = Session<Client>;

/// Constructor-injected handle to the session, shared via context.
#[derive(Clone)]
pub struct SessionContext {
    session: AppSession,
    state: Signal<SessionState>,
}

impl SessionContext {
    /// Reactive snapshot of the session state. Reading this inside a
    /// component subscribes it to session changes.
    pub fn current(&self) -> SessionState {
        (self.state)()
    }

    /// The API client carrying the current bearer token, for screens that
    /// talk to non-auth endpoints directly.
    pub fn api(&self) -> Client {
        self.session.api().clone()
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), SessionError> {
        self.begin();
        let result = self.session.login(email, password).await;
        self.sync();
        result
    }

    pub async fn register(&mut self, account: &NewAccount) -> Result<(), SessionError> {
        self.begin();
        let result = self.session.register(account).await;
        self.sync();
        result
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.sync();
    }

    pub async fn fetch_user(&mut self) {
        self.session.fetch_user().await;
        self.sync();
    }

    /// Publish the loading flag before awaiting, so screens can react to it.
    fn begin(&mut self) {
        let mut state = self.session.state();
        state.is_loading = true;
        self.state.set(state);
    }

    fn sync(&mut self) {
        self.state.set(self.session.state());
    }
}

/// Get the session context provided by [`SessionProvider`].
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

fn platform_store() -> Arc<dyn SessionStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(session::LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Arc::new(session::MemoryStore::new())
    }
}

/// Provider component that owns the session for the whole app.
/// Wrap the router with it.
#[component]
pub fn SessionProvider(base_url: String, children: Element) -> Element {
    let session = use_hook(|| {
        let client = Client::new(&base_url);
        let session = Session::new(client, platform_store());
        session.restore();
        session
    });

    let state = use_signal(|| session.state());
    let ctx = use_context_provider(|| SessionContext {
        session: session.clone(),
        state,
    });

    // Refresh the user record on startup. Any failure drops the restored
    // session before a protected screen can rely on it.
    let _ = use_resource(move || {
        let mut ctx = ctx.clone();
        async move {
            // Plain state reads, not signal reads: the resource must not
            // re-run when the session changes.
            let was_authenticated = ctx.session.state().is_authenticated;
            ctx.fetch_user().await;
            if was_authenticated && !ctx.session.state().is_authenticated {
                tracing::debug!("restored session was rejected on startup");
            }
        }
    });

    rsx! {
        {children}
    }
}
