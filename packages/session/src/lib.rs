//! Client-side session store and route guard for the RentMe web client.
//!
//! The session is the client's record of the logged-in user and credential
//! token. It is held in memory, persisted as one JSON record, and restored at
//! startup; the route guard gates protected screens on it.

pub mod forms;
pub mod guard;

mod state;
pub use state::{PersistedSession, SessionState, STORAGE_KEY};

mod store;
pub use store::{MemoryStore, SessionStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

mod manager;
pub use manager::{AuthApi, Session, SessionError};
