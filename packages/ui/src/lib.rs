//! This crate contains all shared UI for the workspace.

pub mod components;

mod session;
pub use session::{use_session, AppSession, SessionContext, SessionProvider};

mod rating;
pub use rating::StarRating;

mod badge;
pub use badge::StatusBadge;

mod meter;
pub use meter::{ScoreBar, TrustScoreRing};
