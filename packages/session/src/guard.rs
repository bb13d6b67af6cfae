//! Route gating.
//!
//! Pure decision logic, evaluated once per navigation by the application
//! shell: a protected target with no authenticated session redirects to the
//! login screen (history-replacing, so the blocked screen is not reachable
//! via back-navigation); everything else renders. Public screens stay
//! reachable while logged in.

use crate::state::SessionState;

/// Public/protected classification of a navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Public,
    Protected,
}

/// Outcome of one guard evaluation. Every navigation resolves to exactly one
/// of these; there is no intermediate loading state at the guard level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Render,
    RedirectToLogin,
}

/// Evaluate the gate for the given session state.
pub fn evaluate(gate: Gate, state: &SessionState) -> Decision {
    match gate {
        Gate::Protected if !state.is_authenticated || state.token.is_none() => {
            Decision::RedirectToLogin
        }
        _ => Decision::Render,
    }
}
