//! Uniform error shape for everything that leaves the API client.
//!
//! Three kinds, matching the three failure classes the UI cares about:
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | [`ApiError::Validation`] | Rejected client-side, before any request was sent. |
//! | [`ApiError::Unauthorized`] | The server answered 401/403. |
//! | [`ApiError::Transport`] | Connection-level failure (no status) or any other non-success HTTP status. |
//!
//! When the server includes a JSON body with a `detail` field, that text is
//! carried along so screens can show it verbatim; otherwise callers fall back
//! to their own generic message via [`ApiError::server_message`].

use serde::Deserialize;

/// Error returned by every [`crate::Client`] call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request was rejected before it was dispatched.
    #[error("{0}")]
    Validation(String),

    /// The server rejected the credentials or session (HTTP 401 or 403).
    /// `status` records which of the two it was.
    #[error("{}", message.as_deref().unwrap_or("Not authorized"))]
    Unauthorized { status: u16, message: Option<String> },

    /// The request never completed, or the server answered with an error
    /// status. `status` is `None` for connection-level failures.
    #[error("{}", message.as_deref().unwrap_or("Request failed"))]
    Transport {
        status: Option<u16>,
        message: Option<String>,
    },
}

impl ApiError {
    /// The server-supplied detail text, if the response carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Validation(message) => Some(message),
            ApiError::Unauthorized { message, .. } | ApiError::Transport { message, .. } => {
                message.as_deref()
            }
        }
    }

    /// The HTTP status that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Validation(_) => None,
            ApiError::Unauthorized { status, .. } => Some(*status),
            ApiError::Transport { status, .. } => *status,
        }
    }

    pub(crate) fn from_status(status: u16, detail: Option<String>) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized {
                status,
                message: detail,
            },
            _ => ApiError::Transport {
                status: Some(status),
                message: detail,
            },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: None,
        }
    }
}

/// Error body shape used by the remote API: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: Option<String>,
}
