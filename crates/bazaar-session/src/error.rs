//! Error type shared across the session seams.

use thiserror::Error;

/// Failures surfaced by the auth backend or the push transport.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    /// Backend is down for maintenance (server-unavailable class of errors
    /// on the startup probe).
    #[error("backend unavailable")]
    Unavailable,

    /// The server rejected the request; the message is already decoded for
    /// display.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// Transport-level failure (connection refused, timeout, bad payload).
    #[error("transport error: {0}")]
    Transport(String),
}
