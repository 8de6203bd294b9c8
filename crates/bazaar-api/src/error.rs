//! Transport error type and the backend's error-token convention.

use thiserror::Error;

/// Failures from the HTTP client or the push channels.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Backend down for maintenance: transport failure or HTTP 500/503 on
    /// the session probe.
    #[error("backend unavailable")]
    Unavailable,

    /// The server rejected the request. The message is decoded from the
    /// error body and ready for display.
    #[error("{0}")]
    Rejected(String),

    /// Connection-level failure outside the probe.
    #[error("network error: {0}")]
    Network(String),

    /// Response body did not have the expected shape.
    #[error("unexpected response payload: {0}")]
    Decode(String),
}

impl From<ApiError> for bazaar_session::SessionError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Unavailable => Self::Unavailable,
            ApiError::Rejected(message) => Self::Rejected(message),
            ApiError::Network(message) | ApiError::Decode(message) => Self::Transport(message),
        }
    }
}

/// Decode the backend's error token into a display string: `|` separates
/// clauses, `_` stands in for spaces.
pub fn decode_error_tokens(raw: &str) -> String {
    raw.replace('|', ", ").replace('_', " ")
}
