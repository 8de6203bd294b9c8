//! HTTP and SSE transport for the marketplace backend.
//!
//! [`ApiClient`] covers the request/response endpoints and implements the
//! session layer's [`AuthBackend`](bazaar_session::AuthBackend) seam;
//! [`SsePushTransport`] covers the server-push channels behind its
//! [`PushTransport`](bazaar_session::PushTransport) seam.

mod client;
mod error;
mod payload;
mod push;

pub use client::ApiClient;
pub use error::{ApiError, decode_error_tokens};
pub use payload::SessionProbe;
pub use push::{SseConnection, SsePushTransport, StatsConnection};
