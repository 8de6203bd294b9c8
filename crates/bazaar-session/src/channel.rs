//! Seams between the session manager and the push-notification transport.
//!
//! The manager never opens sockets itself; it asks a [`PushTransport`] for a
//! connection keyed by username and polls it. Dropping the boxed connection
//! is the teardown — the transport's own machinery notices and cleans up.

use crate::error::SessionError;

/// A live connection delivering server-initiated notification payloads.
pub trait PushConnection {
    /// Next pending payload, if any. Never blocks; arrival order is
    /// preserved per connection.
    fn try_recv(&mut self) -> Option<String>;

    /// Whether the transport still considers this connection live.
    fn is_alive(&self) -> bool;
}

/// Factory for per-identity push connections.
pub trait PushTransport {
    /// Open the notification stream for `username`.
    fn connect(&self, username: &str) -> Result<Box<dyn PushConnection>, SessionError>;

    /// Register `username` on the side channel for targeted delivery.
    /// Called once after each successful [`connect`](PushTransport::connect).
    fn register(&self, username: &str) -> Result<(), SessionError>;
}
