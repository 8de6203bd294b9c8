//! Seam between the session layer and the HTTP backend.

use crate::error::SessionError;
use crate::update::SessionUpdate;

/// The authentication-relevant slice of the backend API.
///
/// Pages that complete one of these exchanges must funnel the resulting
/// [`SessionUpdate`] through [`SessionManager::apply`](crate::SessionManager::apply);
/// nothing else may touch session fields.
pub trait AuthBackend {
    /// Startup probe: who does the server think this client is.
    /// A server-unavailable failure here is fatal for the current view.
    fn probe(&self) -> Result<SessionUpdate, SessionError>;

    fn login(&self, username: &str, password: &str) -> Result<SessionUpdate, SessionError>;

    fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<SessionUpdate, SessionError>;

    /// Logout carries the current identity. Callers reset to guest
    /// regardless of the outcome.
    fn logout(&self, user_id: i64, username: &str) -> Result<(), SessionError>;
}
