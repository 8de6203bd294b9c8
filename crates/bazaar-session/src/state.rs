//! The session record itself.

/// User id of the anonymous guest session.
pub const GUEST_USER_ID: i64 = -1;

/// Who is using this client right now.
///
/// Owned exclusively by the [`SessionManager`](crate::SessionManager); every
/// other component reads through accessors and mutates only by routing a
/// server response through [`SessionManager::apply`](crate::SessionManager::apply).
/// Invariant: `is_logged_in == !username.is_empty()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub(crate) is_logged_in: bool,
    pub(crate) is_admin: bool,
    pub(crate) username: String,
    pub(crate) user_id: i64,
    pub(crate) pending_notifications: Vec<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::guest()
    }
}

impl SessionState {
    /// The anonymous state every session starts from and returns to on logout.
    pub fn guest() -> Self {
        Self {
            is_logged_in: false,
            is_admin: false,
            username: String::new(),
            user_id: GUEST_USER_ID,
            pending_notifications: Vec::new(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Notifications received on the live channel and not yet dismissed.
    pub fn pending_notifications(&self) -> &[String] {
        &self.pending_notifications
    }
}
