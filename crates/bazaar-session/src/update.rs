//! Partial session updates decoded from server responses.

use serde::Deserialize;

use crate::state::GUEST_USER_ID;

/// The session-relevant slice of a server response.
///
/// Every field is optional: keys absent from the payload leave the
/// corresponding session field untouched (partial-update semantics, never a
/// full replace).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionUpdate {
    pub user_id: Option<i64>,
    pub is_admin: Option<bool>,
    pub username: Option<String>,
    pub push_messages: Option<Vec<String>>,
}

impl SessionUpdate {
    /// The update a logout must apply: back to guest, notifications cleared.
    pub fn guest_reset() -> Self {
        Self {
            user_id: Some(GUEST_USER_ID),
            is_admin: None,
            username: None,
            push_messages: Some(Vec::new()),
        }
    }
}
