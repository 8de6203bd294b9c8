//! Wire payload shapes for the auth endpoints.

use bazaar_session::SessionUpdate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct LogoutRequest<'a> {
    pub user_id: i64,
    pub user_name: &'a str,
}

/// Body of a failed request: a `|`/`_` token string under `error`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}

/// Response of the startup session probe.
#[derive(Debug, Deserialize)]
pub struct SessionProbe {
    pub username: String,
    pub user_id: i64,
    pub logged: bool,
    pub is_admin: bool,
}

impl SessionProbe {
    /// The probe is a full identity statement, so every session field is
    /// present in the resulting update. `logged` itself is advisory; the
    /// session layer recomputes it from the username.
    pub fn into_update(self) -> SessionUpdate {
        SessionUpdate {
            user_id: Some(self.user_id),
            is_admin: Some(self.is_admin),
            username: Some(self.username),
            push_messages: None,
        }
    }
}
