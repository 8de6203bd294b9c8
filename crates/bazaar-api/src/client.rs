//! Blocking HTTP client for the marketplace backend.

use std::time::Duration;

use bazaar_session::{AuthBackend, SessionError, SessionUpdate};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use tracing::debug;

use crate::error::{ApiError, decode_error_tokens};
use crate::payload::{ErrorBody, LoginRequest, LogoutRequest, RegisterRequest, SessionProbe};

pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the request/response half of the backend API. The push
/// channels live in [`SsePushTransport`](crate::SsePushTransport), which
/// needs a client without a read timeout.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Startup session probe. Any transport failure, and a 500/503 status,
    /// count as the backend being down for maintenance.
    pub fn probe(&self) -> Result<SessionUpdate, ApiError> {
        let response = self
            .http
            .get(self.url("/is_logged"))
            .send()
            .map_err(|_| ApiError::Unavailable)?;
        match response.status() {
            StatusCode::INTERNAL_SERVER_ERROR | StatusCode::SERVICE_UNAVAILABLE => {
                Err(ApiError::Unavailable)
            }
            status if !status.is_success() => Err(self.rejection(response)),
            _ => {
                let probe: SessionProbe = response
                    .json()
                    .map_err(|e| ApiError::Decode(e.to_string()))?;
                debug!(user_id = probe.user_id, logged = probe.logged, "session probe");
                Ok(probe.into_update())
            }
        }
    }

    pub fn login(&self, username: &str, password: &str) -> Result<SessionUpdate, ApiError> {
        let response = self
            .http
            .post(self.url("/login"))
            .json(&LoginRequest { username, password })
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.session_update(response)
    }

    pub fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<SessionUpdate, ApiError> {
        let response = self
            .http
            .post(self.url("/register"))
            .json(&RegisterRequest {
                username,
                email,
                password,
            })
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.session_update(response)
    }

    pub fn logout(&self, user_id: i64, username: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/logout"))
            .json(&LogoutRequest {
                user_id,
                user_name: username,
            })
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.rejection(response))
        }
    }

    /// Decode a successful auth response into a partial session update.
    /// An empty body is a success with nothing to change.
    fn session_update(&self, response: Response) -> Result<SessionUpdate, ApiError> {
        if !response.status().is_success() {
            return Err(self.rejection(response));
        }
        let body = response.text().map_err(|e| ApiError::Network(e.to_string()))?;
        if body.trim().is_empty() {
            return Ok(SessionUpdate::default());
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn rejection(&self, response: Response) -> ApiError {
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .ok()
            .and_then(|body| body.error)
            .map(|raw| decode_error_tokens(&raw))
            .unwrap_or_else(|| format!("request failed with status {status}"));
        ApiError::Rejected(message)
    }
}

impl AuthBackend for ApiClient {
    fn probe(&self) -> Result<SessionUpdate, SessionError> {
        ApiClient::probe(self).map_err(SessionError::from)
    }

    fn login(&self, username: &str, password: &str) -> Result<SessionUpdate, SessionError> {
        ApiClient::login(self, username, password).map_err(SessionError::from)
    }

    fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<SessionUpdate, SessionError> {
        ApiClient::register(self, username, email, password).map_err(SessionError::from)
    }

    fn logout(&self, user_id: i64, username: &str) -> Result<(), SessionError> {
        ApiClient::logout(self, user_id, username).map_err(SessionError::from)
    }
}
