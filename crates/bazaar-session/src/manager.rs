//! The session manager: single owner of [`SessionState`].

use tracing::{debug, warn};

use crate::backend::AuthBackend;
use crate::channel::{PushConnection, PushTransport};
use crate::state::{GUEST_USER_ID, SessionState};
use crate::update::SessionUpdate;

/// Identity generation token for guarding against stale responses.
///
/// Take a stamp before issuing a request; a response applied through
/// [`SessionManager::apply_stamped`] is dropped when the session identity
/// changed in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStamp(u64);

/// Owns the authoritative [`SessionState`] and drives the live-channel
/// lifecycle as a side effect of state transitions.
///
/// All field writes for one update are batched into a fresh state value and
/// committed in a single assignment, so accessors observe either the pre- or
/// post-update snapshot, never a mix.
pub struct SessionManager {
    state: SessionState,
    generation: u64,
    transport: Box<dyn PushTransport>,
    connection: Option<Box<dyn PushConnection>>,
    /// Username the current connection was opened for; a mismatch after an
    /// update forces a rebuild.
    connected_as: Option<String>,
}

impl SessionManager {
    pub fn new(transport: Box<dyn PushTransport>) -> Self {
        Self {
            state: SessionState::guest(),
            generation: 0,
            transport,
            connection: None,
            connected_as: None,
        }
    }

    /// Current session snapshot.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in()
    }

    pub fn is_admin(&self) -> bool {
        self.state.is_admin()
    }

    pub fn user_id(&self) -> i64 {
        self.state.user_id()
    }

    pub fn username(&self) -> &str {
        self.state.username()
    }

    /// Token for the current identity generation.
    pub fn stamp(&self) -> SessionStamp {
        SessionStamp(self.generation)
    }

    /// Apply a partial update from a server response. Keys absent from the
    /// update retain their previous value; `is_logged_in` is recomputed from
    /// the resulting username. An update that explicitly moves `user_id` to
    /// the guest id resets the whole identity atomically.
    pub fn apply(&mut self, update: SessionUpdate) {
        let mut next = self.state.clone();
        if let Some(user_id) = update.user_id {
            next.user_id = user_id;
        }
        if let Some(is_admin) = update.is_admin {
            next.is_admin = is_admin;
        }
        if let Some(username) = update.username {
            next.username = username;
        }
        if let Some(push_messages) = update.push_messages {
            next.pending_notifications = push_messages;
        }
        if update.user_id == Some(GUEST_USER_ID) {
            next.username.clear();
            next.is_admin = false;
            next.pending_notifications.clear();
        }
        next.is_logged_in = !next.username.is_empty();

        let identity_changed =
            next.user_id != self.state.user_id || next.username != self.state.username;
        if identity_changed {
            self.generation += 1;
        }
        self.state = next;
        self.sync_channel();
    }

    /// Apply an update only if the identity has not changed since `stamp`
    /// was taken. Returns whether the update was applied.
    pub fn apply_stamped(&mut self, stamp: SessionStamp, update: SessionUpdate) -> bool {
        if stamp.0 != self.generation {
            debug!("dropping stale session update from a superseded identity");
            return false;
        }
        self.apply(update);
        true
    }

    /// Issue the logout request with the current identity, then force the
    /// session back to guest whatever the transport said.
    pub fn logout(&mut self, backend: &dyn AuthBackend) {
        let user_id = self.state.user_id();
        let username = self.state.username().to_string();
        if let Err(error) = backend.logout(user_id, &username) {
            warn!(%error, "logout request failed; resetting to guest anyway");
        }
        self.apply(SessionUpdate::guest_reset());
    }

    /// Drain the live connection into the pending-notification list.
    ///
    /// An incoming payload identical to the most recently appended entry is
    /// dropped, not appended again.
    pub fn pump_notifications(&mut self) {
        let Some(connection) = self.connection.as_mut() else {
            return;
        };
        while let Some(payload) = connection.try_recv() {
            if self.state.pending_notifications.last() == Some(&payload) {
                continue;
            }
            self.state.pending_notifications.push(payload);
        }
    }

    /// Dismiss one pending notification by position.
    pub fn dismiss_notification(&mut self, index: usize) {
        if index < self.state.pending_notifications.len() {
            self.state.pending_notifications.remove(index);
        }
    }

    /// Reconcile the live connection with the committed state: connect while
    /// logged in (rebuilding when the username changed or the connection
    /// died), drop the reference otherwise.
    fn sync_channel(&mut self) {
        if !self.state.is_logged_in() {
            if self.connection.is_some() {
                debug!("discarding live channel for logged-out session");
            }
            self.connection = None;
            self.connected_as = None;
            return;
        }

        let username = self.state.username().to_string();
        let usable = self
            .connection
            .as_ref()
            .is_some_and(|connection| connection.is_alive())
            && self.connected_as.as_deref() == Some(username.as_str());
        if usable {
            return;
        }

        match self.transport.connect(&username) {
            Ok(connection) => {
                self.connection = Some(connection);
                self.connected_as = Some(username.clone());
                if let Err(error) = self.transport.register(&username) {
                    warn!(%error, username, "live channel registration failed");
                }
            }
            Err(error) => {
                warn!(%error, username, "live channel connect failed");
                self.connection = None;
                self.connected_as = None;
            }
        }
    }
}
