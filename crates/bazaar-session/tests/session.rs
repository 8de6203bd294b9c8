//! Tests for the session manager: partial updates, guest reset, channel
//! lifecycle, and stale-response guarding.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use bazaar_session::{
    AuthBackend, GUEST_USER_ID, PushConnection, PushTransport, SessionError, SessionManager,
    SessionUpdate,
};

/// Shared record of what the manager asked the transport to do.
#[derive(Debug, Default)]
struct TransportLog {
    connects: Vec<String>,
    registers: Vec<String>,
}

#[derive(Default)]
struct FakeTransport {
    log: Rc<RefCell<TransportLog>>,
    /// Payloads handed to the next opened connection.
    pending: RefCell<VecDeque<String>>,
    fail_connect: bool,
}

impl FakeTransport {
    fn new() -> (Self, Rc<RefCell<TransportLog>>) {
        let log = Rc::new(RefCell::new(TransportLog::default()));
        (
            Self {
                log: Rc::clone(&log),
                ..Self::default()
            },
            log,
        )
    }

    fn queue(&self, payload: &str) {
        self.pending.borrow_mut().push_back(payload.to_string());
    }
}

impl PushTransport for FakeTransport {
    fn connect(&self, username: &str) -> Result<Box<dyn PushConnection>, SessionError> {
        if self.fail_connect {
            return Err(SessionError::Transport("refused".to_string()));
        }
        self.log.borrow_mut().connects.push(username.to_string());
        Ok(Box::new(FakeConnection {
            payloads: std::mem::take(&mut *self.pending.borrow_mut()),
            alive: true,
        }))
    }

    fn register(&self, username: &str) -> Result<(), SessionError> {
        self.log.borrow_mut().registers.push(username.to_string());
        Ok(())
    }
}

struct FakeConnection {
    payloads: VecDeque<String>,
    alive: bool,
}

impl PushConnection for FakeConnection {
    fn try_recv(&mut self) -> Option<String> {
        self.payloads.pop_front()
    }

    fn is_alive(&self) -> bool {
        self.alive
    }
}

fn login_update(user_id: i64, username: &str) -> SessionUpdate {
    SessionUpdate {
        user_id: Some(user_id),
        username: Some(username.to_string()),
        ..SessionUpdate::default()
    }
}

fn manager() -> (SessionManager, Rc<RefCell<TransportLog>>) {
    let (transport, log) = FakeTransport::new();
    (SessionManager::new(Box::new(transport)), log)
}

#[test]
fn test_starts_as_guest() {
    let (manager, log) = manager();
    assert!(!manager.is_logged_in());
    assert!(!manager.is_admin());
    assert_eq!(manager.user_id(), GUEST_USER_ID);
    assert_eq!(manager.username(), "");
    assert!(log.borrow().connects.is_empty());
}

#[test]
fn test_username_alone_logs_in_despite_stored_guest_id() {
    // A response carrying only a username flips the session to logged-in
    // even though the stored user id is still the guest id.
    let (mut manager, _log) = manager();
    manager.apply(SessionUpdate {
        username: Some("alice".to_string()),
        ..SessionUpdate::default()
    });
    assert!(manager.is_logged_in());
    assert_eq!(manager.username(), "alice");
    assert_eq!(manager.user_id(), GUEST_USER_ID);
}

#[test]
fn test_partial_update_retains_unmentioned_fields() {
    let (mut manager, _log) = manager();
    manager.apply(SessionUpdate {
        user_id: Some(7),
        is_admin: Some(true),
        username: Some("alice".to_string()),
        push_messages: Some(vec!["welcome".to_string()]),
    });

    // An update touching only the admin flag leaves everything else alone.
    manager.apply(SessionUpdate {
        is_admin: Some(false),
        ..SessionUpdate::default()
    });
    assert!(manager.is_logged_in());
    assert_eq!(manager.username(), "alice");
    assert_eq!(manager.user_id(), 7);
    assert!(!manager.is_admin());
    assert_eq!(manager.state().pending_notifications(), ["welcome"]);
}

#[test]
fn test_connects_once_per_identity() {
    let (mut manager, log) = manager();
    manager.apply(login_update(7, "alice"));
    manager.apply(SessionUpdate {
        is_admin: Some(true),
        ..SessionUpdate::default()
    });
    // Registration happens once, right after the connect.
    assert_eq!(log.borrow().connects, ["alice"]);
    assert_eq!(log.borrow().registers, ["alice"]);
}

#[test]
fn test_username_change_rebuilds_channel() {
    let (mut manager, log) = manager();
    manager.apply(login_update(7, "alice"));
    manager.apply(login_update(8, "bob"));
    assert_eq!(log.borrow().connects, ["alice", "bob"]);
    assert_eq!(log.borrow().registers, ["alice", "bob"]);
}

#[test]
fn test_guest_reset_is_atomic() {
    let (mut manager, log) = manager();
    manager.apply(login_update(7, "alice"));
    manager.apply(SessionUpdate {
        user_id: Some(GUEST_USER_ID),
        push_messages: Some(Vec::new()),
        ..SessionUpdate::default()
    });
    assert!(!manager.is_logged_in());
    assert!(!manager.is_admin());
    assert_eq!(manager.username(), "");
    assert_eq!(manager.user_id(), GUEST_USER_ID);
    assert!(manager.state().pending_notifications().is_empty());
    // No reconnect happened for the guest.
    assert_eq!(log.borrow().connects, ["alice"]);
}

#[test]
fn test_logout_resets_even_when_backend_fails() {
    struct FailingBackend;
    impl AuthBackend for FailingBackend {
        fn probe(&self) -> Result<SessionUpdate, SessionError> {
            Err(SessionError::Unavailable)
        }
        fn login(&self, _: &str, _: &str) -> Result<SessionUpdate, SessionError> {
            Err(SessionError::Unavailable)
        }
        fn register(&self, _: &str, _: &str, _: &str) -> Result<SessionUpdate, SessionError> {
            Err(SessionError::Unavailable)
        }
        fn logout(&self, _: i64, _: &str) -> Result<(), SessionError> {
            Err(SessionError::Transport("connection reset".to_string()))
        }
    }

    let (mut manager, _log) = manager();
    manager.apply(login_update(7, "alice"));
    manager.logout(&FailingBackend);
    assert!(!manager.is_logged_in());
    assert_eq!(manager.user_id(), GUEST_USER_ID);
}

#[test]
fn test_stale_update_is_dropped() {
    let (mut manager, _log) = manager();
    let stamp = manager.stamp();
    // Identity changes while a request from the old identity is in flight.
    manager.apply(login_update(7, "alice"));
    let applied = manager.apply_stamped(
        stamp,
        SessionUpdate {
            is_admin: Some(true),
            ..SessionUpdate::default()
        },
    );
    assert!(!applied);
    assert!(!manager.is_admin());

    // A stamp taken after the change is honored.
    let fresh = manager.stamp();
    assert!(manager.apply_stamped(
        fresh,
        SessionUpdate {
            is_admin: Some(true),
            ..SessionUpdate::default()
        },
    ));
    assert!(manager.is_admin());
}

#[test]
fn test_non_identity_update_keeps_stamp_valid() {
    let (mut manager, _log) = manager();
    manager.apply(login_update(7, "alice"));
    let stamp = manager.stamp();
    manager.apply(SessionUpdate {
        is_admin: Some(true),
        ..SessionUpdate::default()
    });
    assert!(manager.apply_stamped(stamp, SessionUpdate::default()));
}

#[test]
fn test_pump_appends_and_dedupes_last() {
    let (transport, _log) = FakeTransport::new();
    transport.queue("order shipped");
    transport.queue("order shipped");
    transport.queue("store closed");
    let mut manager = SessionManager::new(Box::new(transport));
    manager.apply(login_update(7, "alice"));
    manager.pump_notifications();
    assert_eq!(
        manager.state().pending_notifications(),
        ["order shipped", "store closed"]
    );
}

#[test]
fn test_dismiss_notification() {
    let (mut manager, _log) = manager();
    manager.apply(SessionUpdate {
        username: Some("alice".to_string()),
        push_messages: Some(vec!["first".to_string(), "second".to_string()]),
        ..SessionUpdate::default()
    });
    manager.dismiss_notification(0);
    assert_eq!(manager.state().pending_notifications(), ["second"]);
    // Out-of-range dismissals are ignored.
    manager.dismiss_notification(9);
    assert_eq!(manager.state().pending_notifications(), ["second"]);
}

#[test]
fn test_connect_failure_leaves_session_logged_in() {
    let (mut transport, _) = FakeTransport::new();
    transport.fail_connect = true;
    let mut manager = SessionManager::new(Box::new(transport));
    manager.apply(login_update(7, "alice"));
    // The channel could not be opened but the session itself is intact.
    assert!(manager.is_logged_in());
    manager.pump_notifications();
    assert!(manager.state().pending_notifications().is_empty());
}

#[test]
fn test_update_deserializes_from_response_json() {
    let update: SessionUpdate =
        serde_json::from_str(r#"{"user_id": 4, "username": "alice"}"#).unwrap();
    assert_eq!(update.user_id, Some(4));
    assert_eq!(update.username.as_deref(), Some("alice"));
    assert_eq!(update.is_admin, None);
    assert_eq!(update.push_messages, None);
}
