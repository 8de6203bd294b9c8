//! Session-state propagation for the Bazaar marketplace client.
//!
//! One [`SessionManager`] instance owns the authoritative [`SessionState`]
//! for the whole client. Components that complete an authentication-relevant
//! server exchange route the response through [`SessionManager::apply`];
//! everything else holds read accessors only. Applying an update also drives
//! the live notification channel: connected while logged in (keyed by
//! username), registered once on the side channel, dropped on logout.
//!
//! The network itself stays behind the [`AuthBackend`] and [`PushTransport`]
//! traits so the manager can be exercised with in-memory transports.

mod backend;
mod channel;
mod error;
mod manager;
mod state;
mod stats;
mod update;

pub use backend::AuthBackend;
pub use channel::{PushConnection, PushTransport};
pub use error::SessionError;
pub use manager::{SessionManager, SessionStamp};
pub use state::{GUEST_USER_ID, SessionState};
pub use stats::{StatsFeed, StatsRecord};
pub use update::SessionUpdate;
