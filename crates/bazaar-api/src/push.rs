//! Server-push channels over SSE.
//!
//! Each connection is a background thread holding a long-lived GET and
//! forwarding `data:` payloads over an mpsc channel. Dropping a connection
//! drops the receiver; the reader thread notices on its next send and exits.

use std::io::{BufRead, BufReader};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread;

use bazaar_session::{PushConnection, PushTransport, SessionError, StatsRecord};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ApiError;

/// Envelope the server wraps single-string payloads in.
#[derive(Deserialize)]
struct Envelope {
    data: String,
}

/// SSE-backed [`PushTransport`]. Streams must outlive any request timeout,
/// so this holds its own client built without one.
pub struct SsePushTransport {
    stream_client: Client,
    post_client: Client,
    base_url: String,
}

impl SsePushTransport {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let stream_client = Client::builder()
            .timeout(None)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let post_client = Client::builder()
            .timeout(crate::client::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            stream_client,
            post_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn open_stream(&self, path: &str) -> Result<SseConnection, ApiError> {
        let response = self
            .stream_client
            .get(format!("{}{path}", self.base_url))
            .header(ACCEPT, "text/event-stream")
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.status().is_success() {
            return Err(ApiError::Network(format!(
                "stream request failed with status {}",
                response.status()
            )));
        }
        let (tx, rx) = channel();
        let alive = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&alive);
        let endpoint = path.to_string();
        thread::spawn(move || {
            read_stream(response, &tx, &endpoint);
            flag.store(false, Ordering::SeqCst);
        });
        Ok(SseConnection { events: rx, alive })
    }

    /// Open the statistics stream. Unlike notification streams this is not
    /// keyed by identity; malformed records are skipped.
    pub fn connect_stats(&self) -> Result<StatsConnection, ApiError> {
        let inner = self.open_stream("/stats")?;
        Ok(StatsConnection { inner })
    }
}

impl PushTransport for SsePushTransport {
    fn connect(&self, username: &str) -> Result<Box<dyn PushConnection>, SessionError> {
        let connection = self
            .open_stream(&format!("/{username}"))
            .map_err(SessionError::from)?;
        Ok(Box::new(connection))
    }

    fn register(&self, username: &str) -> Result<(), SessionError> {
        let response = self
            .post_client
            .post(format!("{}/accept", self.base_url))
            .json(&serde_json::json!({ "data": username }))
            .send()
            .map_err(|e| SessionError::Transport(e.to_string()))?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(SessionError::Transport(format!(
                "registration failed with status {}",
                response.status()
            )))
        }
    }
}

/// One live SSE stream. Payloads are the decoded `data:` strings.
pub struct SseConnection {
    events: Receiver<String>,
    alive: Arc<AtomicBool>,
}

impl PushConnection for SseConnection {
    fn try_recv(&mut self) -> Option<String> {
        match self.events.try_recv() {
            Ok(payload) => Some(payload),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.alive.store(false, Ordering::SeqCst);
                None
            }
        }
    }

    fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }
}

/// The stats stream, decoding each event into a [`StatsRecord`].
pub struct StatsConnection {
    inner: SseConnection,
}

impl StatsConnection {
    pub fn try_recv(&mut self) -> Option<StatsRecord> {
        while let Some(payload) = self.inner.try_recv() {
            match serde_json::from_str(&payload) {
                Ok(record) => return Some(record),
                Err(e) => warn!(error = %e, "skipping malformed stats record"),
            }
        }
        None
    }

    pub fn is_alive(&self) -> bool {
        self.inner.is_alive()
    }
}

/// Read `data:` lines off the event stream until it closes or the receiving
/// side goes away.
fn read_stream(response: reqwest::blocking::Response, tx: &Sender<String>, endpoint: &str) {
    let reader = BufReader::new(response);
    for line in reader.lines() {
        let Ok(line) = line else {
            break;
        };
        let Some(data) = line.strip_prefix("data:") else {
            continue;
        };
        let data = data.trim();
        if data.is_empty() {
            continue;
        }
        // Single-string payloads arrive wrapped as {"data": "..."}; anything
        // else passes through verbatim for the consumer to decode.
        let payload = match serde_json::from_str::<Envelope>(data) {
            Ok(envelope) => envelope.data,
            Err(_) => data.to_string(),
        };
        if tx.send(payload).is_err() {
            debug!(endpoint, "push consumer gone, closing stream");
            break;
        }
    }
    debug!(endpoint, "push stream ended");
}
