//! Sessions and the process-wide per-session stores.
//!
//! A [`StreamableHttpSession`] is the handle the engine sees for one HTTP
//! interaction. For POST it is ephemeral and lives only as long as the
//! request handler; for GET it is registered with the engine for the
//! lifetime of the listening stream. Session-scoped state that must outlive
//! a single request (tool overrides, log levels, request counters) lives in
//! the shared stores instead, keyed by session ID.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicI64, Ordering},
    },
};

use parking_lot::RwLock;
use tokio::sync::mpsc;

use crate::model::{JsonRpcNotification, LoggingLevel, Tool};

pub type SessionId = Arc<str>;

/// Bound of the producer-to-session notification channel.
pub const NOTIFICATION_CHANNEL_CAPACITY: usize = 100;

/// Per-session tool overrides. Setting replaces the whole map for that
/// session; reading clones it.
#[derive(Default)]
pub struct SessionToolStore {
    tools: RwLock<HashMap<String, HashMap<String, Tool>>>,
}

impl SessionToolStore {
    pub fn get(&self, session_id: &str) -> Option<HashMap<String, Tool>> {
        self.tools.read().get(session_id).cloned()
    }

    pub fn set(&self, session_id: &str, tools: HashMap<String, Tool>) {
        self.tools.write().insert(session_id.to_owned(), tools);
    }

    pub fn remove(&self, session_id: &str) {
        self.tools.write().remove(session_id);
    }
}

/// Per-session logging thresholds. Missing entries read as
/// [`LoggingLevel::Error`].
#[derive(Default)]
pub struct SessionLogStore {
    levels: RwLock<HashMap<String, LoggingLevel>>,
}

impl SessionLogStore {
    pub fn get(&self, session_id: &str) -> LoggingLevel {
        self.levels
            .read()
            .get(session_id)
            .copied()
            .unwrap_or(LoggingLevel::Error)
    }

    pub fn set(&self, session_id: &str, level: LoggingLevel) {
        self.levels.write().insert(session_id.to_owned(), level);
    }

    pub fn remove(&self, session_id: &str) {
        self.levels.write().remove(session_id);
    }
}

/// Monotonic request-ID counters, one per session, created on first use.
#[derive(Default)]
pub struct SessionRequestIdStore {
    counters: RwLock<HashMap<String, Arc<AtomicI64>>>,
}

impl SessionRequestIdStore {
    /// Increments the session's counter and returns the new value. The
    /// first call for a session yields 1.
    pub fn next(&self, session_id: &str) -> i64 {
        let counter = self.counters.read().get(session_id).cloned();
        let counter = match counter {
            Some(counter) => counter,
            None => self
                .counters
                .write()
                .entry(session_id.to_owned())
                .or_default()
                .clone(),
        };
        counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn remove(&self, session_id: &str) {
        self.counters.write().remove(session_id);
    }
}

/// The session handle passed to the engine.
///
/// Construction hands back the receiving half of the notification channel
/// separately, so exactly one consumer (the active HTTP handler) can exist
/// at a time; the session itself only carries the producer side.
pub struct StreamableHttpSession {
    session_id: SessionId,
    params: HashMap<String, String>,
    notification_tx: mpsc::Sender<JsonRpcNotification>,
    upgrade_to_sse: AtomicBool,
    tools: Arc<SessionToolStore>,
    log_levels: Arc<SessionLogStore>,
}

impl StreamableHttpSession {
    pub fn new(
        session_id: SessionId,
        params: HashMap<String, String>,
        tools: Arc<SessionToolStore>,
        log_levels: Arc<SessionLogStore>,
    ) -> (Self, mpsc::Receiver<JsonRpcNotification>) {
        let (notification_tx, notification_rx) = mpsc::channel(NOTIFICATION_CHANNEL_CAPACITY);
        let session = Self {
            session_id,
            params,
            notification_tx,
            upgrade_to_sse: AtomicBool::new(false),
            tools,
            log_levels,
        };
        (session, notification_rx)
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Query parameters of the triggering request, first value per name.
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Producer side of the notification channel. Sends block once the
    /// channel holds [`NOTIFICATION_CHANNEL_CAPACITY`] undelivered items.
    pub fn notification_sender(&self) -> mpsc::Sender<JsonRpcNotification> {
        self.notification_tx.clone()
    }

    /// Sessions here need no handshake bookkeeping; they are born
    /// initialized.
    pub fn initialized(&self) -> bool {
        true
    }

    pub fn log_level(&self) -> LoggingLevel {
        self.log_levels.get(&self.session_id)
    }

    pub fn set_log_level(&self, level: LoggingLevel) {
        self.log_levels.set(&self.session_id, level);
    }

    pub fn session_tools(&self) -> Option<HashMap<String, Tool>> {
        self.tools.get(&self.session_id)
    }

    pub fn set_session_tools(&self, tools: HashMap<String, Tool>) {
        self.tools.set(&self.session_id, tools);
    }

    /// Force the POST reply into event-stream framing even if no
    /// notification has been emitted yet.
    pub fn upgrade_to_sse_when_receive_notification(&self) {
        self.upgrade_to_sse.store(true, Ordering::Release);
    }

    pub(crate) fn upgrade_requested(&self) -> bool {
        self.upgrade_to_sse.load(Ordering::Acquire)
    }
}
