//! Keyed store of engagement sessions with idle-timeout eviction.
//!
//! The registry is the only shared mutable state in the service. The
//! registry-level lock is held only for lookup/insert/delete; message
//! processing happens under the per-session mutex, so concurrent turns for
//! different sessions never block each other while turns for the same
//! session are fully serialized.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Duration;
use tokio::sync::{Mutex, RwLock};

use crate::domain::engagement::EngagementSession;
use crate::domain::foundation::Timestamp;

/// Shared handle to one session, serialized by its own mutex.
pub type SessionHandle = Arc<Mutex<EngagementSession>>;

/// In-memory session registry. State is volatile by design - nothing
/// survives a process restart.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, SessionHandle>>,
    idle_timeout: Duration,
}

impl SessionRegistry {
    /// Creates a registry evicting sessions idle longer than `idle_timeout`.
    pub fn new(idle_timeout: StdDuration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout: Duration::from_std(idle_timeout).unwrap_or_else(|_| Duration::max_value()),
        }
    }

    /// Returns the session for `session_id`, creating an empty one on first
    /// sight of the identifier. Existing sessions get their activity
    /// timestamp refreshed.
    pub async fn get_or_create(&self, session_id: &str) -> SessionHandle {
        let existing = self.sessions.read().await.get(session_id).cloned();
        if let Some(handle) = existing {
            handle.lock().await.touch();
            return handle;
        }

        let mut sessions = self.sessions.write().await;
        let handle = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                tracing::info!(session_id, "initialized new session");
                Arc::new(Mutex::new(EngagementSession::new(session_id)))
            })
            .clone();
        drop(sessions);

        handle.lock().await.touch();
        handle
    }

    /// Looks up a session without creating or touching it.
    pub async fn get(&self, session_id: &str) -> Option<SessionHandle> {
        self.sessions.read().await.get(session_id).cloned()
    }

    /// Removes sessions idle longer than the timeout, regardless of their
    /// conclusion state. Returns the number of evicted sessions.
    ///
    /// A session whose mutex is currently held is being processed and is
    /// therefore never an eviction candidate.
    pub async fn sweep_idle(&self) -> usize {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|session_id, handle| match handle.try_lock() {
            Ok(session) => {
                let keep = now.duration_since(session.last_activity_at()) <= self.idle_timeout;
                if !keep {
                    tracing::info!(session_id, "evicting idle session");
                }
                keep
            }
            Err(_) => true,
        });

        before - sessions.len()
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// True when no sessions are live.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
