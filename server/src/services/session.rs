//! In-memory session management.
//!
//! ARCHITECTURE
//! ============
//! Browsers hold an opaque random token in an HttpOnly cookie; the store maps
//! it to a student id and an expiry instant. Sessions do not survive a
//! restart.
//!
//! TRADE-OFFS
//! ==========
//! Expired entries are dropped lazily on lookup and by a periodic purge task,
//! so validation never has to scan the whole map.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::sync::RwLock;

use super::directory::bytes_to_hex;

/// How often the background task drops expired sessions.
pub const PURGE_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Upper bound on a session lifetime; longer TTLs are clamped to it.
pub const MAX_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[derive(Debug, Clone)]
struct Session {
    student_id: String,
    expires_at: Instant,
}

impl Session {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

/// Token -> session map shared across handlers.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { sessions: Arc::new(RwLock::new(HashMap::new())), ttl: ttl.min(MAX_TTL) }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a session for the given student, returning the token.
    pub async fn create(&self, student_id: &str) -> String {
        let token = generate_token();
        let session = Session { student_id: student_id.to_owned(), expires_at: Instant::now() + self.ttl };
        self.sessions.write().await.insert(token.clone(), session);
        token
    }

    /// Resolve a token to its student id. Expired sessions are removed.
    pub async fn validate(&self, token: &str) -> Option<String> {
        if token.is_empty() {
            return None;
        }
        let now = Instant::now();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(s) if s.is_live(now) => return Some(s.student_id.clone()),
                Some(_) => {}
                None => return None,
            }
        }
        self.sessions.write().await.remove(token);
        None
    }

    /// Delete a session by token. Returns whether it existed.
    pub async fn delete(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    /// Drop every expired session, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.is_live(now));
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Spawn the periodic purge loop.
pub fn spawn_purge_task(store: SessionStore) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let removed = store.purge_expired().await;
            if removed > 0 {
                tracing::debug!(removed, "purged expired sessions");
            }
        }
    })
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
