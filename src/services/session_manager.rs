// src/services/session_manager.rs
use std::{
    collections::HashMap,
    fmt::Debug,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::{
    sync::RwLock,
    task::JoinHandle,
    time::MissedTickBehavior,
};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct Session {
    pub username: String,
    pub last_active: Instant,
}

impl Session {
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into(), last_active: Instant::now() }
    }

    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.last_active) >= ttl
    }
}

#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl SessionManager {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    // Create an authenticated session for `username` and return its id.
    pub async fn create_session(&self, username: impl Into<String>) -> String {
        let id = Uuid::new_v4().to_string();
        let session = Session::new(username);

        let mut guard = self.inner.write().await;
        guard.insert(id.clone(), session);
        id
    }

    /// Username bound to a live session. Does not touch `last_active`.
    pub async fn get_username(&self, session_id: &str) -> Option<String> {
        let guard = self.inner.read().await;
        guard
            .get(session_id)
            .filter(|s| !s.is_expired(Instant::now(), self.ttl))
            .map(|s| s.username.clone())
    }

    /// Like `get_username`, but refreshes the session's idle timer.
    pub async fn touch(&self, session_id: &str) -> Option<String> {
        let mut guard = self.inner.write().await;
        let now = Instant::now();
        let session = guard.get_mut(session_id)?;
        if session.is_expired(now, self.ttl) {
            guard.remove(session_id);
            return None;
        }
        session.last_active = now;
        Some(session.username.clone())
    }

    /// Remove a session by id
    pub async fn remove_session(&self, session_id: &str) -> bool {
        let mut guard = self.inner.write().await;
        guard.remove(session_id).is_some()
    }

    /// Remove sessions idle longer than ttl. Returns number removed.
    pub async fn purge_expired(&self) -> usize {
        let mut guard = self.inner.write().await;
        let now = Instant::now();
        let before = guard.len();
        guard.retain(|_, s| !s.is_expired(now, self.ttl));
        before - guard.len()
    }

    /// Number of sessions
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Run `purge_expired` every `every` until the runtime shuts down.
    pub fn spawn_sweeper(&self, every: Duration) -> JoinHandle<()> {
        let sessions = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every.max(Duration::from_secs(1)));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let removed = sessions.purge_expired().await;
                if removed > 0 {
                    tracing::debug!(removed, "purged expired sessions");
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn basic_session_flow() {
        let mgr = SessionManager::new(Duration::from_secs(60));
        let sid = mgr.create_session("admin").await;
        assert!(!sid.is_empty());
        assert_eq!(mgr.get_username(&sid).await.as_deref(), Some("admin"));
        assert!(mgr.remove_session(&sid).await);
        assert_eq!(mgr.get_username(&sid).await, None);
    }

    #[tokio::test]
    async fn unknown_id_is_not_a_session() {
        let mgr = SessionManager::new(Duration::from_secs(60));
        assert_eq!(mgr.get_username("nope").await, None);
        assert_eq!(mgr.touch("nope").await, None);
        assert!(!mgr.remove_session("nope").await);
    }
}
