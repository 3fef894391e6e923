use crate::session::Session;
use async_trait::async_trait;
use readily_core::{ReadilyError, ReadilyResult};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

/// Shared handle to one session.
///
/// The mutex serializes messages of the same session: whoever holds it owns
/// the context for a whole classify-execute-write cycle.
pub type SessionHandle = Arc<Mutex<Session>>;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Creates an empty session and returns its token.
    async fn create(&self) -> ReadilyResult<String>;
    /// Fails with [`ReadilyError::SessionNotFound`] for unknown tokens.
    async fn get(&self, token: &str) -> ReadilyResult<SessionHandle>;
    /// Returns true if a session was removed.
    async fn remove(&self, token: &str) -> bool;
    async fn len(&self) -> usize;
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
    /// Drops sessions idle for longer than the configured limit. Returns the
    /// number of sessions removed.
    async fn evict_idle(&self) -> usize;
}

/// Limits applied by [`InMemorySessionStore`]. `None` means unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvictionPolicy {
    /// Sessions not fetched for this long are dropped by `evict_idle`.
    pub max_idle: Option<Duration>,
    /// Creating a session beyond this count evicts the least recently used one.
    pub max_sessions: Option<usize>,
}

impl EvictionPolicy {
    pub fn unbounded() -> Self {
        Self::default()
    }
}

struct Slot {
    handle: SessionHandle,
    last_active: Instant,
}

/// Process-lifetime session store.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Slot>>,
    policy: EvictionPolicy,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::with_policy(EvictionPolicy::unbounded())
    }

    pub fn with_policy(policy: EvictionPolicy) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            policy,
        }
    }

    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    fn evict_lru(sessions: &mut HashMap<String, Slot>, keep: usize) {
        while sessions.len() > keep {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, slot)| slot.last_active)
                .map(|(token, _)| token.clone());
            match oldest {
                Some(token) => {
                    sessions.remove(&token);
                    info!(session = %token, "Session evicted (capacity)");
                }
                None => break,
            }
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self) -> ReadilyResult<String> {
        let session = Session::new();
        let token = session.token.clone();

        let mut sessions = self.sessions.write().await;
        if let Some(max) = self.policy.max_sessions {
            Self::evict_lru(&mut sessions, max.max(1) - 1);
        }
        sessions.insert(
            token.clone(),
            Slot {
                handle: Arc::new(Mutex::new(session)),
                last_active: Instant::now(),
            },
        );
        debug!(session = %token, total = sessions.len(), "Session created");
        Ok(token)
    }

    async fn get(&self, token: &str) -> ReadilyResult<SessionHandle> {
        let mut sessions = self.sessions.write().await;
        let slot = sessions
            .get_mut(token)
            .ok_or_else(|| ReadilyError::SessionNotFound(token.to_string()))?;
        slot.last_active = Instant::now();
        Ok(slot.handle.clone())
    }

    async fn remove(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn evict_idle(&self) -> usize {
        let Some(max_idle) = self.policy.max_idle else {
            return 0;
        };
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        let now = Instant::now();
        sessions.retain(|_, slot| now.duration_since(slot.last_active) < max_idle);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(evicted, remaining = sessions.len(), "Idle sessions evicted");
        }
        evicted
    }
}
