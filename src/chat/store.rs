use super::session::ChatSession;
use crate::{Error, Result, assistant::ProductContext};
use std::{collections::HashMap, sync::Arc, time::Duration};
use tokio::{
    sync::{Mutex, RwLock},
    time::Instant,
};
use tracing::{debug, info};
use uuid::Uuid;

pub type SharedSession = Arc<Mutex<ChatSession>>;

pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

struct Entry {
    session: SharedSession,
    last_active: Instant,
}

/// In-memory chat sessions keyed by UUID. Each session has its own lock so
/// sessions progress independently. Sessions untouched for longer than the
/// idle timeout are dropped, since a closed browser widget never says goodbye.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Entry>>,
    idle_timeout: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_TIMEOUT)
    }
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    pub async fn create(&self, product: ProductContext) -> (String, SharedSession) {
        let session_id = Uuid::new_v4().to_string();
        let session = Arc::new(Mutex::new(ChatSession::new(product)));
        let now = Instant::now();

        let mut sessions = self.sessions.write().await;
        let expired = Self::prune_locked(&mut sessions, now, self.idle_timeout);
        if expired > 0 {
            debug!("Dropped {} idle chat sessions", expired);
        }
        sessions.insert(
            session_id.clone(),
            Entry {
                session: session.clone(),
                last_active: now,
            },
        );

        info!("Created chat session {}", session_id);
        (session_id, session)
    }

    /// Looks a session up and marks it active. An expired session is removed
    /// and reported as not found.
    pub async fn get(&self, session_id: &str) -> Result<SharedSession> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let expired = match sessions.get_mut(session_id) {
            Some(entry) if now.duration_since(entry.last_active) <= self.idle_timeout => {
                entry.last_active = now;
                return Ok(entry.session.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            sessions.remove(session_id);
            debug!("Chat session {} expired", session_id);
        }

        Err(Error::SessionNotFound {
            session_id: session_id.to_string(),
        })
    }

    pub async fn remove(&self, session_id: &str) -> Result<()> {
        match self.sessions.write().await.remove(session_id) {
            Some(_) => {
                debug!("Removed chat session {}", session_id);
                Ok(())
            }
            None => Err(Error::SessionNotFound {
                session_id: session_id.to_string(),
            }),
        }
    }

    /// Drops every session idle for longer than the timeout; returns how many.
    pub async fn prune_expired(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        Self::prune_locked(&mut sessions, Instant::now(), self.idle_timeout)
    }

    /// Periodically prunes idle sessions until the store is dropped.
    pub fn spawn_reaper(self: &Arc<Self>, every: Duration) -> tokio::task::JoinHandle<()> {
        let weak = Arc::downgrade(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            interval.tick().await;
            loop {
                interval.tick().await;
                let Some(store) = weak.upgrade() else { break };
                let expired = store.prune_expired().await;
                if expired > 0 {
                    info!("Dropped {} idle chat sessions", expired);
                }
            }
        })
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn prune_locked(sessions: &mut HashMap<String, Entry>, now: Instant, idle: Duration) -> usize {
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_active) <= idle);
        before - sessions.len()
    }
}
