//! In-memory session storage.
//!
//! Each session id maps to its own `tokio::sync::Mutex<SessionSnapshot>`
//! inside a moka cache. Holding the mutex for the whole read-modify-write
//! cycle serialises requests on the same session while requests on other
//! sessions proceed in parallel. Sessions idle for longer than the TTL are
//! evicted.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tokio::sync::Mutex;
use tracing::debug;

use crate::config::ServerConfig;
use crate::domain::snapshot::SessionSnapshot;
use crate::error::AppError;

type SessionCell = Arc<Mutex<SessionSnapshot>>;

#[derive(Clone)]
pub struct SessionStore {
    cache: Cache<String, SessionCell>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("sessions", &self.cache.entry_count())
            .finish()
    }
}

impl SessionStore {
    pub fn new(idle_ttl: Duration, max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_idle(idle_ttl)
            .eviction_listener(|sid: Arc<String>, _cell, cause| {
                debug!(session = %sid, cause = ?cause, "Session evicted");
            })
            .build();
        Self { cache }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.session_ttl, config.session_max_capacity)
    }

    /// Run `f` against the session's snapshot.
    ///
    /// `f` receives a copy and returns the snapshot to keep along with the
    /// response value. The copy is written back only when `f` succeeds; on
    /// error the stored snapshot is untouched. An unknown session is stored
    /// only once `f` succeeds for it.
    pub async fn with_session<T, F>(&self, session_id: &str, f: F) -> Result<T, AppError>
    where
        F: FnOnce(SessionSnapshot) -> Result<(SessionSnapshot, T), AppError>,
    {
        if let Some(cell) = self.cache.get(session_id).await {
            let mut guard = cell.lock().await;
            let (next, value) = f(guard.clone())?;
            *guard = next;
            return Ok(value);
        }

        let (next, value) = f(SessionSnapshot::new())?;
        let cell: SessionCell = Arc::new(Mutex::new(next));
        let entry = self
            .cache
            .entry(session_id.to_string())
            .or_insert_with(async {
                debug!(session = %session_id, "Session opened");
                Arc::clone(&cell)
            })
            .await;

        // A concurrent first request stored the session meanwhile.
        if !entry.is_fresh() {
            let next = cell.lock().await.clone();
            *entry.into_value().lock().await = next;
        }
        Ok(value)
    }

    /// Current snapshot of a session, if it exists.
    pub async fn snapshot(&self, session_id: &str) -> Option<SessionSnapshot> {
        let cell = self.cache.get(session_id).await?;
        let guard = cell.lock().await;
        Some(guard.clone())
    }

    /// Approximate number of live sessions.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply pending evictions and counter updates.
    pub async fn sync(&self) {
        self.cache.run_pending_tasks().await;
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::from_config(&ServerConfig::default())
    }
}
