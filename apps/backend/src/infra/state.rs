use std::time::Duration;

use crate::config::ServerConfig;
use crate::state::app_state::AppState;
use crate::state::session_store::SessionStore;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    session_ttl: Duration,
    session_max_capacity: u64,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::from_config(&ServerConfig::default())
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            session_ttl: config.session_ttl,
            session_max_capacity: config.session_max_capacity,
        }
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    pub fn with_session_capacity(mut self, max_capacity: u64) -> Self {
        self.session_max_capacity = max_capacity;
        self
    }

    pub fn build(self) -> AppState {
        AppState::new(SessionStore::new(
            self.session_ttl,
            self.session_max_capacity,
        ))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
