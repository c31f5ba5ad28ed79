use std::sync::Arc;

use super::session_store::SessionStore;
use crate::services::{CardDeckService, UserDeckService};

/// Application state shared by all workers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Session snapshots keyed by session id
    pub sessions: Arc<SessionStore>,
    pub card_decks: CardDeckService,
    pub user_decks: UserDeckService,
}

impl AppState {
    pub fn new(sessions: SessionStore) -> Self {
        Self {
            sessions: Arc::new(sessions),
            card_decks: CardDeckService::new(),
            user_decks: UserDeckService::new(),
        }
    }

    /// State with a default-sized session store.
    pub fn for_tests() -> Self {
        Self::new(SessionStore::default())
    }
}
