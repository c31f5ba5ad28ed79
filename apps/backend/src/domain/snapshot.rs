//! Per-session state threaded through every service call.

use serde::Serialize;

use crate::domain::card_set::compile;
use crate::domain::cards::Deck;
use crate::domain::user_deck::UserDeck;

/// Reserved key of the custom card deck inside a session.
pub const CARDS_DECK_KEY: &str = "cards_deck";

/// Reserved key of the user deck inside a session.
pub const USER_DECK_KEY: &str = "user_deck";

/// Everything persisted for one session.
///
/// Services never touch storage; they take a snapshot and hand back a new
/// one, which the caller persists as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Custom cards. After the first card mutation this holds the full
    /// compiled deck, permanent cards included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards_deck: Option<Deck>,
    /// Absent until the user explicitly creates a deck.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_deck: Option<UserDeck>,
}

impl SessionSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored custom cards, or an empty deck if none were stored yet.
    pub fn custom_deck(&self) -> Deck {
        self.cards_deck.clone().unwrap_or_default()
    }

    /// Permanent cards merged with the stored custom cards.
    pub fn compiled_deck(&self) -> Deck {
        self.cards_deck
            .as_ref()
            .map_or_else(|| compile(&Deck::new()), compile)
    }
}
