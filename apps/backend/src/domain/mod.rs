//! Domain layer: pure card and deck logic.

pub mod card_set;
pub mod cards;
pub mod deck_rules;
pub mod snapshot;
pub mod user_deck;
pub mod user_deck_rules;

#[cfg(test)]
mod tests_card_set;
#[cfg(test)]
mod tests_props_card_set;

// Re-exports for ergonomics
pub use card_set::{compile, initialize, is_permanent, PAGE_SIZE, PERMANENT_DECK};
pub use cards::{Card, Deck};
pub use snapshot::SessionSnapshot;
pub use user_deck::{SlotId, UserDeck, UserDeckSlot, CARDS_IN_DECK_LIMIT, CARD_INSTANCES_ALLOWED};
