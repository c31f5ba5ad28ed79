//! Service layer: the public card and user-deck operations.
//!
//! Services are pure over snapshots. They never touch session storage; the
//! HTTP boundary loads a snapshot, calls a service and persists the result.

pub mod card_deck;
pub mod user_deck;

pub use card_deck::CardDeckService;
pub use user_deck::UserDeckService;
