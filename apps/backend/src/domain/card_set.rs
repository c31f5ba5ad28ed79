//! The permanent card set and the rules for merging it with a session's
//! custom cards.

use crate::domain::cards::Deck;
use crate::domain::snapshot::SessionSnapshot;

/// Cards per page when listing the compiled deck.
pub const PAGE_SIZE: usize = 3;

/// Cards every session starts with, in listing order. Never persisted as a
/// source of truth and never mutated.
pub const PERMANENT_DECK: [(&str, i64); 5] = [
    ("Geralt", 10),
    ("Ciri", 9),
    ("Vesemir", 5),
    ("Triss", 3),
    ("Aard sign", 0),
];

pub fn permanent_deck() -> Deck {
    PERMANENT_DECK.into_iter().collect()
}

pub fn is_permanent(name: &str) -> bool {
    PERMANENT_DECK.iter().any(|(permanent, _)| *permanent == name)
}

/// Merge the permanent deck with `custom`.
///
/// Permanent cards come first in declaration order, followed by custom cards
/// in their own order. A custom entry that collides with a permanent name is
/// ignored: the permanent power always wins.
pub fn compile(custom: &Deck) -> Deck {
    let mut deck = permanent_deck();
    for card in custom.iter().filter(|c| !is_permanent(&c.name)) {
        deck.insert(card.name.clone(), card.power);
    }
    deck
}

/// Seed the snapshot's card deck with the permanent cards when it is absent
/// or empty. Idempotent.
pub fn initialize(mut snapshot: SessionSnapshot) -> SessionSnapshot {
    if snapshot.cards_deck.as_ref().map_or(true, Deck::is_empty) {
        snapshot.cards_deck = Some(compile(&Deck::new()));
    }
    snapshot
}
