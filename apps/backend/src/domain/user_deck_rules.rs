//! Preconditions for user-deck operations.

use crate::domain::snapshot::SessionSnapshot;
use crate::domain::user_deck::{UserDeck, CARDS_IN_DECK_LIMIT, CARD_INSTANCES_ALLOWED};
use crate::errors::domain::{DomainError, ValidationKind};

pub fn validate_list(snapshot: &SessionSnapshot) -> Result<(), DomainError> {
    require_deck(snapshot).map(|_| ())
}

/// An existing deck is never overwritten.
pub fn validate_create(snapshot: &SessionSnapshot) -> Result<(), DomainError> {
    if snapshot.user_deck.is_some() {
        return Err(DomainError::validation(
            ValidationKind::DeckExists,
            "Deck already exists.",
        ));
    }
    Ok(())
}

/// Checks, in order: deck exists, card name given, card is in the compiled
/// deck, deck has room, card is not already used the maximum number of times.
pub fn validate_append(
    snapshot: &SessionSnapshot,
    card_name: Option<&str>,
) -> Result<(), DomainError> {
    let deck = require_deck(snapshot)?;
    let Some(card_name) = card_name else {
        return Err(DomainError::validation(
            ValidationKind::MissingParameter,
            "Parameter card_name must be present.",
        ));
    };
    if !snapshot.compiled_deck().contains(card_name) {
        return Err(DomainError::validation(
            ValidationKind::CardNotFound,
            "Card does not exist in the main deck.",
        ));
    }
    if deck.len() >= CARDS_IN_DECK_LIMIT {
        return Err(DomainError::validation(
            ValidationKind::DeckFull,
            format!("There can not be more than {CARDS_IN_DECK_LIMIT} cards in the deck."),
        ));
    }
    if deck.count_of(card_name) >= CARD_INSTANCES_ALLOWED {
        return Err(DomainError::validation(
            ValidationKind::CardLimitReached,
            format!("{card_name} can not be added more than twice."),
        ));
    }
    Ok(())
}

/// A missing deck reads the same as a missing slot.
pub fn validate_remove(
    snapshot: &SessionSnapshot,
    slot_id: Option<i64>,
) -> Result<(), DomainError> {
    let Some(slot_id) = slot_id else {
        return Err(DomainError::validation(
            ValidationKind::MissingParameter,
            "Parameter card_id must be present.",
        ));
    };
    let present = usize::try_from(slot_id)
        .ok()
        .zip(snapshot.user_deck.as_ref())
        .and_then(|(id, deck)| deck.slot(id))
        .is_some();
    if !present {
        return Err(DomainError::validation(
            ValidationKind::SlotNotFound,
            "Card does not exist.",
        ));
    }
    Ok(())
}

fn require_deck(snapshot: &SessionSnapshot) -> Result<&UserDeck, DomainError> {
    snapshot.user_deck.as_ref().ok_or_else(|| {
        DomainError::validation(ValidationKind::DeckMissing, "Deck does not exist.")
    })
}
