//! Preconditions for reading and mutating the card deck.
//!
//! Every check runs before any mutation and either passes or returns the
//! validation failure that is shown to the client. Nothing here mutates.

use crate::domain::card_set::is_permanent;
use crate::domain::cards::Deck;
use crate::errors::domain::{DomainError, ValidationKind};

pub fn validate_page(page: Option<i64>) -> Result<(), DomainError> {
    match page {
        Some(page) if page > 0 => Ok(()),
        _ => Err(DomainError::validation(
            ValidationKind::InvalidPage,
            "Page can not be lesser than 1.",
        )),
    }
}

/// A page past the end of the deck is an error, not an empty result.
pub fn validate_page_result(page: &Deck) -> Result<(), DomainError> {
    if page.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::PageOverreached,
            "Page overreached.",
        ));
    }
    Ok(())
}

pub fn validate_create(
    deck: &Deck,
    name: Option<&str>,
    power: Option<i64>,
) -> Result<(), DomainError> {
    let (Some(name), Some(_)) = (name, power) else {
        return Err(DomainError::validation(
            ValidationKind::MissingParameter,
            "Parameters name and power must be present.",
        ));
    };
    if deck.contains(name) {
        return Err(already_present(name));
    }
    Ok(())
}

pub fn validate_update(
    deck: &Deck,
    name: Option<&str>,
    new_name: Option<&str>,
    new_power: Option<i64>,
) -> Result<(), DomainError> {
    let name = require_name(name)?;
    if new_name.is_none() && new_power.is_none() {
        return Err(DomainError::validation(
            ValidationKind::MissingParameter,
            "Parameters new_name or new_power must be present.",
        ));
    }
    if is_permanent(name) {
        return Err(DomainError::validation(
            ValidationKind::PermanentCard,
            format!("Card with name {name} can not be updated. It belongs to permanent deck."),
        ));
    }
    if let Some(new_name) = new_name {
        if deck.contains(new_name) {
            return Err(already_present(new_name));
        }
    }
    if !deck.contains(name) {
        return Err(DomainError::validation(
            ValidationKind::CardNotFound,
            format!("Card with name {name} not present in deck."),
        ));
    }
    Ok(())
}

pub fn validate_remove(deck: &Deck, name: Option<&str>) -> Result<(), DomainError> {
    let name = require_name(name)?;
    if is_permanent(name) {
        return Err(DomainError::validation(
            ValidationKind::PermanentCard,
            format!("Card with name {name} can not be removed from permanent deck."),
        ));
    }
    if !deck.contains(name) {
        return Err(DomainError::validation(
            ValidationKind::CardNotFound,
            format!("Card with name {name} does not exist."),
        ));
    }
    Ok(())
}

fn require_name(name: Option<&str>) -> Result<&str, DomainError> {
    name.ok_or_else(|| {
        DomainError::validation(
            ValidationKind::MissingParameter,
            "Parameter name must be present.",
        )
    })
}

fn already_present(name: &str) -> DomainError {
    DomainError::validation(
        ValidationKind::DuplicateCard,
        format!("Card with name {name} already present in deck."),
    )
}
