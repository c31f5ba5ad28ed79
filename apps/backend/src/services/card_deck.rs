//! Operations on the session's custom card deck.

use tracing::debug;

use crate::domain::card_set::{compile, PAGE_SIZE};
use crate::domain::cards::Deck;
use crate::domain::deck_rules;
use crate::error::AppError;

/// Card deck service - compiles, paginates and mutates the custom deck.
///
/// Every mutation returns the full compiled deck (permanent cards
/// included). Callers store that value as the session's new custom deck.
#[derive(Debug, Default, Clone, Copy)]
pub struct CardDeckService;

impl CardDeckService {
    pub fn new() -> Self {
        Self
    }

    /// One page of the compiled deck, `PAGE_SIZE` cards at most.
    pub fn get_page(&self, custom: &Deck, page: Option<i64>) -> Result<Deck, AppError> {
        deck_rules::validate_page(page)?;
        let page = page.unwrap_or(1);
        let offset = usize::try_from(page - 1)
            .unwrap_or(usize::MAX)
            .saturating_mul(PAGE_SIZE);

        let slice = compile(custom).slice(offset, PAGE_SIZE);
        deck_rules::validate_page_result(&slice)?;

        debug!(page, cards = slice.len(), "Deck page served");
        Ok(slice)
    }

    pub fn create(
        &self,
        custom: &Deck,
        name: Option<&str>,
        power: Option<i64>,
    ) -> Result<Deck, AppError> {
        let mut deck = compile(custom);
        deck_rules::validate_create(&deck, name, power)?;

        if let (Some(name), Some(power)) = (name, power) {
            deck.insert(name, power);
            debug!(card = name, power, "Card created");
        }
        Ok(deck)
    }

    /// Rename and/or re-power a custom card. The renamed card moves to the
    /// end of the deck.
    pub fn update(
        &self,
        custom: &Deck,
        name: Option<&str>,
        new_name: Option<&str>,
        new_power: Option<i64>,
    ) -> Result<Deck, AppError> {
        let mut deck = compile(custom);
        deck_rules::validate_update(&deck, name, new_name, new_power)?;

        if let Some(name) = name {
            if let Some(old_power) = deck.remove(name) {
                let target = new_name.unwrap_or(name);
                let power = new_power.unwrap_or(old_power);
                deck.insert(target, power);
                debug!(card = name, renamed_to = target, power, "Card updated");
            }
        }
        Ok(deck)
    }

    pub fn remove(&self, custom: &Deck, name: Option<&str>) -> Result<Deck, AppError> {
        let mut deck = compile(custom);
        deck_rules::validate_remove(&deck, name)?;

        if let Some(name) = name {
            deck.remove(name);
            debug!(card = name, "Card removed");
        }
        Ok(deck)
    }
}
