//! Operations on the session's user deck.

use tracing::debug;

use crate::domain::card_set::initialize;
use crate::domain::snapshot::SessionSnapshot;
use crate::domain::user_deck::{UserDeck, UserDeckSlot};
use crate::domain::user_deck_rules;
use crate::error::AppError;

/// User deck service - manages the bounded card selection and its total.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserDeckService;

impl UserDeckService {
    pub fn new() -> Self {
        Self
    }

    pub fn list(&self, snapshot: &SessionSnapshot) -> Result<UserDeck, AppError> {
        user_deck_rules::validate_list(snapshot)?;
        Ok(snapshot.user_deck.clone().unwrap_or_default())
    }

    pub fn create_deck(&self, mut snapshot: SessionSnapshot) -> Result<SessionSnapshot, AppError> {
        user_deck_rules::validate_create(&snapshot)?;
        snapshot.user_deck = Some(UserDeck::new());
        debug!("User deck created");
        Ok(snapshot)
    }

    /// Append `card_name` at the next fresh slot, with the power it has in
    /// the compiled deck right now.
    pub fn append_card(
        &self,
        snapshot: SessionSnapshot,
        card_name: Option<&str>,
    ) -> Result<SessionSnapshot, AppError> {
        let mut snapshot = initialize(snapshot);
        user_deck_rules::validate_append(&snapshot, card_name)?;

        let compiled = snapshot.compiled_deck();
        if let (Some(card_name), Some(deck)) = (card_name, snapshot.user_deck.as_mut()) {
            let power = compiled.get(card_name).unwrap_or_default();
            let slot = deck.push(UserDeckSlot::new(card_name, power));
            debug!(
                card = card_name,
                slot,
                total_power = deck.total_power(),
                "Card added to user deck"
            );
        }
        Ok(snapshot)
    }

    /// Clear the slot at `slot_id`. Other slots keep their indices.
    pub fn remove_card(
        &self,
        mut snapshot: SessionSnapshot,
        slot_id: Option<i64>,
    ) -> Result<SessionSnapshot, AppError> {
        user_deck_rules::validate_remove(&snapshot, slot_id)?;

        let id = slot_id.and_then(|id| usize::try_from(id).ok());
        if let (Some(id), Some(deck)) = (id, snapshot.user_deck.as_mut()) {
            deck.clear(id);
            debug!(slot = id, total_power = deck.total_power(), "Card removed from user deck");
        }
        Ok(snapshot)
    }
}
