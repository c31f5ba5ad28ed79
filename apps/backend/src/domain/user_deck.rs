//! The per-session user deck: a bounded, ordered selection of cards.
//!
//! Slots live in an append-only arena. Removing a slot leaves a tombstone, so
//! the index of every other slot is stable and freed indices are never handed
//! out again; new cards always land at the next fresh index.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// Maximum number of present slots in a user deck.
pub const CARDS_IN_DECK_LIMIT: usize = 10;

/// Maximum number of present slots that may reference the same card.
pub const CARD_INSTANCES_ALLOWED: usize = 2;

/// Slot index within a user deck.
pub type SlotId = usize;

/// One card reference in the user deck, with the power captured when it was
/// appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDeckSlot {
    pub card_name: String,
    pub power: i64,
}

impl UserDeckSlot {
    pub fn new(card_name: impl Into<String>, power: i64) -> Self {
        Self {
            card_name: card_name.into(),
            power,
        }
    }
}

/// Serialises as the single-entry object `{card_name: power}`.
impl Serialize for UserDeckSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.card_name, &self.power)?;
        map.end()
    }
}

/// Slot powers are `i64`; the total is kept as `i128` so ten slots of any
/// power always sum exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDeck {
    slots: Vec<Option<UserDeckSlot>>,
    total_power: i128,
}

impl UserDeck {
    /// An empty deck: no slots, total power 0.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_power(&self) -> i128 {
        self.total_power
    }

    pub fn slot(&self, id: SlotId) -> Option<&UserDeckSlot> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    /// Present slots in index order.
    pub fn slots(&self) -> impl Iterator<Item = (SlotId, &UserDeckSlot)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|s| (id, s)))
    }

    pub fn len(&self) -> usize {
        self.slots().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of present slots referencing `card_name`.
    pub fn count_of(&self, card_name: &str) -> usize {
        self.slots()
            .filter(|(_, slot)| slot.card_name == card_name)
            .count()
    }

    /// Index the next appended slot will receive.
    pub fn next_slot_id(&self) -> SlotId {
        self.slots.len()
    }

    /// Append a slot at the next fresh index and return that index.
    ///
    /// Limits are not checked here; callers validate first.
    pub fn push(&mut self, slot: UserDeckSlot) -> SlotId {
        let id = self.slots.len();
        self.slots.push(Some(slot));
        self.recompute_total();
        id
    }

    /// Clear the slot at `id`, leaving a gap. Returns the removed slot.
    pub fn clear(&mut self, id: SlotId) -> Option<UserDeckSlot> {
        let removed = self.slots.get_mut(id).and_then(Option::take);
        self.recompute_total();
        removed
    }

    fn recompute_total(&mut self) {
        self.total_power = self
            .slots()
            .map(|(_, slot)| i128::from(slot.power))
            .sum();
    }
}

struct PresentSlots<'a>(&'a UserDeck);

impl Serialize for PresentSlots<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, slot) in self.0.slots() {
            map.serialize_entry(&id, slot)?;
        }
        map.end()
    }
}

/// `{"deck": {"<slot id>": {"<card>": power}}, "total_power": n}`
impl Serialize for UserDeck {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("UserDeck", 2)?;
        st.serialize_field("deck", &PresentSlots(self))?;
        st.serialize_field("total_power", &self.total_power)?;
        st.end()
    }
}
