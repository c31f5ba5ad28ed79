//! Core card types: Card and the insertion-ordered Deck.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A named card with an integer power. Power may be zero or negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    pub name: String,
    pub power: i64,
}

impl Card {
    pub fn new(name: impl Into<String>, power: i64) -> Self {
        Self {
            name: name.into(),
            power,
        }
    }
}

/// Name-keyed collection of cards that remembers insertion order.
///
/// Names are unique. Re-inserting an existing name replaces its power in
/// place; removing a card keeps the relative order of the others. On the wire
/// a deck is a JSON object `{name: power}` in deck order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.position(name).map(|idx| self.cards[idx].power)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Insert `name -> power`, appending when the name is new.
    pub fn insert(&mut self, name: impl Into<String>, power: i64) {
        let name = name.into();
        match self.position(&name) {
            Some(idx) => self.cards[idx].power = power,
            None => self.cards.push(Card { name, power }),
        }
    }

    /// Remove a card by name, returning its power if it was present.
    pub fn remove(&mut self, name: &str) -> Option<i64> {
        self.position(name).map(|idx| self.cards.remove(idx).power)
    }

    /// Up to `len` cards starting at `offset`, in deck order.
    pub fn slice(&self, offset: usize, len: usize) -> Deck {
        Deck {
            cards: self.cards.iter().skip(offset).take(len).cloned().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(|c| c.name.as_str())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.name == name)
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Deck {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut deck = Deck::new();
        for (name, power) in iter {
            deck.insert(name, power);
        }
        deck
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl Serialize for Deck {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cards.len()))?;
        for card in &self.cards {
            map.serialize_entry(&card.name, &card.power)?;
        }
        map.end()
    }
}

struct DeckVisitor;

impl<'de> Visitor<'de> for DeckVisitor {
    type Value = Deck;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping card names to integer powers")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut deck = Deck::new();
        while let Some((name, power)) = access.next_entry::<String, i64>()? {
            deck.insert(name, power);
        }
        Ok(deck)
    }
}

impl<'de> Deserialize<'de> for Deck {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DeckVisitor)
    }
}
