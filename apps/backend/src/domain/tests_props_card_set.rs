//! Property tests for deck compilation and permanent-card protection.

use proptest::prelude::*;

use crate::domain::card_set::{compile, PERMANENT_DECK};
use crate::domain::cards::Deck;
use crate::domain::deck_rules::{validate_remove, validate_update};
use crate::domain::test_prelude;
use crate::errors::domain::ValidationKind;

fn card_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Geralt".to_string()),
        Just("Triss".to_string()),
        "[A-Z][a-z]{2,8}( [A-Z][a-z]{2,6})?",
    ]
}

fn custom_deck() -> impl Strategy<Value = Deck> {
    prop::collection::vec((card_name(), -50i64..=50), 0..12)
        .prop_map(|cards| cards.into_iter().collect())
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Every permanent card survives compilation with its own power, first
    /// and in declaration order.
    #[test]
    fn prop_compile_contains_permanent_deck(custom in custom_deck()) {
        let compiled = compile(&custom);

        for (idx, (name, power)) in PERMANENT_DECK.iter().enumerate() {
            prop_assert_eq!(compiled.get(name), Some(*power));
            prop_assert_eq!(compiled.names().nth(idx), Some(*name));
        }
        for card in &custom {
            prop_assert!(compiled.contains(&card.name));
        }
    }

    /// Names in a compiled deck are unique.
    #[test]
    fn prop_compiled_names_unique(custom in custom_deck()) {
        let compiled = compile(&custom);
        let mut names: Vec<&str> = compiled.names().collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), total);
    }

    /// Updating or removing a permanent card is rejected for every deck.
    #[test]
    fn prop_permanent_cards_are_protected(
        custom in custom_deck(),
        idx in 0usize..PERMANENT_DECK.len(),
        new_power in any::<i64>(),
    ) {
        let compiled = compile(&custom);
        let (name, _) = PERMANENT_DECK[idx];

        let update = validate_update(&compiled, Some(name), None, Some(new_power));
        let err = update.unwrap_err();
        prop_assert_eq!(err.kind(), &ValidationKind::PermanentCard);

        let remove = validate_remove(&compiled, Some(name));
        let err = remove.unwrap_err();
        prop_assert_eq!(err.kind(), &ValidationKind::PermanentCard);
    }
}
