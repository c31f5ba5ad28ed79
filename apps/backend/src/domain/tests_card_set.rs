use crate::domain::card_set::{compile, initialize, is_permanent, permanent_deck, PERMANENT_DECK};
use crate::domain::cards::Deck;
use crate::domain::snapshot::SessionSnapshot;

fn names(deck: &Deck) -> Vec<&str> {
    deck.names().collect()
}

#[test]
fn permanent_deck_keeps_declaration_order() {
    assert_eq!(
        names(&permanent_deck()),
        ["Geralt", "Ciri", "Vesemir", "Triss", "Aard sign"]
    );
    assert_eq!(permanent_deck().get("Aard sign"), Some(0));
}

#[test]
fn is_permanent_is_exact_match() {
    assert!(is_permanent("Geralt"));
    assert!(!is_permanent("geralt"));
    assert!(!is_permanent("Some Card"));
}

#[test]
fn compile_appends_custom_cards_after_permanent_ones() {
    let custom: Deck = [("Yennefer", 8), ("Dandelion", 1)].into_iter().collect();
    let compiled = compile(&custom);

    assert_eq!(
        names(&compiled),
        ["Geralt", "Ciri", "Vesemir", "Triss", "Aard sign", "Yennefer", "Dandelion"]
    );
}

#[test]
fn compile_keeps_permanent_power_on_collision() {
    let custom: Deck = [("Geralt", -100), ("Yennefer", 8)].into_iter().collect();
    let compiled = compile(&custom);

    assert_eq!(compiled.get("Geralt"), Some(10));
    assert_eq!(compiled.len(), PERMANENT_DECK.len() + 1);
    assert_eq!(names(&compiled)[0], "Geralt");
}

#[test]
fn compile_of_a_persisted_compiled_deck_is_stable() {
    let once = compile(&[("Yennefer", 8)].into_iter().collect());
    assert_eq!(compile(&once), once);
}

#[test]
fn initialize_seeds_absent_or_empty_decks_only() {
    let seeded = initialize(SessionSnapshot::new());
    assert_eq!(seeded.cards_deck, Some(permanent_deck()));

    let emptied = initialize(SessionSnapshot {
        cards_deck: Some(Deck::new()),
        user_deck: None,
    });
    assert_eq!(emptied.cards_deck, Some(permanent_deck()));

    let custom: Deck = [("Yennefer", 8)].into_iter().collect();
    let kept = initialize(SessionSnapshot {
        cards_deck: Some(custom.clone()),
        user_deck: None,
    });
    assert_eq!(kept.cards_deck, Some(custom));

    assert_eq!(initialize(seeded.clone()), seeded);
}
