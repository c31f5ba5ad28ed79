use cards_backend::domain::{compile, Deck, SessionSnapshot, PERMANENT_DECK};
use cards_backend::services::CardDeckService;
use cards_backend::ErrorCode;

fn names(deck: &Deck) -> Vec<&str> {
    deck.names().collect()
}

/// Persist each result as the next custom deck, the way the routes do.
#[test]
fn mutations_chain_through_the_persisted_deck() {
    let service = CardDeckService::new();
    let mut snapshot = SessionSnapshot::new();

    let deck = service
        .create(&snapshot.custom_deck(), Some("Some Card"), Some(5))
        .unwrap();
    snapshot.cards_deck = Some(deck);

    let deck = service
        .create(&snapshot.custom_deck(), Some("Other Card"), Some(-3))
        .unwrap();
    snapshot.cards_deck = Some(deck);

    let deck = service
        .update(&snapshot.custom_deck(), Some("Some Card"), None, Some(10))
        .unwrap();
    snapshot.cards_deck = Some(deck);

    let stored = snapshot.custom_deck();
    assert_eq!(stored.get("Geralt"), Some(10));
    assert_eq!(stored.get("Some Card"), Some(10));
    assert_eq!(stored.get("Other Card"), Some(-3));
    assert_eq!(compile(&stored), stored);
}

#[test]
fn permanent_entries_are_persisted_after_first_mutation() {
    let service = CardDeckService::new();
    let deck = service.create(&Deck::new(), Some("X"), Some(1)).unwrap();
    let permanent: Vec<&str> = PERMANENT_DECK.iter().map(|(name, _)| *name).collect();
    assert_eq!(names(&deck)[..permanent.len()], permanent[..]);
}

#[test]
fn rename_to_a_taken_name_fails() {
    let service = CardDeckService::new();
    let deck = service.create(&Deck::new(), Some("A"), Some(1)).unwrap();
    let deck = service.create(&deck, Some("B"), Some(2)).unwrap();

    let err = service.update(&deck, Some("A"), Some("B"), None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::DuplicateCard);
    assert_eq!(err.detail(), "Card with name B already present in deck.");

    let err = service
        .update(&deck, Some("A"), Some("Ciri"), None)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::DuplicateCard);
}

#[test]
fn custom_cards_page_after_permanent_ones() {
    let service = CardDeckService::new();
    let mut deck = Deck::new();
    for (name, power) in [("A", 1), ("B", 2), ("C", 3), ("D", 4)] {
        deck = service.create(&deck, Some(name), Some(power)).unwrap();
    }

    assert_eq!(names(&service.get_page(&deck, Some(2)).unwrap()), ["Triss", "Aard sign", "A"]);
    assert_eq!(names(&service.get_page(&deck, Some(3)).unwrap()), ["B", "C", "D"]);
    assert_eq!(
        service.get_page(&deck, Some(4)).unwrap_err().code(),
        ErrorCode::PageOverreached
    );
}
