use dealer_engine::errors::DealError;
use dealer_engine::game::Game;
use dealer_engine::stage::Stage;

#[test]
fn fewer_than_two_players_is_rejected() {
    assert_eq!(
        Game::new("g-0", 0).unwrap_err(),
        DealError::InvalidPlayerCount { requested: 0 }
    );
    assert_eq!(
        Game::new("g-1", 1).unwrap_err(),
        DealError::InvalidPlayerCount { requested: 1 }
    );
}

#[test]
fn new_game_starts_empty_with_full_deck() {
    let game = Game::new("g-2", 2).expect("two players is valid");
    assert_eq!(game.id(), "g-2");
    assert_eq!(game.players(), 2);
    assert!(game.hands().is_empty());
    assert!(game.community().is_empty());
    assert_eq!(game.deck_remaining(), 52);

    let view = game.snapshot();
    assert!(!view.hands_dealt);
    assert!(view.hands.is_empty());
    assert!(view.community.is_empty());
    assert_eq!(view.remaining, 52);
}

#[test]
fn deal_hands_gives_each_seat_two_cards_in_seat_order() {
    let mut game = Game::new_with_seed("g-9", 9, 11).unwrap();
    game.deal_hands().unwrap();
    assert_eq!(game.hands().len(), 9);
    assert_eq!(game.deck_remaining(), 52 - 18);
    let view = game.snapshot();
    assert!(view.hands_dealt);
    assert!(view.hands.iter().all(|h| h.len() == 2));
}

#[test]
fn deal_hands_checks_supply_before_dealing() {
    // 27 seats want 54 cards from a 52-card deck
    let mut game = Game::new_with_seed("g-27", 27, 6).unwrap();
    assert_eq!(
        game.deal_hands().unwrap_err(),
        DealError::DeckExhausted {
            requested: 54,
            remaining: 52
        }
    );
    // the failed deal assigned nothing and moved nothing
    assert_eq!(game.stage(), Stage::Init);
    assert!(game.hands().is_empty());
    assert_eq!(game.deck_remaining(), 52);
}

#[test]
fn community_stage_checks_supply_before_burning() {
    // 25 seats leave exactly 2 undealt cards; the flop needs burn + 3
    let mut game = Game::new_with_seed("g-25", 25, 6).unwrap();
    game.deal_hands().unwrap();
    assert_eq!(game.deck_remaining(), 2);
    assert_eq!(
        game.advance_to_flop().unwrap_err(),
        DealError::DeckExhausted {
            requested: 4,
            remaining: 2
        }
    );
    assert_eq!(game.stage(), Stage::HandsDealt);
    assert!(game.community().is_empty());
    assert_eq!(game.deck_remaining(), 2);
}

#[test]
fn huge_seat_count_fails_as_exhaustion_not_overflow() {
    let mut game = Game::new_with_seed("g-max", usize::MAX, 6).unwrap();
    assert_eq!(
        game.deal_hands().unwrap_err(),
        DealError::DeckExhausted {
            requested: usize::MAX,
            remaining: 52
        }
    );
    assert_eq!(game.stage(), Stage::Init);
    assert!(game.hands().is_empty());
}

#[test]
fn same_seed_produces_identical_deals() {
    let mut g1 = Game::new_with_seed("a", 2, 42).unwrap();
    let mut g2 = Game::new_with_seed("a", 2, 42).unwrap();
    g1.deal_hands().unwrap();
    g2.deal_hands().unwrap();
    g1.advance_to_flop().unwrap();
    g2.advance_to_flop().unwrap();
    assert_eq!(g1.snapshot(), g2.snapshot());
    assert_eq!(g1.hands(), g2.hands());
}

#[test]
fn snapshot_is_idempotent() {
    let mut game = Game::new_with_seed("g-3", 3, 5).unwrap();
    game.deal_hands().unwrap();
    game.advance_to_flop().unwrap();
    let a = game.snapshot();
    let b = game.snapshot();
    assert_eq!(a, b);
}
