use dealer_engine::cards::{Card, Rank, Suit};
use dealer_engine::game::Game;
use dealer_engine::logger::{format_deal_id, DealRecord};
use dealer_engine::stage::Stage;

#[test]
fn deal_record_serializes_and_deserializes() {
    let rec = DealRecord {
        deal_id: "20250102-000123".to_string(),
        game_id: "table-7".to_string(),
        seed: Some(42),
        players: 2,
        stage: Stage::Flop,
        hands: vec![
            vec!["A♠".to_string(), "K♠".to_string()],
            vec!["2♦".to_string(), "7♣".to_string()],
        ],
        board: vec![
            Card {
                suit: Suit::Hearts,
                rank: Rank::Ace,
            },
            Card {
                suit: Suit::Diamonds,
                rank: Rank::Ace,
            },
            Card {
                suit: Suit::Clubs,
                rank: Rank::Ace,
            },
        ],
        winners: Some(vec![0]),
        ts: None,
        meta: None,
    };

    let s = serde_json::to_string(&rec).expect("serialize");
    let back: DealRecord = serde_json::from_str(&s).expect("deserialize");
    assert_eq!(rec, back);
}

#[test]
fn id_format_is_date_dash_sequence() {
    let id = format_deal_id("20251231", 42);
    assert_eq!(id, "20251231-000042");
}

#[test]
fn game_to_record_reflects_live_state() {
    let mut game = Game::new_with_seed("table-9", 3, 42).unwrap();
    game.deal_hands().unwrap();
    game.advance_to_flop().unwrap();

    let rec = game.to_record("20250102-000001", Some(vec![1, 2]));
    assert_eq!(rec.deal_id, "20250102-000001");
    assert_eq!(rec.game_id, "table-9");
    assert_eq!(rec.seed, Some(42));
    assert_eq!(rec.players, 3);
    assert_eq!(rec.stage, Stage::Flop);
    assert_eq!(rec.hands.len(), 3);
    assert!(rec.hands.iter().all(|h| h.len() == 2));
    assert_eq!(rec.board.len(), 3);
    assert_eq!(rec.board, game.community());
    assert_eq!(rec.winners, Some(vec![1, 2]));
}
