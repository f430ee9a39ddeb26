//! # dealer-engine: Community-Card Deal Engine Core
//!
//! The dealing core of a multi-player community-card poker service: a
//! shuffled 52-card deck with burn-card sequestration, the stage-gated
//! reveal sequence (hands, flop, turn, river), and round evaluation
//! against an injected hand-ranking capability. Transport, game registry,
//! and the ranking algorithm itself live with collaborators.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Card source with ChaCha20 shuffling and burn tracking
//! - [`stage`] - The reveal-sequence state machine and its transition table
//! - [`game`] - Deal orchestration, state snapshots, and evaluation
//! - [`rank`] - Contract for the injected hand-ranking capability
//! - [`logger`] - DealRecord serialization and JSONL deal history
//! - [`errors`] - Error types for deal operations
//!
//! ## Quick Start
//!
//! ```rust
//! use dealer_engine::game::Game;
//!
//! let mut game = Game::new("table-1", 2).expect("at least two players");
//! game.deal_hands().unwrap();
//! game.advance_to_flop().unwrap();
//! game.advance_to_turn().unwrap();
//! game.advance_to_river().unwrap();
//!
//! let view = game.snapshot();
//! assert_eq!(view.community.len(), 5);
//! assert_eq!(view.remaining, 40);
//! ```
//!
//! ## Deterministic Deals
//!
//! All deals are reproducible using seeded RNG:
//!
//! ```rust
//! use dealer_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! // deck1 and deck2 will have identical card order
//! ```
//!
//! ## Evaluation
//!
//! Ranking is an injected capability: any function over 2-7 cards that
//! returns a total-order score where **lower means stronger**. The engine
//! collects one score per seat and reports every seat tied for the
//! minimum:
//!
//! ```rust
//! use dealer_engine::cards::Card;
//! use dealer_engine::game::Game;
//!
//! let mut game = Game::new_with_seed("table-2", 3, 7).unwrap();
//! game.deal_hands().unwrap();
//!
//! // A ranker that scores every hand the same: a three-way tie.
//! let ranker = |_cards: &[Card]| -> Result<u32, String> { Ok(1) };
//! let result = game.evaluate(&ranker).unwrap();
//! assert_eq!(result.winners, vec![0, 1, 2]);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod logger;
pub mod rank;
pub mod stage;
