use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::DealError;
use crate::logger::DealRecord;
use crate::rank::HandRanker;
use crate::stage::Stage;

/// Deal orchestrator for one community-card game.
///
/// Owns a [`Deck`] for its lifetime, the per-seat hole cards, the shared
/// community board, and the current [`Stage`]. Stage transitions are the
/// only way state mutates, and every operation either completes in full
/// or fails leaving the game untouched.
///
/// All mutating operations take `&mut self`, so a single owner (or a
/// per-game lock in a shared registry) gives the required exclusivity;
/// distinct games share nothing.
///
/// # Examples
///
/// ```
/// use dealer_engine::game::Game;
///
/// let mut game = Game::new_with_seed("table-1", 2, 42).unwrap();
/// game.deal_hands().unwrap();
/// game.advance_to_flop().unwrap();
///
/// let view = game.snapshot();
/// assert_eq!(view.community.len(), 3);
/// assert_eq!(view.remaining, 44);
/// ```
#[derive(Debug)]
pub struct Game {
    /// Opaque identifier supplied by the owning collaborator
    id: String,
    /// Number of seats (>= 2)
    players: usize,
    /// RNG seed used for the shuffle (enables deterministic replay)
    seed: u64,
    /// The deck used for dealing cards
    deck: Deck,
    /// Hole cards per seat; empty until `deal_hands`, then one pair per seat
    hands: Vec<[Card; 2]>,
    /// Community cards revealed so far (up to 5)
    community: Vec<Card>,
    /// Current stage of the reveal sequence
    stage: Stage,
}

/// Immutable view of a game for the transport collaborator.
/// Cards appear as display strings (e.g. `"A♠"`, `"10♥"`).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct StateView {
    pub game_id: String,
    /// One entry per seat, each holding that seat's hole cards;
    /// empty before the hands are dealt
    pub hands: Vec<Vec<String>>,
    pub community: Vec<String>,
    /// Count of undealt cards left in the deck
    pub remaining: usize,
    pub hands_dealt: bool,
    pub stage: Stage,
}

/// Result of ranking every seat's cards. Lower score = stronger hand;
/// `winners` holds every seat attaining the minimum score.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EvaluationView {
    pub game_id: String,
    /// Score per seat, in seat order
    pub scores: Vec<u32>,
    /// Seats tied for the strongest (minimum) score; never empty
    pub winners: Vec<usize>,
}

impl Game {
    /// Creates a game with an OS-entropy shuffle seed.
    pub fn new(id: impl Into<String>, players: usize) -> Result<Self, DealError> {
        Self::new_with_seed(id, players, rand::rng().random())
    }

    /// Creates a game with an explicit seed for deterministic replay.
    /// The deck is shuffled once, here; it is never reshuffled.
    pub fn new_with_seed(
        id: impl Into<String>,
        players: usize,
        seed: u64,
    ) -> Result<Self, DealError> {
        if players < 2 {
            return Err(DealError::InvalidPlayerCount { requested: players });
        }
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        Ok(Self {
            id: id.into(),
            players,
            seed,
            deck,
            hands: Vec::new(),
            community: Vec::with_capacity(5),
            stage: Stage::Init,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn players(&self) -> usize {
        self.players
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn hands(&self) -> &[[Card; 2]] {
        &self.hands
    }
    pub fn community(&self) -> &[Card] {
        &self.community
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Deals two hole cards to every seat, seat 0 first, each seat
    /// receiving two consecutive cards. Valid only once, from INIT.
    ///
    /// The draw is all-or-nothing: if fewer than `2 × players` cards
    /// remain, no seat receives anything.
    pub fn deal_hands(&mut self) -> Result<(), DealError> {
        self.stage.validate_advance(Stage::HandsDealt)?;
        // saturate so an absurd seat count surfaces as exhaustion, not overflow
        let requested = self.players.checked_mul(2).unwrap_or(usize::MAX);
        let cards = self.deck.deal(requested)?;
        self.hands = cards.chunks_exact(2).map(|pair| [pair[0], pair[1]]).collect();
        self.stage = Stage::HandsDealt;
        Ok(())
    }

    /// Burns one card and reveals the three flop cards.
    pub fn advance_to_flop(&mut self) -> Result<(), DealError> {
        self.advance_community(Stage::Flop, 3)
    }

    /// Burns one card and reveals the turn card.
    pub fn advance_to_turn(&mut self) -> Result<(), DealError> {
        self.advance_community(Stage::Turn, 1)
    }

    /// Burns one card and reveals the river card.
    pub fn advance_to_river(&mut self) -> Result<(), DealError> {
        self.advance_community(Stage::River, 1)
    }

    fn advance_community(&mut self, target: Stage, n: usize) -> Result<(), DealError> {
        self.stage.validate_advance(target)?;
        // burn + deal must land together; check the supply up front so a
        // failure leaves the deck untouched
        let needed = n + 1;
        let remaining = self.deck.remaining();
        if remaining < needed {
            return Err(DealError::DeckExhausted {
                requested: needed,
                remaining,
            });
        }
        self.deck.burn()?;
        let mut dealt = self.deck.deal(n)?;
        self.community.append(&mut dealt);
        self.stage = target;
        Ok(())
    }

    /// Pure, idempotent snapshot of the current deal state.
    pub fn snapshot(&self) -> StateView {
        StateView {
            game_id: self.id.clone(),
            hands: self
                .hands
                .iter()
                .map(|hand| hand.iter().map(|c| c.to_string()).collect())
                .collect(),
            community: self.community.iter().map(|c| c.to_string()).collect(),
            remaining: self.deck.remaining(),
            hands_dealt: self.stage >= Stage::HandsDealt,
            stage: self.stage,
        }
    }

    /// Ranks every seat's hole cards together with the community cards
    /// revealed so far and reports the winner set.
    ///
    /// Valid from HANDS_DEALT onward; before the river the ranker sees a
    /// partial set (2 to 6 cards). Lower score = stronger hand; every
    /// seat attaining the minimum score is a winner, ties are never
    /// broken. A ranker error surfaces as [`DealError::RankingFailure`]
    /// naming the seat.
    pub fn evaluate<R: HandRanker + ?Sized>(
        &self,
        ranker: &R,
    ) -> Result<EvaluationView, DealError> {
        if self.stage < Stage::HandsDealt {
            return Err(DealError::HandsNotDealt);
        }
        let mut scores = Vec::with_capacity(self.players);
        for (seat, hole) in self.hands.iter().enumerate() {
            let mut cards = Vec::with_capacity(2 + self.community.len());
            cards.extend_from_slice(hole);
            cards.extend_from_slice(&self.community);
            let score = ranker
                .rank(&cards)
                .map_err(|reason| DealError::RankingFailure { seat, reason })?;
            scores.push(score);
        }
        let best = scores
            .iter()
            .copied()
            .min()
            .ok_or(DealError::HandsNotDealt)?;
        let winners = scores
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score == best)
            .map(|(seat, _)| seat)
            .collect();
        Ok(EvaluationView {
            game_id: self.id.clone(),
            scores,
            winners,
        })
    }

    /// Builds a persistable record of the deal as it stands.
    pub fn to_record(
        &self,
        deal_id: impl Into<String>,
        winners: Option<Vec<usize>>,
    ) -> DealRecord {
        DealRecord {
            deal_id: deal_id.into(),
            game_id: self.id.clone(),
            seed: Some(self.seed),
            players: self.players,
            stage: self.stage,
            hands: self
                .hands
                .iter()
                .map(|hand| hand.iter().map(|c| c.to_string()).collect())
                .collect(),
            board: self.community.clone(),
            winners,
            ts: None,
            meta: None,
        }
    }
}
