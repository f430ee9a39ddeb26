use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::DealError;

/// The card source for a single game: the 52-card universe, dealt
/// strictly from the front with no replacement, plus the burned-card
/// sequence kept out of play.
///
/// At every point in the lifecycle, {undealt} ∪ {dealt} ∪ {burned}
/// is exactly the 52-card universe.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    burned: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep generation order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            burned: Vec::new(),
            rng,
        }
    }

    /// Uniformly permutes the undealt cards. Dealt and burned cards
    /// never re-enter the deck.
    pub fn shuffle(&mut self) {
        let undealt = &mut self.cards[self.position..];
        undealt.shuffle(&mut self.rng);
    }

    /// Moves one card from the front of the undealt sequence to the
    /// burned sequence.
    pub fn burn(&mut self) -> Result<(), DealError> {
        if self.position >= self.cards.len() {
            return Err(DealError::DeckExhausted {
                requested: 1,
                remaining: 0,
            });
        }
        let c = self.cards[self.position];
        self.position += 1;
        self.burned.push(c);
        Ok(())
    }

    /// Removes and returns the first `n` undealt cards, preserving their
    /// order. All-or-nothing: on exhaustion no card is removed.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DealError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(DealError::DeckExhausted {
                requested: n,
                remaining,
            });
        }
        let dealt = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(dealt)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Burned cards, in burn order. Never part of play or display.
    pub fn burned(&self) -> &[Card] {
        &self.burned
    }
}
