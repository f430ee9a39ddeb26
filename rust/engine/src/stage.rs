use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DealError;

/// One step of the fixed reveal sequence of a community-card deal.
/// Stages only move forward; a game never revisits a completed stage.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Stage {
    /// Game created, deck shuffled, nothing dealt
    Init,
    /// Two hole cards dealt to every seat
    HandsDealt,
    /// First three community cards revealed
    Flop,
    /// Fourth community card revealed
    Turn,
    /// Fifth and final community card revealed
    River,
}

impl Stage {
    /// The stage that follows this one, if any.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Init => Some(Stage::HandsDealt),
            Stage::HandsDealt => Some(Stage::Flop),
            Stage::Flop => Some(Stage::Turn),
            Stage::Turn => Some(Stage::River),
            Stage::River => None,
        }
    }

    /// Single transition table for the reveal sequence.
    ///
    /// From `self`, only the immediate successor may be requested:
    /// - a stage already reached fails with [`DealError::StageAlreadyComplete`],
    /// - any community stage requested while hole cards are undealt fails
    ///   with [`DealError::HandsNotDealt`],
    /// - skipping ahead fails with [`DealError::StageOutOfOrder`].
    pub fn validate_advance(self, requested: Stage) -> Result<(), DealError> {
        if requested <= self {
            return Err(DealError::StageAlreadyComplete { stage: requested });
        }
        if self == Stage::Init && requested != Stage::HandsDealt {
            return Err(DealError::HandsNotDealt);
        }
        match self.next() {
            Some(expected) if expected == requested => Ok(()),
            Some(expected) => Err(DealError::StageOutOfOrder {
                expected,
                requested,
            }),
            None => Err(DealError::StageAlreadyComplete { stage: requested }),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Init => "init",
            Stage::HandsDealt => "hands_dealt",
            Stage::Flop => "flop",
            Stage::Turn => "turn",
            Stage::River => "river",
        };
        f.write_str(s)
    }
}
