use thiserror::Error;

use crate::stage::Stage;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DealError {
    #[error("Invalid card value: {value}")]
    InvalidCard { value: String },
    #[error("Deck exhausted: requested {requested}, remaining {remaining}")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Invalid player count: {requested} (minimum 2)")]
    InvalidPlayerCount { requested: usize },
    #[error("Hole cards have not been dealt")]
    HandsNotDealt,
    #[error("Stage out of order: expected {expected}, requested {requested}")]
    StageOutOfOrder { expected: Stage, requested: Stage },
    #[error("Stage already complete: {stage}")]
    StageAlreadyComplete { stage: Stage },
    #[error("Ranking failed for seat {seat}: {reason}")]
    RankingFailure { seat: usize, reason: String },
}
