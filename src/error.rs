//! Error types for setup, turn actions, discards and AI play.
//!
//! Every error is reported before any state changes; a failed call leaves
//! the session exactly as it was.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{CardId, Tier};
use crate::core::{Gem, PlayerId};

/// Errors from building a session.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SetupError {
    #[error("player count must be 2-4, got {0}")]
    PlayerCount(usize),

    #[error("expected {expected} player names, got {actual}")]
    NameCount { expected: usize, actual: usize },

    #[error("expected {expected} AI flags, got {actual}")]
    AiFlagCount { expected: usize, actual: usize },

    #[error("starting player {0} is not seated")]
    StartingPlayer(PlayerId),
}

/// Reasons a turn action is illegal.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ActionError {
    #[error("game is over")]
    GameOver,

    #[error("a discard of {0} tokens is pending")]
    DiscardPending(u8),

    #[error("must take between 1 and 3 colors, got {0}")]
    ColorCount(usize),

    #[error("{0} requested more than once")]
    DuplicateColor(Gem),

    #[error("gold cannot be taken directly")]
    GoldRequested,

    #[error("no {0} tokens left in supply")]
    SupplyEmpty(Gem),

    #[error("{available} colors are available, so 3 must be taken (got {requested})")]
    MustTakeThree { available: usize, requested: usize },

    #[error("taking two {gem} needs at least {needed} in supply, found {available}")]
    PairSupply { gem: Gem, needed: u8, available: u8 },

    #[error("reserve limit of {0} cards reached")]
    ReserveLimit(usize),

    #[error("{0} deck is empty")]
    EmptyDeck(Tier),

    #[error("{0} is not available")]
    UnknownCard(CardId),

    #[error("cannot afford {0}")]
    CannotAfford(CardId),
}

/// Reasons a discard is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DiscardError {
    #[error("no discard is pending")]
    NothingPending,

    #[error("must discard exactly {expected} tokens, got {actual}")]
    WrongTotal { expected: u32, actual: u32 },

    #[error("cannot discard {requested} {gem}, only {held} held")]
    Overdrawn { gem: Gem, held: u8, requested: u8 },
}

/// Errors from the AI layer.
///
/// `Rejected*` variants mean a strategy produced a move the engine refused,
/// which is a bug in the strategy rather than a recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum AiError {
    #[error("{0} has no legal actions")]
    NoLegalActions(PlayerId),

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("no strategy configured for {0}")]
    MissingStrategy(PlayerId),

    #[error("engine rejected AI action: {0}")]
    RejectedAction(#[from] ActionError),

    #[error("engine rejected AI discard: {0}")]
    RejectedDiscard(#[from] DiscardError),
}
