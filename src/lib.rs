//! # gem-engine
//!
//! A deterministic rules engine for the Splendor gem-trading card game,
//! with computer players built on the same public surface a UI would use.
//!
//! ## Design Principles
//!
//! 1. **Validate, then apply**: An action is checked in full before any
//!    state changes. A rejected action leaves the session untouched.
//!
//! 2. **Explicit randomness**: Every shuffle and every AI choice draws
//!    from a `GameRng` the caller hands in. Same seed, same game.
//!
//! 3. **N-Player**: 2 to 4 seats; token supply scales with the count.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Decks, purchased cards, nobles and
//!   history use `im-rs`, so cloning a session for look-ahead is cheap.
//!
//! - **Token bags**: `GemTokens` is a fixed array indexed by `Gem` that
//!   serializes as a sparse map.
//!
//! ## Modules
//!
//! - `core`: Gems, token bags, players, RNG, configuration
//! - `cards`: The 90 development cards and 10 noble tiles
//! - `session`: Session state and setup
//! - `rules`: Validation, execution, nobles, discards, turn lifecycle,
//!   legal action enumeration
//! - `ai`: Random and greedy strategies, full-game playouts
//! - `error`: Error types for every fallible operation

pub mod ai;
pub mod cards;
pub mod core;
pub mod error;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Gem, GemCost, GemTokens,
    PlayerId, PlayerMap,
    GameRng, GameRngState,
    RuleConfig, SessionOptions,
};

pub use crate::cards::{CardId, DevelopmentCard, NobleId, NobleTile, Tier};

pub use crate::session::{create_session, Phase, PlayerState, Session, TurnRecord};

pub use crate::rules::{
    discard_tokens, execute_turn, legal_actions, validate_action, validate_discard,
    ReserveTarget, TurnAction, TurnResult,
    bonuses, can_afford, is_game_over, noble_qualifies, prestige, winner_index,
};

pub use crate::ai::{
    play_game, GameSummary, GreedyConfig, GreedyStrategy, RandomStrategy, Strategy, StrategyKind,
};

pub use crate::error::{ActionError, AiError, DiscardError, SetupError};
