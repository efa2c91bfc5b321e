//! Core engine types: gems, players, RNG, configuration.
//!
//! These are the leaf building blocks every other module depends on.

pub mod config;
pub mod gems;
pub mod player;
pub mod rng;

pub use config::{RuleConfig, SessionOptions, MAX_PLAYERS, MIN_PLAYERS};
pub use gems::{Gem, GemCost, GemTokens};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
