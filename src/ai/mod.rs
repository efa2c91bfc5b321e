//! Computer players.
//!
//! Two policies share the `Strategy` trait: uniform random and a greedy
//! heuristic. `simulate::play_game` drives a whole session with them.

pub mod greedy;
pub mod simulate;
pub mod strategy;

pub use greedy::{choose_greedy_action, choose_greedy_discard, GreedyConfig, GreedyStrategy};
pub use simulate::{play_game, play_out, GameSummary, DEFAULT_MAX_TURNS};
pub use strategy::{
    choose_random_action, choose_random_discard, RandomStrategy, Strategy, StrategyKind,
};
