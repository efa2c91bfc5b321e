//! Session data model and setup.
//!
//! A `Session` is created once by `create_session`, mutated in place by the
//! turn engine in `rules`, and dropped when the game ends.

pub mod setup;
pub mod state;

pub use setup::create_session;
pub use state::{Market, Phase, PlayerState, Session, TierRow, TurnRecord, MARKET_SLOTS};
