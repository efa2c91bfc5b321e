//! The turn engine.
//!
//! Each turn flows through:
//! - `validate`: pure legality check
//! - `execute`: token / market / reserve mutations
//! - `nobles`: at most one noble visit
//! - `discard`: token-cap sub-step
//! - `lifecycle`: turn advance and endgame
//!
//! `engine::execute_turn` and `engine::discard_tokens` tie them together;
//! `legal::legal_actions` and `query` are the read-only surface the AI and
//! UI build on.

pub mod action;
pub mod discard;
pub mod engine;
pub mod execute;
pub mod legal;
pub mod lifecycle;
pub mod nobles;
pub mod query;
pub mod validate;

pub use action::{ReserveTarget, TurnAction, TurnResult};
pub use discard::{overage, validate_discard};
pub use engine::{discard_tokens, execute_turn};
pub use legal::legal_actions;
pub use nobles::qualifying_noble;
pub use query::{
    bonuses, can_afford, effective_cost, gold_shortfall, is_game_over, noble_qualifies, payment_for,
    prestige, winner_index,
};
pub use validate::validate_action;
