//! Strategy trait and the uniform-random policy.
//!
//! Strategies are pure over `(session, player, rng)`: they only read the
//! session and draw randomness from the generator they are handed. Every
//! action they return comes from `legal_actions`, so the engine rejecting
//! one is a bug.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Gem, GemTokens, PlayerId};
use crate::error::{AiError, DiscardError};
use crate::rules::{legal_actions, TurnAction};
use crate::session::Session;

use super::greedy::{GreedyConfig, GreedyStrategy};

/// A decision policy for one seat.
pub trait Strategy: Send + Sync {
    /// Pick the action `player` takes on their turn.
    fn choose_action(
        &self,
        session: &Session,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Result<TurnAction, AiError>;

    /// Pick the tokens `player` gives back when over the cap.
    fn choose_discard(
        &self,
        session: &Session,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Result<GemTokens, AiError>;
}

/// Available strategies, for configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Random,
    Greedy,
}

impl StrategyKind {
    /// Build a strategy with default settings.
    #[must_use]
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy),
            StrategyKind::Greedy => Box::new(GreedyStrategy::new(GreedyConfig::default())),
        }
    }
}

/// Legal actions for `player`.
pub(crate) fn actions_for(session: &Session, player: PlayerId) -> Result<Vec<TurnAction>, AiError> {
    if session.current_player != player {
        return Err(AiError::NotYourTurn(player));
    }
    let actions = legal_actions(session);
    if actions.is_empty() {
        return Err(AiError::NoLegalActions(player));
    }
    Ok(actions)
}

/// Uniform choice over the legal actions.
pub fn choose_random_action(
    session: &Session,
    player: PlayerId,
    rng: &mut GameRng,
) -> Result<TurnAction, AiError> {
    let actions = actions_for(session, player)?;
    rng.choose(&actions)
        .cloned()
        .ok_or(AiError::NoLegalActions(player))
}

/// Give back uniformly random held tokens until the overage is covered.
pub fn choose_random_discard(
    session: &Session,
    player: PlayerId,
    rng: &mut GameRng,
) -> Result<GemTokens, AiError> {
    let overage = session
        .pending_discard()
        .ok_or(AiError::RejectedDiscard(DiscardError::NothingPending))?;

    let mut held: Vec<Gem> = session.players[player]
        .tokens
        .iter()
        .flat_map(|(gem, count)| std::iter::repeat(gem).take(usize::from(count)))
        .collect();

    let mut bag = GemTokens::new();
    for _ in 0..overage {
        if held.is_empty() {
            break;
        }
        let i = rng.gen_range_usize(0..held.len());
        bag.add(held.swap_remove(i), 1);
    }
    Ok(bag)
}

/// Uniform-random policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn choose_action(
        &self,
        session: &Session,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Result<TurnAction, AiError> {
        choose_random_action(session, player, rng)
    }

    fn choose_discard(
        &self,
        session: &Session,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Result<GemTokens, AiError> {
        choose_random_discard(session, player, rng)
    }
}
