//! Full-game playouts driven by strategies.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{GameRng, PlayerId};
use crate::error::AiError;
use crate::rules::{discard_tokens, execute_turn, prestige, winner_index};
use crate::session::{Phase, Session};

use super::strategy::Strategy;

/// Default turn limit for a playout.
pub const DEFAULT_MAX_TURNS: u32 = 500;

/// Outcome of a playout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Winner, if the game reached `GameOver`.
    pub winner: Option<PlayerId>,

    /// Final prestige per seat.
    pub prestige: Vec<u32>,

    /// Completed turns.
    pub turns: u32,

    /// False when the playout stopped on the turn limit or a stalemate.
    pub finished: bool,
}

impl GameSummary {
    fn from_session(session: &Session) -> Self {
        Self {
            winner: winner_index(session),
            prestige: session.players.values().map(prestige).collect(),
            turns: session.turn_number,
            finished: session.phase == Phase::GameOver,
        }
    }
}

/// Play `session` to completion with one strategy per seat.
///
/// Stops early after `max_turns` completed turns, or when the player to
/// move has no legal action at all.
pub fn play_game(
    session: &mut Session,
    strategies: &[&dyn Strategy],
    rng: &mut GameRng,
    max_turns: u32,
) -> Result<GameSummary, AiError> {
    while session.phase != Phase::GameOver && session.turn_number < max_turns {
        let player = session.current_player;
        let strategy = strategies
            .get(player.index())
            .ok_or(AiError::MissingStrategy(player))?;

        let action = match strategy.choose_action(session, player, rng) {
            Ok(action) => action,
            Err(AiError::NoLegalActions(_)) => {
                warn!(player = player.index(), turn = session.turn_number, "stalemate");
                break;
            }
            Err(err) => return Err(err),
        };
        debug!(player = player.index(), %action, "ai action");

        let result = execute_turn(session, &action)?;
        if result.tokens_over_limit > 0 {
            let bag = strategy.choose_discard(session, player, rng)?;
            discard_tokens(session, &bag)?;
        }
    }
    Ok(GameSummary::from_session(session))
}

/// `play_game` with a strategy stream forked from the session's own RNG.
///
/// The whole game then depends only on the seed the session was created
/// with.
pub fn play_out(
    session: &mut Session,
    strategies: &[&dyn Strategy],
    max_turns: u32,
) -> Result<GameSummary, AiError> {
    let mut rng = session.rng_mut().fork();
    play_game(session, strategies, &mut rng, max_turns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{GreedyStrategy, RandomStrategy};
    use crate::core::SessionOptions;
    use crate::session::create_session;

    fn session(players: usize, seed: u64) -> Session {
        create_session(SessionOptions::new(players).all_ai(), GameRng::new(seed)).unwrap()
    }

    #[test]
    fn test_random_playout_is_deterministic() {
        let run = || {
            let mut s = session(3, 11);
            let strategies: [&dyn Strategy; 3] = [&RandomStrategy, &RandomStrategy, &RandomStrategy];
            play_game(&mut s, &strategies, &mut GameRng::new(99), DEFAULT_MAX_TURNS).unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_greedy_playout_summary() {
        let mut s = session(2, 7);
        let greedy = GreedyStrategy::default();
        let strategies: [&dyn Strategy; 2] = [&greedy, &greedy];
        let summary = play_game(&mut s, &strategies, &mut GameRng::new(1), DEFAULT_MAX_TURNS).unwrap();

        assert_eq!(summary.turns as usize, s.history.len());
        assert_eq!(summary.finished, summary.winner.is_some());
        if let Some(winner) = summary.winner {
            assert!(summary.prestige[winner.index()] >= 15);
        }
    }

    #[test]
    fn test_play_out_depends_only_on_session_seed() {
        let run = || {
            let mut s = session(2, 31);
            let strategies: [&dyn Strategy; 2] = [&RandomStrategy, &RandomStrategy];
            let summary = play_out(&mut s, &strategies, 60).unwrap();
            (summary, s.history)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_turn_limit() {
        let mut s = session(2, 7);
        let strategies: [&dyn Strategy; 2] = [&RandomStrategy, &RandomStrategy];
        let summary = play_game(&mut s, &strategies, &mut GameRng::new(1), 4).unwrap();

        assert!(!summary.finished);
        assert_eq!(summary.turns, 4);
        assert_eq!(summary.winner, None);
    }

    #[test]
    fn test_missing_strategy() {
        let mut s = session(3, 7);
        let strategies: [&dyn Strategy; 1] = [&RandomStrategy];
        let result = play_game(&mut s, &strategies, &mut GameRng::new(1), 10);
        assert_eq!(result, Err(AiError::MissingStrategy(PlayerId::new(1))));
    }
}
