//! Turn lifecycle and endgame control.
//!
//! ## Phases
//!
//! `Playing -> FinalRound -> GameOver`
//!
//! - The first completed turn that leaves its player at or above the
//!   trigger prestige moves the game to `FinalRound` and records that
//!   player.
//! - During `FinalRound` play continues around the table; the game ends at
//!   the moment the next player to act would be the starting player, so
//!   every seat gets the same number of turns.

use tracing::{debug, info};

use crate::cards::NobleId;
use crate::core::GemTokens;
use crate::session::{Phase, Session, TurnRecord};

use super::action::TurnAction;
use super::query::{prestige, ranked_leader};

/// Finish the current player's turn and advance.
///
/// Returns `true` when this turn ended the game.
pub(crate) fn complete_turn(
    session: &mut Session,
    action: TurnAction,
    noble: Option<NobleId>,
    discarded: GemTokens,
) -> bool {
    let player = session.current_player;
    session.turn_number += 1;
    session.history.push_back(TurnRecord {
        player,
        action,
        turn: session.turn_number,
        noble,
        discarded,
    });

    let score = prestige(&session.players[player]);
    if session.phase == Phase::Playing && score >= session.rules.trigger_prestige {
        session.phase = Phase::FinalRound;
        session.trigger_player = Some(player);
        debug!(
            player = player.index(),
            prestige = score,
            starting_player = session.starting_player.index(),
            "final round triggered"
        );
    }

    let next = player.next(session.player_count());
    if session.phase == Phase::FinalRound && next == session.starting_player {
        session.phase = Phase::GameOver;
        info!(
            turns = session.turn_number,
            winner = ?ranked_leader(session),
            "game over"
        );
        return true;
    }

    session.current_player = next;
    false
}
