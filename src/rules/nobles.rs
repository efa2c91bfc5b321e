//! Noble visits.
//!
//! After every action the acting player is checked against the unclaimed
//! nobles in their setup order. The first tile they qualify for is awarded;
//! any other tile that also qualifies stays in the pool for a later turn.

use tracing::debug;

use crate::cards::NobleTile;
use crate::core::PlayerId;
use crate::session::Session;

use super::query::{bonuses, noble_qualifies};

/// First unclaimed noble the player qualifies for, by pool position.
#[must_use]
pub fn qualifying_noble(session: &Session, player: PlayerId) -> Option<usize> {
    let state = &session.players[player];
    session
        .nobles
        .iter()
        .position(|noble| noble_qualifies(state, noble))
}

/// Award at most one noble to `player`.
pub(crate) fn award_noble(session: &mut Session, player: PlayerId) -> Option<NobleTile> {
    let index = qualifying_noble(session, player)?;
    let noble = session.nobles.remove(index);
    session.players[player].nobles.push_back(noble);
    debug!(
        player = player.index(),
        noble = noble.id.0,
        bonuses = ?bonuses(&session.players[player]),
        "noble visit"
    );
    Some(noble)
}
