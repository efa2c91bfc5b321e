//! Legal action enumeration.
//!
//! Produces every action the current player may take right now, in a
//! stable order: take-different, take-same, reserves, purchases. Every
//! action returned passes `validate_action`.

use smallvec::SmallVec;

use crate::cards::Tier;
use crate::core::Gem;
use crate::session::{Phase, Session};

use super::action::TurnAction;
use super::query::can_afford;

/// Enumerate all legal actions for the current player.
///
/// Empty when the game is over or a discard is pending.
#[must_use]
pub fn legal_actions(session: &Session) -> Vec<TurnAction> {
    let mut actions = Vec::new();
    if session.phase == Phase::GameOver || session.pending_discard().is_some() {
        return actions;
    }

    push_token_actions(session, &mut actions);

    let player = session.current();
    if player.reserved_cards.len() < session.rules.reserve_cap {
        actions.extend(session.market.visible().map(|c| TurnAction::reserve(c.id)));
        actions.extend(
            Tier::ALL
                .iter()
                .filter(|&&tier| !session.market.row(tier).deck.is_empty())
                .map(|&tier| TurnAction::reserve_top(tier)),
        );
    }

    actions.extend(
        session
            .market
            .visible()
            .chain(player.reserved_cards.iter())
            .filter(|card| can_afford(player, card))
            .map(|card| TurnAction::Purchase(card.id)),
    );

    actions
}

fn push_token_actions(session: &Session, out: &mut Vec<TurnAction>) {
    let stocked: SmallVec<[Gem; 5]> = Gem::BASIC
        .iter()
        .copied()
        .filter(|&g| session.token_supply.get(g) > 0)
        .collect();

    if stocked.len() >= 3 {
        for i in 0..stocked.len() {
            for j in i + 1..stocked.len() {
                for k in j + 1..stocked.len() {
                    out.push(TurnAction::take_different(&[stocked[i], stocked[j], stocked[k]]));
                }
            }
        }
    } else if !stocked.is_empty() {
        out.push(TurnAction::take_different(&stocked));
    }

    out.extend(
        Gem::BASIC
            .iter()
            .filter(|&&g| session.token_supply.get(g) >= session.rules.take_same_min_supply)
            .map(|&g| TurnAction::TakeSame(g)),
    );
}
