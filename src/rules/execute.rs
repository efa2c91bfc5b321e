//! Action execution.
//!
//! Mutation only: callers must have run `validate_action` first. Tokens
//! only ever move between the acting player and the supply, so the
//! per-color total in play never changes.

use tracing::debug;

use crate::cards::CardId;
use crate::core::{Gem, GemTokens, PlayerId};
use crate::session::Session;

use super::action::{ReserveTarget, TurnAction};
use super::query::payment_for;
use super::validate::{locate_purchasable, CardSource};

/// Move tokens from the supply to a player.
fn take_from_supply(session: &mut Session, player: PlayerId, tokens: &GemTokens) {
    session.token_supply.remove_all(tokens);
    session.players[player].tokens.add_all(tokens);
}

/// Move tokens from a player back to the supply.
pub(crate) fn return_to_supply(session: &mut Session, player: PlayerId, tokens: &GemTokens) {
    session.players[player].tokens.remove_all(tokens);
    session.token_supply.add_all(tokens);
}

/// Apply a validated action for the current player.
pub(crate) fn apply_action(session: &mut Session, action: &TurnAction) {
    let player = session.current_player;
    match action {
        TurnAction::TakeDifferent(gems) => {
            let taken: GemTokens = gems.iter().map(|&g| (g, 1)).collect();
            take_from_supply(session, player, &taken);
        }
        TurnAction::TakeSame(gem) => {
            take_from_supply(session, player, &GemTokens::new().with(*gem, 2));
        }
        TurnAction::Reserve(target) => reserve(session, player, *target),
        TurnAction::Purchase(id) => purchase(session, player, *id),
    }
    debug!(player = player.index(), %action, "action applied");
}

fn purchase(session: &mut Session, player: PlayerId, id: CardId) {
    let Some((source, card)) = locate_purchasable(session, &session.players[player], id) else {
        return;
    };
    let payment = payment_for(&session.players[player], &card);
    match source {
        CardSource::Market(tier, slot) => {
            session.market.row_mut(tier).take_slot(slot);
        }
        CardSource::Reserved(i) => {
            session.players[player].reserved_cards.remove(i);
        }
    }
    return_to_supply(session, player, &payment);
    session.players[player].purchased_cards.push_back(card);
    debug!(player = player.index(), card = card.id.raw(), paid = ?payment, "card purchased");
}

fn reserve(session: &mut Session, player: PlayerId, target: ReserveTarget) {
    let card = match target {
        ReserveTarget::Market(id) => session
            .market
            .find(id)
            .and_then(|(tier, slot)| session.market.row_mut(tier).take_slot(slot)),
        ReserveTarget::DeckTop(tier) => session.market.row_mut(tier).draw(),
    };
    let Some(card) = card else {
        return;
    };
    session.players[player].reserved_cards.push(card);

    if session.token_supply.get(Gem::Gold) > 0 {
        take_from_supply(session, player, &GemTokens::new().with(Gem::Gold, 1));
    }
    debug!(player = player.index(), card = card.id.raw(), "card reserved");
}
