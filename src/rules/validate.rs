//! Action validation.
//!
//! `validate_action` is a pure predicate over the session. The executor
//! never runs unless it returned `Ok`, so a rejected action leaves no trace.

use rustc_hash::FxHashSet;

use crate::cards::{CardId, DevelopmentCard, Tier};
use crate::core::Gem;
use crate::error::ActionError;
use crate::session::{Phase, PlayerState, Session};

use super::action::{ReserveTarget, TurnAction};
use super::query::can_afford;

/// Where a purchasable card currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CardSource {
    Market(Tier, usize),
    Reserved(usize),
}

/// Find a card the player could buy: visible in the market or in their
/// own reserve.
pub(crate) fn locate_purchasable(
    session: &Session,
    player: &PlayerState,
    id: CardId,
) -> Option<(CardSource, DevelopmentCard)> {
    if let Some((tier, slot)) = session.market.find(id) {
        let card = session.market.row(tier).slots[slot]?;
        return Some((CardSource::Market(tier, slot), card));
    }
    player
        .reserved_position(id)
        .map(|i| (CardSource::Reserved(i), player.reserved_cards[i]))
}

/// Check an action for the current player without changing anything.
///
/// ```
/// use gem_engine::core::{GameRng, Gem, SessionOptions};
/// use gem_engine::error::ActionError;
/// use gem_engine::rules::{validate_action, TurnAction};
/// use gem_engine::session::create_session;
///
/// let session = create_session(SessionOptions::new(2), GameRng::new(42)).unwrap();
///
/// let two = TurnAction::take_different(&[Gem::Ruby, Gem::Onyx]);
/// assert_eq!(
///     validate_action(&session, &two),
///     Err(ActionError::MustTakeThree { available: 5, requested: 2 })
/// );
/// ```
pub fn validate_action(session: &Session, action: &TurnAction) -> Result<(), ActionError> {
    if session.phase == Phase::GameOver {
        return Err(ActionError::GameOver);
    }
    if let Some(overage) = session.pending_discard() {
        return Err(ActionError::DiscardPending(overage));
    }

    let player = session.current();
    match action {
        TurnAction::TakeDifferent(gems) => validate_take_different(session, gems),
        TurnAction::TakeSame(gem) => validate_take_same(session, *gem),
        TurnAction::Reserve(target) => validate_reserve(session, player, *target),
        TurnAction::Purchase(id) => validate_purchase(session, player, *id),
    }
}

fn validate_take_different(session: &Session, gems: &[Gem]) -> Result<(), ActionError> {
    if gems.is_empty() || gems.len() > 3 {
        return Err(ActionError::ColorCount(gems.len()));
    }

    let mut seen = FxHashSet::default();
    for &gem in gems {
        if gem.is_gold() {
            return Err(ActionError::GoldRequested);
        }
        if !seen.insert(gem) {
            return Err(ActionError::DuplicateColor(gem));
        }
        if session.token_supply.get(gem) == 0 {
            return Err(ActionError::SupplyEmpty(gem));
        }
    }

    let available = session.stocked_colors();
    if available >= 3 && gems.len() != 3 {
        return Err(ActionError::MustTakeThree {
            available,
            requested: gems.len(),
        });
    }
    Ok(())
}

fn validate_take_same(session: &Session, gem: Gem) -> Result<(), ActionError> {
    if gem.is_gold() {
        return Err(ActionError::GoldRequested);
    }
    let needed = session.rules.take_same_min_supply;
    let available = session.token_supply.get(gem);
    if available < needed {
        return Err(ActionError::PairSupply {
            gem,
            needed,
            available,
        });
    }
    Ok(())
}

fn validate_reserve(
    session: &Session,
    player: &PlayerState,
    target: ReserveTarget,
) -> Result<(), ActionError> {
    if player.reserved_cards.len() >= session.rules.reserve_cap {
        return Err(ActionError::ReserveLimit(session.rules.reserve_cap));
    }
    match target {
        ReserveTarget::Market(id) => session
            .market
            .find(id)
            .map(|_| ())
            .ok_or(ActionError::UnknownCard(id)),
        ReserveTarget::DeckTop(tier) => {
            if session.market.row(tier).deck.is_empty() {
                Err(ActionError::EmptyDeck(tier))
            } else {
                Ok(())
            }
        }
    }
}

fn validate_purchase(session: &Session, player: &PlayerState, id: CardId) -> Result<(), ActionError> {
    let (_, card) = locate_purchasable(session, player, id).ok_or(ActionError::UnknownCard(id))?;
    if !can_afford(player, &card) {
        return Err(ActionError::CannotAfford(id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, GemTokens, PlayerId, SessionOptions};
    use crate::session::create_session;

    fn session() -> Session {
        create_session(SessionOptions::new(2), GameRng::new(42)).unwrap()
    }

    #[test]
    fn test_take_three_distinct_ok() {
        let s = session();
        let action = TurnAction::take_different(&[Gem::Ruby, Gem::Emerald, Gem::Sapphire]);
        assert_eq!(validate_action(&s, &action), Ok(()));
    }

    #[test]
    fn test_take_different_rejections() {
        let s = session();
        let cases = [
            (TurnAction::take_different(&[]), ActionError::ColorCount(0)),
            (
                TurnAction::take_different(&[Gem::Ruby, Gem::Onyx, Gem::Diamond, Gem::Emerald]),
                ActionError::ColorCount(4),
            ),
            (
                TurnAction::take_different(&[Gem::Ruby, Gem::Gold, Gem::Onyx]),
                ActionError::GoldRequested,
            ),
            (
                TurnAction::take_different(&[Gem::Ruby, Gem::Ruby, Gem::Onyx]),
                ActionError::DuplicateColor(Gem::Ruby),
            ),
            (
                TurnAction::take_different(&[Gem::Ruby]),
                ActionError::MustTakeThree {
                    available: 5,
                    requested: 1,
                },
            ),
        ];
        for (action, expected) in cases {
            assert_eq!(validate_action(&s, &action), Err(expected), "{action}");
        }
    }

    #[test]
    fn test_take_fewer_allowed_when_supply_thin() {
        let mut s = session();
        s.token_supply = GemTokens::new().with(Gem::Ruby, 1).with(Gem::Onyx, 2).with(Gem::Gold, 5);

        let two = TurnAction::take_different(&[Gem::Ruby, Gem::Onyx]);
        let one = TurnAction::take_different(&[Gem::Onyx]);
        let empty = TurnAction::take_different(&[Gem::Onyx, Gem::Diamond]);

        assert_eq!(validate_action(&s, &two), Ok(()));
        assert_eq!(validate_action(&s, &one), Ok(()));
        assert_eq!(validate_action(&s, &empty), Err(ActionError::SupplyEmpty(Gem::Diamond)));
    }

    #[test]
    fn test_take_same_needs_four() {
        let mut s = session();
        assert_eq!(validate_action(&s, &TurnAction::TakeSame(Gem::Onyx)), Ok(()));
        assert_eq!(
            validate_action(&s, &TurnAction::TakeSame(Gem::Gold)),
            Err(ActionError::GoldRequested)
        );

        s.token_supply.set(Gem::Onyx, 3);
        assert_eq!(
            validate_action(&s, &TurnAction::TakeSame(Gem::Onyx)),
            Err(ActionError::PairSupply {
                gem: Gem::Onyx,
                needed: 4,
                available: 3
            })
        );
    }

    #[test]
    fn test_reserve_rules() {
        let mut s = session();
        let visible = s.market.row(Tier::One).slots[0].unwrap();
        let hidden = *s.market.row(Tier::One).deck_top().unwrap();

        assert_eq!(validate_action(&s, &TurnAction::reserve(visible.id)), Ok(()));
        assert_eq!(validate_action(&s, &TurnAction::reserve_top(Tier::Three)), Ok(()));
        assert_eq!(
            validate_action(&s, &TurnAction::reserve(hidden.id)),
            Err(ActionError::UnknownCard(hidden.id))
        );

        s.market.row_mut(Tier::Three).deck.clear();
        assert_eq!(
            validate_action(&s, &TurnAction::reserve_top(Tier::Three)),
            Err(ActionError::EmptyDeck(Tier::Three))
        );

        let p0 = PlayerId::new(0);
        for _ in 0..3 {
            s.players[p0].reserved_cards.push(hidden);
        }
        assert_eq!(
            validate_action(&s, &TurnAction::reserve(visible.id)),
            Err(ActionError::ReserveLimit(3))
        );
    }

    #[test]
    fn test_purchase_rules() {
        let mut s = session();
        let visible = s.market.row(Tier::One).slots[1].unwrap();

        assert_eq!(
            validate_action(&s, &TurnAction::Purchase(visible.id)),
            Err(ActionError::CannotAfford(visible.id))
        );

        s.players[PlayerId::new(0)].tokens = GemTokens::new().with(Gem::Gold, 10);
        assert_eq!(validate_action(&s, &TurnAction::Purchase(visible.id)), Ok(()));

        let hidden = *s.market.row(Tier::Two).deck_top().unwrap();
        assert_eq!(
            validate_action(&s, &TurnAction::Purchase(hidden.id)),
            Err(ActionError::UnknownCard(hidden.id))
        );
    }

    #[test]
    fn test_cannot_buy_opponents_reserve() {
        let mut s = session();
        let hidden = *s.market.row(Tier::One).deck_top().unwrap();
        s.players[PlayerId::new(1)].reserved_cards.push(hidden);
        s.players[PlayerId::new(0)].tokens = GemTokens::new().with(Gem::Gold, 10);

        assert_eq!(
            validate_action(&s, &TurnAction::Purchase(hidden.id)),
            Err(ActionError::UnknownCard(hidden.id))
        );
    }

    #[test]
    fn test_game_over_rejects_everything() {
        let mut s = session();
        s.phase = Phase::GameOver;
        let action = TurnAction::take_different(&[Gem::Ruby, Gem::Emerald, Gem::Sapphire]);
        assert_eq!(validate_action(&s, &action), Err(ActionError::GameOver));
    }
}
