//! Turn engine entry points.
//!
//! `execute_turn` runs validate -> execute -> noble check, then either
//! halts on the token cap or completes the turn. `discard_tokens` resolves
//! a halted turn.

use tracing::debug;

use crate::core::GemTokens;
use crate::error::{ActionError, DiscardError};
use crate::session::state::PendingDiscard;
use crate::session::Session;

use super::action::{TurnAction, TurnResult};
use super::discard::{overage, validate_discard};
use super::execute::{apply_action, return_to_supply};
use super::lifecycle::complete_turn;
use super::nobles::award_noble;
use super::validate::validate_action;

/// Play one action for the current player.
///
/// On error the session is untouched. A result with non-zero
/// `tokens_over_limit` means the turn is halted: the same player must call
/// `discard_tokens` before anything else.
///
/// ```
/// use gem_engine::core::{GameRng, Gem, PlayerId, SessionOptions};
/// use gem_engine::rules::{execute_turn, TurnAction};
/// use gem_engine::session::create_session;
///
/// let mut session = create_session(SessionOptions::new(2), GameRng::new(42)).unwrap();
/// let take = TurnAction::take_different(&[Gem::Ruby, Gem::Emerald, Gem::Sapphire]);
///
/// let result = execute_turn(&mut session, &take).unwrap();
/// assert_eq!(result.tokens_over_limit, 0);
/// assert_eq!(session.current_player, PlayerId::new(1));
/// ```
pub fn execute_turn(session: &mut Session, action: &TurnAction) -> Result<TurnResult, ActionError> {
    validate_action(session, action)?;

    let player = session.current_player;
    apply_action(session, action);
    let noble = award_noble(session, player);

    let over = overage(session);
    if over > 0 {
        session.pending = Some(PendingDiscard {
            overage: over,
            action: action.clone(),
            noble: noble.map(|n| n.id),
        });
        debug!(player = player.index(), overage = over, "discard pending");
        return Ok(TurnResult {
            noble_visit: noble,
            game_over: false,
            tokens_over_limit: over,
        });
    }

    let game_over = complete_turn(session, action.clone(), noble.map(|n| n.id), GemTokens::new());
    Ok(TurnResult {
        noble_visit: noble,
        game_over,
        tokens_over_limit: 0,
    })
}

/// Resolve a pending discard and complete the halted turn.
///
/// The noble check already ran when the action executed, so the result
/// never carries a noble visit.
pub fn discard_tokens(session: &mut Session, bag: &GemTokens) -> Result<TurnResult, DiscardError> {
    validate_discard(session, bag)?;
    let pending = session.pending.take().ok_or(DiscardError::NothingPending)?;

    let player = session.current_player;
    return_to_supply(session, player, bag);
    debug!(player = player.index(), discarded = ?bag, "tokens discarded");

    let game_over = complete_turn(session, pending.action, pending.noble, *bag);
    Ok(TurnResult {
        noble_visit: None,
        game_over,
        tokens_over_limit: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use im::vector;

    use crate::cards::{CardId, DevelopmentCard, Tier, DEVELOPMENT_CARDS, NOBLE_TILES};
    use crate::core::{GameRng, Gem, PlayerId, SessionOptions};
    use crate::session::create_session;

    fn session() -> Session {
        create_session(SessionOptions::new(2), GameRng::new(42)).unwrap()
    }

    #[test]
    fn test_invalid_action_leaves_session_untouched() {
        let mut s = session();
        let before = s.clone();

        let err = execute_turn(&mut s, &TurnAction::TakeSame(Gem::Gold)).unwrap_err();
        assert_eq!(err, ActionError::GoldRequested);
        assert_eq!(s.token_supply, before.token_supply);
        assert_eq!(s.current_player, before.current_player);
        assert_eq!(s.market, before.market);
        assert!(s.history.is_empty());
    }

    #[test]
    fn test_turn_blocked_while_discard_pending() {
        let mut s = session();
        let p0 = PlayerId::new(0);
        s.players[p0].tokens = GemTokens::new().with(Gem::Onyx, 4).with(Gem::Diamond, 5);
        s.token_supply.set(Gem::Onyx, 0);
        s.token_supply.set(Gem::Diamond, 0);

        let take = TurnAction::take_different(&[Gem::Ruby, Gem::Emerald, Gem::Sapphire]);
        let result = execute_turn(&mut s, &take).unwrap();
        assert_eq!(result.tokens_over_limit, 2);

        assert_eq!(
            execute_turn(&mut s, &take),
            Err(ActionError::DiscardPending(2))
        );

        let bag = GemTokens::new().with(Gem::Onyx, 2);
        let result = discard_tokens(&mut s, &bag).unwrap();
        assert_eq!(result.tokens_over_limit, 0);
        assert_eq!(s.current_player, PlayerId::new(1));
        assert_eq!(s.history.last().map(|r| r.discarded), Some(bag));
    }

    #[test]
    fn test_discard_without_pending() {
        let mut s = session();
        assert_eq!(
            discard_tokens(&mut s, &GemTokens::new()),
            Err(DiscardError::NothingPending)
        );
    }

    /// Give `player` zero-point tier-one cards covering `bonuses`.
    fn give_bonuses(s: &mut Session, player: PlayerId, bonuses: &GemTokens) {
        for (gem, count) in bonuses.iter() {
            let cards = DEVELOPMENT_CARDS
                .iter()
                .filter(|c| c.tier == Tier::One && c.points == 0 && c.bonus == gem)
                .take(usize::from(count));
            for card in cards {
                s.players[player].purchased_cards.push_back(*card);
            }
        }
    }

    fn take_three() -> TurnAction {
        TurnAction::take_different(&[Gem::Ruby, Gem::Emerald, Gem::Sapphire])
    }

    #[test]
    fn test_noble_visits_on_purchase() {
        let mut s = session();
        let p0 = PlayerId::new(0);
        let noble = NOBLE_TILES[0];
        s.nobles = vector![noble];
        give_bonuses(&mut s, p0, &GemTokens::new().with(Gem::Emerald, 4).with(Gem::Ruby, 3));

        let free = DevelopmentCard {
            id: CardId::new(200),
            tier: Tier::One,
            cost: GemTokens::new(),
            bonus: Gem::Ruby,
            points: 0,
        };
        s.players[p0].reserved_cards.push(free);

        let result = execute_turn(&mut s, &TurnAction::Purchase(free.id)).unwrap();
        assert_eq!(result.noble_visit, Some(noble));
        assert!(s.nobles.is_empty());
        assert_eq!(s.players[p0].nobles, vector![noble]);
    }

    #[test]
    fn test_waiting_noble_visits_on_token_turn() {
        let mut s = session();
        let p0 = PlayerId::new(0);
        let (first, second) = (NOBLE_TILES[0], NOBLE_TILES[1]);
        s.nobles = vector![first, second];
        give_bonuses(
            &mut s,
            p0,
            &GemTokens::new()
                .with(Gem::Emerald, 4)
                .with(Gem::Ruby, 4)
                .with(Gem::Sapphire, 4),
        );

        // Qualifying for both, only the first in pool order arrives.
        let result = execute_turn(&mut s, &take_three()).unwrap();
        assert_eq!(result.noble_visit, Some(first));
        assert_eq!(s.history.last().and_then(|r| r.noble), Some(first.id));
        assert_eq!(s.nobles, vector![second]);

        let result = execute_turn(&mut s, &TurnAction::TakeSame(Gem::Onyx)).unwrap();
        assert_eq!(result.noble_visit, None);

        let result = execute_turn(&mut s, &take_three()).unwrap();
        assert_eq!(result.noble_visit, Some(second));
        assert!(s.nobles.is_empty());
        assert_eq!(s.players[p0].nobles, vector![first, second]);
    }

    #[test]
    fn test_noble_on_halted_turn() {
        let mut s = session();
        let p0 = PlayerId::new(0);
        let noble = NOBLE_TILES[0];
        s.nobles = vector![noble];
        give_bonuses(&mut s, p0, &GemTokens::new().with(Gem::Emerald, 4).with(Gem::Ruby, 4));
        s.players[p0].tokens = GemTokens::new().with(Gem::Onyx, 4).with(Gem::Diamond, 5);
        s.token_supply.set(Gem::Onyx, 0);
        s.token_supply.set(Gem::Diamond, 0);

        let result = execute_turn(&mut s, &take_three()).unwrap();
        assert_eq!(result.tokens_over_limit, 2);
        assert_eq!(result.noble_visit, Some(noble));
        assert_eq!(s.players[p0].nobles, vector![noble]);
        assert!(s.history.is_empty());

        let bag = GemTokens::new().with(Gem::Diamond, 2);
        let result = discard_tokens(&mut s, &bag).unwrap();
        assert_eq!(result.noble_visit, None);

        let record = s.history.last().unwrap();
        assert_eq!(record.noble, Some(noble.id));
        assert_eq!(record.discarded, bag);
        assert_eq!(s.current_player, PlayerId::new(1));
    }

    #[test]
    fn test_history_records_action() {
        let mut s = session();
        let take = TurnAction::TakeSame(Gem::Ruby);
        execute_turn(&mut s, &take).unwrap();

        let record = s.history.last().unwrap();
        assert_eq!(record.player, PlayerId::new(0));
        assert_eq!(record.action, take);
        assert_eq!(record.turn, 1);
        assert_eq!(record.noble, None);
    }
}
