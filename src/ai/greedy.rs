//! Greedy heuristic policy.
//!
//! Decision order on each turn:
//! 1. Buy the best affordable card (points, noble progress, tier).
//! 2. Reserve a valuable card that is close to affordable.
//! 3. Take the tokens that best close the gap to a target card.
//! 4. Otherwise fall back to a random legal action.
//!
//! Ties always go to the earliest action in enumeration order, so the
//! policy is deterministic for a given session and generator.

use serde::{Deserialize, Serialize};

use crate::cards::DevelopmentCard;
use crate::core::{GameRng, Gem, GemTokens, PlayerId};
use crate::error::{AiError, DiscardError};
use crate::rules::{bonuses, effective_cost, gold_shortfall, ReserveTarget, TurnAction};
use crate::session::{PlayerState, Session};

use super::strategy::{actions_for, choose_random_action, Strategy};

/// Greedy heuristic weights.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GreedyConfig {
    /// Score per prestige point on a card.
    pub point_weight: i32,

    /// Bonus per unclaimed noble a card's color moves the player toward.
    pub noble_weight: i32,

    /// Only reserve while holding fewer than this many reserved cards.
    pub reserve_below: usize,

    /// Minimum printed points for a card to be worth reserving.
    pub reserve_min_points: u8,

    /// Reserve score must exceed this.
    pub reserve_threshold: i32,

    /// Penalty per missing token when scoring a reserve.
    pub reserve_gap_weight: i32,

    /// Penalty per missing token when picking a target card.
    pub target_gap_weight: i32,

    /// Value per color a take-different adds toward the target.
    pub token_value: i32,

    /// Value of a take-same that closes a gap of two or more. Sits above
    /// three useful colors.
    pub pair_value: i32,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            point_weight: 10,
            noble_weight: 3,
            reserve_below: 2,
            reserve_min_points: 2,
            reserve_threshold: 10,
            reserve_gap_weight: 5,
            target_gap_weight: 3,
            token_value: 2,
            pair_value: 7,
        }
    }
}

impl GreedyConfig {
    /// Set the reserve threshold.
    #[must_use]
    pub fn with_reserve_threshold(mut self, threshold: i32) -> Self {
        self.reserve_threshold = threshold;
        self
    }
}

/// Greedy policy with configurable weights.
#[derive(Clone, Debug, Default)]
pub struct GreedyStrategy {
    config: GreedyConfig,
}

impl GreedyStrategy {
    #[must_use]
    pub fn new(config: GreedyConfig) -> Self {
        Self { config }
    }
}

impl Strategy for GreedyStrategy {
    fn choose_action(
        &self,
        session: &Session,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Result<TurnAction, AiError> {
        choose_greedy_action(session, player, rng, &self.config)
    }

    fn choose_discard(
        &self,
        session: &Session,
        player: PlayerId,
        _rng: &mut GameRng,
    ) -> Result<GemTokens, AiError> {
        choose_greedy_discard(session, player)
    }
}

/// Pick an action by the greedy heuristic.
pub fn choose_greedy_action(
    session: &Session,
    player: PlayerId,
    rng: &mut GameRng,
    config: &GreedyConfig,
) -> Result<TurnAction, AiError> {
    let actions = actions_for(session, player)?;
    let state = session.player(player);

    if let Some(action) = best_purchase(session, state, &actions, config) {
        return Ok(action);
    }
    if let Some(action) = best_reserve(session, state, &actions, config) {
        return Ok(action);
    }
    if let Some(action) = best_token_take(session, state, &actions, config) {
        return Ok(action);
    }
    choose_random_action(session, player, rng)
}

/// Return the least useful tokens first.
///
/// A color's usefulness is its summed outstanding cost across every
/// visible and reserved card; gold is never given back while colored
/// tokens remain.
pub fn choose_greedy_discard(session: &Session, player: PlayerId) -> Result<GemTokens, AiError> {
    let overage = session
        .pending_discard()
        .ok_or(AiError::RejectedDiscard(DiscardError::NothingPending))?;
    let state = session.player(player);
    let owned = bonuses(state);

    let mut usefulness = [0u32; Gem::COUNT];
    for card in session.market.visible().chain(state.reserved_cards.iter()) {
        for (gem, count) in effective_cost(&card.cost, &owned).iter() {
            usefulness[gem.index()] += u32::from(count);
        }
    }
    usefulness[Gem::Gold.index()] = u32::MAX;

    let mut colors: Vec<Gem> = Gem::ALL.to_vec();
    colors.sort_by_key(|g| usefulness[g.index()]);

    let mut bag = GemTokens::new();
    let mut remaining = overage;
    for gem in colors {
        if remaining == 0 {
            break;
        }
        let give = state.tokens.get(gem).min(remaining);
        bag.add(gem, give);
        remaining -= give;
    }
    Ok(bag)
}

/// Noble progress a card's bonus color would make.
fn noble_progress(session: &Session, owned: &GemTokens, card: &DevelopmentCard, weight: i32) -> i32 {
    let helped = session
        .nobles
        .iter()
        .filter(|n| n.requirement.get(card.bonus) > owned.get(card.bonus))
        .count();
    weight * helped as i32
}

/// Tokens still missing after spending gold.
fn remaining_gap(state: &PlayerState, card: &DevelopmentCard) -> i32 {
    let gold = u32::from(state.tokens.get(Gem::Gold));
    gold_shortfall(state, card).saturating_sub(gold) as i32
}

fn best_by_score<T>(items: impl Iterator<Item = (T, i32)>) -> Option<(T, i32)> {
    let mut best: Option<(T, i32)> = None;
    for (item, score) in items {
        if best.as_ref().map_or(true, |(_, s)| score > *s) {
            best = Some((item, score));
        }
    }
    best
}

fn best_purchase(
    session: &Session,
    state: &PlayerState,
    actions: &[TurnAction],
    config: &GreedyConfig,
) -> Option<TurnAction> {
    let owned = bonuses(state);
    let scored = actions.iter().filter_map(|action| {
        let TurnAction::Purchase(id) = action else {
            return None;
        };
        let card = session
            .market
            .visible()
            .chain(state.reserved_cards.iter())
            .find(|c| c.id == *id)?;
        let score = i32::from(card.points) * config.point_weight
            + noble_progress(session, &owned, card, config.noble_weight)
            + i32::from(card.tier.number());
        Some((action, score))
    });
    best_by_score(scored).map(|(action, _)| action.clone())
}

fn best_reserve(
    session: &Session,
    state: &PlayerState,
    actions: &[TurnAction],
    config: &GreedyConfig,
) -> Option<TurnAction> {
    if state.reserved_cards.len() >= config.reserve_below {
        return None;
    }
    let scored = actions.iter().filter_map(|action| {
        let TurnAction::Reserve(ReserveTarget::Market(id)) = action else {
            return None;
        };
        let card = session.market.visible().find(|c| c.id == *id)?;
        if card.points < config.reserve_min_points {
            return None;
        }
        let score = i32::from(card.points) * config.point_weight
            - remaining_gap(state, card) * config.reserve_gap_weight;
        Some((action, score))
    });
    best_by_score(scored)
        .filter(|&(_, score)| score > config.reserve_threshold)
        .map(|(action, _)| action.clone())
}

/// The card worth saving toward: high value, small gap.
fn target_card<'a>(
    session: &'a Session,
    state: &'a PlayerState,
    config: &GreedyConfig,
) -> Option<&'a DevelopmentCard> {
    let owned = bonuses(state);
    let scored = session
        .market
        .visible()
        .chain(state.reserved_cards.iter())
        .map(|card| {
            let score = i32::from(card.points) * config.point_weight
                + noble_progress(session, &owned, card, config.noble_weight)
                + i32::from(card.tier.number())
                - remaining_gap(state, card) * config.target_gap_weight;
            (card, score)
        });
    best_by_score(scored).map(|(card, _)| card)
}

fn best_token_take(
    session: &Session,
    state: &PlayerState,
    actions: &[TurnAction],
    config: &GreedyConfig,
) -> Option<TurnAction> {
    let target = target_card(session, state, config)?;
    let needed = effective_cost(&target.cost, &bonuses(state));
    let need = |gem: Gem| needed.get(gem).saturating_sub(state.tokens.get(gem));

    let scored = actions.iter().filter_map(|action| {
        let value = match action {
            TurnAction::TakeDifferent(gems) => {
                config.token_value * gems.iter().filter(|&&g| need(g) > 0).count() as i32
            }
            TurnAction::TakeSame(gem) => match need(*gem) {
                0 => 0,
                1 => config.token_value,
                _ => config.pair_value,
            },
            _ => return None,
        };
        Some((action, value))
    });
    best_by_score(scored)
        .filter(|&(_, value)| value > 0)
        .map(|(action, _)| action.clone())
}
