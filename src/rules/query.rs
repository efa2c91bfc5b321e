//! Read-only queries over players and sessions.
//!
//! Every function here is pure; the validator, executor, lifecycle and AI
//! all build on them.

use crate::cards::{DevelopmentCard, NobleTile};
use crate::core::{Gem, GemCost, GemTokens, PlayerId};
use crate::session::{Phase, PlayerState, Session};

/// Purchased-card points plus noble points.
#[must_use]
pub fn prestige(player: &PlayerState) -> u32 {
    let cards: u32 = player.purchased_cards.iter().map(|c| u32::from(c.points)).sum();
    let nobles: u32 = player.nobles.iter().map(|n| u32::from(n.points)).sum();
    cards + nobles
}

/// Per-color count of purchased cards' bonuses.
#[must_use]
pub fn bonuses(player: &PlayerState) -> GemTokens {
    player.purchased_cards.iter().map(|c| (c.bonus, 1)).collect()
}

/// Cost remaining after bonuses, omitting colors fully covered.
#[must_use]
pub fn effective_cost(cost: &GemCost, bonuses: &GemTokens) -> GemCost {
    cost.iter()
        .map(|(gem, count)| (gem, count.saturating_sub(bonuses.get(gem))))
        .filter(|&(_, count)| count > 0)
        .collect()
}

/// Gold needed on top of the player's colored tokens to buy a card.
#[must_use]
pub fn gold_shortfall(player: &PlayerState, card: &DevelopmentCard) -> u32 {
    let cost = effective_cost(&card.cost, &bonuses(player));
    cost.iter()
        .map(|(gem, count)| u32::from(count.saturating_sub(player.tokens.get(gem))))
        .sum()
}

/// Tokens a player would hand over to buy a card: matching colors first,
/// the rest in gold.
///
/// Only meaningful when `can_afford` holds.
#[must_use]
pub fn payment_for(player: &PlayerState, card: &DevelopmentCard) -> GemTokens {
    let cost = effective_cost(&card.cost, &bonuses(player));
    let mut payment = GemTokens::new();
    let mut gold = 0u8;
    for (gem, count) in cost.iter() {
        let colored = count.min(player.tokens.get(gem));
        payment.add(gem, colored);
        gold += count - colored;
    }
    payment.add(Gem::Gold, gold);
    payment
}

/// Check if a player can pay for a card.
#[must_use]
pub fn can_afford(player: &PlayerState, card: &DevelopmentCard) -> bool {
    gold_shortfall(player, card) <= u32::from(player.tokens.get(Gem::Gold))
}

/// Check if a player's bonuses meet a noble's requirement.
#[must_use]
pub fn noble_qualifies(player: &PlayerState, noble: &NobleTile) -> bool {
    bonuses(player).covers(&noble.requirement)
}

/// Check if the session is terminal.
#[must_use]
pub fn is_game_over(session: &Session) -> bool {
    session.phase == Phase::GameOver
}

/// Winner of a finished game.
///
/// Highest prestige wins; ties go to fewer purchased cards, then the lower
/// seat. `None` until the game is over.
#[must_use]
pub fn winner_index(session: &Session) -> Option<PlayerId> {
    if !is_game_over(session) {
        return None;
    }
    ranked_leader(session)
}

/// Best seat by the winner ordering, regardless of phase.
pub(crate) fn ranked_leader(session: &Session) -> Option<PlayerId> {
    let mut best: Option<(PlayerId, u32, usize)> = None;
    for (id, player) in session.players.iter() {
        let score = prestige(player);
        let cards = player.purchased_cards.len();
        let better = match best {
            None => true,
            Some((_, best_score, best_cards)) => {
                score > best_score || (score == best_score && cards < best_cards)
            }
        };
        if better {
            best = Some((id, score, cards));
        }
    }
    best.map(|(id, _, _)| id)
}
