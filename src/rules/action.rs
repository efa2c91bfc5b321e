//! Turn actions and turn results.
//!
//! A turn is exactly one `TurnAction`:
//! - Take up to three different colors
//! - Take two of one color
//! - Reserve a visible card or the top of a deck
//! - Purchase a visible or reserved card

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, NobleTile, Tier};
use crate::core::Gem;

/// What to reserve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReserveTarget {
    /// A face-up market card.
    Market(CardId),
    /// The unseen top card of a tier's deck.
    DeckTop(Tier),
}

/// A complete turn action.
///
/// ## Example
///
/// ```
/// use gem_engine::core::Gem;
/// use gem_engine::rules::TurnAction;
///
/// let take = TurnAction::take_different(&[Gem::Ruby, Gem::Emerald, Gem::Sapphire]);
/// assert!(take.is_token_action());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    /// One token each of 1-3 distinct basic colors.
    TakeDifferent(SmallVec<[Gem; 3]>),
    /// Two tokens of one basic color.
    TakeSame(Gem),
    Reserve(ReserveTarget),
    Purchase(CardId),
}

impl TurnAction {
    /// Build a take-different action.
    #[must_use]
    pub fn take_different(gems: &[Gem]) -> Self {
        TurnAction::TakeDifferent(SmallVec::from_slice(gems))
    }

    /// Reserve a visible card.
    #[must_use]
    pub fn reserve(card: CardId) -> Self {
        TurnAction::Reserve(ReserveTarget::Market(card))
    }

    /// Reserve the top of a deck.
    #[must_use]
    pub fn reserve_top(tier: Tier) -> Self {
        TurnAction::Reserve(ReserveTarget::DeckTop(tier))
    }

    /// Check if this action only takes tokens.
    #[must_use]
    pub fn is_token_action(&self) -> bool {
        matches!(self, TurnAction::TakeDifferent(_) | TurnAction::TakeSame(_))
    }
}

impl std::fmt::Display for TurnAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnAction::TakeDifferent(gems) => {
                let names: Vec<_> = gems.iter().map(|g| g.name()).collect();
                write!(f, "take {}", names.join(", "))
            }
            TurnAction::TakeSame(gem) => write!(f, "take two {gem}"),
            TurnAction::Reserve(ReserveTarget::Market(card)) => write!(f, "reserve {card}"),
            TurnAction::Reserve(ReserveTarget::DeckTop(tier)) => write!(f, "reserve top of {tier}"),
            TurnAction::Purchase(card) => write!(f, "purchase {card}"),
        }
    }
}

/// Outcome of an executed action or resolved discard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Noble awarded this turn, if any.
    pub noble_visit: Option<NobleTile>,
    /// The game ended with this turn.
    pub game_over: bool,
    /// Tokens over the cap. Non-zero means the turn is halted until
    /// `discard_tokens` resolves it.
    pub tokens_over_limit: u8,
}
