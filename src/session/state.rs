//! Session state: the complete, exclusively-owned state of one game.
//!
//! ## Session
//!
//! Everything a game needs:
//! - Players in seat order
//! - Market rows (4 visible slots + remaining deck per tier)
//! - Token supply and unclaimed nobles
//! - Phase, current / starting / trigger player
//! - Turn history and the injected RNG
//!
//! Uses `im` persistent vectors so cloning a session (AI lookahead,
//! snapshots) is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, DevelopmentCard, NobleId, NobleTile, Tier};
use crate::core::{Gem, GameRng, GemTokens, PlayerId, PlayerMap, RuleConfig};
use crate::rules::action::TurnAction;

/// Visible slots per market row.
pub const MARKET_SLOTS: usize = 4;

/// Game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Normal play; nobody has reached the trigger prestige.
    Playing,
    /// Someone reached the trigger; play continues until the round returns
    /// to the starting player.
    FinalRound,
    /// Terminal.
    GameOver,
}

/// Per-player state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub is_ai: bool,
    pub tokens: GemTokens,
    pub purchased_cards: Vector<DevelopmentCard>,
    /// At most `RuleConfig::reserve_cap` cards.
    pub reserved_cards: SmallVec<[DevelopmentCard; 3]>,
    pub nobles: Vector<NobleTile>,
}

impl PlayerState {
    /// Create an empty player.
    #[must_use]
    pub fn new(name: impl Into<String>, is_ai: bool) -> Self {
        Self {
            name: name.into(),
            is_ai,
            tokens: GemTokens::new(),
            purchased_cards: Vector::new(),
            reserved_cards: SmallVec::new(),
            nobles: Vector::new(),
        }
    }

    /// Position of a reserved card.
    #[must_use]
    pub fn reserved_position(&self, id: CardId) -> Option<usize> {
        self.reserved_cards.iter().position(|c| c.id == id)
    }
}

/// One tier of the market.
///
/// Always exactly `MARKET_SLOTS` slots; a slot is empty once the deck
/// can no longer refill it. The top of the deck is its last element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRow {
    pub slots: [Option<DevelopmentCard>; MARKET_SLOTS],
    pub deck: Vector<DevelopmentCard>,
}

impl TierRow {
    /// Build a row from a shuffled deck, dealing the visible slots from
    /// its top.
    #[must_use]
    pub fn deal(mut deck: Vec<DevelopmentCard>) -> Self {
        let mut slots = [None; MARKET_SLOTS];
        for slot in &mut slots {
            *slot = deck.pop();
        }
        Self {
            slots,
            deck: deck.into_iter().collect(),
        }
    }

    /// Iterate over visible cards, skipping empty slots.
    pub fn visible(&self) -> impl Iterator<Item = &DevelopmentCard> {
        self.slots.iter().flatten()
    }

    /// Slot holding a card id.
    #[must_use]
    pub fn slot_of(&self, id: CardId) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.is_some_and(|c| c.id == id))
    }

    /// The card on top of the deck.
    #[must_use]
    pub fn deck_top(&self) -> Option<&DevelopmentCard> {
        self.deck.back()
    }

    /// Remove the card in a slot and refill the slot from the deck.
    pub fn take_slot(&mut self, slot: usize) -> Option<DevelopmentCard> {
        let card = self.slots[slot].take();
        self.slots[slot] = self.deck.pop_back();
        card
    }

    /// Remove the card on top of the deck.
    pub fn draw(&mut self) -> Option<DevelopmentCard> {
        self.deck.pop_back()
    }
}

/// The three market rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    rows: [TierRow; 3],
}

impl Market {
    /// Create a market from rows in tier order.
    #[must_use]
    pub fn new(rows: [TierRow; 3]) -> Self {
        Self { rows }
    }

    /// Get one tier's row.
    #[must_use]
    pub fn row(&self, tier: Tier) -> &TierRow {
        &self.rows[tier.index()]
    }

    /// Get one tier's row mutably.
    pub fn row_mut(&mut self, tier: Tier) -> &mut TierRow {
        &mut self.rows[tier.index()]
    }

    /// Locate a visible card.
    #[must_use]
    pub fn find(&self, id: CardId) -> Option<(Tier, usize)> {
        Tier::ALL
            .iter()
            .find_map(|&tier| self.row(tier).slot_of(id).map(|slot| (tier, slot)))
    }

    /// Iterate over every visible card, lowest tier first.
    pub fn visible(&self) -> impl Iterator<Item = &DevelopmentCard> {
        self.rows.iter().flat_map(TierRow::visible)
    }
}

/// A completed turn, kept in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub player: PlayerId,
    pub action: TurnAction,
    /// Completed-turn counter at the time this turn finished (starts at 1).
    pub turn: u32,
    pub noble: Option<NobleId>,
    /// Tokens surrendered to get back under the cap.
    pub discarded: GemTokens,
}

/// A turn halted on the token cap, waiting for a discard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PendingDiscard {
    pub(crate) overage: u8,
    pub(crate) action: TurnAction,
    pub(crate) noble: Option<NobleId>,
}

/// Complete game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub rules: RuleConfig,
    pub players: PlayerMap<PlayerState>,
    pub market: Market,
    pub token_supply: GemTokens,
    /// Unclaimed nobles in setup order.
    pub nobles: Vector<NobleTile>,
    pub phase: Phase,
    pub current_player: PlayerId,
    pub starting_player: PlayerId,
    /// First player to reach the trigger prestige.
    pub trigger_player: Option<PlayerId>,
    /// Number of completed turns.
    pub turn_number: u32,
    pub history: Vector<TurnRecord>,
    pub(crate) pending: Option<PendingDiscard>,
    rng: GameRng,
}

impl Session {
    /// Assemble a session. Use `session::create_session` for a fresh game.
    #[must_use]
    pub(crate) fn assemble(
        rules: RuleConfig,
        players: PlayerMap<PlayerState>,
        market: Market,
        token_supply: GemTokens,
        nobles: Vector<NobleTile>,
        starting_player: PlayerId,
        rng: GameRng,
    ) -> Self {
        Self {
            rules,
            players,
            market,
            token_supply,
            nobles,
            phase: Phase::Playing,
            current_player: starting_player,
            starting_player,
            trigger_player: None,
            turn_number: 0,
            history: Vector::new(),
            pending: None,
            rng,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Get a player's state.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &PlayerState {
        &self.players[self.current_player]
    }

    /// Tokens the current player must discard before the turn can end.
    #[must_use]
    pub fn pending_discard(&self) -> Option<u8> {
        self.pending.as_ref().map(|p| p.overage)
    }

    /// The session's own random stream.
    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    /// Supply plus every player's tokens, per color.
    ///
    /// Constant for the lifetime of a session.
    #[must_use]
    pub fn tokens_in_play(&self) -> GemTokens {
        let mut total = self.token_supply;
        for player in self.players.values() {
            total.add_all(&player.tokens);
        }
        total
    }

    /// Count of basic colors with tokens left in supply.
    #[must_use]
    pub fn stocked_colors(&self) -> usize {
        Gem::BASIC
            .iter()
            .filter(|&&g| self.token_supply.get(g) > 0)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::cards_in_tier;

    fn tier_one_deck() -> Vec<DevelopmentCard> {
        cards_in_tier(Tier::One).copied().collect()
    }

    #[test]
    fn test_deal_fills_four_from_top() {
        let deck = tier_one_deck();
        let top = deck[deck.len() - 1];
        let row = TierRow::deal(deck);

        assert_eq!(row.slots[0], Some(top));
        assert_eq!(row.visible().count(), 4);
        assert_eq!(row.deck.len(), 36);
    }

    #[test]
    fn test_take_slot_refills() {
        let mut row = TierRow::deal(tier_one_deck());
        let next = *row.deck_top().unwrap();
        let taken = row.slots[2].unwrap();

        assert_eq!(row.take_slot(2), Some(taken));
        assert_eq!(row.slots[2], Some(next));
        assert_eq!(row.deck.len(), 35);
    }

    #[test]
    fn test_take_slot_leaves_empty_when_deck_exhausted() {
        let cards: Vec<_> = tier_one_deck().into_iter().take(4).collect();
        let mut row = TierRow::deal(cards);
        assert!(row.deck.is_empty());

        assert!(row.take_slot(0).is_some());
        assert_eq!(row.slots[0], None);
        assert_eq!(row.slots.len(), MARKET_SLOTS);
        assert_eq!(row.visible().count(), 3);
    }

    #[test]
    fn test_market_find() {
        let rows = Tier::ALL.map(|t| TierRow::deal(cards_in_tier(t).copied().collect()));
        let market = Market::new(rows);

        let card = market.row(Tier::Two).slots[3].unwrap();
        assert_eq!(market.find(card.id), Some((Tier::Two, 3)));
        assert_eq!(market.visible().count(), 12);

        let hidden = *market.row(Tier::Three).deck_top().unwrap();
        assert_eq!(market.find(hidden.id), None);
    }

    #[test]
    fn test_reserved_position() {
        let mut player = PlayerState::new("Ada", false);
        let card = tier_one_deck()[5];
        player.reserved_cards.push(card);

        assert_eq!(player.reserved_position(card.id), Some(0));
        assert_eq!(player.reserved_position(CardId::new(89)), None);
    }
}
