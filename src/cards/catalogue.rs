//! The fixed card and noble tables.
//!
//! 90 development cards (40 / 30 / 20 per tier) and 10 noble tiles.
//! Card ids are positions in `DEVELOPMENT_CARDS`, noble ids positions in
//! `NOBLE_TILES`. Raw costs are written in printed order
//! (diamond, sapphire, emerald, ruby, onyx).

use crate::core::{Gem, GemCost, GemTokens};

use super::definition::Tier::{One as T1, Three as T3, Two as T2};
use super::definition::{CardId, DevelopmentCard, NobleId, NobleTile, Tier};
use crate::core::Gem::{Diamond as W, Emerald as G, Onyx as K, Ruby as R, Sapphire as U};

/// Number of development cards.
pub const CARD_COUNT: usize = 90;

/// Number of noble tiles.
pub const NOBLE_COUNT: usize = 10;

/// Prestige granted by every noble.
pub const NOBLE_POINTS: u8 = 3;

type RawCard = (Tier, Gem, u8, [u8; 5]);

#[rustfmt::skip]
const RAW_CARDS: [RawCard; CARD_COUNT] = [
    // Tier 1, onyx
    (T1, K, 0, [1, 1, 1, 1, 0]), (T1, K, 0, [1, 2, 1, 1, 0]), (T1, K, 0, [2, 2, 0, 1, 0]),
    (T1, K, 0, [0, 0, 1, 3, 1]), (T1, K, 0, [0, 0, 2, 1, 0]), (T1, K, 0, [2, 0, 2, 0, 0]),
    (T1, K, 0, [0, 0, 3, 0, 0]), (T1, K, 1, [0, 4, 0, 0, 0]),
    // Tier 1, sapphire
    (T1, U, 0, [1, 0, 1, 1, 1]), (T1, U, 0, [1, 0, 1, 2, 1]), (T1, U, 0, [1, 0, 2, 2, 0]),
    (T1, U, 0, [0, 1, 3, 1, 0]), (T1, U, 0, [1, 0, 0, 0, 2]), (T1, U, 0, [0, 0, 2, 0, 2]),
    (T1, U, 0, [0, 0, 0, 0, 3]), (T1, U, 1, [0, 0, 0, 4, 0]),
    // Tier 1, diamond
    (T1, W, 0, [0, 1, 1, 1, 1]), (T1, W, 0, [0, 1, 2, 1, 1]), (T1, W, 0, [0, 2, 2, 0, 1]),
    (T1, W, 0, [3, 1, 0, 0, 1]), (T1, W, 0, [0, 0, 0, 2, 1]), (T1, W, 0, [0, 2, 0, 0, 2]),
    (T1, W, 0, [0, 3, 0, 0, 0]), (T1, W, 1, [0, 0, 4, 0, 0]),
    // Tier 1, emerald
    (T1, G, 0, [1, 1, 0, 1, 1]), (T1, G, 0, [1, 1, 0, 1, 2]), (T1, G, 0, [0, 1, 0, 2, 2]),
    (T1, G, 0, [1, 3, 1, 0, 0]), (T1, G, 0, [2, 1, 0, 0, 0]), (T1, G, 0, [0, 2, 0, 2, 0]),
    (T1, G, 0, [0, 0, 0, 3, 0]), (T1, G, 1, [0, 0, 0, 0, 4]),
    // Tier 1, ruby
    (T1, R, 0, [1, 1, 1, 0, 1]), (T1, R, 0, [2, 1, 1, 0, 1]), (T1, R, 0, [2, 0, 1, 0, 2]),
    (T1, R, 0, [1, 0, 0, 1, 3]), (T1, R, 0, [0, 2, 1, 0, 0]), (T1, R, 0, [2, 0, 0, 2, 0]),
    (T1, R, 0, [3, 0, 0, 0, 0]), (T1, R, 1, [4, 0, 0, 0, 0]),
    // Tier 2, onyx
    (T2, K, 1, [3, 2, 2, 0, 0]), (T2, K, 1, [3, 0, 3, 0, 2]), (T2, K, 2, [0, 1, 4, 2, 0]),
    (T2, K, 2, [0, 0, 5, 3, 0]), (T2, K, 2, [5, 0, 0, 0, 0]), (T2, K, 3, [0, 0, 0, 0, 6]),
    // Tier 2, sapphire
    (T2, U, 1, [0, 2, 2, 3, 0]), (T2, U, 1, [0, 2, 3, 0, 3]), (T2, U, 2, [5, 3, 0, 0, 0]),
    (T2, U, 2, [2, 0, 0, 1, 4]), (T2, U, 2, [0, 5, 0, 0, 0]), (T2, U, 3, [0, 6, 0, 0, 0]),
    // Tier 2, diamond
    (T2, W, 1, [0, 0, 3, 2, 2]), (T2, W, 1, [2, 3, 0, 3, 0]), (T2, W, 2, [0, 0, 1, 4, 2]),
    (T2, W, 2, [0, 0, 0, 5, 3]), (T2, W, 2, [0, 0, 0, 5, 0]), (T2, W, 3, [6, 0, 0, 0, 0]),
    // Tier 2, emerald
    (T2, G, 1, [3, 0, 2, 3, 0]), (T2, G, 1, [2, 3, 0, 0, 2]), (T2, G, 2, [4, 2, 0, 0, 1]),
    (T2, G, 2, [0, 5, 3, 0, 0]), (T2, G, 2, [0, 0, 5, 0, 0]), (T2, G, 3, [0, 0, 6, 0, 0]),
    // Tier 2, ruby
    (T2, R, 1, [2, 0, 0, 2, 3]), (T2, R, 1, [0, 3, 0, 2, 3]), (T2, R, 2, [1, 4, 2, 0, 0]),
    (T2, R, 2, [3, 0, 0, 0, 5]), (T2, R, 2, [0, 0, 0, 0, 5]), (T2, R, 3, [0, 0, 0, 6, 0]),
    // Tier 3, onyx
    (T3, K, 3, [3, 3, 5, 3, 0]), (T3, K, 4, [0, 0, 0, 7, 0]), (T3, K, 4, [0, 0, 3, 6, 3]),
    (T3, K, 5, [0, 0, 0, 7, 3]),
    // Tier 3, sapphire
    (T3, U, 3, [3, 0, 3, 3, 5]), (T3, U, 4, [7, 0, 0, 0, 0]), (T3, U, 4, [6, 3, 0, 0, 3]),
    (T3, U, 5, [7, 3, 0, 0, 0]),
    // Tier 3, diamond
    (T3, W, 3, [0, 3, 3, 5, 3]), (T3, W, 4, [0, 0, 0, 0, 7]), (T3, W, 4, [3, 0, 0, 3, 6]),
    (T3, W, 5, [3, 0, 0, 0, 7]),
    // Tier 3, emerald
    (T3, G, 3, [5, 3, 0, 3, 3]), (T3, G, 4, [0, 7, 0, 0, 0]), (T3, G, 4, [3, 6, 3, 0, 0]),
    (T3, G, 5, [0, 7, 3, 0, 0]),
    // Tier 3, ruby
    (T3, R, 3, [3, 5, 3, 0, 3]), (T3, R, 4, [0, 0, 7, 0, 0]), (T3, R, 4, [0, 3, 6, 3, 0]),
    (T3, R, 5, [0, 0, 7, 3, 0]),
];

#[rustfmt::skip]
const RAW_NOBLES: [[u8; 5]; NOBLE_COUNT] = [
    [0, 0, 4, 4, 0],
    [0, 4, 4, 0, 0],
    [4, 4, 0, 0, 0],
    [4, 0, 0, 0, 4],
    [0, 0, 0, 4, 4],
    [3, 3, 0, 0, 3],
    [3, 3, 3, 0, 0],
    [0, 3, 3, 3, 0],
    [0, 0, 3, 3, 3],
    [3, 0, 0, 3, 3],
];

/// Every development card, indexed by `CardId`.
pub static DEVELOPMENT_CARDS: [DevelopmentCard; CARD_COUNT] = build_cards();

/// Every noble tile, indexed by `NobleId`.
pub static NOBLE_TILES: [NobleTile; NOBLE_COUNT] = build_nobles();

/// Convert a printed-order cost into a bag.
const fn printed_cost(raw: [u8; 5]) -> GemCost {
    let [diamond, sapphire, emerald, ruby, onyx] = raw;
    GemTokens::from_counts([emerald, sapphire, ruby, diamond, onyx, 0])
}

const fn build_cards() -> [DevelopmentCard; CARD_COUNT] {
    let blank = DevelopmentCard {
        id: CardId(0),
        tier: Tier::One,
        cost: GemTokens::new(),
        bonus: Gem::Emerald,
        points: 0,
    };
    let mut cards = [blank; CARD_COUNT];
    let mut i = 0;
    while i < CARD_COUNT {
        let (tier, bonus, points, raw) = RAW_CARDS[i];
        cards[i] = DevelopmentCard {
            id: CardId(i as u8),
            tier,
            cost: printed_cost(raw),
            bonus,
            points,
        };
        i += 1;
    }
    cards
}

const fn build_nobles() -> [NobleTile; NOBLE_COUNT] {
    let blank = NobleTile {
        id: NobleId(0),
        requirement: GemTokens::new(),
        points: NOBLE_POINTS,
    };
    let mut nobles = [blank; NOBLE_COUNT];
    let mut i = 0;
    while i < NOBLE_COUNT {
        nobles[i] = NobleTile {
            id: NobleId(i as u8),
            requirement: printed_cost(RAW_NOBLES[i]),
            points: NOBLE_POINTS,
        };
        i += 1;
    }
    nobles
}

/// Look up a card by id.
#[must_use]
pub fn card_by_id(id: CardId) -> Option<&'static DevelopmentCard> {
    DEVELOPMENT_CARDS.get(usize::from(id.raw()))
}

/// Look up a noble by id.
#[must_use]
pub fn noble_by_id(id: NobleId) -> Option<&'static NobleTile> {
    NOBLE_TILES.get(usize::from(id.0))
}

/// Iterate over the cards of one tier in table order.
pub fn cards_in_tier(tier: Tier) -> impl Iterator<Item = &'static DevelopmentCard> {
    DEVELOPMENT_CARDS.iter().filter(move |c| c.tier == tier)
}
