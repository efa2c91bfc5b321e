//! Gem colors and sparse token bags.
//!
//! ## Gem
//!
//! The six token colors. Five are "basic" colors that appear on card costs
//! and bonuses; gold is a wildcard that only exists as a token.
//!
//! ## GemTokens
//!
//! A sparse bag keyed by `Gem`. A missing color reads as zero and zero
//! counts are never reported by iteration or serialization, so two bags
//! are equal exactly when they hold the same non-zero counts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Token / bonus color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gem {
    Emerald,
    Sapphire,
    Ruby,
    Diamond,
    Onyx,
    /// Wildcard token. Never a cost key or a card bonus.
    Gold,
}

impl Gem {
    /// Number of gem colors, gold included.
    pub const COUNT: usize = 6;

    /// Every color, gold last.
    pub const ALL: [Gem; 6] = [
        Gem::Emerald,
        Gem::Sapphire,
        Gem::Ruby,
        Gem::Diamond,
        Gem::Onyx,
        Gem::Gold,
    ];

    /// The five colors that appear on costs and bonuses.
    pub const BASIC: [Gem; 5] = [
        Gem::Emerald,
        Gem::Sapphire,
        Gem::Ruby,
        Gem::Diamond,
        Gem::Onyx,
    ];

    /// Dense index of this color (0-5).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Check if this is the gold wildcard.
    #[must_use]
    pub const fn is_gold(self) -> bool {
        matches!(self, Gem::Gold)
    }

    /// Lowercase color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Gem::Emerald => "emerald",
            Gem::Sapphire => "sapphire",
            Gem::Ruby => "ruby",
            Gem::Diamond => "diamond",
            Gem::Onyx => "onyx",
            Gem::Gold => "gold",
        }
    }
}

impl std::fmt::Display for Gem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sparse token bag over the six gem colors.
///
/// Backed by a dense array so it stays `Copy`; the sparse view is what
/// callers observe through `iter`, `len` and serde.
///
/// ## Example
///
/// ```
/// use gem_engine::core::{Gem, GemTokens};
///
/// let mut bag = GemTokens::new().with(Gem::Ruby, 2);
/// bag.add(Gem::Gold, 1);
///
/// assert_eq!(bag.get(Gem::Ruby), 2);
/// assert_eq!(bag.get(Gem::Onyx), 0);
/// assert_eq!(bag.total(), 3);
/// assert_eq!(bag.len(), 2);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "BTreeMap<Gem, u8>", from = "BTreeMap<Gem, u8>")]
pub struct GemTokens {
    counts: [u8; Gem::COUNT],
}

/// A card cost or noble requirement. Never carries gold.
pub type GemCost = GemTokens;

impl GemTokens {
    /// Create an empty bag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; Gem::COUNT],
        }
    }

    /// Create a bag from dense counts in `Gem::ALL` order.
    #[must_use]
    pub const fn from_counts(counts: [u8; Gem::COUNT]) -> Self {
        Self { counts }
    }

    /// Create a bag with `count` of every basic color and `gold` gold.
    #[must_use]
    pub const fn uniform(count: u8, gold: u8) -> Self {
        Self {
            counts: [count, count, count, count, count, gold],
        }
    }

    /// Builder-style set.
    #[must_use]
    pub fn with(mut self, gem: Gem, count: u8) -> Self {
        self.set(gem, count);
        self
    }

    /// Count for a color (zero when absent).
    #[must_use]
    pub const fn get(&self, gem: Gem) -> u8 {
        self.counts[gem.index()]
    }

    /// Set the count for a color.
    pub fn set(&mut self, gem: Gem, count: u8) {
        self.counts[gem.index()] = count;
    }

    /// Add tokens of a color.
    pub fn add(&mut self, gem: Gem, count: u8) {
        self.counts[gem.index()] = self.counts[gem.index()].saturating_add(count);
    }

    /// Remove tokens of a color, stopping at zero.
    pub fn remove(&mut self, gem: Gem, count: u8) {
        self.counts[gem.index()] = self.counts[gem.index()].saturating_sub(count);
    }

    /// Add every count of `other`.
    pub fn add_all(&mut self, other: &GemTokens) {
        for (gem, count) in other.iter() {
            self.add(gem, count);
        }
    }

    /// Remove every count of `other`, stopping at zero per color.
    pub fn remove_all(&mut self, other: &GemTokens) {
        for (gem, count) in other.iter() {
            self.remove(gem, count);
        }
    }

    /// Total number of tokens in the bag.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }

    /// Number of colors with a non-zero count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Check if the bag holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Check if every count in `other` is covered by this bag.
    #[must_use]
    pub fn covers(&self, other: &GemTokens) -> bool {
        other.iter().all(|(gem, count)| self.get(gem) >= count)
    }

    /// Iterate over non-zero `(color, count)` entries in `Gem::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Gem, u8)> + '_ {
        Gem::ALL
            .iter()
            .map(move |&gem| (gem, self.get(gem)))
            .filter(|&(_, count)| count > 0)
    }
}

impl std::fmt::Debug for GemTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl FromIterator<(Gem, u8)> for GemTokens {
    fn from_iter<I: IntoIterator<Item = (Gem, u8)>>(iter: I) -> Self {
        let mut bag = GemTokens::new();
        for (gem, count) in iter {
            bag.add(gem, count);
        }
        bag
    }
}

impl From<GemTokens> for BTreeMap<Gem, u8> {
    fn from(bag: GemTokens) -> Self {
        bag.iter().collect()
    }
}

impl From<BTreeMap<Gem, u8>> for GemTokens {
    fn from(map: BTreeMap<Gem, u8>) -> Self {
        map.into_iter().collect()
    }
}
