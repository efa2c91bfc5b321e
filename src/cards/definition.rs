//! Development cards and noble tiles - static game data.
//!
//! Both are small immutable `Copy` values. The full set of each lives in
//! `cards::catalogue`; sessions hold copies, never references into a
//! registry.

use serde::{Deserialize, Serialize};

use crate::core::{Gem, GemCost};

/// Unique identifier for a development card (0-89).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Unique identifier for a noble tile (0-9).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NobleId(pub u8);

impl NobleId {
    /// Create a new noble ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NobleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Noble({})", self.0)
    }
}

/// Card tier. Higher tiers cost more and score more.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    One,
    Two,
    Three,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Tier; 3] = [Tier::One, Tier::Two, Tier::Three];

    /// Dense index (0-2).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Printed tier number (1-3).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tier {}", self.number())
    }
}

/// A development card.
///
/// Buying one grants its prestige points and a permanent one-token
/// discount (bonus) in its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DevelopmentCard {
    pub id: CardId,
    pub tier: Tier,
    /// Basic-color cost. Never contains gold.
    pub cost: GemCost,
    /// Color of the permanent discount this card grants.
    pub bonus: Gem,
    pub points: u8,
}

/// A noble tile, claimed automatically once a player's bonuses meet
/// its requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NobleTile {
    pub id: NobleId,
    /// Bonus counts required per color.
    pub requirement: GemCost,
    pub points: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_tier_numbering() {
        assert_eq!(Tier::One.index(), 0);
        assert_eq!(Tier::Three.number(), 3);
        assert_eq!(format!("{}", Tier::Two), "Tier 2");
    }
}
