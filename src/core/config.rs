//! Session configuration types.
//!
//! Callers configure a game at startup by providing:
//! - `RuleConfig`: Numeric rule constants (token cap, reserve cap, ...)
//! - `SessionOptions`: Seats, names, AI flags, starting player, rules
//!
//! `RuleConfig::default()` is the standard rule set.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 4;

/// Numeric rule constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Most tokens a player may hold at the end of a turn.
    pub token_cap: u32,
    /// Most cards a player may hold in reserve.
    pub reserve_cap: usize,
    /// Prestige that starts the final round.
    pub trigger_prestige: u32,
    /// Supply a color needs before two of it may be taken at once.
    pub take_same_min_supply: u8,
    /// Gold tokens in the supply at setup.
    pub gold_supply: u8,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            token_cap: 10,
            reserve_cap: 3,
            trigger_prestige: 15,
            take_same_min_supply: 4,
            gold_supply: 5,
        }
    }
}

impl RuleConfig {
    /// Basic-color tokens per color for a given table size.
    ///
    /// Returns `None` for unsupported player counts.
    #[must_use]
    pub fn gems_per_color(player_count: usize) -> Option<u8> {
        match player_count {
            2 => Some(4),
            3 => Some(5),
            4 => Some(7),
            _ => None,
        }
    }
}

/// Options for creating a session.
///
/// ## Example
///
/// ```
/// use gem_engine::core::{PlayerId, SessionOptions};
///
/// let options = SessionOptions::new(3)
///     .with_names(["Ada", "Brin", "Cato"])
///     .with_ai_flags([false, true, true])
///     .with_starting_player(PlayerId::new(1));
///
/// assert_eq!(options.player_count, 3);
/// assert_eq!(options.names[0], "Ada");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Number of seats (2-4).
    pub player_count: usize,
    /// Display name per seat.
    pub names: Vec<String>,
    /// Whether each seat is driven by an AI.
    pub ai_flags: Vec<bool>,
    /// Seat that takes the first turn.
    pub starting_player: PlayerId,
    /// Rule constants.
    pub rules: RuleConfig,
}

impl SessionOptions {
    /// Create options with default names ("Player 1", ...) and human seats.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            names: (1..=player_count).map(|i| format!("Player {i}")).collect(),
            ai_flags: vec![false; player_count],
            starting_player: PlayerId::new(0),
            rules: RuleConfig::default(),
        }
    }

    /// Set seat names.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set which seats are AI-driven.
    #[must_use]
    pub fn with_ai_flags(mut self, flags: impl IntoIterator<Item = bool>) -> Self {
        self.ai_flags = flags.into_iter().collect();
        self
    }

    /// Mark every seat as AI-driven.
    #[must_use]
    pub fn all_ai(mut self) -> Self {
        self.ai_flags = vec![true; self.player_count];
        self
    }

    /// Set the seat that acts first.
    #[must_use]
    pub fn with_starting_player(mut self, player: PlayerId) -> Self {
        self.starting_player = player;
        self
    }

    /// Override rule constants.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleConfig) -> Self {
        self.rules = rules;
        self
    }
}
