//! Card data: development cards, noble tiles, and the fixed tables.
//!
//! ## Key Types
//!
//! - `CardId` / `NobleId`: Positions in the static tables
//! - `Tier`: One of the three card groups
//! - `DevelopmentCard`: Cost, bonus color, prestige
//! - `NobleTile`: Bonus requirement worth 3 prestige

pub mod catalogue;
pub mod definition;

pub use catalogue::{card_by_id, cards_in_tier, noble_by_id, DEVELOPMENT_CARDS, NOBLE_TILES};
pub use definition::{CardId, DevelopmentCard, NobleId, NobleTile, Tier};
