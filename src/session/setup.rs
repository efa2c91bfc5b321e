//! Building a fresh session.

use im::Vector;
use tracing::debug;

use crate::cards::{cards_in_tier, DevelopmentCard, NobleTile, Tier, NOBLE_TILES};
use crate::core::{GameRng, GemTokens, PlayerMap, RuleConfig, SessionOptions, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::SetupError;

use super::state::{Market, PlayerState, Session, TierRow};

/// Create a new session.
///
/// Decks are shuffled tier by tier, then nobles, all from `rng`; the rng
/// then moves into the session. The same seed always yields the same
/// session.
///
/// ## Example
///
/// ```
/// use gem_engine::core::{GameRng, Gem, SessionOptions};
/// use gem_engine::session::create_session;
///
/// let session = create_session(SessionOptions::new(2), GameRng::new(42)).unwrap();
/// assert_eq!(session.token_supply.get(Gem::Ruby), 4);
/// assert_eq!(session.token_supply.get(Gem::Gold), 5);
/// assert_eq!(session.nobles.len(), 3);
/// ```
pub fn create_session(options: SessionOptions, mut rng: GameRng) -> Result<Session, SetupError> {
    let SessionOptions {
        player_count,
        names,
        ai_flags,
        starting_player,
        rules,
    } = options;

    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return Err(SetupError::PlayerCount(player_count));
    }
    if names.len() != player_count {
        return Err(SetupError::NameCount {
            expected: player_count,
            actual: names.len(),
        });
    }
    if ai_flags.len() != player_count {
        return Err(SetupError::AiFlagCount {
            expected: player_count,
            actual: ai_flags.len(),
        });
    }
    if starting_player.index() >= player_count {
        return Err(SetupError::StartingPlayer(starting_player));
    }
    let gems = RuleConfig::gems_per_color(player_count).ok_or(SetupError::PlayerCount(player_count))?;

    let rows = Tier::ALL.map(|tier| {
        let mut deck: Vec<DevelopmentCard> = cards_in_tier(tier).copied().collect();
        rng.shuffle(&mut deck);
        TierRow::deal(deck)
    });

    let mut nobles: Vec<NobleTile> = NOBLE_TILES.to_vec();
    rng.shuffle(&mut nobles);
    let nobles: Vector<NobleTile> = nobles.into_iter().take(player_count + 1).collect();

    let players: PlayerMap<PlayerState> = names
        .into_iter()
        .zip(ai_flags)
        .map(|(name, is_ai)| PlayerState::new(name, is_ai))
        .collect();

    debug!(
        player_count,
        seed = rng.seed(),
        starting_player = starting_player.index(),
        "session created"
    );

    Ok(Session::assemble(
        rules,
        players,
        Market::new(rows),
        GemTokens::uniform(gems, rules.gold_supply),
        nobles,
        starting_player,
        rng,
    ))
}
