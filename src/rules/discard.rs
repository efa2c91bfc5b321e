//! Token-cap discards.
//!
//! A turn that leaves the acting player above the token cap halts with a
//! pending discard. The discard must name exactly the overage, drawn from
//! tokens the player actually holds.

use crate::core::GemTokens;
use crate::error::DiscardError;
use crate::session::Session;

/// Tokens above the cap the current player holds, if any.
#[must_use]
pub fn overage(session: &Session) -> u8 {
    let total = session.current().tokens.total();
    let excess = total.saturating_sub(session.rules.token_cap);
    u8::try_from(excess).unwrap_or(u8::MAX)
}

/// Check a discard against the pending overage without changing anything.
pub fn validate_discard(session: &Session, bag: &GemTokens) -> Result<(), DiscardError> {
    let expected = session.pending_discard().ok_or(DiscardError::NothingPending)?;

    let actual = bag.total();
    if actual != u32::from(expected) {
        return Err(DiscardError::WrongTotal {
            expected: u32::from(expected),
            actual,
        });
    }

    let held = &session.current().tokens;
    for (gem, requested) in bag.iter() {
        if held.get(gem) < requested {
            return Err(DiscardError::Overdrawn {
                gem,
                held: held.get(gem),
                requested,
            });
        }
    }
    Ok(())
}
