//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use gem_engine::cards::{DevelopmentCard, DEVELOPMENT_CARDS};
use gem_engine::core::{GameRng, SessionOptions};
use gem_engine::session::{create_session, Session};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize test logging once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// A fresh all-human session.
pub fn new_session(players: usize, seed: u64) -> Session {
    init_logging();
    create_session(SessionOptions::new(players), GameRng::new(seed)).unwrap()
}

/// The first catalogue card worth exactly `points`.
pub fn card_worth(points: u8) -> DevelopmentCard {
    *DEVELOPMENT_CARDS
        .iter()
        .find(|c| c.points == points)
        .unwrap()
}
