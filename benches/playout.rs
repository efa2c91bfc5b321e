//! Benchmarks for the turn engine.
//!
//! Measures legal action enumeration, session cloning and full greedy
//! playouts.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gem_engine::ai::{play_game, GreedyStrategy, RandomStrategy, Strategy, DEFAULT_MAX_TURNS};
use gem_engine::core::{GameRng, SessionOptions};
use gem_engine::rules::legal_actions;
use gem_engine::session::{create_session, Session};

fn midgame(players: usize) -> Session {
    let mut session =
        create_session(SessionOptions::new(players).all_ai(), GameRng::new(42)).unwrap();
    let greedy = GreedyStrategy::default();
    let strategies = vec![&greedy as &dyn Strategy; players];
    play_game(&mut session, &strategies, &mut GameRng::new(7), 20).unwrap();
    session
}

fn bench_legal_actions(c: &mut Criterion) {
    let session = midgame(4);

    c.bench_function("legal_actions_4p_midgame", |b| {
        b.iter(|| black_box(legal_actions(black_box(&session))))
    });
}

fn bench_session_clone(c: &mut Criterion) {
    let session = midgame(4);

    c.bench_function("session_clone", |b| b.iter(|| black_box(session.clone())));
}

fn bench_greedy_playout(c: &mut Criterion) {
    let greedy = GreedyStrategy::default();
    let strategies = [&greedy as &dyn Strategy, &greedy];

    c.bench_function("greedy_playout_2p", |b| {
        b.iter(|| {
            let mut session =
                create_session(SessionOptions::new(2).all_ai(), GameRng::new(42)).unwrap();
            let summary =
                play_game(&mut session, &strategies, &mut GameRng::new(1), DEFAULT_MAX_TURNS)
                    .unwrap();
            black_box(summary)
        })
    });
}

fn bench_random_playout(c: &mut Criterion) {
    let strategies = [&RandomStrategy as &dyn Strategy; 3];

    c.bench_function("random_playout_3p_200_turns", |b| {
        b.iter(|| {
            let mut session =
                create_session(SessionOptions::new(3).all_ai(), GameRng::new(42)).unwrap();
            black_box(play_game(&mut session, &strategies, &mut GameRng::new(1), 200).unwrap())
        })
    });
}

criterion_group!(
    benches,
    bench_legal_actions,
    bench_session_clone,
    bench_greedy_playout,
    bench_random_playout
);
criterion_main!(benches);
