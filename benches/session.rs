//! Benchmarks for a full gesture: build a path, then clear it with gravity.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dots_engine::{DotsConfig, GameSession, GameType};

/// Drag across every cell, snake order, on a single-colour board.
fn full_board_gesture(session: &mut GameSession, size: usize) {
    for i in 0..size * size {
        let row = i / size;
        let col = if row % 2 == 0 { i % size } else { size - 1 - i % size };
        black_box(session.add_token(row, col).ok());
    }
    session.finish_move();
}

fn bench_gestures(c: &mut Criterion) {
    let config = DotsConfig::default().with_initial_moves(i32::MAX);
    let cells = config.cell_count();

    c.bench_function("gesture_full_board_6x6", |b| {
        let mut session = GameSession::new(config.clone(), GameType::Moves, 1);
        b.iter(|| {
            session.restore_board(&vec![0; cells]).ok();
            full_board_gesture(&mut session, 6);
        });
    });

    c.bench_function("gesture_random_touches_6x6", |b| {
        let mut session = GameSession::new(config.clone(), GameType::Moves, 2);
        b.iter(|| {
            for row in 0..6 {
                black_box(session.add_token(row, row).ok());
            }
            session.finish_move();
        });
    });
}

criterion_group!(benches, bench_gestures);
criterion_main!(benches);
