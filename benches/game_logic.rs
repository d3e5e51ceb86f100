use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{ActivePiece, Board, EngineConfig, Game, MoveOutcome, NullSink};
use blockfall::types::{Direction, PieceColor, PieceKind, Pos};

fn seeded_game() -> Game {
    let config = EngineConfig {
        seed: Some(12345),
        ..EngineConfig::default()
    };
    let mut game = Game::new(&config).expect("default config is valid");
    game.start();
    game
}

fn bench_tick(c: &mut Criterion) {
    let mut game = seeded_game();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if game.tick(black_box(16)).is_some() {
                game.drain_events();
            }
            if game.is_game_over() {
                game.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for row in 0..4 {
                for col in 0..10 {
                    board.set(Pos::new(col, row), Some(PieceColor::Cyan));
                }
            }
            board.clear_full_rows(&mut NullSink)
        })
    });
}

fn bench_attempt_move(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("attempt_move", |b| {
        b.iter(|| {
            let mut piece = ActivePiece::new(PieceKind::T, Pos::new(4, 10));
            piece.attempt_move(black_box(Direction::Left), &board);
            piece.attempt_move(black_box(Direction::Down), &board)
        })
    });
}

fn bench_attempt_rotate(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = ActivePiece::new(PieceKind::L, Pos::new(4, 10));

    c.bench_function("attempt_rotate", |b| {
        b.iter(|| piece.attempt_rotate(black_box(&board)))
    });
}

fn bench_drop_to_lock(c: &mut Criterion) {
    let mut game = seeded_game();

    c.bench_function("drop_piece_to_lock", |b| {
        b.iter(|| {
            while let MoveOutcome::Moved = game.gravity_tick() {}
            game.drain_events();
            if game.is_game_over() {
                game.restart();
            }
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_attempt_move,
    bench_attempt_rotate,
    bench_drop_to_lock
);
criterion_main!(benches);
