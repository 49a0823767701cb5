use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameSnapshot, Session};
use blockfall::types::{Command, PieceKind, RotateDir};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(Some(12345));

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            if session.is_game_over() {
                session = Session::new(Some(12345));
            }
            black_box(session.on_tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut session = Session::new(Some(12345));

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if session.is_game_over() {
                session = Session::new(Some(12345));
            }
            black_box(session.on_command(Command::HardDrop));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = Session::new(Some(12345));
    session.on_command(Command::SoftDrop);
    session.on_command(Command::SoftDrop);

    c.bench_function("try_rotate", |b| {
        b.iter(|| black_box(session.try_rotate(RotateDir::Cw)))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let session = Session::new(Some(12345));
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| session.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
