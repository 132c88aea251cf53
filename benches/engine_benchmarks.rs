//! Benchmarks for legal move generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_core::board::Position;

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    // Starting position
    let mut position = Position::new();

    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| position.perft(black_box(depth)))
        });
    }

    // Castled middlegame, no special moves within three plies
    let mut middlegame = Position::from_fen(
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    );

    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            b.iter(|| middlegame.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let positions = [
        (
            "startpos",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
        ),
        (
            "middlegame",
            "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w - - 4 4",
        ),
        (
            "kiwipete",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1",
        ),
        ("in_check", "4r2k/8/8/R7/8/8/3B4/4K3 w - - 0 1"),
    ];

    for (name, fen) in positions {
        let mut position = Position::from_fen(fen);
        group.bench_function(name, |b| b.iter(|| black_box(position.legal_moves())));
    }

    group.finish();
}

fn bench_detection(c: &mut Criterion) {
    let position = Position::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1",
    );
    c.bench_function("detect_checks_and_pins", |b| {
        b.iter(|| black_box(position.detect_checks_and_pins()))
    });
}

criterion_group!(benches, bench_perft, bench_movegen, bench_detection);
criterion_main!(benches);
