//! Benchmarks for position-engine performance: move generation and perft.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_position::board::Position;

fn perft(pos: &mut Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = pos.generate_legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for &m in moves.iter() {
        pos.make(m);
        nodes += perft(pos, depth - 1);
        pos.unmake();
    }
    nodes
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut startpos =
        Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| perft(&mut startpos, black_box(depth)))
        });
    }

    let mut kiwipete = Position::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| perft(&mut kiwipete, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos =
        Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    let mut startpos_mut = startpos.clone();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos_mut.generate_legal_moves()))
    });

    let mut middlegame = Position::from_fen(
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
    )
    .unwrap();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.generate_legal_moves()))
    });

    let mut kiwipete = Position::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(kiwipete.generate_legal_moves()))
    });

    group.finish();
}

fn bench_make_unmake(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_unmake");

    let mut pos =
        Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    let moves = pos.generate_legal_moves();
    let e4 = moves
        .iter()
        .copied()
        .find(|m| m.to_string() == "e2e4")
        .unwrap();
    group.bench_function("e2e4_round_trip", |b| {
        b.iter(|| {
            pos.make(black_box(e4));
            pos.unmake();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_make_unmake);
criterion_main!(benches);
