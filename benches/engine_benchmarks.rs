//! Benchmarks for move generation, evaluation and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use quince::{Board, GenMode, Search, Side, MATE_SCORE};

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut board = Board::new();
    group.bench_function("startpos_all", |b| {
        b.iter(|| board.generate_moves(black_box(Side::White), None, GenMode::All))
    });
    group.bench_function("startpos_captures", |b| {
        b.iter(|| board.generate_moves(black_box(Side::White), None, GenMode::CapturesOnly))
    });

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("evaluate_startpos", |b| {
        b.iter(|| board.evaluate(black_box(Side::White)))
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for depth in 1..=3u32 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            let mut board = Board::new();
            b.iter(|| {
                let mut search = Search::new(&mut board);
                search.search(Side::White, None, -MATE_SCORE, MATE_SCORE, black_box(depth))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_evaluate, bench_search);
criterion_main!(benches);
