use std::collections::HashMap;

use criterion::{criterion_group, criterion_main, Criterion};
use rush_processor::{model::round::score_round, utils::test_utils::generate_random_round};

fn score(n_players: usize, n_stats: usize) {
    let (rules, stats) = generate_random_round(n_players, n_stats, 42);
    let land = HashMap::new();

    score_round(&rules, &stats, &land).expect("Expected scoring to succeed");
}

fn group_call(c: &mut Criterion) {
    let mut group = c.benchmark_group("round-scoring");
    group.sample_size(25);
    group.bench_function("score: p=50,s=10", |b| b.iter(|| score(50, 10)));
    group.bench_function("score: p=200,s=20", |b| b.iter(|| score(200, 20)));
    group.bench_function("score: p=500,s=30", |b| b.iter(|| score(500, 30)));
    group.finish();
}

criterion_group!(benches, group_call);
criterion_main!(benches);
