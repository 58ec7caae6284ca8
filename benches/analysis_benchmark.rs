/// Benchmark module for the aggregation engine.
/// Measures summarize and filter throughput over repeated copies of the
/// sample table so the groupings and sorts see more than eight rows.
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gamestats::analysis::{filter, summarize};
use gamestats::data::sample_games;
use gamestats::types::{FilterCriteria, GameRecord};

/// Tile the sample table out to `copies` repetitions, de-duplicating
/// titles so the uniqueness invariant still holds.
fn tiled_table(copies: usize) -> Vec<GameRecord> {
    let base = sample_games();
    let mut games = Vec::with_capacity(base.len() * copies);
    for i in 0..copies {
        for game in &base {
            let mut game = game.clone();
            game.title = format!("{} #{}", game.title, i);
            games.push(game);
        }
    }
    games
}

fn benchmark_summarize(c: &mut Criterion) {
    let games = tiled_table(128);
    c.bench_function("summarize_1k_rows", |b| {
        b.iter(|| summarize(black_box(&games)).unwrap())
    });
}

fn benchmark_filter(c: &mut Criterion) {
    let games = tiled_table(128);
    let criteria = FilterCriteria {
        genre: Some("RPG".to_string()),
        year: None,
    };
    c.bench_function("filter_1k_rows", |b| {
        b.iter(|| filter(black_box(&games), black_box(&criteria)))
    });
}

criterion_group!(benches, benchmark_summarize, benchmark_filter);
criterion_main!(benches);
