//! Performance measurement for complete placement runs

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wordweave::WordPlacer;

const WORDS: [&str; 12] = [
    "stream", "treats", "master", "remote", "stereo", "orbits", "bristle", "lattice", "cellar",
    "radius", "signal", "lantern",
];

/// Measures time for one full run on a mid-sized grid
fn bench_place_words(c: &mut Criterion) {
    c.bench_function("place_words_15x15", |b| {
        b.iter(|| {
            let Ok(mut placer) = WordPlacer::new(15, 15, WORDS, 12345) else {
                return;
            };
            black_box(placer.place_words().placed_count());
        });
    });
}

/// Measures the densest-of-N convenience over repeated runs
fn bench_best_of_attempts(c: &mut Criterion) {
    c.bench_function("place_words_best_of_20", |b| {
        b.iter(|| {
            let Ok(mut placer) = WordPlacer::new(15, 15, WORDS, 12345) else {
                return;
            };
            black_box(placer.place_words_best_of(20).placed_count());
        });
    });
}

criterion_group!(benches, bench_place_words, bench_best_of_attempts);
criterion_main!(benches);
