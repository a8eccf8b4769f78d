//! Suffix trie construction and search benchmarks.
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sufx::trie::SuffixTrie;

const PROSE: &str = "It was the best of times, it was the worst of times, it was the age of \
wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
incredulity, it was the season of Light, it was the season of Darkness";

fn prose(len: usize) -> String {
    PROSE.chars().cycle().take(len).collect()
}

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");
    // Construction is quadratic, keep inputs small
    group.sample_size(20);

    for len in [64, 256, 1024] {
        let text = prose(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| SuffixTrie::construct(black_box(text)).unwrap())
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let trie = SuffixTrie::construct(&prose(1024)).unwrap();
    let mut group = c.benchmark_group("search");

    for query in ["it", "it was the", "season of Darkness", "not present"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, query| {
            b.iter(|| trie.search(black_box(query)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_construct, bench_search);
criterion_main!(benches);
