//! Criterion benchmarks for wordgraph.
//!
//! Covers graph construction and the query engines:
//! - Text analysis and graph building
//! - Bridge-word lookup and text generation
//! - Dijkstra shortest paths
//! - Random walks

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;
use wordgraph::graph::{GraphBuilder, WordGraph};
use wordgraph::query::{RandomWalker, ShortestPathEngine, TextGenerator, bridge_words};

/// Generate a benchmark corpus of `count` words drawn from a small vocabulary.
fn generate_test_text(count: usize) -> String {
    let words = [
        "the", "graph", "word", "edge", "node", "path", "short", "random", "walk", "bridge",
        "text", "new", "life", "seek", "out", "strange", "worlds", "explore", "weight", "query",
        "source", "target", "follow", "again", "and",
    ];

    let mut text = Vec::with_capacity(count);
    for i in 0..count {
        let word_idx = (i * 7 + (i / 3) * 13) % words.len(); // Pseudo-random distribution
        text.push(words[word_idx]);
    }

    text.join(" ")
}

fn build_graph(words: usize) -> WordGraph {
    GraphBuilder::new()
        .build_text(&generate_test_text(words))
        .unwrap()
}

/// Benchmark tokenization and graph construction.
fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");
    let builder = GraphBuilder::new();

    for size in [1_000, 10_000] {
        let text = generate_test_text(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("build_text_{size}"), |b| {
            b.iter(|| black_box(builder.build_text(black_box(&text)).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark bridge words and text generation.
fn bench_bridge(c: &mut Criterion) {
    let mut group = c.benchmark_group("bridge");
    let graph = build_graph(10_000);

    group.bench_function("bridge_words", |b| {
        b.iter(|| black_box(bridge_words(&graph, black_box("the"), black_box("word"))))
    });

    let generator = TextGenerator::new(&graph);
    let input = generate_test_text(50);
    let mut rng = StdRng::seed_from_u64(42);
    group.bench_function("generate_50_words", |b| {
        b.iter(|| black_box(generator.generate(black_box(&input), &mut rng).unwrap()))
    });

    group.finish();
}

/// Benchmark shortest-path search.
fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    let graph = build_graph(10_000);
    let engine = ShortestPathEngine::new(&graph);

    group.bench_function("single_pair", |b| {
        b.iter(|| black_box(engine.shortest_path(black_box("the"), black_box("and"))))
    });

    group.bench_function("single_source", |b| {
        b.iter(|| black_box(engine.paths_from(black_box("the")).unwrap()))
    });

    group.finish();
}

/// Benchmark random walks.
fn bench_random_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_walk");
    let graph = build_graph(10_000);
    let walker = RandomWalker::new(&graph);
    let mut rng = StdRng::seed_from_u64(7);

    group.bench_function("walk", |b| {
        b.iter(|| black_box(walker.walk(&mut rng).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_graph_build,
    bench_bridge,
    bench_shortest_path,
    bench_random_walk
);
criterion_main!(benches);
