//! Search engine benchmarks over the builtin seed catalog

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use uicatalog::{builtin_catalog, Provider, RegistrySearchExt, SearchEngine, SearchQuery};

fn seed_engine() -> SearchEngine {
    Arc::new(builtin_catalog().expect("seed catalog must load")).search_engine()
}

fn bench_exact_query(c: &mut Criterion) {
    let engine = seed_engine();
    let query = SearchQuery::new("button").with_limit(10);
    c.bench_function("search_exact_term", |b| {
        b.iter(|| engine.search(black_box(&query)).unwrap())
    });
}

fn bench_typo_query(c: &mut Criterion) {
    let engine = seed_engine();
    let query = SearchQuery::new("buttn").with_limit(10);
    c.bench_function("search_fuzzy_term", |b| {
        b.iter(|| engine.search(black_box(&query)).unwrap())
    });
}

fn bench_multi_word_query(c: &mut Criterion) {
    let engine = seed_engine();
    let query = SearchQuery::new("animated gradient background").with_limit(10);
    c.bench_function("search_multi_word", |b| {
        b.iter(|| engine.search(black_box(&query)).unwrap())
    });
}

fn bench_browse_query(c: &mut Criterion) {
    let engine = seed_engine();
    let query = SearchQuery::new("")
        .with_provider(Provider::Shadcn)
        .with_limit(20);
    c.bench_function("browse_provider", |b| {
        b.iter(|| engine.search(black_box(&query)).unwrap())
    });
}

fn bench_engine_build(c: &mut Criterion) {
    let registry = Arc::new(builtin_catalog().expect("seed catalog must load"));
    c.bench_function("engine_build", |b| {
        b.iter(|| SearchEngine::new(black_box(registry.clone())))
    });
}

criterion_group!(
    benches,
    bench_exact_query,
    bench_typo_query,
    bench_multi_word_query,
    bench_browse_query,
    bench_engine_build
);
criterion_main!(benches);
