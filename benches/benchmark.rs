// Throughput benchmarks for the recommendation engine
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cinerec_core::{CatalogEntry, Recommender};

const GENRES: &[&str] = &[
    "Animation Comedy Family",
    "Action Crime Drama",
    "Horror Thriller",
    "Comedy Romance",
    "Science Fiction Adventure",
    "Documentary History",
];

const LANGUAGES: &[&str] = &["en", "fr", "es", "it", "ja", "de"];

const COUNTRIES: &[&str] = &[
    "United States of America",
    "France",
    "Spain",
    "Italy",
    "Japan",
    "Germany",
];

fn synthetic_catalog(size: usize) -> Vec<CatalogEntry> {
    (0..size)
        .map(|i| CatalogEntry {
            title: format!("Movie Number {i}"),
            revenue: Some((i as f64) * 1_000_000.0),
            budget: Some((i as f64) * 250_000.0),
            return_ratio: Some(4.0),
            genres: Some(GENRES[i % GENRES.len()].to_string()),
            original_language: Some(LANGUAGES[i % LANGUAGES.len()].to_string()),
            production_countries: Some(COUNTRIES[i % COUNTRIES.len()].to_string()),
            vote_average: Some(5.0 + (i % 50) as f64 / 10.0),
        })
        .collect()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100, 1000, 10000].iter() {
        let entries = synthetic_catalog(*size);
        group.bench_with_input(BenchmarkId::new("cinerec", size), size, |b, _| {
            b.iter(|| {
                let recommender = Recommender::build(black_box(&entries)).unwrap();
                black_box(recommender);
            });
        });
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for size in [1000, 10000].iter() {
        let entries = synthetic_catalog(*size);
        let recommender = Recommender::build(&entries).unwrap();
        group.bench_with_input(BenchmarkId::new("cinerec", size), size, |b, _| {
            b.iter(|| {
                let results = recommender
                    .recommend(black_box("Movie Number 42"), 5)
                    .unwrap();
                black_box(results);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_recommend);
criterion_main!(benches);
