//! Benchmarks for the keyword filter pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wayfarer_core::Record;
use wayfarer_search::KeywordMatcher;

fn sample_records(count: usize) -> Vec<Record> {
    let categories = ["Beach", "Temple", "Mountain", "Cultural", "City"];
    (0..count)
        .map(|i| Record {
            name: format!("Destination {i}"),
            country: "Greece".to_string(),
            category: categories[i % categories.len()].to_string(),
            description: "A quiet place with ancient streets and a calm harbour".to_string(),
            image_url: String::new(),
            price_range: "$$".to_string(),
            best_time: "Spring".to_string(),
        })
        .collect()
}

fn bench_filter_synonym_hit(c: &mut Criterion) {
    let matcher = KeywordMatcher::default();
    let records = sample_records(500);

    c.bench_function("filter_synonym_hit", |b| {
        b.iter(|| black_box(matcher.filter_all(black_box(&records), "seaside").len()))
    });
}

fn bench_filter_fallback_pass(c: &mut Criterion) {
    let matcher = KeywordMatcher::default();
    let records = sample_records(500);

    c.bench_function("filter_fallback_pass", |b| {
        b.iter(|| black_box(matcher.filter_all(black_box(&records), "mountain lodge").len()))
    });
}

criterion_group!(benches, bench_filter_synonym_hit, bench_filter_fallback_pass);
criterion_main!(benches);
