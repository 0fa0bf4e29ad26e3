//! Criterion benchmarks for the scoring engine.
//!
//! Benchmarks:
//!   - single observation scoring
//!   - parallel batch scoring (1K requests)
//!
//! Run with: cargo bench --bench scoring

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use climate_scorer::{Observation, ScoreRequest, ScoringEngine};

fn sample_requests(n: usize) -> Vec<ScoreRequest> {
    let regions = ["Mumbai, Maharashtra", "Chennai, Tamil Nadu", "Kochi, Kerala", "Pune, Maharashtra"];
    let events = ["Cyclone", "Flood", "Heatwave", "Drought"];

    (0..n)
        .map(|i| {
            let step = (i % 10) as f64;
            let observation = Observation {
                wind_speed: 10.0 * step,
                storm_activity: 9.0 * step,
                ..Observation::FALLBACK
            };
            ScoreRequest {
                region: regions[i % regions.len()].to_string(),
                event_type: events[i % events.len()].to_string(),
                observation: observation.into(),
                language: None,
            }
        })
        .collect()
}

fn bench_score_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_single");
    let engine = ScoringEngine::default();

    group.bench_function("fallback_mumbai_cyclone", |b| {
        b.iter(|| {
            black_box(engine.score_observation(
                black_box(&Observation::FALLBACK),
                black_box("Mumbai, Maharashtra"),
                black_box("Cyclone"),
            ))
        });
    });

    group.finish();
}

fn bench_score_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_batch");
    group.sample_size(50);

    let engine = ScoringEngine::default();
    let requests = sample_requests(1_000);

    group.bench_function("parallel_1k", |b| {
        b.iter(|| black_box(engine.score_batch_parallel(black_box(&requests))));
    });

    group.finish();
}

criterion_group!(benches, bench_score_single, bench_score_batch);
criterion_main!(benches);
