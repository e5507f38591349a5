use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nextlogin_core::LoginHistory;
use nextlogin_prediction::PredictionEngine;

fn bench_ensemble(c: &mut Criterion) {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
    let logins = (0..500)
        .map(|i| start + Duration::minutes(i * 1_447))
        .collect();
    let history = LoginHistory::new(logins).unwrap();
    let now = history.last() + Duration::hours(6);
    let engine = PredictionEngine::default();

    c.bench_function("ensemble_500_logins", |b| {
        b.iter(|| engine.predict(black_box(&history), black_box(now)))
    });
}

criterion_group!(benches, bench_ensemble);
criterion_main!(benches);
