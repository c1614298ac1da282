use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nbstats_confidence::{
    calculate_ci, ConfidenceIntervalEstimator, CorrelationCI, PairedConfidenceIntervalEstimator,
    StudentTMeanCI,
};
use rand::prelude::*;
use rand_distr::Normal;

/// Generate normal data
fn generate_normal_data(size: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

fn bench_correlation(c: &mut Criterion) {
    let mut group = c.benchmark_group("CorrelationCI");
    let estimator = CorrelationCI::default();

    group.bench_function("coefficient", |b| {
        b.iter(|| estimator.interval(black_box(0.6322508448491246), black_box(84)))
    });

    // 84 weekly and 582 daily observations
    for &size in &[84, 582] {
        let x = generate_normal_data(size, 0.0, 1.0, 42);
        let noise = generate_normal_data(size, 0.0, 1.0, 43);
        let pairs: Vec<(f64, f64)> = x
            .iter()
            .zip(&noise)
            .map(|(&a, &e)| (a, 0.6 * a + e))
            .collect();

        group.bench_with_input(BenchmarkId::new("paired", size), &pairs, |b, pairs| {
            b.iter(|| estimator.confidence_interval_paired(black_box(pairs)))
        });
    }

    group.finish();
}

fn bench_mean(c: &mut Criterion) {
    let mut group = c.benchmark_group("StudentTMeanCI");
    let estimator = StudentTMeanCI::default();

    for &size in &[5, 50, 500, 5000] {
        let data = generate_normal_data(size, 100.0, 15.0, 42);

        group.bench_with_input(BenchmarkId::new("numeric", size), &data, |b, data| {
            b.iter(|| estimator.confidence_interval(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("formatted", size), &data, |b, data| {
            b.iter(|| calculate_ci(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_correlation, bench_mean);
criterion_main!(benches);
