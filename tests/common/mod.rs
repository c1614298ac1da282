//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_abs_diff_eq;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};

/// Install a test-writer subscriber so estimator spans and events are exercised
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Deterministic generator for simulation tests
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Draw `n` values from a normal distribution with the given mean and standard deviation
pub fn normal_sample(rng: &mut ChaCha8Rng, n: usize, mean: f64, std: f64) -> Vec<f64> {
    (0..n)
        .map(|_| {
            let z: f64 = StandardNormal.sample(rng);
            mean + std * z
        })
        .collect()
}

/// Draw `n` pairs from a standard bivariate normal with correlation `rho`
pub fn correlated_pairs(rng: &mut ChaCha8Rng, n: usize, rho: f64) -> Vec<(f64, f64)> {
    let scale = (1.0 - rho * rho).sqrt();
    (0..n)
        .map(|_| {
            let x: f64 = StandardNormal.sample(rng);
            let e: f64 = StandardNormal.sample(rng);
            (x, rho * x + scale * e)
        })
        .collect()
}
