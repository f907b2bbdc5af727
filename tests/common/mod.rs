//! Shared utilities for integration tests
#![allow(dead_code)]

pub use approx::assert_abs_diff_eq;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Seeded generator so every run draws the same samples
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Draw `n` values from N(mean, sd²)
pub fn normal_sample(rng: &mut ChaCha8Rng, mean: f64, sd: f64, n: usize) -> Vec<f64> {
    let normal = Normal::new(mean, sd).expect("valid normal parameters");
    (0..n).map(|_| normal.sample(rng)).collect()
}

/// Draw `n` values from a logistic distribution by inverting its CDF
pub fn logistic_sample(rng: &mut ChaCha8Rng, loc: f64, scale: f64, n: usize) -> Vec<f64> {
    (0..n)
        .map(|_| {
            let u: f64 = rng.gen_range(1e-12..1.0 - 1e-12);
            loc + scale * (u / (1.0 - u)).ln()
        })
        .collect()
}

/// Route `tracing` output through the test harness; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
