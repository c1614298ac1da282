//! Fisher z-transformation of correlation coefficients
//!
//! `z = atanh(r)` is approximately normal with standard error
//! `1 / sqrt(n - 3)`, which makes symmetric intervals in z-space valid.

use nbstats_core::{Error, Result};

/// Smallest sample size for which the Fisher standard error is defined
pub const MIN_SAMPLE_SIZE: usize = 4;

/// Forward Fisher transform `0.5 * ln((1 + r) / (1 - r))`
///
/// `r` must lie strictly inside (-1, 1); at `r = 1` the transform divides
/// by zero and at `r = -1` it diverges.
pub fn fisher_z(r: f64) -> Result<f64> {
    if !r.is_finite() || r <= -1.0 || r >= 1.0 {
        return Err(Error::InvalidInput(format!(
            "Correlation coefficient {r} must be strictly between -1 and 1"
        )));
    }
    Ok(0.5 * ((1.0 + r) / (1.0 - r)).ln())
}

/// Inverse Fisher transform `(e^{2z} - 1) / (e^{2z} + 1)`
///
/// Evaluated as `tanh(z)`, which equals the ratio above but stays finite
/// for large `|z|` where `e^{2z}` overflows.
pub fn inverse_fisher_z(z: f64) -> f64 {
    z.tanh()
}

/// Standard error of `z` for a sample of `n` pairs
pub fn fisher_standard_error(n: usize) -> Result<f64> {
    if n < MIN_SAMPLE_SIZE {
        return Err(Error::insufficient_data(
            MIN_SAMPLE_SIZE,
            n,
            "Fisher standard error",
        ));
    }
    Ok(1.0 / ((n - 3) as f64).sqrt())
}
