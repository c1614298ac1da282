//! High-level notebook API
//!
//! Free functions with the call shapes used in analysis notebooks. They
//! build the matching estimator for a single call and return plain tuples.

use crate::{ConfidenceInterval, ConfidenceIntervalEstimator, CorrelationCI, StudentTMeanCI};
use nbstats_core::Result;

/// Confidence level used when the caller does not pick one
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Decimal places of the text bounds returned by [`calculate_ci`]
pub const NOTEBOOK_DECIMALS: usize = 2;

/// Confidence interval for a Pearson correlation via the Fisher transform
///
/// # Arguments
/// * `r` - Sample correlation coefficient, strictly between -1 and 1
/// * `n` - Number of pairs the coefficient was computed from, at least 4
/// * `confidence_level` - Confidence level in (0, 1)
///
/// # Example
/// ```rust
/// use nbstats_confidence::correlation_confidence_interval;
///
/// // 84 weekly observations
/// let (lower, upper) = correlation_confidence_interval(0.6322508448491246, 84, 0.95).unwrap();
/// println!("Confidence interval: ({lower:.4}, {upper:.4})");
/// assert!(lower < 0.6322508448491246 && 0.6322508448491246 < upper);
///
/// assert!(correlation_confidence_interval(1.0, 84, 0.95).is_err());
/// ```
pub fn correlation_confidence_interval(
    r: f64,
    n: usize,
    confidence_level: f64,
) -> Result<(f64, f64)> {
    Ok(CorrelationCI::new(confidence_level)?.interval(r, n)?.bounds())
}

/// [`correlation_confidence_interval`] at [`DEFAULT_CONFIDENCE_LEVEL`]
pub fn correlation_confidence_interval_95(r: f64, n: usize) -> Result<(f64, f64)> {
    correlation_confidence_interval(r, n, DEFAULT_CONFIDENCE_LEVEL)
}

/// Student-t confidence interval for the mean at an explicit level
pub fn mean_confidence_interval(data: &[f64], confidence_level: f64) -> Result<ConfidenceInterval> {
    StudentTMeanCI::new(confidence_level)?.confidence_interval(data)
}

/// 95% confidence interval for the mean of `metric_list`, as 2-decimal text
///
/// The level is fixed; use [`mean_confidence_interval`] for other levels or
/// numeric bounds.
///
/// # Example
/// ```rust
/// use nbstats_confidence::calculate_ci;
///
/// let (lower, upper) = calculate_ci(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!((lower.as_str(), upper.as_str()), ("1.04", "4.96"));
/// ```
pub fn calculate_ci(metric_list: &[f64]) -> Result<(String, String)> {
    let interval = StudentTMeanCI::default().formatted(metric_list, NOTEBOOK_DECIMALS)?;
    Ok(interval.into())
}
