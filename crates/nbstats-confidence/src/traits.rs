//! Core traits for confidence interval estimation
//!
//! Estimators hold only their configuration (the confidence level); the data
//! is passed per call so one estimator can be reused across many series.

use crate::types::ConfidenceInterval;
use nbstats_core::Result;

/// Confidence interval estimator over a single sample
pub trait ConfidenceIntervalEstimator {
    /// Calculate confidence interval for the given sample
    fn confidence_interval(&self, sample: &[f64]) -> Result<ConfidenceInterval>;

    /// Get the confidence level
    fn confidence_level(&self) -> f64;
}

/// Confidence interval estimator over paired observations
pub trait PairedConfidenceIntervalEstimator {
    /// Calculate confidence interval for paired samples
    ///
    /// # Arguments
    /// * `paired_data` - Paired sample data as (x, y) tuples
    fn confidence_interval_paired(
        &self,
        paired_data: &[(f64, f64)],
    ) -> Result<ConfidenceInterval>;

    /// Get the confidence level
    fn confidence_level(&self) -> f64;
}
