//! Confidence intervals for Pearson correlation coefficients
//!
//! The coefficient is mapped into Fisher z-space, a symmetric normal interval
//! is built there, and both bounds are mapped back with the inverse
//! transform. Because the inverse is monotonic the bounds stay ordered.

use crate::{
    fisher::{fisher_standard_error, fisher_z, inverse_fisher_z},
    ConfidenceInterval, ConfidenceLevel, PairedConfidenceIntervalEstimator,
};
use nbstats_core::{
    descriptive::pearson_correlation, two_sided_critical_value, CriticalDistribution, Result,
};
use tracing::{debug, instrument, warn};

/// Fisher-transform confidence interval estimator for correlations
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CorrelationCI {
    confidence_level: ConfidenceLevel,
}

impl CorrelationCI {
    /// Create a new estimator, rejecting levels outside (0, 1)
    pub fn new(confidence_level: f64) -> Result<Self> {
        Ok(Self::with_level(ConfidenceLevel::new(confidence_level)?))
    }

    /// Create a new estimator from an already validated level
    pub fn with_level(confidence_level: ConfidenceLevel) -> Self {
        Self { confidence_level }
    }

    /// Interval for a coefficient `r` observed on `n` pairs
    ///
    /// The returned interval's `estimate` is `r` itself.
    #[instrument(level = "debug", skip(self))]
    pub fn interval(&self, r: f64, n: usize) -> Result<ConfidenceInterval> {
        let z = fisher_z(r).inspect_err(|e| warn!(r, "rejected correlation: {e}"))?;
        let std_error =
            fisher_standard_error(n).inspect_err(|e| warn!(n, "rejected sample size: {e}"))?;

        let level = self.confidence_level.value();
        let z_critical = two_sided_critical_value(CriticalDistribution::Normal, level)?;
        debug!(z, std_error, z_critical, "Fisher interval in z-space");

        let margin = z_critical * std_error;
        let lower = inverse_fisher_z(z - margin);
        let upper = inverse_fisher_z(z + margin);

        Ok(ConfidenceInterval::new(lower, upper, r, level))
    }
}

impl PairedConfidenceIntervalEstimator for CorrelationCI {
    #[instrument(level = "debug", skip_all, fields(n = paired_data.len()))]
    fn confidence_interval_paired(&self, paired_data: &[(f64, f64)]) -> Result<ConfidenceInterval> {
        let (x, y): (Vec<f64>, Vec<f64>) = paired_data.iter().copied().unzip();
        let r = pearson_correlation(&x, &y)?;
        debug!(r, "sample correlation");
        self.interval(r, paired_data.len())
    }

    fn confidence_level(&self) -> f64 {
        self.confidence_level.value()
    }
}
