//! Student-t confidence intervals for the mean

use crate::{ConfidenceInterval, ConfidenceIntervalEstimator, ConfidenceLevel, FormattedInterval};
use nbstats_core::{
    descriptive::{ensure_finite, mean, standard_error_of_mean},
    two_sided_critical_value, CriticalDistribution, Error, Result,
};
use tracing::{debug, instrument, warn};

/// Confidence interval for the population mean using the t-distribution
///
/// Uses the sample mean, the standard error of the mean (n - 1 variance
/// denominator) and a two-sided t critical value with n - 1 degrees of
/// freedom.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StudentTMeanCI {
    confidence_level: ConfidenceLevel,
}

impl StudentTMeanCI {
    /// Create a new estimator, rejecting levels outside (0, 1)
    pub fn new(confidence_level: f64) -> Result<Self> {
        Ok(Self::with_level(ConfidenceLevel::new(confidence_level)?))
    }

    /// Create a new estimator from an already validated level
    pub fn with_level(confidence_level: ConfidenceLevel) -> Self {
        Self { confidence_level }
    }

    /// Interval with both bounds rendered to `decimals` places
    pub fn formatted(&self, sample: &[f64], decimals: usize) -> Result<FormattedInterval> {
        Ok(self.confidence_interval(sample)?.formatted(decimals))
    }
}

impl ConfidenceIntervalEstimator for StudentTMeanCI {
    #[instrument(level = "debug", skip_all, fields(n = sample.len()))]
    fn confidence_interval(&self, sample: &[f64]) -> Result<ConfidenceInterval> {
        if sample.len() < 2 {
            let err = Error::insufficient_data(2, sample.len(), "Mean confidence interval");
            warn!("{err}");
            return Err(err);
        }
        ensure_finite(sample, "metric values").inspect_err(|e| warn!("{e}"))?;

        let estimate = mean(sample)?;
        let std_error = standard_error_of_mean(sample)?;

        let level = self.confidence_level.value();
        let degrees_of_freedom = (sample.len() - 1) as f64;
        let t_critical = two_sided_critical_value(
            CriticalDistribution::StudentsT { degrees_of_freedom },
            level,
        )?;
        debug!(estimate, std_error, t_critical, "Student-t interval");

        let margin = t_critical * std_error;
        let (lower, upper) = (estimate - margin, estimate + margin);
        // Finite inputs can still overflow the sum or the squared deviations
        if ![estimate, std_error, lower, upper].iter().all(|v| v.is_finite()) {
            let err = Error::Computation(format!(
                "Mean interval is not finite (mean {estimate}, standard error {std_error})"
            ));
            warn!("{err}");
            return Err(err);
        }

        Ok(ConfidenceInterval::new(lower, upper, estimate, level))
    }

    fn confidence_level(&self) -> f64 {
        self.confidence_level.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_one_to_five() {
        let ci = StudentTMeanCI::default()
            .confidence_interval(&[1.0, 2.0, 3.0, 4.0, 5.0])
            .unwrap();

        assert_abs_diff_eq!(ci.estimate, 3.0);
        assert_abs_diff_eq!(ci.lower, 1.036756838522439, epsilon = 1e-4);
        assert_abs_diff_eq!(ci.upper, 4.9632431614775605, epsilon = 1e-4);
        assert_eq!(ci.confidence_level, 0.95);
    }

    #[test]
    fn test_metric_sample() {
        let sample = [10.5, 12.1, 9.8, 11.4, 10.9, 13.2, 10.1];
        let ci = StudentTMeanCI::default().confidence_interval(&sample).unwrap();

        assert_abs_diff_eq!(ci.estimate, 11.142857142857142, epsilon = 1e-12);
        assert_abs_diff_eq!(ci.lower, 10.03708663927104, epsilon = 1e-4);
        assert_abs_diff_eq!(ci.upper, 12.248627646443245, epsilon = 1e-4);
    }

    #[test]
    fn test_explicit_level() {
        let ci = StudentTMeanCI::new(0.99)
            .unwrap()
            .confidence_interval(&[1.0, 2.0, 3.0, 4.0, 5.0])
            .unwrap();

        assert_abs_diff_eq!(ci.lower, -0.2555867048043865, epsilon = 1e-4);
        assert_abs_diff_eq!(ci.upper, 6.2555867048043865, epsilon = 1e-4);
    }

    #[test]
    fn test_two_observations() {
        let ci = StudentTMeanCI::default().confidence_interval(&[1.0, 2.0]).unwrap();
        assert_abs_diff_eq!(ci.lower, -4.853102368087352, epsilon = 1e-3);
        assert_abs_diff_eq!(ci.upper, 7.853102368087352, epsilon = 1e-3);
    }

    #[test]
    fn test_rejects_short_samples() {
        let estimator = StudentTMeanCI::default();
        assert!(estimator.confidence_interval(&[]).unwrap_err().is_invalid_input());
        let err = estimator.confidence_interval(&[42.0]).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("got 1"));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let estimator = StudentTMeanCI::default();
        assert!(estimator.confidence_interval(&[1.0, f64::NAN, 3.0]).is_err());
        assert!(estimator.confidence_interval(&[1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_overflowing_sample_is_a_computation_error() {
        let estimator = StudentTMeanCI::default();
        for sample in [vec![f64::MAX, f64::MAX], vec![1e308, -1e308, 1e308]] {
            let err = estimator.confidence_interval(&sample).unwrap_err();
            assert!(matches!(err, Error::Computation(_)), "{sample:?} gave {err:?}");
            assert!(!err.is_invalid_input());
        }
    }

    #[test]
    fn test_constant_sample_collapses() {
        let ci = StudentTMeanCI::default().confidence_interval(&[7.0, 7.0, 7.0]).unwrap();
        assert_eq!(ci.lower, 7.0);
        assert_eq!(ci.upper, 7.0);
        assert_eq!(ci.width(), 0.0);
    }

    #[test]
    fn test_formatted() {
        let formatted = StudentTMeanCI::default()
            .formatted(&[1.0, 2.0, 3.0, 4.0, 5.0], 2)
            .unwrap();
        assert_eq!(formatted.lower, "1.04");
        assert_eq!(formatted.upper, "4.96");
    }

    proptest! {
        #[test]
        fn prop_mean_inside_interval(sample in prop::collection::vec(-1e6f64..1e6, 2..50)) {
            let ci = StudentTMeanCI::default().confidence_interval(&sample).unwrap();
            prop_assert!(ci.lower <= ci.estimate && ci.estimate <= ci.upper);
        }

        #[test]
        fn prop_higher_level_is_wider(sample in prop::collection::vec(-100f64..100.0, 3..30)) {
            let ci_90 = StudentTMeanCI::new(0.90).unwrap().confidence_interval(&sample).unwrap();
            let ci_99 = StudentTMeanCI::new(0.99).unwrap().confidence_interval(&sample).unwrap();
            prop_assert!(ci_99.width() >= ci_90.width());
        }
    }
}
