//! Distribution quantiles and critical values
//!
//! Thin validated wrappers over `statrs` so that out-of-range probabilities
//! surface as [`Error`]s instead of panics inside the distribution library.

use crate::{Error, Result};
use tracing::trace;

/// Distribution-related mathematical functions
pub mod distributions {
    use super::*;

    fn check_probability(p: f64) -> Result<()> {
        if !(p > 0.0 && p < 1.0) {
            return Err(Error::InvalidInput(format!(
                "Probability {p} must be in (0, 1)"
            )));
        }
        Ok(())
    }

    /// Standard normal distribution utilities
    pub mod normal {
        use super::*;
        use statrs::distribution::{ContinuousCDF, Normal};

        fn standard() -> Result<Normal> {
            Normal::new(0.0, 1.0).map_err(|e| Error::distribution("normal", e))
        }

        /// Cumulative distribution function of the standard normal distribution
        pub fn cdf(x: f64) -> Result<f64> {
            Ok(standard()?.cdf(x))
        }

        /// Inverse CDF (quantile function) of the standard normal distribution
        pub fn quantile(p: f64) -> Result<f64> {
            check_probability(p)?;
            Ok(standard()?.inverse_cdf(p))
        }

    }

    /// Student-t distribution utilities
    pub mod students_t {
        use super::*;
        use statrs::distribution::{ContinuousCDF, StudentsT};

        fn standard(degrees_of_freedom: f64) -> Result<StudentsT> {
            if !(degrees_of_freedom > 0.0) {
                return Err(Error::InvalidInput(format!(
                    "Degrees of freedom {degrees_of_freedom} must be positive"
                )));
            }
            StudentsT::new(0.0, 1.0, degrees_of_freedom)
                .map_err(|e| Error::distribution("Student-t", e))
        }

        /// Cumulative distribution function of the standard Student-t distribution
        pub fn cdf(x: f64, degrees_of_freedom: f64) -> Result<f64> {
            Ok(standard(degrees_of_freedom)?.cdf(x))
        }

        /// Inverse CDF (quantile function) of the standard Student-t distribution
        pub fn quantile(p: f64, degrees_of_freedom: f64) -> Result<f64> {
            check_probability(p)?;
            Ok(standard(degrees_of_freedom)?.inverse_cdf(p))
        }

    }
}

/// Reference distribution for a two-sided critical value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CriticalDistribution {
    /// Standard normal distribution
    Normal,
    /// Student-t distribution with the given degrees of freedom
    StudentsT { degrees_of_freedom: f64 },
}

/// Two-sided critical value: the quantile at `1 - (1 - confidence_level) / 2`
///
/// # Examples
///
/// ```rust
/// use nbstats_core::math::{two_sided_critical_value, CriticalDistribution};
///
/// let z = two_sided_critical_value(CriticalDistribution::Normal, 0.95).unwrap();
/// assert!((z - 1.96).abs() < 1e-3);
/// ```
pub fn two_sided_critical_value(
    distribution: CriticalDistribution,
    confidence_level: f64,
) -> Result<f64> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(Error::invalid_confidence_level(confidence_level));
    }
    let p = 1.0 - (1.0 - confidence_level) / 2.0;
    let critical = match distribution {
        CriticalDistribution::Normal => distributions::normal::quantile(p)?,
        CriticalDistribution::StudentsT { degrees_of_freedom } => {
            distributions::students_t::quantile(p, degrees_of_freedom)?
        }
    };
    if !critical.is_finite() {
        return Err(Error::Computation(format!(
            "Critical value for {distribution:?} at level {confidence_level} is not finite"
        )));
    }
    trace!(?distribution, confidence_level, critical, "critical value");
    Ok(critical)
}
