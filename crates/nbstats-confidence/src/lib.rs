//! Confidence intervals for notebook analyses
//!
//! This crate provides two independent interval estimators:
//!
//! - **Correlation intervals** ([`CorrelationCI`]): Fisher z-transform of a
//!   Pearson coefficient with a normal critical value
//! - **Mean intervals** ([`StudentTMeanCI`]): sample mean and standard error
//!   with a Student-t critical value on n - 1 degrees of freedom
//!
//! Invalid input (a coefficient of exactly ±1, too few observations, a
//! confidence level outside (0, 1)) is reported as an error rather than
//! producing NaN or an empty result.
//!
//! # Examples
//!
//! ## Correlation interval
//!
//! ```rust
//! use nbstats_confidence::{CorrelationCI, ConfidenceLevel};
//!
//! let estimator = CorrelationCI::with_level(ConfidenceLevel::NINETY_FIVE);
//! let ci = estimator.interval(0.6322508448491246, 84).unwrap();
//! println!("{ci}");
//! assert!(ci.lower < ci.upper);
//! ```
//!
//! ## Mean interval
//!
//! ```rust
//! use nbstats_confidence::{ConfidenceIntervalEstimator, StudentTMeanCI};
//!
//! let ci = StudentTMeanCI::new(0.95)
//!     .unwrap()
//!     .confidence_interval(&[1.0, 2.0, 3.0, 4.0, 5.0])
//!     .unwrap();
//! println!("95% CI for the mean: [{:.2}, {:.2}]", ci.lower, ci.upper);
//! ```

pub mod api;
mod correlation;
pub mod fisher;
mod mean;
mod traits;
mod types;

// Re-exports
pub use api::{
    calculate_ci, correlation_confidence_interval, correlation_confidence_interval_95,
    mean_confidence_interval, DEFAULT_CONFIDENCE_LEVEL, NOTEBOOK_DECIMALS,
};
pub use correlation::CorrelationCI;
pub use mean::StudentTMeanCI;
pub use nbstats_core::{Error, Result};
pub use traits::{ConfidenceIntervalEstimator, PairedConfidenceIntervalEstimator};
pub use types::{ConfidenceInterval, ConfidenceLevel, FormattedInterval};
