//! Confidence intervals for data-analysis notebooks
//!
//! Facade over the nbstats workspace:
//!
//! - [`descriptive`] and [`math`]: sample statistics and distribution quantiles
//! - [`confidence`]: Fisher correlation intervals and Student-t mean intervals
//!
//! # Example
//!
//! ```rust
//! use nbstats::prelude::*;
//!
//! let (lower, upper) = correlation_confidence_interval(0.6322508448491246, 84, 0.95)?;
//! println!("Confidence interval: ({lower:.4}, {upper:.4})");
//!
//! let (lower, upper) = calculate_ci(&[1.0, 2.0, 3.0, 4.0, 5.0])?;
//! println!("Mean CI: ({lower}, {upper})");
//! # Ok::<(), nbstats::Error>(())
//! ```

pub use nbstats_confidence as confidence;
pub use nbstats_core::{descriptive, math};

pub use nbstats_confidence::{
    calculate_ci, correlation_confidence_interval, correlation_confidence_interval_95,
    mean_confidence_interval, ConfidenceInterval, ConfidenceIntervalEstimator, ConfidenceLevel,
    CorrelationCI, FormattedInterval, PairedConfidenceIntervalEstimator, StudentTMeanCI,
    DEFAULT_CONFIDENCE_LEVEL, NOTEBOOK_DECIMALS,
};
pub use nbstats_core::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        calculate_ci, correlation_confidence_interval, mean_confidence_interval,
        ConfidenceInterval, ConfidenceIntervalEstimator, ConfidenceLevel, CorrelationCI, Error,
        PairedConfidenceIntervalEstimator, Result, StudentTMeanCI,
    };
}
