//! Core types for notebook statistics
//!
//! This crate provides the pieces shared by every nbstats estimator:
//!
//! - [`Error`] and [`Result`]: a single error taxonomy for invalid input and
//!   numeric failures
//! - [`descriptive`]: mean, sample variance, standard error of the mean and
//!   Pearson correlation
//! - [`math`]: validated normal and Student-t quantiles and two-sided
//!   critical values
//!
//! # Example
//!
//! ```rust
//! use nbstats_core::{descriptive, math::{two_sided_critical_value, CriticalDistribution}};
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let sem = descriptive::standard_error_of_mean(&data).unwrap();
//! let t = two_sided_critical_value(
//!     CriticalDistribution::StudentsT { degrees_of_freedom: 4.0 },
//!     0.95,
//! ).unwrap();
//!
//! println!("margin of error: {:.3}", t * sem);
//! ```

pub mod descriptive;
pub mod error;
pub mod math;

// Re-export core types
pub use error::{Error, Result};
pub use math::{two_sided_critical_value, CriticalDistribution};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::descriptive::{mean, pearson_correlation, standard_error_of_mean, std_dev};
    pub use crate::error::Error;
    pub use crate::math::{two_sided_critical_value, CriticalDistribution};
    pub use crate::Result;
}
