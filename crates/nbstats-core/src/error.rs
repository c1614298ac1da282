//! Error types for notebook statistics
//!
//! Provides a unified error type for all nbstats crates.

use thiserror::Error;

/// Core error type for nbstats operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid input data or parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a sample that is too small
    pub fn insufficient_data(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "{context} requires at least {expected} observations, got {actual}"
        ))
    }

    /// Create an error for a confidence level outside (0, 1)
    pub fn invalid_confidence_level(level: f64) -> Self {
        Self::InvalidInput(format!("Confidence level {level} must be in (0, 1)"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a distribution the backing library refused to build
    pub fn distribution(name: &str, source: impl std::fmt::Display) -> Self {
        Self::Computation(format!("Failed to create {name} distribution: {source}"))
    }

    /// Whether the error was caused by the caller's input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
