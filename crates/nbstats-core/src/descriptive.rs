//! Descriptive statistics over data slices
//!
//! All functions validate their input and return an error instead of a
//! placeholder value, so callers can propagate failures with `?`.

use crate::{Error, Result};

/// Check that every value in `data` is finite
pub fn ensure_finite(data: &[f64], context: &str) -> Result<()> {
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}

/// Calculate the mean of a slice
///
/// # Examples
///
/// ```rust
/// use nbstats_core::descriptive::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::insufficient_data(1, 0, "Mean"));
    }
    let sum: f64 = data.iter().sum();
    Ok(sum / data.len() as f64)
}

/// Calculate the sample variance (n - 1 denominator)
pub fn variance(data: &[f64]) -> Result<f64> {
    if data.len() < 2 {
        return Err(Error::insufficient_data(2, data.len(), "Sample variance"));
    }
    let m = mean(data)?;
    let sum_sq: f64 = data
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum();
    Ok(sum_sq / (data.len() - 1) as f64)
}

/// Calculate the sample standard deviation
///
/// # Examples
///
/// ```rust
/// use nbstats_core::descriptive::std_dev;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let sd = std_dev(&data).unwrap();
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64]) -> Result<f64> {
    Ok(variance(data)?.sqrt())
}

/// Standard error of the mean: sample standard deviation over `sqrt(n)`
///
/// Needs at least two observations.
pub fn standard_error_of_mean(data: &[f64]) -> Result<f64> {
    if data.len() < 2 {
        return Err(Error::insufficient_data(
            2,
            data.len(),
            "Standard error of the mean",
        ));
    }
    Ok(std_dev(data)? / (data.len() as f64).sqrt())
}

/// Calculate the Pearson correlation coefficient of two paired samples
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::InvalidInput(format!(
            "Arrays must have the same length, got {} and {}",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(Error::insufficient_data(2, x.len(), "Pearson correlation"));
    }

    let mean_x = mean(x)?;
    let mean_y = mean(y)?;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;

    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;

        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();
    if denominator == 0.0 {
        return Err(Error::InvalidInput(
            "Cannot compute correlation: zero variance".to_string(),
        ));
    }

    // Rounding can push |r| a hair past 1 for perfectly collinear data
    Ok((numerator / denominator).clamp(-1.0, 1.0))
}
