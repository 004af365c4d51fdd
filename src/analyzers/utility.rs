use crate::error::{ReportError, Result};

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes the population standard deviation given a pre-computed mean.
/// Returns 0.0 for empty input.
pub fn stddev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    variance.sqrt()
}

/// Population covariance of two equal-length series given their means.
fn covariance(x: &[f64], y: &[f64], mean_x: f64, mean_y: f64) -> f64 {
    x.iter()
        .zip(y)
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum::<f64>()
        / x.len() as f64
}

/// Pearson correlation coefficient of `x` and `y`.
///
/// # Errors
///
/// Returns [`ReportError::DegenerateInput`] when the series differ in length,
/// hold fewer than two points, or either one has zero variance.
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(ReportError::DegenerateInput(format!(
            "series lengths differ ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(ReportError::DegenerateInput(format!(
            "need at least 2 points, got {}",
            x.len()
        )));
    }

    let mean_x = mean(x);
    let mean_y = mean(y);
    let sd_x = stddev(x, mean_x);
    let sd_y = stddev(y, mean_y);

    if sd_x == 0.0 || sd_y == 0.0 {
        return Err(ReportError::DegenerateInput(
            "zero variance in correlated series".to_string(),
        ));
    }

    let r = covariance(x, y, mean_x, mean_y) / (sd_x * sd_y);
    Ok(r.clamp(-1.0, 1.0))
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
