//! Regression metrics: MSE, RMSE, MAE, R²

use crate::error::{check_lengths, Result};
use crate::stats::mean;

/// Mean squared error: `mean((y_true[i] - y_pred[i])^2)`.
///
/// # Errors
/// `LengthMismatch` if the sequences differ in length, `EmptyInput` if
/// they are empty.
pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_lengths(y_true.len(), y_pred.len())?;

    let sse: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum();

    Ok(sse / y_true.len() as f64)
}

/// Root mean squared error: `sqrt(MSE)`.
///
/// Exactly 0 only when predictions equal the truth; no comparison
/// tolerance is applied here.
///
/// # Errors
/// `LengthMismatch` / `EmptyInput` on structurally invalid input.
pub fn root_mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    Ok(mean_squared_error(y_true, y_pred)?.sqrt())
}

/// Mean absolute error: `mean(|y_true[i] - y_pred[i]|)`.
///
/// # Errors
/// `LengthMismatch` / `EmptyInput` on structurally invalid input.
pub fn mean_absolute_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_lengths(y_true.len(), y_pred.len())?;

    let sae: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).abs())
        .sum();

    Ok(sae / y_true.len() as f64)
}

/// R² coefficient of determination: `1 - SS_res / SS_tot`.
///
/// Upper bound 1.0 (perfect fit); unbounded below. A constant `y_true`
/// makes `SS_tot` zero; the result is then 1.0 when predictions reproduce
/// the constant exactly and `f64::NEG_INFINITY` otherwise. Never NaN.
///
/// # Errors
/// `LengthMismatch` / `EmptyInput` on structurally invalid input.
pub fn r2_score(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_lengths(y_true.len(), y_pred.len())?;

    let y_mean = mean(y_true);
    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum();
    let ss_tot: f64 = y_true.iter().map(|t| (t - y_mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return Ok(if ss_res == 0.0 { 1.0 } else { f64::NEG_INFINITY });
    }

    Ok(1.0 - ss_res / ss_tot)
}
