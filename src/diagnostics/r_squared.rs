//! diagnostics::r_squared — goodness of fit for a univariate response.
//!
//! Purpose
//! -------
//! Provide the variance-ratio fit statistic reported alongside the spatial
//! models, plus the conventional coefficient of determination under its own
//! name.
//!
//! Key behaviors
//! -------------
//! - [`r_squared`] is the ratio of fitted-value variation to observed-value
//!   variation, `Σ(ŷ − mean ŷ)² / Σ(y − mean y)²`. It is **not**
//!   `1 − SS_res/SS_tot`: the two agree only for least-squares fits with an
//!   intercept, and the ratio can exceed 1 otherwise.
//! - [`coefficient_of_determination`] computes `1 − SS_res/SS_tot`.
//! - Only the first column of each input is used.
//!
//! Invariants & assumptions
//! ------------------------
//! - A constant `y_hat` gives `r_squared == 0` for any non-constant `y`.
//! - A constant `y` makes the denominator zero; [`r_squared`] then returns a
//!   non-finite value while the checked functions report
//!   `DiagnosticsError::ZeroResponseVariance`.
use crate::diagnostics::{
    errors::{DiagnosticsError, DiagnosticsResult},
    validation::validate_responses,
};
use ndarray::{ArrayView1, ArrayView2, Axis};
use statrs::statistics::Statistics;

/// Variance-ratio R-squared of the first response column.
///
/// Parameters
/// ----------
/// - `y`: `ArrayView2<f64>`
///   Observed response, `n × q`; only column 0 is read.
/// - `y_hat`: `ArrayView2<f64>`
///   Fitted response, `n × q'`; only column 0 is read.
///
/// Returns
/// -------
/// `f64`
///   `Σ(ŷ − mean ŷ)² / Σ(y − mean y)²`. NaN if either input has no columns or
///   no rows; non-finite if `y` is constant. Row counts are not compared.
///
/// Notes
/// -----
/// - Use [`coefficient_of_determination`] for `1 − SS_res/SS_tot`.
pub fn r_squared(y: ArrayView2<'_, f64>, y_hat: ArrayView2<'_, f64>) -> f64 {
    match (first_column(y), first_column(y_hat)) {
        (Some(y), Some(y_hat)) => sum_sq_deviations(y_hat) / sum_sq_deviations(y),
        _ => f64::NAN,
    }
}

/// [`r_squared`] with input validation.
///
/// Errors
/// ------
/// - `DiagnosticsError::EmptyResponse`
/// - `DiagnosticsError::ResponseLengthMismatch`
/// - `DiagnosticsError::NonFiniteResponse`
/// - `DiagnosticsError::ZeroResponseVariance`
pub fn r_squared_checked(
    y: ArrayView2<'_, f64>, y_hat: ArrayView2<'_, f64>,
) -> DiagnosticsResult<f64> {
    let (y, y_hat) = checked_columns(y, y_hat)?;
    let ss_tot = nonzero_total_variation(y)?;
    Ok(sum_sq_deviations(y_hat) / ss_tot)
}

/// Conventional coefficient of determination `1 − SS_res/SS_tot` on the
/// first response column.
///
/// Errors
/// ------
/// Same as [`r_squared_checked`]; observations are paired row by row, so
/// the row counts must agree.
///
/// Examples
/// --------
/// ```rust
/// use ndarray::array;
/// use spatial_diagnostics::diagnostics::r_squared::coefficient_of_determination;
///
/// let y = array![[1.0], [2.0], [3.0]];
/// let r2 = coefficient_of_determination(y.view(), y.view()).unwrap();
/// assert!((r2 - 1.0).abs() < 1e-12);
/// ```
pub fn coefficient_of_determination(
    y: ArrayView2<'_, f64>, y_hat: ArrayView2<'_, f64>,
) -> DiagnosticsResult<f64> {
    let (y, y_hat) = checked_columns(y, y_hat)?;
    let ss_tot = nonzero_total_variation(y)?;
    let ss_res: f64 = y.iter().zip(y_hat.iter()).map(|(obs, fit)| (obs - fit).powi(2)).sum();
    Ok(1.0 - ss_res / ss_tot)
}

fn first_column(response: ArrayView2<'_, f64>) -> Option<ArrayView1<'_, f64>> {
    if response.ncols() == 0 {
        return None;
    }
    Some(response.index_axis_move(Axis(1), 0))
}

fn checked_columns<'a, 'b>(
    y: ArrayView2<'a, f64>, y_hat: ArrayView2<'b, f64>,
) -> DiagnosticsResult<(ArrayView1<'a, f64>, ArrayView1<'b, f64>)> {
    validate_responses(y, y_hat)?;
    Ok((y.index_axis_move(Axis(1), 0), y_hat.index_axis_move(Axis(1), 0)))
}

fn nonzero_total_variation(y: ArrayView1<'_, f64>) -> DiagnosticsResult<f64> {
    let ss_tot = sum_sq_deviations(y);
    if ss_tot == 0.0 {
        return Err(DiagnosticsError::ZeroResponseVariance);
    }
    Ok(ss_tot)
}

fn sum_sq_deviations(values: ArrayView1<'_, f64>) -> f64 {
    let mean = values.iter().mean();
    values.iter().map(|v| (v - mean).powi(2)).sum()
}
