//! diagnostics::validation — input guards for the checked fit diagnostics.
//!
//! Purpose
//! -------
//! Hold the fail-fast checks used by
//! [`DicOutcome::dic_pd_checked`](crate::diagnostics::dic::DicOutcome::dic_pd_checked)
//! and the checked R-squared functions. The unchecked functions never call
//! into this module.
//!
//! Invariants & assumptions
//! ------------------------
//! - Only the first column of each response matrix is inspected, matching
//!   the univariate-response restriction of the R-squared computation.
use crate::diagnostics::errors::{DiagnosticsError, DiagnosticsResult};
use ndarray::{ArrayView2, Axis};

/// Require a non-empty, finite log-likelihood sequence and a finite value at
/// the posterior mean.
pub fn validate_log_likelihoods(
    log_likelihoods: &[f64], log_likelihood_at_mean: f64,
) -> DiagnosticsResult<()> {
    if log_likelihoods.is_empty() {
        return Err(DiagnosticsError::EmptyLogLikelihoods);
    }
    if let Some((index, &value)) = log_likelihoods.iter().enumerate().find(|(_, v)| !v.is_finite())
    {
        return Err(DiagnosticsError::NonFiniteLogLikelihood { index, value });
    }
    if !log_likelihood_at_mean.is_finite() {
        return Err(DiagnosticsError::NonFiniteLogLikelihoodAtMean {
            value: log_likelihood_at_mean,
        });
    }
    Ok(())
}

/// Require non-empty responses of equal length with finite first columns.
///
/// Errors
/// ------
/// - `DiagnosticsError::EmptyResponse` if either input has no rows or no
///   columns.
/// - `DiagnosticsError::ResponseLengthMismatch` if row counts differ.
/// - `DiagnosticsError::NonFiniteResponse` for the first non-finite value,
///   checking `y` before `y_hat`.
pub fn validate_responses(
    y: ArrayView2<'_, f64>, y_hat: ArrayView2<'_, f64>,
) -> DiagnosticsResult<()> {
    if y.is_empty() || y_hat.is_empty() {
        return Err(DiagnosticsError::EmptyResponse);
    }
    if y.nrows() != y_hat.nrows() {
        return Err(DiagnosticsError::ResponseLengthMismatch {
            observed: y.nrows(),
            fitted: y_hat.nrows(),
        });
    }
    for response in [y.view(), y_hat.view()] {
        let first = response.index_axis(Axis(1), 0);
        if let Some((index, &value)) = first.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(DiagnosticsError::NonFiniteResponse { index, value });
        }
    }
    Ok(())
}
