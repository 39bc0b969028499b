//! impacts::validation — input guards for impact decompositions.
//!
//! Purpose
//! -------
//! Centralize the checks performed before impacts are computed. Two tiers
//! exist:
//!
//! - *Structural* checks ([`check_square_weights`], [`check_draw_shapes`])
//!   always run. Without them the sparse and dense arithmetic would panic on
//!   mismatched dimensions or index past the end of the draws.
//! - *Value* checks ([`validate_weights`], [`validate_sample_count`],
//!   [`validate_draw`]) run only under `Validation::Strict`. They reject
//!   empty inputs, non-finite numbers, and ρ draws for which the truncated
//!   series is not known to converge.
//!
//! Invariants & assumptions
//! ------------------------
//! - The convergence check uses `min(‖W‖₁, ‖W‖∞)`, an upper bound on the
//!   spectral radius of W. `|ρ| · bound < 1` is sufficient for convergence
//!   of the Neumann series but not necessary, so the check is conservative.
//!   For a row-standardized W the bound is 1 and the check reduces to
//!   `|ρ| < 1`.
//!
//! Testing notes
//! -------------
//! - Unit tests exercise every error branch and a simple success path.
use crate::impacts::errors::{ImpactError, ImpactResult};
use ndarray::ArrayView1;
use sprs::CsMat;

/// Reject non-square weight matrices and return `n`.
pub fn check_square_weights(w: &CsMat<f64>) -> ImpactResult<usize> {
    let (rows, cols) = w.shape();
    if rows != cols {
        return Err(ImpactError::NonSquareWeights { rows, cols });
    }
    Ok(rows)
}

/// Check that coefficient draws cover every rho draw.
///
/// Parameters
/// ----------
/// - `betas`: `(rows, cols)` of the beta draws.
/// - `n_rhos`: number of rho draws (the number of samples processed).
/// - `thetas`: `(rows, cols)` of the theta draws, for the Durbin model.
/// - `strict`: when `true`, require exact equality of row counts and of the
///   beta/theta shapes instead of mere coverage.
///
/// Errors
/// ------
/// - `ImpactError::SampleCountMismatch` when there are fewer beta rows than
///   rho draws (or, in strict mode, any difference).
/// - `ImpactError::CoefficientShapeMismatch` when theta columns differ from
///   beta columns, theta rows do not cover the rho draws, or (strict) the
///   shapes differ at all.
pub fn check_draw_shapes(
    betas: (usize, usize), n_rhos: usize, thetas: Option<(usize, usize)>, strict: bool,
) -> ImpactResult<()> {
    let rows_ok = if strict { betas.0 == n_rhos } else { betas.0 >= n_rhos };
    if !rows_ok {
        return Err(ImpactError::SampleCountMismatch { rhos: n_rhos, rows: betas.0 });
    }
    if let Some(thetas) = thetas {
        let shape_ok = if strict {
            thetas == betas
        } else {
            thetas.1 == betas.1 && thetas.0 >= n_rhos
        };
        if !shape_ok {
            return Err(ImpactError::CoefficientShapeMismatch { expected: betas, actual: thetas });
        }
    }
    Ok(())
}

/// Strict weight checks: non-empty, finite entries.
///
/// Returns
/// -------
/// `ImpactResult<f64>`
///   The spectral-radius bound `min(‖W‖₁, ‖W‖∞)` used by [`validate_draw`].
///
/// Errors
/// ------
/// - `ImpactError::EmptyWeights` if W has no rows.
/// - `ImpactError::NonFiniteWeight` for the first stored NaN/±inf entry.
pub fn validate_weights(w: &CsMat<f64>) -> ImpactResult<f64> {
    let n = check_square_weights(w)?;
    if n == 0 {
        return Err(ImpactError::EmptyWeights);
    }
    if let Some((&value, (row, col))) = w.iter().find(|(value, _)| !value.is_finite()) {
        return Err(ImpactError::NonFiniteWeight { row, col, value });
    }
    Ok(spectral_radius_bound(w))
}

/// Strict check that at least one sample was supplied.
pub fn validate_sample_count(n_samples: usize) -> ImpactResult<()> {
    if n_samples == 0 {
        return Err(ImpactError::NoSamples);
    }
    Ok(())
}

/// Strict per-sample checks on one posterior draw.
///
/// Parameters
/// ----------
/// - `sample`: index reported in errors.
/// - `rho`: the draw's spatial parameter.
/// - `betas_row`, `thetas_row`: the draw's coefficient rows.
/// - `norm_bound`: value returned by [`validate_weights`].
///
/// Errors
/// ------
/// - `ImpactError::NonFiniteRho`, `ImpactError::NonFiniteCoefficient`.
/// - `ImpactError::NonConvergentRho` if `|ρ| · norm_bound ≥ 1`.
pub fn validate_draw(
    sample: usize, rho: f64, betas_row: ArrayView1<'_, f64>, thetas_row: Option<ArrayView1<'_, f64>>,
    norm_bound: f64,
) -> ImpactResult<()> {
    if !rho.is_finite() {
        return Err(ImpactError::NonFiniteRho { sample, value: rho });
    }
    let rows = std::iter::once(betas_row.view()).chain(thetas_row.as_ref().map(|t| t.view()));
    for row in rows {
        if let Some((column, &value)) = row.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ImpactError::NonFiniteCoefficient { sample, column, value });
        }
    }
    if rho.abs() * norm_bound >= 1.0 {
        return Err(ImpactError::NonConvergentRho { sample, rho, norm_bound });
    }
    Ok(())
}

/// `min(‖W‖₁, ‖W‖∞)`: the smaller of the maximum absolute column and row sums.
pub fn spectral_radius_bound(w: &CsMat<f64>) -> f64 {
    let (rows, cols) = w.shape();
    let mut row_sums = vec![0.0_f64; rows];
    let mut col_sums = vec![0.0_f64; cols];
    for (&value, (row, col)) in w.iter() {
        row_sums[row] += value.abs();
        col_sums[col] += value.abs();
    }
    let max_row = row_sums.into_iter().fold(0.0, f64::max);
    let max_col = col_sums.into_iter().fold(0.0, f64::max);
    max_row.min(max_col)
}
