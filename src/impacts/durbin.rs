//! impacts::durbin — impact decomposition for the spatial Durbin model.
//!
//! The spatial Durbin model `y = ρWy + Xβ + WXθ + ε` adds spatially lagged
//! covariates. The marginal effect matrix of covariate j is
//! `S(β_j I + θ_j W)`, so with `S ≈ S_K(ρ)`:
//!
//! ```text
//! direct   = tr(S)/n · β + tr(W·S)/n · θ
//! total    = 1ᵀS1/n  · β + 1ᵀW·S1/n  · θ
//! indirect = total − direct
//! ```
//!
//! `indirect` is computed once from the accumulated totals, never per
//! channel.
use crate::impacts::{
    effects::ImpactEffects,
    errors::ImpactResult,
    multiplier::{MultiplierScales, spatial_multiplier},
    options::ImpactOptions,
    validation::{check_draw_shapes, check_square_weights, validate_draw, validate_weights},
};
use ndarray::ArrayView1;
use sprs::CsMat;

/// Direct, indirect, and total effects for one spatial Durbin draw.
///
/// Parameters
/// ----------
/// - `betas_row`: coefficients on X for one draw (length k).
/// - `thetas_row`: coefficients on WX for the same draw (length k).
/// - `rho`: spatial autoregressive parameter of the draw.
/// - `w`: square `n × n` weight matrix, borrowed read-only.
/// - `opts`: series order and validation policy.
///
/// Errors
/// ------
/// - `ImpactError::NonSquareWeights` and
///   `ImpactError::CoefficientShapeMismatch` (betas/thetas length) always.
/// - Under `Validation::Strict`: the same value checks as
///   [`impacts`](crate::impacts::lag::impacts), applied to both rows.
///
/// Notes
/// -----
/// - With `thetas_row = 0` the result equals the lag-model result for the
///   same `(betas_row, rho, W)`.
pub fn impacts_durbin(
    betas_row: ArrayView1<'_, f64>, thetas_row: ArrayView1<'_, f64>, rho: f64, w: &CsMat<f64>,
    opts: &ImpactOptions,
) -> ImpactResult<ImpactEffects> {
    check_square_weights(w)?;
    check_draw_shapes((1, betas_row.len()), 1, Some((1, thetas_row.len())), true)?;
    if opts.validation.is_strict() {
        let norm_bound = validate_weights(w)?;
        validate_draw(0, rho, betas_row, Some(thetas_row), norm_bound)?;
    }

    let multiplier = spatial_multiplier(rho, w, opts.series_order);
    let lagged = w * &multiplier;
    Ok(ImpactEffects::durbin(
        betas_row,
        thetas_row,
        MultiplierScales::of(&multiplier),
        MultiplierScales::of(&lagged),
    ))
}
