//! impacts::lag — impact decomposition for the spatial lag model.
//!
//! Purpose
//! -------
//! Decompose the marginal effect of each covariate in a spatial lag model
//! `y = ρWy + Xβ + ε` into direct, indirect, and total components for a
//! single posterior draw `(β, ρ)`.
//!
//! With `S = (I − ρW)⁻¹` approximated by the truncated series
//! `S_K(ρ) = Σ_{p=0}^{K} ρᵖ Wᵖ`:
//!
//! ```text
//! direct   = tr(S)/n     · β
//! total    = 1ᵀS1/n      · β
//! indirect = total − direct
//! ```
//!
//! Conventions
//! -----------
//! - `betas_row` excludes the intercept; the output has one entry per
//!   element of `betas_row`.
//! - The multiplier is rebuilt explicitly on every call. Callers processing
//!   many draws against the same W should use
//!   [`run_impacts`](crate::impacts::driver::run_impacts), which reuses the
//!   power basis of W across draws.
use crate::impacts::{
    effects::ImpactEffects,
    errors::ImpactResult,
    multiplier::{MultiplierScales, spatial_multiplier},
    options::ImpactOptions,
    validation::{check_square_weights, validate_draw, validate_weights},
};
use ndarray::ArrayView1;
use sprs::CsMat;

/// Direct, indirect, and total effects for one spatial lag draw.
///
/// Parameters
/// ----------
/// - `betas_row`: `ArrayView1<f64>`
///   Covariate coefficients of one posterior draw (length k).
/// - `rho`: `f64`
///   Spatial autoregressive parameter of the same draw.
/// - `w`: `&CsMat<f64>`
///   Square `n × n` spatial weight matrix, borrowed read-only.
/// - `opts`: `&ImpactOptions`
///   Series order and validation policy.
///
/// Returns
/// -------
/// `ImpactResult<ImpactEffects>`
///   Effects of length k. Under `Validation::PassThrough`, NaN/Inf inputs
///   and a non-convergent ρ produce non-finite or meaningless effects rather
///   than errors.
///
/// Errors
/// ------
/// - `ImpactError::NonSquareWeights` always, since the series is undefined
///   for a rectangular W.
/// - Under `Validation::Strict`: `EmptyWeights`, `NonFiniteWeight`,
///   `NonFiniteRho`, `NonFiniteCoefficient`, `NonConvergentRho`.
///
/// Examples
/// --------
/// ```rust
/// use ndarray::array;
/// use spatial_diagnostics::impacts::{lag::impacts, options::ImpactOptions};
/// use sprs::TriMat;
///
/// let mut tri = TriMat::new((3, 3));
/// tri.add_triplet(0, 1, 1.0);
/// let w = tri.to_csr();
///
/// let effects = impacts(array![2.0].view(), 0.5, &w, &ImpactOptions::default()).unwrap();
/// assert!((effects.direct[0] - 2.0).abs() < 1e-12);
/// assert!((effects.total[0] - 3.5 / 3.0 * 2.0).abs() < 1e-12);
/// ```
pub fn impacts(
    betas_row: ArrayView1<'_, f64>, rho: f64, w: &CsMat<f64>, opts: &ImpactOptions,
) -> ImpactResult<ImpactEffects> {
    check_square_weights(w)?;
    if opts.validation.is_strict() {
        let norm_bound = validate_weights(w)?;
        validate_draw(0, rho, betas_row, None, norm_bound)?;
    }

    let multiplier = spatial_multiplier(rho, w, opts.series_order);
    Ok(ImpactEffects::lag(betas_row, MultiplierScales::of(&multiplier)))
}
