//! impacts::driver — stack impact decompositions across posterior draws.
//!
//! Purpose
//! -------
//! Turn a full set of posterior draws `{(βᵢ, ρᵢ)}` (and `θᵢ` for the Durbin
//! model) into stacked direct / indirect / total effect matrices, one row
//! per draw in the order supplied.
//!
//! Key behaviors
//! -------------
//! - [`run_impacts`] and [`run_impacts_durbin`] iterate draws `i = 0,…,m−1`
//!   sequentially and write draw `i` into row `i` of an [`ImpactDraws`].
//! - The power basis of W is built once per call via
//!   [`MultiplierMoments`]; each draw then costs `O(K + k)` instead of `K`
//!   sparse-sparse products.
//!
//! Invariants & assumptions
//! ------------------------
//! - The number of draws is `rhos.len()`. Under `Validation::PassThrough`
//!   extra coefficient rows beyond `rhos.len()` are ignored; under
//!   `Validation::Strict` the row counts must match exactly.
//! - Output arrays are owned by the caller and have shape
//!   `rhos.len() × betas.ncols()`.
//! - Per-draw results agree with [`impacts`](crate::impacts::lag::impacts)
//!   and [`impacts_durbin`](crate::impacts::durbin::impacts_durbin) up to
//!   floating-point rounding.
//!
//! Testing notes
//! -------------
//! - Unit tests cover row-order preservation, agreement with the
//!   single-draw entry points, and shape / strict-mode errors. The
//!   end-to-end scenarios live in `tests/integration_impact_pipeline.rs`.
use crate::impacts::{
    effects::{ImpactDraws, ImpactEffects},
    errors::ImpactResult,
    multiplier::MultiplierMoments,
    options::ImpactOptions,
    validation::{
        check_draw_shapes, check_square_weights, validate_draw, validate_sample_count,
        validate_weights,
    },
};
use ndarray::{ArrayView1, ArrayView2};
use sprs::CsMat;

/// Spatial lag impacts for every posterior draw.
///
/// Parameters
/// ----------
/// - `betas`: `ArrayView2<f64>`
///   `m × k` coefficient draws, one row per sample.
/// - `rhos`: `ArrayView1<f64>`
///   Length-`m` spatial parameter draws.
/// - `w`: `&CsMat<f64>`
///   Square weight matrix shared by every draw.
/// - `opts`: `&ImpactOptions`
///
/// Returns
/// -------
/// `ImpactResult<ImpactDraws>`
///   `m × k` stacked effects. Zero draws yield `0 × k` arrays unless the
///   policy is strict.
///
/// Errors
/// ------
/// - `NonSquareWeights`, `SampleCountMismatch` always.
/// - Under `Validation::Strict`: `NoSamples`, `EmptyWeights`,
///   `NonFiniteWeight`, and the per-draw errors of
///   [`validate_draw`], reported for the first offending draw.
///
/// Examples
/// --------
/// ```rust
/// use ndarray::array;
/// use spatial_diagnostics::impacts::{driver::run_impacts, options::ImpactOptions};
/// use sprs::TriMat;
///
/// let mut tri = TriMat::new((2, 2));
/// tri.add_triplet(0, 1, 1.0);
/// tri.add_triplet(1, 0, 1.0);
/// let w = tri.to_csr();
///
/// let betas = array![[1.0], [2.0]];
/// let rhos = array![0.0, 0.0];
/// let draws = run_impacts(betas.view(), rhos.view(), &w, &ImpactOptions::default()).unwrap();
/// assert_eq!(draws.direct, array![[1.0], [2.0]]);
/// assert_eq!(draws.indirect, array![[0.0], [0.0]]);
/// ```
pub fn run_impacts(
    betas: ArrayView2<'_, f64>, rhos: ArrayView1<'_, f64>, w: &CsMat<f64>, opts: &ImpactOptions,
) -> ImpactResult<ImpactDraws> {
    let norm_bound = prepare(betas, None, rhos, w, opts)?;
    let moments = MultiplierMoments::lag(w, opts.series_order);

    let mut draws = ImpactDraws::zeros(rhos.len(), betas.ncols());
    for (sample, &rho) in rhos.iter().enumerate() {
        let betas_row = betas.row(sample);
        if let Some(bound) = norm_bound {
            validate_draw(sample, rho, betas_row, None, bound)?;
        }
        log::trace!("lag impacts for sample {sample} (rho = {rho})");
        let effects = ImpactEffects::lag(betas_row, moments.lag_scales(rho));
        draws.set_sample(sample, &effects);
    }

    log::debug!("stacked lag impacts for {} draws of {} covariates", rhos.len(), betas.ncols());
    Ok(draws)
}

/// Spatial Durbin impacts for every posterior draw.
///
/// As [`run_impacts`], with `thetas` (`m × k`) supplying the coefficients
/// on the spatially lagged covariates. `thetas` must have the same number
/// of columns as `betas` and cover every rho draw.
pub fn run_impacts_durbin(
    betas: ArrayView2<'_, f64>, thetas: ArrayView2<'_, f64>, rhos: ArrayView1<'_, f64>,
    w: &CsMat<f64>, opts: &ImpactOptions,
) -> ImpactResult<ImpactDraws> {
    let norm_bound = prepare(betas, Some(thetas), rhos, w, opts)?;
    let moments = MultiplierMoments::durbin(w, opts.series_order);

    let mut draws = ImpactDraws::zeros(rhos.len(), betas.ncols());
    for (sample, &rho) in rhos.iter().enumerate() {
        let betas_row = betas.row(sample);
        let thetas_row = thetas.row(sample);
        if let Some(bound) = norm_bound {
            validate_draw(sample, rho, betas_row, Some(thetas_row), bound)?;
        }
        log::trace!("durbin impacts for sample {sample} (rho = {rho})");
        let effects = ImpactEffects::durbin(
            betas_row,
            thetas_row,
            moments.lag_scales(rho),
            moments.lagged_scales(rho),
        );
        draws.set_sample(sample, &effects);
    }

    log::debug!(
        "stacked durbin impacts for {} draws of {} covariates",
        rhos.len(),
        betas.ncols()
    );
    Ok(draws)
}

//
// ---------- Private helpers ----------
//

/// Shared shape checks; returns the norm bound when validation is strict.
fn prepare(
    betas: ArrayView2<'_, f64>, thetas: Option<ArrayView2<'_, f64>>, rhos: ArrayView1<'_, f64>,
    w: &CsMat<f64>, opts: &ImpactOptions,
) -> ImpactResult<Option<f64>> {
    let strict = opts.validation.is_strict();
    check_square_weights(w)?;
    check_draw_shapes(betas.dim(), rhos.len(), thetas.map(|t| t.dim()), strict)?;
    if !strict {
        return Ok(None);
    }
    validate_sample_count(rhos.len())?;
    validate_weights(w).map(Some)
}
