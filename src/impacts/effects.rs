//! impacts::effects — per-sample and stacked impact containers.
//!
//! Purpose
//! -------
//! Hold the direct / indirect / total effects produced by the lag and Durbin
//! decompositions, either for one posterior draw ([`ImpactEffects`]) or
//! stacked across draws ([`ImpactDraws`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - `indirect` is always derived as `total − direct`, so
//!   `total == direct + indirect` holds up to one floating-point rounding.
//! - All three arrays share the same shape: length `k` per draw, `m × k`
//!   when stacked. Row `i` of an [`ImpactDraws`] is sample `i`.
use crate::impacts::multiplier::MultiplierScales;
use ndarray::{Array1, Array2, ArrayView1};

/// ImpactEffects — direct, indirect, and total effects for one draw.
///
/// Fields
/// ------
/// - `direct`: average own-unit effect per covariate, including feedback
///   through neighbours back to the unit itself.
/// - `indirect`: average spillover effect per covariate (`total − direct`).
/// - `total`: average total effect per covariate.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactEffects {
    pub direct: Array1<f64>,
    pub indirect: Array1<f64>,
    pub total: Array1<f64>,
}

impl ImpactEffects {
    /// Spatial lag effects: scale `betas_row` by the multiplier's averages.
    pub fn lag(betas_row: ArrayView1<'_, f64>, scales: MultiplierScales) -> Self {
        let direct = &betas_row * scales.diag;
        let total = &betas_row * scales.total;
        Self::from_direct_total(direct, total)
    }

    /// Spatial Durbin effects.
    ///
    /// `direct` and `total` accumulate the beta channel through `S` and the
    /// theta channel through `W·S`; `indirect` is taken once, from the
    /// accumulated totals.
    ///
    /// Panics
    /// ------
    /// - Panics if `betas_row` and `thetas_row` differ in length. Entry points
    ///   check this before calling.
    pub fn durbin(
        betas_row: ArrayView1<'_, f64>, thetas_row: ArrayView1<'_, f64>, lag: MultiplierScales,
        lagged: MultiplierScales,
    ) -> Self {
        let mut direct = &betas_row * lag.diag;
        let mut total = &betas_row * lag.total;
        direct.scaled_add(lagged.diag, &thetas_row);
        total.scaled_add(lagged.total, &thetas_row);
        Self::from_direct_total(direct, total)
    }

    fn from_direct_total(direct: Array1<f64>, total: Array1<f64>) -> Self {
        let indirect = &total - &direct;
        ImpactEffects { direct, indirect, total }
    }

    /// Number of covariates `k`.
    pub fn n_covariates(&self) -> usize {
        self.direct.len()
    }
}

/// ImpactDraws — impact effects stacked across posterior draws.
///
/// Fields
/// ------
/// - `direct`, `indirect`, `total`: `m × k` arrays, one row per draw in the
///   order the draws were supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactDraws {
    pub direct: Array2<f64>,
    pub indirect: Array2<f64>,
    pub total: Array2<f64>,
}

impl ImpactDraws {
    /// Zero-filled storage for `n_samples` draws of `n_covariates` effects.
    pub fn zeros(n_samples: usize, n_covariates: usize) -> Self {
        let shape = (n_samples, n_covariates);
        ImpactDraws {
            direct: Array2::zeros(shape),
            indirect: Array2::zeros(shape),
            total: Array2::zeros(shape),
        }
    }

    /// Write one draw's effects into row `sample`.
    ///
    /// Panics if `sample` is out of range or the effect length differs from
    /// the number of columns.
    pub fn set_sample(&mut self, sample: usize, effects: &ImpactEffects) {
        self.direct.row_mut(sample).assign(&effects.direct);
        self.indirect.row_mut(sample).assign(&effects.indirect);
        self.total.row_mut(sample).assign(&effects.total);
    }

    /// Effects of a single draw, copied out of the stacked arrays.
    pub fn sample(&self, sample: usize) -> Option<ImpactEffects> {
        (sample < self.n_samples()).then(|| ImpactEffects {
            direct: self.direct.row(sample).to_owned(),
            indirect: self.indirect.row(sample).to_owned(),
            total: self.total.row(sample).to_owned(),
        })
    }

    pub fn n_samples(&self) -> usize {
        self.direct.nrows()
    }

    pub fn n_covariates(&self) -> usize {
        self.direct.ncols()
    }
}
