//! impacts::multiplier — truncated spatial multiplier and its moments.
//!
//! Purpose
//! -------
//! Approximate the spatial multiplier `S(ρ) = (I − ρW)⁻¹` by the truncated
//! Neumann series
//!
//! ```text
//! S_K(ρ) = I + ρW + ρ²W² + … + ρᴷWᴷ,
//! ```
//!
//! and reduce it to the two scalars that impact decompositions need: the
//! average diagonal entry `tr(S)/n` and the average row sum `1ᵀS1/n`.
//!
//! Key behaviors
//! -------------
//! - [`spatial_multiplier`] builds `S_K(ρ)` explicitly as a sparse matrix.
//!   This is the literal per-sample construction used by the single-sample
//!   entry points.
//! - [`MultiplierScales::of`] reduces any sparse matrix to its average
//!   diagonal and average total.
//! - [`MultiplierMoments`] precomputes `tr(Wᵖ)` and `1ᵀWᵖ1` for
//!   `p = 0,…,K` (and `K + 1` for the Durbin channel `W·S_K`) once per
//!   weight matrix. Both reductions are linear, so per-sample scales follow
//!   from a polynomial in ρ without forming any matrix.
//!
//! Invariants & assumptions
//! ------------------------
//! - W is square (`n × n`); callers check this before reaching this module.
//! - Convergence of the series (|ρ| below the reciprocal spectral radius of
//!   W) is the caller's responsibility; the truncation is an approximation
//!   either way.
//! - Results from [`MultiplierMoments`] and from [`spatial_multiplier`] +
//!   [`MultiplierScales::of`] agree up to floating-point rounding.
//!
//! Performance
//! -----------
//! - [`spatial_multiplier`] costs `K` sparse-sparse products per call.
//! - Building [`MultiplierMoments`] costs the same once; each subsequent
//!   evaluation is `O(K)`.
//! - Powers of a sparse W can fill in quickly; memory is bounded by the
//!   densest power kept alive (one at a time).
use sprs::CsMat;
use std::borrow::Cow;

/// Average diagonal and average total of a spatial multiplier.
///
/// - `diag`: `tr(S)/n`, the average own-unit effect of a unit shock.
/// - `total`: `1ᵀS1/n`, the average total (own + spillover) effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplierScales {
    pub diag: f64,
    pub total: f64,
}

impl MultiplierScales {
    /// Reduce a square sparse matrix to its average diagonal and total.
    ///
    /// An empty (0 × 0) matrix yields NaN for both scales.
    pub fn of(matrix: &CsMat<f64>) -> Self {
        let n = matrix.rows() as f64;
        let (trace, total) = trace_and_total(matrix);
        MultiplierScales { diag: trace / n, total: total / n }
    }
}

/// Build the truncated spatial multiplier `Σ_{p=0}^{K} ρᵖ Wᵖ`.
///
/// Parameters
/// ----------
/// - `rho`: `f64`
///   Spatial autoregressive parameter. Not checked.
/// - `w`: `&CsMat<f64>`
///   Square `n × n` weight matrix, any storage order.
/// - `series_order`: `usize`
///   Highest power `K` of W included. `0` yields the identity.
///
/// Returns
/// -------
/// `CsMat<f64>`
///   The `n × n` sparse matrix `S_K(ρ)` in CSR storage.
///
/// Panics
/// ------
/// - Panics inside `sprs` if W is not square and `series_order ≥ 2`.
///   Public entry points reject non-square weights first.
pub fn spatial_multiplier(rho: f64, w: &CsMat<f64>, series_order: usize) -> CsMat<f64> {
    let w = as_csr(w);
    let mut multiplier = CsMat::<f64>::eye(w.rows());
    let mut power = CsMat::<f64>::eye(w.rows());
    let mut coeff = 1.0;
    for _ in 1..=series_order {
        power = &power * &*w;
        coeff *= rho;
        let term = power.map(|&value| coeff * value);
        multiplier = &multiplier + &term;
    }
    multiplier
}

/// MultiplierMoments — precomputed power-basis reductions of W.
///
/// Purpose
/// -------
/// Hoist the part of the impact computation that does not depend on ρ out
/// of the per-sample loop. For a fixed W the traces `tᵖ = tr(Wᵖ)` and totals
/// `sᵖ = 1ᵀWᵖ1` are computed once; then
///
/// ```text
/// tr(S_K(ρ))     = Σ_{p=0}^{K} ρᵖ tᵖ          1ᵀS_K(ρ)1     = Σ_{p=0}^{K} ρᵖ sᵖ
/// tr(W·S_K(ρ))   = Σ_{p=0}^{K} ρᵖ tᵖ⁺¹        1ᵀW·S_K(ρ)1   = Σ_{p=0}^{K} ρᵖ sᵖ⁺¹
/// ```
///
/// Fields
/// ------
/// - `n`: number of spatial units.
/// - `series_order`: `K`.
/// - `traces`, `totals`: per-power reductions for `p = 0,…,K` (or `K + 1`
///   when built with [`MultiplierMoments::durbin`]).
///
/// Invariants
/// ----------
/// - `traces.len() == totals.len()`, equal to `K + 1` or `K + 2`.
/// - `traces[0] == totals[0] == n`.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiplierMoments {
    n: usize,
    series_order: usize,
    traces: Vec<f64>,
    totals: Vec<f64>,
}

impl MultiplierMoments {
    /// Moments for the spatial lag model: powers `0,…,K`.
    pub fn lag(w: &CsMat<f64>, series_order: usize) -> Self {
        Self::new(w, series_order, series_order)
    }

    /// Moments for the spatial Durbin model: powers `0,…,K + 1`.
    pub fn durbin(w: &CsMat<f64>, series_order: usize) -> Self {
        Self::new(w, series_order, series_order + 1)
    }

    fn new(w: &CsMat<f64>, series_order: usize, max_power: usize) -> Self {
        let w = as_csr(w);
        let n = w.rows();
        log::debug!("building power basis of {n}x{n} weight matrix up to W^{max_power}");

        let mut traces = Vec::with_capacity(max_power + 1);
        let mut totals = Vec::with_capacity(max_power + 1);
        traces.push(n as f64);
        totals.push(n as f64);

        let mut power: Option<CsMat<f64>> = None;
        for _ in 1..=max_power {
            let next = match &power {
                None => w.clone().into_owned(),
                Some(prev) => prev * &*w,
            };
            let (trace, total) = trace_and_total(&next);
            traces.push(trace);
            totals.push(total);
            power = Some(next);
        }
        MultiplierMoments { n, series_order, traces, totals }
    }

    /// Number of spatial units `n`.
    pub fn n_units(&self) -> usize {
        self.n
    }

    /// Truncation order `K`.
    pub fn series_order(&self) -> usize {
        self.series_order
    }

    /// Whether the `K + 1` power needed by [`durbin_scales`](Self::durbin_scales) is present.
    pub fn has_lagged_channel(&self) -> bool {
        self.traces.len() > self.series_order + 1
    }

    /// Scales of `S_K(ρ)`.
    pub fn lag_scales(&self, rho: f64) -> MultiplierScales {
        self.scales_from(0, rho)
    }

    /// Scales of `W·S_K(ρ)`.
    ///
    /// Returns `None` if the moments were built with [`MultiplierMoments::lag`],
    /// which stops one power short of the lagged channel.
    pub fn durbin_scales(&self, rho: f64) -> Option<MultiplierScales> {
        self.has_lagged_channel().then(|| self.lagged_scales(rho))
    }

    /// Scales of `W·S_K(ρ)` for moments built with [`MultiplierMoments::durbin`].
    ///
    /// Panics on lag-only moments; only the Durbin driver calls this.
    pub(crate) fn lagged_scales(&self, rho: f64) -> MultiplierScales {
        self.scales_from(1, rho)
    }

    // Horner evaluation of Σ_{p=0}^{K} ρᵖ m[p + offset] for both reductions.
    fn scales_from(&self, offset: usize, rho: f64) -> MultiplierScales {
        let range = offset..=offset + self.series_order;
        let trace = horner(&self.traces[range.clone()], rho);
        let total = horner(&self.totals[range], rho);
        let n = self.n as f64;
        MultiplierScales { diag: trace / n, total: total / n }
    }
}

//
// ---------- Private helpers ----------
//

#[inline]
fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Sum of diagonal entries and sum of all stored entries.
fn trace_and_total(matrix: &CsMat<f64>) -> (f64, f64) {
    matrix.iter().fold((0.0, 0.0), |(trace, total), (&value, (row, col))| {
        let trace = if row == col { trace + value } else { trace };
        (trace, total + value)
    })
}

fn as_csr(w: &CsMat<f64>) -> Cow<'_, CsMat<f64>> {
    if w.is_csr() { Cow::Borrowed(w) } else { Cow::Owned(w.to_other_storage()) }
}
