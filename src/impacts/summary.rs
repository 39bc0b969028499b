//! impacts::summary — posterior summaries of stacked impact draws.
//!
//! Purpose
//! -------
//! Reduce the `m × k` direct / indirect / total draws returned by the driver
//! to per-covariate reporting quantities: posterior mean, posterior standard
//! deviation, and an equal-tailed credible interval.
//!
//! Conventions
//! -----------
//! - Standard deviations use the `m − 1` denominator and are NaN for a
//!   single draw.
//! - Interval bounds are the `(1 − level)/2` and `(1 + level)/2` sample
//!   quantiles, using the `statrs` order-statistics estimator.
//! - Non-finite draws are not filtered; they propagate into the summaries.
use crate::impacts::{
    effects::ImpactDraws,
    errors::{ImpactError, ImpactResult},
    validation::validate_sample_count,
};
use ndarray::{Array1, ArrayView2};
use statrs::statistics::{Data, OrderStatistics, Statistics};

/// Per-covariate summary of one effect type.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectSummary {
    pub mean: Array1<f64>,
    pub std_dev: Array1<f64>,
    pub lower: Array1<f64>,
    pub upper: Array1<f64>,
}

impl EffectSummary {
    /// Summarize each column of an `m × k` draw matrix.
    pub fn from_draws(draws: ArrayView2<'_, f64>, level: f64) -> Self {
        let k = draws.ncols();
        let (lower_tau, upper_tau) = ((1.0 - level) / 2.0, (1.0 + level) / 2.0);
        let mut summary = EffectSummary {
            mean: Array1::zeros(k),
            std_dev: Array1::zeros(k),
            lower: Array1::zeros(k),
            upper: Array1::zeros(k),
        };
        for (j, column) in draws.columns().into_iter().enumerate() {
            let values = column.to_vec();
            summary.mean[j] = values.iter().mean();
            summary.std_dev[j] = values.iter().std_dev();
            let mut data = Data::new(values);
            summary.lower[j] = data.quantile(lower_tau);
            summary.upper[j] = data.quantile(upper_tau);
        }
        summary
    }
}

/// ImpactSummary — posterior summaries of direct, indirect, and total effects.
///
/// Fields
/// ------
/// - `level`: credible level used for the intervals (e.g. 0.95).
/// - `direct`, `indirect`, `total`: one [`EffectSummary`] each, with one
///   entry per covariate.
///
/// Examples
/// --------
/// ```rust
/// use ndarray::array;
/// use spatial_diagnostics::impacts::{effects::ImpactDraws, summary::ImpactSummary};
///
/// let draws = ImpactDraws {
///     direct: array![[1.0], [2.0], [3.0]],
///     indirect: array![[0.5], [0.5], [0.5]],
///     total: array![[1.5], [2.5], [3.5]],
/// };
/// let summary = ImpactSummary::from_draws(&draws, 0.9).unwrap();
/// assert!((summary.direct.mean[0] - 2.0).abs() < 1e-12);
/// assert_eq!(summary.indirect.std_dev[0], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactSummary {
    pub level: f64,
    pub direct: EffectSummary,
    pub indirect: EffectSummary,
    pub total: EffectSummary,
}

impl ImpactSummary {
    /// Summarize stacked draws at the given credible level.
    ///
    /// Errors
    /// ------
    /// - `ImpactError::InvalidCredibleLevel` unless `0 < level < 1`.
    /// - `ImpactError::NoSamples` when `draws` holds no rows.
    pub fn from_draws(draws: &ImpactDraws, level: f64) -> ImpactResult<Self> {
        if !(level > 0.0 && level < 1.0) {
            return Err(ImpactError::InvalidCredibleLevel { level });
        }
        validate_sample_count(draws.n_samples())?;

        Ok(ImpactSummary {
            level,
            direct: EffectSummary::from_draws(draws.direct.view(), level),
            indirect: EffectSummary::from_draws(draws.indirect.view(), level),
            total: EffectSummary::from_draws(draws.total.view(), level),
        })
    }
}
