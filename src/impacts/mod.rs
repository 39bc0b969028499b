//! impacts — direct, indirect, and total effects for spatial regressions.
//!
//! Purpose
//! -------
//! Compute the LeSage–Pace summary impacts of covariates in spatial lag and
//! spatial Durbin models, draw by draw, from posterior samples of the
//! regression coefficients and the spatial autoregressive parameter ρ. The
//! spatial multiplier `(I − ρW)⁻¹` is approximated by a truncated Neumann
//! series of configurable order.
//!
//! Key behaviors
//! -------------
//! - Single-draw decompositions via [`impacts`] (lag model) and
//!   [`impacts_durbin`] (Durbin model), each building the truncated
//!   multiplier explicitly.
//! - Multi-draw drivers [`run_impacts`] and [`run_impacts_durbin`] that
//!   stack per-draw effects into `m × k` matrices while reusing the power
//!   basis of W across draws.
//! - Posterior reporting via [`ImpactSummary`].
//! - Configuration through [`ImpactOptions`] (series order and
//!   [`Validation`] policy) and a dedicated [`ImpactError`] /
//!   [`ImpactResult`] pair.
//!
//! Invariants & assumptions
//! ------------------------
//! - W is square and shared read-only by every draw.
//! - `total == direct + indirect` for every draw, because `indirect` is
//!   always the residual `total − direct`.
//! - With ρ = 0 the multiplier is the identity, so `direct == β` and
//!   `indirect == 0`.
//! - Under the default `Validation::PassThrough` policy non-finite inputs and
//!   non-convergent ρ are not detected; they surface as NaN/Inf or
//!   meaningless numbers in the outputs. Only shape errors that would make
//!   the arithmetic undefined are always reported.
//!
//! Conventions
//! -----------
//! - Coefficient rows exclude the intercept.
//! - Draw indices are 0-based and refer to the order of `rhos`.
//! - `series_order = K` means the series `I + ρW + … + ρᴷWᴷ`.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use spatial_diagnostics::impacts::prelude::*;
//!   ```
//!
//!   then calls [`run_impacts`] on the posterior draws and
//!   [`ImpactSummary::from_draws`] on the result.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule; `tests/` holds the end-to-end
//!   scenarios on small hand-checkable weight matrices.

pub mod driver;
pub mod durbin;
pub mod effects;
pub mod errors;
pub mod lag;
pub mod multiplier;
pub mod options;
pub mod summary;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::driver::{run_impacts, run_impacts_durbin};
pub use self::durbin::impacts_durbin;
pub use self::effects::{ImpactDraws, ImpactEffects};
pub use self::errors::{ImpactError, ImpactResult};
pub use self::lag::impacts;
pub use self::multiplier::{MultiplierMoments, MultiplierScales, spatial_multiplier};
pub use self::options::{ImpactOptions, Validation};
pub use self::summary::{EffectSummary, ImpactSummary};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::driver::{run_impacts, run_impacts_durbin};
    pub use super::durbin::impacts_durbin;
    pub use super::effects::{ImpactDraws, ImpactEffects};
    pub use super::errors::{ImpactError, ImpactResult};
    pub use super::lag::impacts;
    pub use super::options::{ImpactOptions, Validation};
    pub use super::summary::ImpactSummary;
}
