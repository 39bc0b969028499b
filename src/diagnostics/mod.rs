//! diagnostics — model-fit statistics for posterior spatial regressions.
//!
//! Purpose
//! -------
//! Summarize how well a fitted model explains the data: the Deviance
//! Information Criterion with its effective-parameter count, and R-squared
//! style ratios on a univariate response. These functions are independent
//! of the impact decomposition and of each other.
//!
//! Key behaviors
//! -------------
//! - [`DicOutcome::dic_pd`] / [`DicOutcome::dic_pd_checked`] for DIC and pd.
//! - [`r_squared`] (variance ratio of fitted to observed values),
//!   [`r_squared_checked`], and [`coefficient_of_determination`]
//!   (`1 − SS_res/SS_tot`).
//! - Unchecked functions never fail and let NaN/±inf through; the
//!   `*_checked` variants and [`coefficient_of_determination`] return
//!   [`DiagnosticsResult`].
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use spatial_diagnostics::diagnostics::prelude::*;
//! ```

pub mod dic;
pub mod errors;
pub mod r_squared;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::dic::DicOutcome;
pub use self::errors::{DiagnosticsError, DiagnosticsResult};
pub use self::r_squared::{coefficient_of_determination, r_squared, r_squared_checked};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::dic::DicOutcome;
    pub use super::errors::{DiagnosticsError, DiagnosticsResult};
    pub use super::r_squared::{coefficient_of_determination, r_squared, r_squared_checked};
}
