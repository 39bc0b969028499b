//! impacts::options — configuration for impact decompositions.
//!
//! Purpose
//! -------
//! Collect the knobs that control how spatial impacts are computed: the
//! truncation order of the Neumann series approximating `(I − ρW)⁻¹`, and
//! whether inputs are checked before any arithmetic is performed.
//!
//! Key behaviors
//! -------------
//! - Represent configuration via [`ImpactOptions`], built through a
//!   validated constructor or `Default`.
//! - Represent the input-checking policy via [`Validation`]: numeric
//!   pass-through (default) or fail-fast strict checks.
//!
//! Invariants & assumptions
//! ------------------------
//! - `series_order ≥ 1`. The series is `Σ_{p=0}^{K} ρᵖ Wᵖ` with
//!   `K = series_order`, so the default `K = 5` sums the identity and five
//!   powers of W.
//!
//! Downstream usage
//! ----------------
//! - Construct an [`ImpactOptions`] once and pass it by reference into
//!   [`impacts`](crate::impacts::lag::impacts),
//!   [`impacts_durbin`](crate::impacts::durbin::impacts_durbin), or the
//!   driver functions.
use crate::impacts::errors::{ImpactError, ImpactResult};

/// Truncation order used when none is specified.
pub const DEFAULT_SERIES_ORDER: usize = 5;

/// Validation — input-checking policy for impact computations.
///
/// - `PassThrough`: no checks; malformed or non-finite inputs propagate as
///   NaN/Inf or meaningless numbers in the output.
/// - `Strict`: reject empty or mismatched shapes, non-finite values, and
///   rho draws for which the truncated series is not known to converge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    #[default]
    PassThrough,
    Strict,
}

impl Validation {
    pub fn is_strict(&self) -> bool {
        matches!(self, Validation::Strict)
    }
}

/// ImpactOptions — configuration for spatial impact decompositions.
///
/// Fields
/// ------
/// - `series_order`: `usize`
///   Highest power `K` of W kept in `Σ_{p=0}^{K} ρᵖ Wᵖ`. Larger values trade
///   CPU time (one extra sparse product per power) for accuracy when |ρ| is
///   close to the convergence boundary.
/// - `validation`: [`Validation`]
///   Whether to check inputs before computing.
///
/// Invariants
/// ----------
/// - `series_order ≥ 1` for values built through [`ImpactOptions::new`]
///   or `Default`. Fields are public for ergonomic struct updates; callers
///   that bypass the constructor with `series_order = 0` get the identity
///   multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpactOptions {
    /// Highest power of W in the truncated series.
    pub series_order: usize,
    /// Input-checking policy.
    pub validation: Validation,
}

impl ImpactOptions {
    /// Construct validated options.
    ///
    /// Errors
    /// ------
    /// - `ImpactError::InvalidSeriesOrder` when `series_order == 0`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use spatial_diagnostics::impacts::options::{ImpactOptions, Validation};
    ///
    /// let opts = ImpactOptions::new(8, Validation::Strict).unwrap();
    /// assert_eq!(opts.series_order, 8);
    /// assert!(ImpactOptions::new(0, Validation::PassThrough).is_err());
    /// ```
    pub fn new(series_order: usize, validation: Validation) -> ImpactResult<Self> {
        if series_order == 0 {
            return Err(ImpactError::InvalidSeriesOrder { order: series_order });
        }
        Ok(ImpactOptions { series_order, validation })
    }

    /// Default truncation order with strict input checks.
    pub fn strict() -> Self {
        ImpactOptions { series_order: DEFAULT_SERIES_ORDER, validation: Validation::Strict }
    }
}

impl Default for ImpactOptions {
    fn default() -> Self {
        ImpactOptions { series_order: DEFAULT_SERIES_ORDER, validation: Validation::PassThrough }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Defaults (order 5, pass-through).
    // - Rejection of a zero series order by the validated constructor.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that the default configuration matches the usual
    // five-power truncation with no input checks.
    //
    // Expect
    // ------
    // - `series_order == 5` and `validation == PassThrough`.
    fn impact_options_default_is_five_powers_pass_through() {
        // Act
        let opts = ImpactOptions::default();

        // Assert
        assert_eq!(opts.series_order, DEFAULT_SERIES_ORDER);
        assert_eq!(opts.validation, Validation::PassThrough);
        assert!(!opts.validation.is_strict());
    }

    #[test]
    // Purpose
    // -------
    // Ensure `ImpactOptions::new` preserves valid inputs and rejects a
    // zero order with the offending payload.
    //
    // Given
    // -----
    // - order = 3 with strict validation.
    // - order = 0.
    //
    // Expect
    // ------
    // - The first call returns the inputs untouched.
    // - The second returns `InvalidSeriesOrder { order: 0 }`.
    fn impact_options_new_validates_series_order() {
        // Act
        let ok = ImpactOptions::new(3, Validation::Strict);
        let err = ImpactOptions::new(0, Validation::Strict);

        // Assert
        assert_eq!(ok, Ok(ImpactOptions { series_order: 3, validation: Validation::Strict }));
        match err {
            Err(ImpactError::InvalidSeriesOrder { order }) => assert_eq!(order, 0),
            other => panic!("expected InvalidSeriesOrder, got {other:?}"),
        }
    }

    #[test]
    fn impact_options_strict_keeps_default_order() {
        let opts = ImpactOptions::strict();
        assert_eq!(opts.series_order, DEFAULT_SERIES_ORDER);
        assert!(opts.validation.is_strict());
    }
}
