//! diagnostics::dic — Deviance Information Criterion and effective parameters.
//!
//! Purpose
//! -------
//! Turn posterior log-likelihood samples into the Spiegelhalter et al.
//! model-fit summary:
//!
//! - `D_hat = −2 · ℓ(θ̄)`  (deviance at the posterior mean),
//! - `D_bar = −2 · mean(ℓ(θ⁽ˢ⁾))`  (posterior mean deviance),
//! - `pd    = D_bar − D_hat`,
//! - `DIC   = D_bar + pd`.
//!
//! Key behaviors
//! -------------
//! - [`DicOutcome::dic_pd`] is pure arithmetic: an empty sample gives a NaN
//!   mean, and non-finite log-likelihoods flow into non-finite outputs.
//! - [`DicOutcome::dic_pd_checked`] runs
//!   [`validate_log_likelihoods`] first and reports the offending input.
//!
//! Conventions
//! -----------
//! - `pd` may be negative when the log-likelihood is far from concave in the
//!   parameters; no clamping is applied.
use crate::diagnostics::{errors::DiagnosticsResult, validation::validate_log_likelihoods};
use statrs::statistics::Statistics;

/// DicOutcome — DIC, pd, and the two deviances they are built from.
///
/// Fields are private so the four quantities always stay mutually
/// consistent; read them through the accessors.
///
/// Examples
/// --------
/// ```rust
/// use spatial_diagnostics::diagnostics::dic::DicOutcome;
///
/// let outcome = DicOutcome::dic_pd(&[-10.0, -12.0, -14.0], -11.0);
/// assert!((outcome.d_hat() - 22.0).abs() < 1e-12);
/// assert!((outcome.d_bar() - 24.0).abs() < 1e-12);
/// assert!((outcome.pd() - 2.0).abs() < 1e-12);
/// assert!((outcome.dic() - 26.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DicOutcome {
    dic: f64,
    pd: f64,
    d_bar: f64,
    d_hat: f64,
}

impl DicOutcome {
    /// Compute DIC and pd from posterior log-likelihood samples.
    ///
    /// Parameters
    /// ----------
    /// - `log_likelihoods`: `&[f64]`
    ///   Log-likelihood of the data at each posterior draw.
    /// - `log_likelihood_at_mean`: `f64`
    ///   Log-likelihood evaluated at the posterior mean of the parameters.
    ///
    /// Returns
    /// -------
    /// `DicOutcome`
    ///   Never fails; degenerate inputs yield NaN/±inf fields.
    pub fn dic_pd(log_likelihoods: &[f64], log_likelihood_at_mean: f64) -> Self {
        let d_hat = -2.0 * log_likelihood_at_mean;
        let d_bar = -2.0 * log_likelihoods.iter().mean();
        let pd = d_bar - d_hat;
        DicOutcome { dic: d_bar + pd, pd, d_bar, d_hat }
    }

    /// As [`DicOutcome::dic_pd`], but reject empty or non-finite inputs.
    ///
    /// Errors
    /// ------
    /// - `DiagnosticsError::EmptyLogLikelihoods`
    /// - `DiagnosticsError::NonFiniteLogLikelihood`
    /// - `DiagnosticsError::NonFiniteLogLikelihoodAtMean`
    ///
    /// [`DiagnosticsError`]: crate::diagnostics::errors::DiagnosticsError
    pub fn dic_pd_checked(
        log_likelihoods: &[f64], log_likelihood_at_mean: f64,
    ) -> DiagnosticsResult<Self> {
        validate_log_likelihoods(log_likelihoods, log_likelihood_at_mean)?;
        Ok(Self::dic_pd(log_likelihoods, log_likelihood_at_mean))
    }

    /// Deviance Information Criterion `D_bar + pd`.
    pub fn dic(&self) -> f64 {
        self.dic
    }

    /// Effective number of parameters.
    pub fn pd(&self) -> f64 {
        self.pd
    }

    /// Posterior mean deviance.
    pub fn d_bar(&self) -> f64 {
        self.d_bar
    }

    /// Deviance at the posterior mean.
    pub fn d_hat(&self) -> f64 {
        self.d_hat
    }
}
