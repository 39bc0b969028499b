//! Errors for model-fit diagnostics (DIC / pd and R-squared).
//!
//! `DiagnosticsError` is only produced by the `*_checked` entry points; the
//! plain functions pass non-finite and degenerate inputs straight through to
//! their numeric output. `DiagnosticsResult<T>` standardizes the return type.

pub type DiagnosticsResult<T> = Result<T, DiagnosticsError>;

/// Unified error type for fit diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticsError {
    // ---- DIC / pd ----
    /// No posterior log-likelihood samples.
    EmptyLogLikelihoods,

    /// A posterior log-likelihood sample is NaN/±inf.
    NonFiniteLogLikelihood { index: usize, value: f64 },

    /// The log-likelihood at the posterior mean is NaN/±inf.
    NonFiniteLogLikelihoodAtMean { value: f64 },

    // ---- R-squared ----
    /// Observed or fitted response has no rows or no columns.
    EmptyResponse,

    /// Observed and fitted responses differ in length.
    ResponseLengthMismatch { observed: usize, fitted: usize },

    /// A response value in the first column is NaN/±inf.
    NonFiniteResponse { index: usize, value: f64 },

    /// Observed response has zero variance, so the ratio is undefined.
    ZeroResponseVariance,
}

impl std::error::Error for DiagnosticsError {}

impl std::fmt::Display for DiagnosticsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- DIC / pd ----
            DiagnosticsError::EmptyLogLikelihoods => {
                write!(f, "Diagnostics Error: no posterior log-likelihood samples")
            }
            DiagnosticsError::NonFiniteLogLikelihood { index, value } => write!(
                f,
                "Diagnostics Error: log-likelihood sample at index {index} is non-finite ({value})"
            ),
            DiagnosticsError::NonFiniteLogLikelihoodAtMean { value } => write!(
                f,
                "Diagnostics Error: log-likelihood at the posterior mean is non-finite ({value})"
            ),
            // ---- R-squared ----
            DiagnosticsError::EmptyResponse => {
                write!(f, "Diagnostics Error: response has no rows or no columns")
            }
            DiagnosticsError::ResponseLengthMismatch { observed, fitted } => write!(
                f,
                "Diagnostics Error: observed response has {observed} rows, fitted has {fitted}"
            ),
            DiagnosticsError::NonFiniteResponse { index, value } => {
                write!(f, "Diagnostics Error: response at row {index} is non-finite ({value})")
            }
            DiagnosticsError::ZeroResponseVariance => {
                write!(f, "Diagnostics Error: observed response has zero variance")
            }
        }
    }
}
