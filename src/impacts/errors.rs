//! impacts::errors — error type for spatial impact decompositions.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the impact routines
//! (lag and Durbin decompositions, the per-sample driver, and posterior
//! summaries). Most impact computations are numeric pass-through by default;
//! the variants below are only produced by configuration builders and by the
//! opt-in strict validation policy.
//!
//! Key behaviors
//! -------------
//! - Define [`ImpactError`] and [`ImpactResult`] as the canonical error and
//!   result types for everything under `impacts`.
//! - Attach human-readable `Display` messages that embed the offending value
//!   or index so failures are diagnosable without extra context.
//!
//! Conventions
//! -----------
//! - Sample indices are 0-based and refer to rows of the coefficient draws /
//!   positions in the `rhos` vector.
//! - Error messages are phrased in terms of domain constraints (e.g.
//!   "|rho| · ‖W‖ < 1") rather than low-level details.
//!
//! Testing notes
//! -------------
//! - Unit tests check that each message embeds its payload.

pub type ImpactResult<T> = Result<T, ImpactError>;

/// ImpactError — failures reported by impact configuration and validation.
///
/// Variants
/// --------
/// - Configuration: `InvalidSeriesOrder`, `InvalidCredibleLevel`.
/// - Weight matrix: `EmptyWeights`, `NonSquareWeights`, `NonFiniteWeight`.
/// - Posterior draws: `NoSamples`, `SampleCountMismatch`,
///   `CoefficientShapeMismatch`, `NonFiniteRho`, `NonFiniteCoefficient`.
/// - Series convergence: `NonConvergentRho`.
///
/// Notes
/// -----
/// - Only configuration variants can surface under
///   `Validation::PassThrough`; everything else requires
///   `Validation::Strict`.
#[derive(Debug, Clone, PartialEq)]
pub enum ImpactError {
    // ---- Configuration ----
    /// Truncated series must include at least one power of W.
    InvalidSeriesOrder { order: usize },

    /// Credible level for posterior intervals must lie in (0, 1).
    InvalidCredibleLevel { level: f64 },

    // ---- Weight matrix ----
    /// W has no rows.
    EmptyWeights,

    /// W must be square.
    NonSquareWeights { rows: usize, cols: usize },

    /// A stored entry of W is NaN/±inf.
    NonFiniteWeight { row: usize, col: usize, value: f64 },

    // ---- Posterior draws ----
    /// No posterior samples were supplied.
    NoSamples,

    /// Number of coefficient rows differs from the number of rho draws.
    SampleCountMismatch { rhos: usize, rows: usize },

    /// Theta draws must have the same shape as beta draws.
    CoefficientShapeMismatch { expected: (usize, usize), actual: (usize, usize) },

    /// A rho draw is NaN/±inf.
    NonFiniteRho { sample: usize, value: f64 },

    /// A coefficient draw is NaN/±inf.
    NonFiniteCoefficient { sample: usize, column: usize, value: f64 },

    // ---- Series convergence ----
    /// |rho| · min(‖W‖₁, ‖W‖∞) ≥ 1, so the Neumann series is not known to converge.
    NonConvergentRho { sample: usize, rho: f64, norm_bound: f64 },
}

impl std::error::Error for ImpactError {}

impl std::fmt::Display for ImpactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Configuration ----
            ImpactError::InvalidSeriesOrder { order } => {
                write!(f, "Series order must be at least 1; got: {order}")
            }
            ImpactError::InvalidCredibleLevel { level } => {
                write!(f, "Credible level must lie strictly between 0 and 1; got: {level}")
            }
            // ---- Weight matrix ----
            ImpactError::EmptyWeights => write!(f, "Weight matrix has no rows."),
            ImpactError::NonSquareWeights { rows, cols } => {
                write!(f, "Weight matrix must be square; got {rows}x{cols}")
            }
            ImpactError::NonFiniteWeight { row, col, value } => {
                write!(f, "Weight matrix entry ({row}, {col}) is non-finite: {value}")
            }
            // ---- Posterior draws ----
            ImpactError::NoSamples => write!(f, "No posterior samples supplied."),
            ImpactError::SampleCountMismatch { rhos, rows } => {
                write!(f, "Expected one coefficient row per rho draw: {rhos} rhos, {rows} rows")
            }
            ImpactError::CoefficientShapeMismatch { expected, actual } => write!(
                f,
                "Theta draws must match beta draws in shape: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            ImpactError::NonFiniteRho { sample, value } => {
                write!(f, "rho draw at sample {sample} is non-finite: {value}")
            }
            ImpactError::NonFiniteCoefficient { sample, column, value } => {
                write!(f, "Coefficient at sample {sample}, column {column} is non-finite: {value}")
            }
            // ---- Series convergence ----
            ImpactError::NonConvergentRho { sample, rho, norm_bound } => write!(
                f,
                "rho = {rho} at sample {sample} violates |rho| · ‖W‖ < 1 (‖W‖ = {norm_bound}); \
                 the truncated series is not a valid approximation"
            ),
        }
    }
}
