//! spatial_diagnostics — posterior diagnostics for Bayesian spatial regressions.
//!
//! Purpose
//! -------
//! Serve as the crate root for turning externally produced MCMC draws of a
//! spatial lag or spatial Durbin model into reporting quantities: per-draw
//! direct / indirect / total impacts, the Deviance Information Criterion, and
//! R-squared style fit ratios.
//!
//! Key behaviors
//! -------------
//! - [`impacts`]: truncated-Neumann-series impact decompositions for single
//!   draws and whole posterior samples, plus posterior summaries.
//! - [`diagnostics`]: DIC / pd and R-squared on plain slices and `ndarray`
//!   views.
//!
//! Invariants & assumptions
//! ------------------------
//! - Posterior sampling, model estimation, and matrix I/O happen upstream;
//!   every function here is a pure computation over borrowed inputs.
//! - The sparse weight matrix is a `sprs::CsMat<f64>` borrowed read-only by
//!   every draw; dense inputs and outputs are `ndarray` arrays owned by the
//!   caller.
//!
//! Conventions
//! -----------
//! - By default inputs pass straight through to the arithmetic, so invalid
//!   values surface as NaN/±inf in the outputs. Fail-fast checking is opt-in
//!   via `impacts::Validation::Strict` and the `*_checked` diagnostics.
//! - Each module defines its own error enum and `Result` alias
//!   (`ImpactError` / `ImpactResult`, `DiagnosticsError` / `DiagnosticsResult`).
//! - Progress is reported through the `log` facade at `debug` / `trace`
//!   level; no logger is installed by this crate.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule; `tests/` exercises the public
//!   surface end to end on small hand-checkable weight matrices.

pub mod diagnostics;
pub mod impacts;
