//! Integration tests for posterior impact decompositions and fit diagnostics.
//!
//! Purpose
//! -------
//! - Validate the end-to-end reporting pipeline: from posterior draws of
//!   (β, θ, ρ) and a sparse weight matrix, through the per-draw impact
//!   decomposition and stacking driver, to posterior summaries, alongside
//!   the DIC / pd and R-squared diagnostics.
//! - Use weight matrices small enough for every expected value to be
//!   checked by hand.
//!
//! Coverage
//! --------
//! - `impacts`:
//!   - `impacts` / `impacts_durbin` on a single directed edge.
//!   - `run_impacts` / `run_impacts_durbin` agreement with the single-draw
//!     functions and row-order preservation.
//!   - Closed-form totals on a row-standardized ring.
//!   - `Validation::Strict` rejection of a non-convergent draw.
//!   - `ImpactSummary` over driver output.
//! - `diagnostics`:
//!   - `DicOutcome` identities and `r_squared` vs
//!     `coefficient_of_determination`.
//!
//! Exclusions
//! ----------
//! - Individual validation branches and error `Display` strings, which are
//!   covered by unit tests.
//! - Large weight matrices and performance characteristics.
use approx::assert_relative_eq;
use ndarray::{Array1, Array2, array};
use spatial_diagnostics::{
    diagnostics::prelude::*,
    impacts::{
        ImpactError, ImpactOptions, ImpactSummary, Validation, impacts, impacts_durbin,
        run_impacts, run_impacts_durbin,
    },
};
use sprs::{CsMat, TriMat};

/// Purpose
/// -------
/// Build the 3 × 3 weight matrix with a single directed edge from unit 0 to
/// unit 1 (weight 1, all else 0).
///
/// Invariants
/// ----------
/// - `W² = 0`, so the truncated series is exactly `I + ρW` for every order.
fn single_edge_weights() -> CsMat<f64> {
    let mut tri = TriMat::new((3, 3));
    tri.add_triplet(0, 1, 1.0);
    tri.to_csr()
}

/// Purpose
/// -------
/// Build a row-standardized ring of `n ≥ 3` units where each unit gives
/// weight 1/2 to both neighbors.
///
/// Invariants
/// ----------
/// - Every power `Wᵖ` is row-stochastic, so `sum_all(Wᵖ)/n = 1` and the
///   total impact equals `β · Σ_{p ≤ K} ρᵖ`.
fn ring_weights(n: usize) -> CsMat<f64> {
    let mut tri = TriMat::new((n, n));
    for i in 0..n {
        tri.add_triplet(i, (i + 1) % n, 0.5);
        tri.add_triplet(i, (i + n - 1) % n, 0.5);
    }
    tri.to_csr()
}

#[test]
// Purpose
// -------
// Reproduce the hand-checked single-edge scenario for both model types.
//
// Given
// -----
// - Single-edge W, ρ = 0.5, β = [2.0], θ = [1.0], default options.
//
// Expect
// ------
// - Lag: direct = 2, total = 7/3, indirect = 1/3.
// - Durbin: W·SW = W adds 0 to the diagonal and 1/3 to the total, so
//   direct = 2, total = 8/3, indirect = 2/3.
fn single_edge_scenario_matches_hand_computation() {
    // Arrange
    let w = single_edge_weights();
    let opts = ImpactOptions::default();
    let betas_row = array![2.0];
    let thetas_row = array![1.0];

    // Act
    let lag = impacts(betas_row.view(), 0.5, &w, &opts).expect("valid lag inputs");
    let durbin = impacts_durbin(betas_row.view(), thetas_row.view(), 0.5, &w, &opts)
        .expect("valid durbin inputs");

    // Assert
    assert_relative_eq!(lag.direct[0], 2.0, epsilon = 1e-12);
    assert_relative_eq!(lag.total[0], 7.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(lag.indirect[0], 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(durbin.direct[0], 2.0, epsilon = 1e-12);
    assert_relative_eq!(durbin.total[0], 8.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(durbin.indirect[0], 2.0 / 3.0, epsilon = 1e-12);
}

#[test]
// Purpose
// -------
// Ensure the driver stacks rows in sample order and matches the
// single-draw functions draw by draw.
//
// Given
// -----
// - Ring of 5 units, three draws with ρ ∈ {0.0, 0.5, −0.3} and two
//   covariates; θ draws for the Durbin variant.
//
// Expect
// ------
// - Row i of each stacked matrix equals the single-draw result for draw i.
// - `total == direct + indirect` elementwise.
// - The ρ = 0 draw reproduces β with zero indirect effects.
fn driver_matches_single_draw_functions_in_sample_order() {
    // Arrange
    let w = ring_weights(5);
    let opts = ImpactOptions::default();
    let betas = array![[1.0, -2.0], [2.0, 0.5], [0.25, 3.0]];
    let thetas = array![[0.5, 0.0], [-1.0, 1.0], [2.0, -0.5]];
    let rhos = array![0.0, 0.5, -0.3];

    // Act
    let lag_draws = run_impacts(betas.view(), rhos.view(), &w, &opts).expect("lag driver");
    let durbin_draws = run_impacts_durbin(betas.view(), thetas.view(), rhos.view(), &w, &opts)
        .expect("durbin driver");

    // Assert
    assert_eq!(lag_draws.n_samples(), 3);
    assert_eq!(lag_draws.n_covariates(), 2);
    for (i, &rho) in rhos.iter().enumerate() {
        let lag = impacts(betas.row(i), rho, &w, &opts).expect("lag draw");
        let durbin =
            impacts_durbin(betas.row(i), thetas.row(i), rho, &w, &opts).expect("durbin draw");
        for j in 0..2 {
            assert_relative_eq!(lag_draws.direct[[i, j]], lag.direct[j], epsilon = 1e-10);
            assert_relative_eq!(lag_draws.total[[i, j]], lag.total[j], epsilon = 1e-10);
            assert_relative_eq!(durbin_draws.direct[[i, j]], durbin.direct[j], epsilon = 1e-10);
            assert_relative_eq!(durbin_draws.total[[i, j]], durbin.total[j], epsilon = 1e-10);
        }
    }
    let recombined = &lag_draws.direct + &lag_draws.indirect;
    for (sum, total) in recombined.iter().zip(lag_draws.total.iter()) {
        assert_relative_eq!(*sum, *total, epsilon = 1e-12);
    }
    assert_relative_eq!(lag_draws.direct[[0, 0]], 1.0, epsilon = 1e-12);
    assert_relative_eq!(lag_draws.direct[[0, 1]], -2.0, epsilon = 1e-12);
    assert_eq!(lag_draws.indirect.row(0), Array1::<f64>::zeros(2));
}

#[test]
// Purpose
// -------
// Check totals against the closed form of the truncated geometric series
// and show that raising the order approaches the exact inverse.
//
// Given
// -----
// - Row-standardized ring of 6 units, ρ = 0.4, β = [1.5].
//
// Expect
// ------
// - Order 5: total = 1.5 · (1 − 0.4⁶) / 0.6.
// - Order 60: total ≈ 1.5 / 0.6.
fn ring_totals_follow_truncated_geometric_series() {
    let w = ring_weights(6);
    let betas = array![[1.5]];
    let rhos = array![0.4];
    let default_order = ImpactOptions::default();
    let long_order =
        ImpactOptions::new(60, Validation::PassThrough).expect("positive series order");

    let truncated = run_impacts(betas.view(), rhos.view(), &w, &default_order).expect("order 5");
    let converged = run_impacts(betas.view(), rhos.view(), &w, &long_order).expect("order 60");

    assert_relative_eq!(
        truncated.total[[0, 0]],
        1.5 * (1.0 - 0.4_f64.powi(6)) / 0.6,
        epsilon = 1e-12
    );
    assert_relative_eq!(converged.total[[0, 0]], 1.5 / 0.6, epsilon = 1e-10);
}

#[test]
// Purpose
// -------
// Contrast the two validation policies on a draw outside the convergence
// region.
//
// Given
// -----
// - Ring of 4 units (‖W‖₁ = ‖W‖∞ = 1) and ρ draws [0.2, 1.5].
//
// Expect
// ------
// - Pass-through: both rows are computed (the second is meaningless but
//   finite).
// - Strict: `NonConvergentRho` for sample 1.
fn strict_validation_rejects_non_convergent_draw() {
    let w = ring_weights(4);
    let betas = array![[1.0], [1.0]];
    let rhos = array![0.2, 1.5];

    let lenient = run_impacts(betas.view(), rhos.view(), &w, &ImpactOptions::default())
        .expect("pass-through computes every draw");
    assert!(lenient.total.iter().all(|v| v.is_finite()));

    match run_impacts(betas.view(), rhos.view(), &w, &ImpactOptions::strict()) {
        Err(ImpactError::NonConvergentRho { sample, rho, .. }) => {
            assert_eq!(sample, 1);
            assert_eq!(rho, 1.5);
        }
        other => panic!("expected NonConvergentRho, got {other:?}"),
    }
}

#[test]
// Purpose
// -------
// Ensure Durbin impacts with zero θ reproduce lag impacts through the
// driver, and that summaries of the draws are coherent.
//
// Given
// -----
// - Ring of 5 units, 4 draws, one covariate, θ ≡ 0.
//
// Expect
// ------
// - Stacked Durbin draws equal stacked lag draws.
// - Summary means equal column means and lower ≤ mean ≤ upper.
fn durbin_with_zero_thetas_and_summary_pipeline() {
    // Arrange
    let w = ring_weights(5);
    let opts = ImpactOptions::default();
    let betas = array![[1.0], [1.2], [0.8], [1.1]];
    let thetas = Array2::<f64>::zeros((4, 1));
    let rhos = array![0.3, 0.35, 0.25, 0.3];

    // Act
    let lag = run_impacts(betas.view(), rhos.view(), &w, &opts).expect("lag driver");
    let durbin = run_impacts_durbin(betas.view(), thetas.view(), rhos.view(), &w, &opts)
        .expect("durbin driver");
    let summary = ImpactSummary::from_draws(&lag, 0.9).expect("non-empty draws");

    // Assert
    for (a, b) in lag.total.iter().zip(durbin.total.iter()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-12);
    }
    for (a, b) in lag.direct.iter().zip(durbin.direct.iter()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-12);
    }
    let mean_total = lag.total.column(0).sum() / 4.0;
    assert_relative_eq!(summary.total.mean[0], mean_total, epsilon = 1e-12);
    assert!(summary.total.lower[0] <= summary.total.mean[0]);
    assert!(summary.total.mean[0] <= summary.total.upper[0]);
    assert!(summary.indirect.mean[0] > 0.0);
}

#[test]
// Purpose
// -------
// Exercise the fit diagnostics through the public prelude.
//
// Given
// -----
// - Constant log-likelihoods equal to ℓ(θ̄); a dispersed sample.
// - y = [1, 2, 3, 4] with a constant fit and a shrunken fit.
//
// Expect
// ------
// - Constant case: pd = 0, DIC = D_hat.
// - Dispersed case: DIC = D_hat + 2·pd.
// - Constant fit: r_squared = 0.
// - Shrunken fit ŷ = 2.5 + 0.5(y − 2.5): r_squared = 0.25 while the
//   conventional coefficient is 0.75.
fn fit_diagnostics_through_public_surface() {
    let constant = DicOutcome::dic_pd(&[-120.5; 10], -120.5);
    assert_relative_eq!(constant.pd(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(constant.dic(), constant.d_hat(), epsilon = 1e-12);

    let dispersed = DicOutcome::dic_pd_checked(&[-101.0, -99.0, -104.0, -100.0], -99.5)
        .expect("finite log-likelihoods");
    assert_relative_eq!(dispersed.dic(), dispersed.d_hat() + 2.0 * dispersed.pd(), epsilon = 1e-12);

    let y = array![[1.0], [2.0], [3.0], [4.0]];
    let flat = Array2::from_elem((4, 1), 2.5);
    let shrunk = y.mapv(|v| 2.5 + 0.5 * (v - 2.5));

    assert_relative_eq!(r_squared(y.view(), flat.view()), 0.0, epsilon = 1e-12);
    assert_relative_eq!(r_squared(y.view(), shrunk.view()), 0.25, epsilon = 1e-12);
    assert_relative_eq!(
        coefficient_of_determination(y.view(), shrunk.view()).expect("valid responses"),
        0.75,
        epsilon = 1e-12
    );
}
