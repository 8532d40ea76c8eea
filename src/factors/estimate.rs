//! factors::estimate — factor count and loading estimation.
//!
//! Purpose
//! -------
//! Implement the factor estimation entry point: from an `n×p` series,
//! aggregate thresholded lagged autocovariances into
//! `M̂ = ∑_{k=1}^{K} T_δ(Σ̂(k))·T_δ(Σ̂(k))ᵀ`, eigendecompose, select the
//! number of significant components r̂ by the eigenvalue-ratio rule
//! (standard or two-step), and return the loading matrix (the leading
//! r̂ eigenvectors) together with the transformed factor series `Y·Â`.
//!
//! Key behaviors
//! -------------
//! - Validate the series, lag bound, and threshold configuration before
//!   any matrix work.
//! - Standard rank selection scans the full spectrum; the two-step
//!   procedure first scans the top `⌊p/2⌋` eigenvalues, then refines on
//!   the series projected onto a leading eigenvector subset, composing
//!   the final loadings through the projection.
//! - The no-factor spectrum (r̂ = 0) yields `p×0` loadings and an `n×0`
//!   factor series rather than an error.
//!
//! Invariants & assumptions
//! ------------------------
//! - `M̂` is symmetric PSD by construction, so the ordered spectrum is
//!   nonnegative up to round-off and the ratio rule's tolerance guards
//!   apply.
//! - Loadings always have orthonormal columns: directly from Γ̂ in the
//!   standard procedure, and as a product of orthonormal blocks in the
//!   two-step refinement.
//!
//! Conventions
//! -----------
//! - All entities are computed once per call from the input; no state
//!   is shared across invocations.
//!
//! Testing notes
//! -------------
//! - Unit tests cover exact-rank recovery, the no-factor edge, shape
//!   contracts, and the fail-fast lag bound; the integration test adds
//!   thresholded noisy-factor scenarios at a more realistic scale.

use crate::eigen::decomposition::SpectralDecomp;
use crate::eigen::ratio::{RANK_REL_TOL, ratio_rank};
use crate::factors::errors::FactorResult;
use crate::factors::options::FactorOptions;
use crate::factors::validation::validate_input;
use crate::moments::aggregate::accumulate;
use ndarray::Array2;

/// FactorOutcome — result of the factor estimation entry point.
///
/// Purpose
/// -------
/// Carry the estimated factor count, the `p×r̂` loading matrix, the
/// `n×r̂` transformed factor series, and the lag count used, as a
/// single value object with read-only accessors.
///
/// Invariants
/// ----------
/// - `0 ≤ factor_num ≤ p`; `loadings` is `p×factor_num` with
///   orthonormal columns; `factors` is `n×factor_num`.
///
/// Notes
/// -----
/// - Constructed only by [`FactorOutcome::estimate`]; does not retain
///   the input series.
#[derive(Debug, Clone)]
pub struct FactorOutcome {
    factor_num: usize,
    loadings: Array2<f64>,
    factors: Array2<f64>,
    lag_k: usize,
}

impl FactorOutcome {
    /// Estimate the factor structure of an `n×p` series.
    ///
    /// Parameters
    /// ----------
    /// - `y`: `&Array2<f64>`
    ///   Series matrix, rows=time. Must be finite with `n ≥ 2`,
    ///   `p ≥ 1`.
    /// - `opts`: `&FactorOptions`
    ///   Lag count (`1 ≤ K < n`), threshold policy, and rank-selection
    ///   procedure.
    ///
    /// Returns
    /// -------
    /// `FactorResult<FactorOutcome>`
    ///   The estimated count r̂, loadings, factor series, and the lag
    ///   count echoed back.
    ///
    /// Errors
    /// ------
    /// - Validation failures from [`validate_input`] (dimensions, lag
    ///   bound, threshold level, non-finite entries), surfaced before
    ///   any matrix computation.
    /// - `FactorError::Eigen` — eigenanalysis breakdown on the
    ///   aggregate matrix.
    ///
    /// Notes
    /// -----
    /// - The two-step refinement projects the series onto the leading
    ///   `s` eigenvector directions (`s` from `opts.refine_bound`, by
    ///   default `2·r₀` clamped to `[r₀ + 1, p]`), re-runs the
    ///   aggregation and eigenanalysis in the projected space, and
    ///   composes the final loadings as the product of the two
    ///   orthonormal maps. When the first pass already uses the whole
    ///   space (`r₀ + 1 ≥ p`) or finds nothing (`r₀ = 0`), the
    ///   refinement is skipped.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::Array2;
    /// # use hdts::factors::estimate::FactorOutcome;
    /// # use hdts::factors::options::FactorOptions;
    /// // A single sinusoidal factor drives four series exactly.
    /// let n = 120;
    /// let weights = [1.0, 0.8, -0.5, 0.3];
    /// let y = Array2::from_shape_fn((n, 4), |(t, j)| {
    ///     let f = (2.0 * std::f64::consts::PI * 3.0 * t as f64 / n as f64).sin();
    ///     weights[j] * f
    /// });
    /// let opts = FactorOptions { lag_k: 2, ..FactorOptions::default() };
    /// let outcome = FactorOutcome::estimate(&y, &opts).unwrap();
    /// assert_eq!(outcome.factor_num(), 1);
    /// assert_eq!(outcome.loadings().shape(), &[4, 1]);
    /// assert_eq!(outcome.factors().shape(), &[n, 1]);
    /// ```
    pub fn estimate(y: &Array2<f64>, opts: &FactorOptions) -> FactorResult<Self> {
        validate_input(y, opts)?;
        let p = y.ncols();

        let aggregate = accumulate(y, opts.lag_k, opts.threshold, false);
        let decomp = SpectralDecomp::decompose(&aggregate)?;

        let (factor_num, loadings) = if opts.two_step {
            let first_bound = (p / 2).max(1);
            let r0 = ratio_rank(decomp.eigenvalues(), first_bound, RANK_REL_TOL);
            if r0 == 0 || r0 + 1 >= p {
                (r0, decomp.leading(r0))
            } else {
                let subset = opts.refine_bound.unwrap_or(2 * r0).clamp(r0 + 1, p);
                let basis = decomp.leading(subset);
                let projected = y.dot(&basis);
                let refined_aggregate =
                    accumulate(&projected, opts.lag_k, opts.threshold, false);
                let refined = SpectralDecomp::decompose(&refined_aggregate)?;
                let r_hat = ratio_rank(refined.eigenvalues(), subset - 1, RANK_REL_TOL);
                (r_hat, basis.dot(&refined.leading(r_hat)))
            }
        } else {
            let r_hat = ratio_rank(decomp.eigenvalues(), p.saturating_sub(1).max(1), RANK_REL_TOL);
            (r_hat, decomp.leading(r_hat))
        };

        let factors = y.dot(&loadings);
        Ok(FactorOutcome { factor_num, loadings, factors, lag_k: opts.lag_k })
    }

    /// Estimated number of factors r̂.
    pub fn factor_num(&self) -> usize {
        self.factor_num
    }

    /// Loading matrix Â, `p×r̂` with orthonormal columns.
    pub fn loadings(&self) -> &Array2<f64> {
        &self.loadings
    }

    /// Transformed factor series `Y·Â`, `n×r̂`.
    pub fn factors(&self) -> &Array2<f64> {
        &self.factors
    }

    /// Lag count used for the aggregation, echoed back.
    pub fn lag_k(&self) -> usize {
        self.lag_k
    }
}
