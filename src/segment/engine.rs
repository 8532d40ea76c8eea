//! segment::engine — segmentation orchestration.
//!
//! Purpose
//! -------
//! Drive the segmentation pipeline end to end: whiten the series, build
//! the aggregate `Ŵ_y = I_p + ∑_{k=1}^{K} T_δ(Σ̂(k))·T_δ(Σ̂(k))ᵀ` from
//! the whitened series, eigendecompose it, form the transform
//! `B̂ = Γ̂ᵀ V̂^{-1/2}` and the transformed series `Ẑ = Y·B̂ᵀ`, then
//! partition Ẑ's components into groups of mutually uncorrelated
//! blocks.
//!
//! Key behaviors
//! -------------
//! - [`Segmentation::transform_series`] runs the purely linear stage
//!   and exposes `(B̂, Ẑ)` together with the ordered eigenvalues of
//!   `Ŵ_y` (columns of Ẑ are ordered by descending eigenvalue, i.e. by
//!   the serial signal strength the aggregate captured).
//! - [`SegmentationOutcome::segment_ts`] composes the linear stage with
//!   the grouping module, echoing the strategy label.
//!
//! Invariants & assumptions
//! ------------------------
//! - With sample-covariance whitening, `B̂ Σ̂_y B̂ᵀ = I` exactly (up to
//!   round-off): the transformed components are contemporaneously
//!   uncorrelated with unit variance.
//! - `Ŵ_y ⪰ I_p` by construction, so every eigenvalue is at least 1 up
//!   to round-off.
//! - Each call owns its working matrices; concurrent invocations share
//!   nothing but the caller-supplied generator.
//!
//! Conventions
//! -----------
//! - Rows of `B̂` are the loadings of the recovered components; `Ẑ` is
//!   formed from the raw (uncentred) series, matching
//!   `ẑ_t = B̂ y_t`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the unit-covariance identity, eigenvalue
//!   ordering, shape contracts, and fail-fast validation; the
//!   integration test exercises recovery and reproducibility on
//!   simulated block-structured series.

use crate::eigen::decomposition::SpectralDecomp;
use crate::grouping::linkage::group_components;
use crate::grouping::partition::Grouping;
use crate::moments::aggregate::accumulate;
use crate::moments::threshold::ThresholdPolicy;
use crate::segment::errors::SegmentResult;
use crate::segment::options::SegmentOptions;
use crate::segment::validation::validate_input;
use crate::segment::whiten::{WhitenMethod, whiten};
use ndarray::{Array1, Array2};
use rand::Rng;

/// Segmentation — the linear stage of the segmentation pipeline.
///
/// Purpose
/// -------
/// Hold the `p×p` transform `B̂`, the transformed series `Ẑ = Y·B̂ᵀ`,
/// and the ordered eigenvalues of `Ŵ_y`. No grouping is performed at
/// this stage; [`SegmentationOutcome::segment_ts`] layers it on top.
///
/// Invariants
/// ----------
/// - `transform` is invertible (product of an orthogonal matrix and an
///   invertible whitening root).
/// - `eigenvalues` is non-increasing and bounded below by 1 up to
///   round-off, matching the column order of `series`.
#[derive(Debug, Clone)]
pub struct Segmentation {
    transform: Array2<f64>,
    series: Array2<f64>,
    eigenvalues: Array1<f64>,
}

impl Segmentation {
    /// Run the linear segmentation stage on an `n×p` series.
    ///
    /// Parameters
    /// ----------
    /// - `y`: `&Array2<f64>`
    ///   Series matrix, rows=time. Must be finite with `n ≥ 2`,
    ///   `p ≥ 1`.
    /// - `lag_k`: `usize`
    ///   Lags aggregated into `Ŵ_y`; `1 ≤ K < n`.
    /// - `threshold`: threshold policy for the whitened
    ///   autocovariances.
    /// - `method`: whitening strategy (sample covariance or sparse
    ///   precision collaborator).
    ///
    /// Returns
    /// -------
    /// `SegmentResult<Segmentation>`
    ///   The transform, transformed series, and `Ŵ_y` spectrum.
    ///
    /// Errors
    /// ------
    /// - Validation failures (shape, lag bound, threshold, finiteness),
    ///   whitening degeneracies, collaborator contract violations, and
    ///   eigenanalysis breakdown, all surfaced before or at the stage
    ///   where they occur.
    pub fn transform_series(
        y: &Array2<f64>, lag_k: usize, threshold: ThresholdPolicy, method: &WhitenMethod<'_>,
    ) -> SegmentResult<Self> {
        validate_input(y, lag_k, threshold)?;

        let (whitened, v_inv_sqrt) = whiten(y, method)?;
        let aggregate = accumulate(&whitened, lag_k, threshold, true);
        let decomp = SpectralDecomp::decompose(&aggregate)?;

        let transform = decomp.eigenvectors().t().dot(&v_inv_sqrt);
        let series = y.dot(&transform.t());
        Ok(Segmentation {
            transform,
            series,
            eigenvalues: decomp.eigenvalues().clone(),
        })
    }

    /// The `p×p` transform B̂; rows are component loadings.
    pub fn transform(&self) -> &Array2<f64> {
        &self.transform
    }

    /// The transformed series Ẑ = Y·B̂ᵀ, `n×p`.
    pub fn series(&self) -> &Array2<f64> {
        &self.series
    }

    /// Ordered eigenvalues of Ŵ_y, matching Ẑ's column order.
    pub fn eigenvalues(&self) -> &Array1<f64> {
        &self.eigenvalues
    }
}

/// SegmentationOutcome — result of the segmentation entry point.
///
/// Purpose
/// -------
/// Combine the linear stage with the grouping of the transformed
/// components: the transform `B̂`, the series `Ẑ`, the `Ŵ_y` spectrum,
/// the recovered [`Grouping`], and the grouping strategy label.
///
/// Invariants
/// ----------
/// - `grouping` partitions `{0, …, p−1}`.
/// - `method` equals `grouping.method()`.
#[derive(Debug, Clone)]
pub struct SegmentationOutcome {
    linear: Segmentation,
    grouping: Grouping,
}

impl SegmentationOutcome {
    /// Run the full segmentation entry point.
    ///
    /// Parameters
    /// ----------
    /// - `y`: `&Array2<f64>`
    ///   Series matrix, rows=time; finite, `n ≥ 2`, `p ≥ 1`.
    /// - `opts`: `&SegmentOptions`
    ///   Linear-stage and grouping configuration.
    /// - `method`: `&WhitenMethod`
    ///   Whitening strategy; borrows the precision collaborator when
    ///   selected.
    /// - `rng`: `&mut R`
    ///   Caller-owned generator, consumed only by the max-permutation
    ///   grouping strategy. Seed it for reproducible runs; the FDR
    ///   strategy ignores it entirely.
    ///
    /// Returns
    /// -------
    /// `SegmentResult<SegmentationOutcome>`
    ///   Transform, transformed series, spectrum, and grouping.
    ///
    /// Errors
    /// ------
    /// - Everything [`Segmentation::transform_series`] can raise, plus
    ///   grouping validation failures
    ///   (`SegmentError::Grouping`).
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::Array2;
    /// # use rand::SeedableRng;
    /// # use rand::rngs::StdRng;
    /// # use hdts::segment::engine::SegmentationOutcome;
    /// # use hdts::segment::options::SegmentOptions;
    /// # use hdts::segment::whiten::WhitenMethod;
    /// let y = Array2::from_shape_fn((80, 3), |(t, j)| {
    ///     ((t + 2 * j + 1) as f64 * 0.41).sin() + 0.2 * ((t * (j + 1)) as f64 * 0.13).cos()
    /// });
    /// let opts = SegmentOptions { lag_k: 3, ..SegmentOptions::default() };
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let outcome =
    ///     SegmentationOutcome::segment_ts(&y, &opts, &WhitenMethod::SampleCovariance, &mut rng)
    ///         .unwrap();
    /// assert_eq!(outcome.transform().shape(), &[3, 3]);
    /// assert_eq!(outcome.series().shape(), &[80, 3]);
    /// assert!(outcome.grouping().is_partition(3));
    /// ```
    pub fn segment_ts<R: Rng>(
        y: &Array2<f64>, opts: &SegmentOptions, method: &WhitenMethod<'_>, rng: &mut R,
    ) -> SegmentResult<Self> {
        let linear = Segmentation::transform_series(y, opts.lag_k, opts.threshold, method)?;
        let grouping = group_components(linear.series(), &opts.grouping, rng)?;
        Ok(SegmentationOutcome { linear, grouping })
    }

    /// The `p×p` transform B̂; rows are component loadings.
    pub fn transform(&self) -> &Array2<f64> {
        self.linear.transform()
    }

    /// The transformed series Ẑ = Y·B̂ᵀ, `n×p`.
    pub fn series(&self) -> &Array2<f64> {
        self.linear.series()
    }

    /// Ordered eigenvalues of Ŵ_y.
    pub fn eigenvalues(&self) -> &Array1<f64> {
        self.linear.eigenvalues()
    }

    /// The recovered component grouping.
    pub fn grouping(&self) -> &Grouping {
        &self.grouping
    }

    /// Label of the grouping strategy ("max" or "fdr").
    pub fn method(&self) -> &'static str {
        self.grouping.method()
    }
}
