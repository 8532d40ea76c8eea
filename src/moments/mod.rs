//! moments — lagged autocovariance, thresholding, and aggregation.
//!
//! Purpose
//! -------
//! Provide the second-moment building blocks shared by factor estimation
//! and segmentation: sample lag-k cross-covariance matrices of a
//! multivariate series, an element-wise hard-threshold operator for
//! high-dimensional noise suppression, and the aggregation of thresholded
//! autocovariances into a single symmetric nonnegative-definite matrix
//!
//! ```text
//! M̂  =  ∑_{k=1}^{K}  T_δ(Σ̂(k)) · T_δ(Σ̂(k))ᵀ   ( + I_p ),
//! Σ̂(k) = (1/n) Z_{k:}ᵀ Z_{:n−k},
//! ```
//!
//! where `Z` is the column-centered `n×p` series (rows=time) and `T_δ`
//! zeroes entries with magnitude below `δ`.
//!
//! Key behaviors
//! -------------
//! - Compute `Σ̂(k)` for any lag `0 ≤ k < n` as a pure function of the
//!   centered series ([`lagged_autocov`]).
//! - Apply hard thresholding at a caller-chosen or rate-derived level
//!   ([`hard_threshold`], [`default_level`], [`ThresholdPolicy`]).
//! - Accumulate the Gram terms across lags `1..=K`, optionally adding the
//!   identity, and return an explicitly symmetrized matrix
//!   ([`accumulate`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Input series are `n×p` with `n ≥ 2`, finite entries, and `K < n`;
//!   these preconditions are validated by the entry-point subsystems
//!   before any routine here runs.
//! - The aggregate is symmetric and positive semi-definite by
//!   construction (a sum of Gram matrices, plus an optional identity).
//! - `δ = 0` and thresholding disabled produce bit-identical aggregates.
//!
//! Conventions
//! -----------
//! - Rows index time (`t = 1,…,n`); columns index series components.
//! - All autocovariances use the `1/n` divisor, including lag 0, so the
//!   lag-0 case doubles as the sample covariance used for whitening.
//! - Functions here are pure: no I/O, no global state, no `unsafe`.
//!
//! Downstream usage
//! ----------------
//! - `factors` builds its aggregate without the identity term;
//!   `segment` adds `I_p` so the whitening-stage matrix is strictly
//!   positive definite.
//! - `segment::whiten` reuses [`lagged_autocov`] at lag 0 for the sample
//!   covariance branch.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the slicing convention of [`lagged_autocov`]
//!   against a direct double-loop evaluation, threshold monotonicity and
//!   shape preservation, exact symmetry of the aggregate, and the
//!   equivalence of `δ = 0` with thresholding disabled.

pub mod aggregate;
pub mod autocov;
pub mod threshold;

pub use self::aggregate::accumulate;
pub use self::autocov::{center, lagged_autocov};
pub use self::threshold::{ThresholdPolicy, default_level, hard_threshold};
