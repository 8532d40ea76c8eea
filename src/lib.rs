//! hdts — statistical inference for high-dimensional vector time series.
//!
//! Purpose
//! -------
//! Provide factor-number/loading estimation and contemporaneous linear
//! segmentation (time-series PCA) for `n×p` series, built around one
//! shared engineering kernel: estimate lagged sample autocovariance
//! matrices, suppress high-dimensional noise with an element-wise hard
//! threshold, aggregate the lags into a symmetric nonnegative-definite
//! matrix, eigendecompose it, and read the answer off the ordered
//! eigenstructure — a count of dominant eigenvalues for factor
//! analysis, a full orthonormal transform for segmentation.
//!
//! Key behaviors
//! -------------
//! - `moments`: lag-k autocovariances, hard thresholding, and the
//!   aggregate matrix `M̂ = [I_p +] ∑_k T_δ(Σ̂(k))·T_δ(Σ̂(k))ᵀ`.
//! - `eigen`: ordered symmetric eigendecomposition with a deterministic
//!   sign convention, and the eigenvalue-ratio rank rule.
//! - `factors`: entry point A — factor count r̂, `p×r̂` loadings, and
//!   the transformed factor series, with standard or two-step rank
//!   selection.
//! - `segment`: entry point B — whitening (sample covariance or a
//!   black-box sparse precision collaborator), the transform
//!   `B̂ = Γ̂ᵀV̂^{-1/2}`, and the transformed series `Ẑ = Y·B̂ᵀ`.
//! - `grouping`: partition of Ẑ's components into mutually uncorrelated
//!   blocks via a max-statistic permutation test or an FDR-controlled
//!   multiple-testing pass over all pairs.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every public entry point validates its preconditions (shape, lag
//!   bounds, option ranges, finiteness) before any matrix computation
//!   and fails fast with a typed error; non-finite values are never
//!   silently dropped.
//! - All computation is synchronous, in-memory, and single-threaded;
//!   entry points are pure functions of their inputs plus explicit
//!   configuration, so independent calls may run concurrently as long
//!   as each owns its working matrices.
//! - The only cross-call-visible resource is the random generator used
//!   by the max-statistic permutation test, which is always supplied by
//!   the caller (`&mut impl Rng`) — never process-global state.
//!
//! Conventions
//! -----------
//! - Series matrices are `ndarray::Array2<f64>` with rows indexing time
//!   and columns indexing variables; univariate component statistics
//!   work on `&[f64]` slices.
//! - Autocovariances use the `1/n` divisor at every lag.
//! - Component and group indices are zero-based.
//!
//! Downstream usage
//! ----------------
//! - Factor analysis:
//!   `FactorOutcome::estimate(&y, &FactorOptions { .. })`.
//! - Segmentation:
//!   `SegmentationOutcome::segment_ts(&y, &SegmentOptions { .. },
//!   &WhitenMethod::SampleCovariance, &mut rng)`.
//! - The `prelude` re-exports the primary surface in one line.
//!
//! Testing notes
//! -------------
//! - Each module carries unit tests for its algebraic invariants and
//!   error paths; `tests/integration_segmentation_pipeline.rs`
//!   exercises both entry points end to end on simulated series.

pub mod eigen;
pub mod factors;
pub mod grouping;
pub mod moments;
pub mod segment;

// ---- Re-exports (primary surface) -----------------------------------------

pub use crate::factors::errors::{FactorError, FactorResult};
pub use crate::factors::estimate::FactorOutcome;
pub use crate::factors::options::FactorOptions;
pub use crate::grouping::errors::{GroupingError, GroupingResult};
pub use crate::grouping::linkage::group_components;
pub use crate::grouping::options::{GroupingMethod, GroupingOptions};
pub use crate::grouping::partition::Grouping;
pub use crate::moments::threshold::ThresholdPolicy;
pub use crate::segment::engine::{Segmentation, SegmentationOutcome};
pub use crate::segment::errors::{SegmentError, SegmentResult};
pub use crate::segment::options::SegmentOptions;
pub use crate::segment::whiten::{PrecisionEstimator, WhitenMethod};

// ---- Optional convenience prelude for downstream crates ------------------
//
// Downstream crates can `use hdts::prelude::*;` to import the primary
// surface in a single line.

pub mod prelude {
    pub use crate::factors::errors::{FactorError, FactorResult};
    pub use crate::factors::estimate::FactorOutcome;
    pub use crate::factors::options::FactorOptions;
    pub use crate::grouping::errors::{GroupingError, GroupingResult};
    pub use crate::grouping::linkage::group_components;
    pub use crate::grouping::options::{GroupingMethod, GroupingOptions};
    pub use crate::grouping::partition::Grouping;
    pub use crate::moments::threshold::ThresholdPolicy;
    pub use crate::segment::engine::{Segmentation, SegmentationOutcome};
    pub use crate::segment::errors::{SegmentError, SegmentResult};
    pub use crate::segment::options::SegmentOptions;
    pub use crate::segment::whiten::{PrecisionEstimator, WhitenMethod};
}
