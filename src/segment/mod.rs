//! segment — contemporaneous linear segmentation of a vector series.
//!
//! Purpose
//! -------
//! Transform an observed `n×p` series into `Ẑ = Y·B̂ᵀ` whose components
//! can be partitioned into blocks that are mutually uncorrelated across
//! all examined time lags, then recover that partition. The transform
//! is built by whitening the series and eigendecomposing the aggregate
//! `Ŵ_y = I_p + ∑_{k=1}^{K} T_δ(Σ̂(k))·T_δ(Σ̂(k))ᵀ` of the whitened
//! series; the partition comes from the grouping module applied to Ẑ.
//!
//! Key behaviors
//! -------------
//! - Whitening by sample covariance or a black-box sparse precision
//!   collaborator, selected through the [`WhitenMethod`] strategy
//!   (`whiten`).
//! - The linear stage `B̂ = Γ̂ᵀ V̂^{-1/2}`, `Ẑ = Y·B̂ᵀ`
//!   ([`Segmentation`]), with Ẑ's columns ordered by descending `Ŵ_y`
//!   eigenvalue.
//! - The full entry point [`SegmentationOutcome::segment_ts`], which
//!   layers grouping on top and echoes the strategy label.
//!
//! Invariants & assumptions
//! ------------------------
//! - All preconditions (shape, lag bound, threshold level, finiteness)
//!   are validated before any matrix computation (`validation`).
//! - Every error kind is typed: dimension and configuration failures,
//!   whitening degeneracies, collaborator failures, and nested
//!   eigenanalysis or grouping errors ([`SegmentError`]).
//! - Entry points are pure functions of their inputs plus explicit
//!   configuration; the only cross-call resource is the caller-owned
//!   generator used by the permutation grouping strategy.
//!
//! Downstream usage
//! ----------------
//! - Callers needing only the linear transform use
//!   [`Segmentation::transform_series`]; the usual path is
//!   [`SegmentationOutcome::segment_ts`].
//!
//! Testing notes
//! -------------
//! - Subsystem tests cover the whitening identities, the transform's
//!   unit-covariance property, spectrum ordering, and validation; the
//!   integration test exercises recovery on simulated block-structured
//!   series with both grouping strategies.

pub mod engine;
pub mod errors;
pub mod options;
pub mod validation;
pub mod whiten;

pub use self::engine::{Segmentation, SegmentationOutcome};
pub use self::errors::{SegmentError, SegmentResult};
pub use self::options::SegmentOptions;
pub use self::whiten::{PrecisionEstimator, WhitenMethod};
