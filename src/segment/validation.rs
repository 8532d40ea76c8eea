//! segment::validation — input guards for the segmentation pipeline.
//!
//! Purpose
//! -------
//! Centralize the precondition checks of the segmentation entry point:
//! series shape and finiteness, the lag bound, and the threshold level.
//! Grouping-method parameters are validated separately by the grouping
//! module, after the linear stage has produced the transformed series.
//!
//! Conventions
//! -----------
//! - Purely about validation; errors are reported via [`SegmentError`]
//!   and callers treat `Ok(())` as a guarantee that the shape and
//!   threshold constraints hold.

use crate::moments::threshold::ThresholdPolicy;
use crate::segment::errors::{SegmentError, SegmentResult};
use ndarray::Array2;

/// Validate the series, lag count, and threshold policy.
///
/// # Errors
/// - `SegmentError::NoVariables` — `p = 0`.
/// - `SegmentError::InsufficientData` — `n < 2`.
/// - `SegmentError::InvalidLag` — `lag_k = 0` or `lag_k ≥ n`.
/// - `SegmentError::InvalidThreshold` — explicit level negative or
///   non-finite.
/// - `SegmentError::NonFinite` — a NaN or infinite entry, with its
///   position.
pub fn validate_input(
    y: &Array2<f64>, lag_k: usize, threshold: ThresholdPolicy,
) -> SegmentResult<()> {
    let (n, p) = y.dim();
    if p == 0 {
        return Err(SegmentError::NoVariables);
    }
    if n < 2 {
        return Err(SegmentError::InsufficientData { n });
    }
    if lag_k == 0 || lag_k >= n {
        return Err(SegmentError::InvalidLag { lag_k, n });
    }
    if let ThresholdPolicy::Level(delta) = threshold {
        if !delta.is_finite() || delta < 0.0 {
            return Err(SegmentError::InvalidThreshold { delta });
        }
    }
    for ((row, col), &value) in y.indexed_iter() {
        if !value.is_finite() {
            return Err(SegmentError::NonFinite { row, col, value });
        }
    }
    Ok(())
}
