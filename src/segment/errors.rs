//! Unified error handling for the segmentation entry point.
//!
//! This module defines `SegmentError`, the error type of the
//! segmentation pipeline. It groups input validation failures,
//! whitening-stage numerical degeneracies, collaborator
//! (precision-estimator) failures, and errors propagated from the
//! eigen and grouping modules. Collaborator failures arrive as
//! `anyhow::Error` and are bridged through a `From` implementation, so
//! black-box estimators can use `?` freely. An alias
//! `SegmentResult<T>` standardizes the return type across segmentation
//! code.

use crate::eigen::errors::EigenError;
use crate::grouping::errors::GroupingError;

/// Unified error type for segmentation.
///
/// Covers dimension and configuration validation, whitening
/// degeneracies, collaborator estimation failures, and nested
/// eigenanalysis or grouping errors.
#[derive(Debug)]
pub enum SegmentError {
    // ---- Input validation ----
    /// The series has no variables (p = 0).
    NoVariables,

    /// The series has fewer than 2 observations.
    InsufficientData {
        n: usize,
    },

    /// A series entry is NaN or ±∞.
    NonFinite {
        row: usize,
        col: usize,
        value: f64,
    },

    /// The lag count violates 1 ≤ K < n.
    InvalidLag {
        lag_k: usize,
        n: usize,
    },

    /// An explicit threshold level is negative or non-finite.
    InvalidThreshold {
        delta: f64,
    },

    // ---- Whitening ----
    /// The sample covariance is numerically singular; no inverse square
    /// root exists.
    SingularCovariance {
        eigenvalue: f64,
    },

    /// The collaborator's precision matrix has the wrong shape.
    PrecisionDimension {
        rows: usize,
        cols: usize,
        expected: usize,
    },

    /// The collaborator's precision matrix is materially asymmetric.
    PrecisionAsymmetric {
        row: usize,
        col: usize,
        gap: f64,
    },

    // ---- Collaborator failure ----
    /// The precision-matrix estimator failed.
    Estimation(String),

    // ---- Nested stages ----
    /// Eigenanalysis failure.
    Eigen(EigenError),

    /// Grouping-stage failure.
    Grouping(GroupingError),
}

pub type SegmentResult<T> = Result<T, SegmentError>;

impl From<anyhow::Error> for SegmentError {
    fn from(err: anyhow::Error) -> Self {
        SegmentError::Estimation(err.to_string())
    }
}

impl From<EigenError> for SegmentError {
    fn from(err: EigenError) -> Self {
        SegmentError::Eigen(err)
    }
}

impl From<GroupingError> for SegmentError {
    fn from(err: GroupingError) -> Self {
        SegmentError::Grouping(err)
    }
}

impl std::error::Error for SegmentError {}

impl std::fmt::Display for SegmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input validation ----
            SegmentError::NoVariables => {
                write!(f, "Segment Error: series must have at least one variable")
            }
            SegmentError::InsufficientData { n } => {
                write!(f, "Segment Error: series length {n} is too short; need n ≥ 2")
            }
            SegmentError::NonFinite { row, col, value } => write!(
                f,
                "Segment Error: non-finite value {value} at position [{row},{col}]"
            ),
            SegmentError::InvalidLag { lag_k, n } => write!(
                f,
                "Segment Error: lag count {lag_k} must satisfy 1 ≤ K < n = {n}"
            ),
            SegmentError::InvalidThreshold { delta } => {
                write!(f, "Segment Error: threshold level {delta} must be finite and ≥ 0")
            }

            // ---- Whitening ----
            SegmentError::SingularCovariance { eigenvalue } => write!(
                f,
                "Segment Error: sample covariance is numerically singular (eigenvalue {eigenvalue})"
            ),
            SegmentError::PrecisionDimension { rows, cols, expected } => write!(
                f,
                "Segment Error: precision estimate is {rows}×{cols}, expected {expected}×{expected}"
            ),
            SegmentError::PrecisionAsymmetric { row, col, gap } => write!(
                f,
                "Segment Error: precision estimate asymmetric at [{row},{col}] (gap {gap})"
            ),

            // ---- Collaborator failure ----
            SegmentError::Estimation(msg) => {
                write!(f, "Segment Error: precision estimation failed: {msg}")
            }

            // ---- Nested stages ----
            SegmentError::Eigen(err) => write!(f, "Segment Error: {err}"),
            SegmentError::Grouping(err) => write!(f, "Segment Error: {err}"),
        }
    }
}
