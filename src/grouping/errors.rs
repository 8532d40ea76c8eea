//! Unified error handling for the grouping module.
//!
//! This module defines `GroupingError`, the error type shared by the
//! pairwise linkage strategies (max-statistic permutation and
//! FDR-controlled testing) and their option validation. Variants map
//! onto the crate's error taxonomy: configuration errors for invalid
//! method parameters and dimension errors for series that cannot
//! support the requested lags. An alias `GroupingResult<T>`
//! standardizes the return type across grouping code.

/// Unified error type for component grouping.
///
/// Covers invalid method parameters and undersized input series. All
/// variants carry the offending value so diagnostics are meaningful
/// without additional context.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupingError {
    // ---- Input dimensions ----
    /// The transformed series has no components (p = 0).
    NoComponents,

    /// The series is too short for lag-based statistics (n < 2).
    SeriesTooShort {
        n: usize,
    },

    /// The cross-correlation lag cap violates 1 ≤ m < n.
    InvalidMaxLag {
        max_lag: usize,
        n: usize,
    },

    // ---- Method configuration ----
    /// The FDR level β must lie strictly inside (0, 1).
    InvalidFdrLevel {
        beta: f64,
    },

    /// The permutation significance level must lie strictly inside (0, 1).
    InvalidSignificanceLevel {
        level: f64,
    },

    /// The permutation count must be at least 1.
    ZeroPermutations,
}

pub type GroupingResult<T> = Result<T, GroupingError>;

impl std::error::Error for GroupingError {}

impl std::fmt::Display for GroupingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input dimensions ----
            GroupingError::NoComponents => {
                write!(f, "Grouping Error: series has no components to group")
            }
            GroupingError::SeriesTooShort { n } => {
                write!(f, "Grouping Error: series length {n} is too short; need n ≥ 2")
            }
            GroupingError::InvalidMaxLag { max_lag, n } => write!(
                f,
                "Grouping Error: cross-correlation lag cap {max_lag} must satisfy 1 ≤ m < n = {n}"
            ),

            // ---- Method configuration ----
            GroupingError::InvalidFdrLevel { beta } => {
                write!(f, "Grouping Error: FDR level {beta} must lie in (0, 1)")
            }
            GroupingError::InvalidSignificanceLevel { level } => {
                write!(f, "Grouping Error: significance level {level} must lie in (0, 1)")
            }
            GroupingError::ZeroPermutations => {
                write!(f, "Grouping Error: permutation count must be at least 1")
            }
        }
    }
}
