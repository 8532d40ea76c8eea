//! factors — factor-number and loading estimation.
//!
//! Purpose
//! -------
//! Estimate a low-rank factor structure for an `n×p` series: the number
//! of significant factors r̂, the `p×r̂` loading matrix, and the
//! transformed factor series. The eigenanalysis matrix is the aggregate
//! of (optionally thresholded) lagged autocovariances without an
//! identity term, and r̂ comes from the eigenvalue-ratio rule, either
//! in its standard one-pass form or as a two-step procedure with a
//! projected refinement pass.
//!
//! Key behaviors
//! -------------
//! - Validate shape, lag bound, and threshold configuration before any
//!   matrix work (`validation`).
//! - Configure lag count, thresholding, and the rank procedure through
//!   [`FactorOptions`] (`options`).
//! - Produce a [`FactorOutcome`] value with read-only accessors
//!   (`estimate`).
//!
//! Invariants & assumptions
//! ------------------------
//! - `0 ≤ r̂ ≤ p`; loadings always have orthonormal columns; the
//!   no-factor spectrum yields empty (`p×0`, `n×0`) outputs rather than
//!   an error.
//! - Pure functions of the input plus options; nothing is shared across
//!   calls.
//!
//! Downstream usage
//! ----------------
//! - The typical call is `FactorOutcome::estimate(&y, &opts)` followed
//!   by the accessors `factor_num`, `loadings`, `factors`, `lag_k`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover exact-rank recovery, the two-step path, the
//!   no-factor edge, and fail-fast validation; the integration test
//!   adds a noisy, thresholded scenario at a more realistic scale.

pub mod errors;
pub mod estimate;
pub mod options;
pub mod validation;

pub use self::errors::{FactorError, FactorResult};
pub use self::estimate::FactorOutcome;
pub use self::options::FactorOptions;
