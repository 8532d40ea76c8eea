//! factors::validation — input guards for factor estimation.
//!
//! Purpose
//! -------
//! Centralize the precondition checks of the factor estimation entry
//! point: series shape and finiteness, the lag bound, and the threshold
//! configuration. Validation runs before any matrix computation so that
//! invalid inputs fail fast with a typed error and never reach the
//! numerical core.
//!
//! Conventions
//! -----------
//! - Purely about validation: no I/O, no allocation beyond error
//!   construction.
//! - Errors are reported via [`FactorError`]; callers treat `Ok(())` as
//!   a guarantee that the shape and option constraints hold.

use crate::factors::errors::{FactorError, FactorResult};
use crate::factors::options::FactorOptions;
use crate::moments::threshold::ThresholdPolicy;
use ndarray::Array2;

/// Validate a series matrix and factor options together.
///
/// Parameters
/// ----------
/// - `y`: `&Array2<f64>`
///   Candidate series, `n×p` rows-by-time. Requires `n ≥ 2`, `p ≥ 1`,
///   and every entry finite.
/// - `opts`: `&FactorOptions`
///   Requires `1 ≤ lag_k < n` and, for an explicit threshold level,
///   `δ ≥ 0` and finite.
///
/// Returns
/// -------
/// `FactorResult<()>`
///   `Ok(())` when all constraints hold; otherwise the first violated
///   constraint as a [`FactorError`].
///
/// Errors
/// ------
/// - `FactorError::NoVariables` — `p = 0`.
/// - `FactorError::InsufficientData` — `n < 2`.
/// - `FactorError::NonFinite` — a NaN or infinite entry, with its
///   position.
/// - `FactorError::InvalidLag` — `lag_k = 0` or `lag_k ≥ n`.
/// - `FactorError::InvalidThreshold` — explicit level negative or
///   non-finite.
pub fn validate_input(y: &Array2<f64>, opts: &FactorOptions) -> FactorResult<()> {
    let (n, p) = y.dim();
    if p == 0 {
        return Err(FactorError::NoVariables);
    }
    if n < 2 {
        return Err(FactorError::InsufficientData { n });
    }
    if opts.lag_k == 0 || opts.lag_k >= n {
        return Err(FactorError::InvalidLag { lag_k: opts.lag_k, n });
    }
    if let ThresholdPolicy::Level(delta) = opts.threshold {
        if !delta.is_finite() || delta < 0.0 {
            return Err(FactorError::InvalidThreshold { delta });
        }
    }
    for ((row, col), &value) in y.indexed_iter() {
        if !value.is_finite() {
            return Err(FactorError::NonFinite { row, col, value });
        }
    }
    Ok(())
}
