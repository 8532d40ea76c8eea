//! moments::threshold — element-wise hard thresholding.

use ndarray::Array2;

/// Threshold policy for autocovariance aggregation.
///
/// A tagged selector for how the hard-threshold level is chosen when
/// accumulating lagged autocovariances:
///
/// - `Off` — no thresholding; matrices are aggregated as computed.
/// - `Default` — the rate-derived level `δ = 2·√(log p / n)`.
/// - `Level(δ)` — an explicit, caller-supplied level `δ ≥ 0`.
///
/// `Off` and `Level(0.0)` produce identical aggregates: the threshold
/// indicator `|w| ≥ 0` keeps every entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdPolicy {
    /// No thresholding.
    Off,
    /// δ = 2·√(log p / n), the default rate for n×p series.
    Default,
    /// Explicit threshold level δ ≥ 0.
    Level(f64),
}

impl ThresholdPolicy {
    /// Resolve the policy into a concrete level for an `n×p` series.
    ///
    /// Returns `None` for [`ThresholdPolicy::Off`], otherwise the level
    /// to pass to [`hard_threshold`].
    pub fn level_for(&self, n: usize, p: usize) -> Option<f64> {
        match self {
            ThresholdPolicy::Off => None,
            ThresholdPolicy::Default => Some(default_level(n, p)),
            ThresholdPolicy::Level(delta) => Some(*delta),
        }
    }
}

/// Default hard-threshold level `δ = 2·√(log p / n)`.
///
/// The rate balances entry-wise estimation error against signal
/// retention as both `n` and `p` grow; `p = 1` yields `δ = 0` (no
/// thresholding of a univariate series).
pub fn default_level(n: usize, p: usize) -> f64 {
    2.0 * ((p as f64).ln() / n as f64).sqrt()
}

/// Apply the hard-threshold operator `T_δ` to a matrix.
///
/// Returns a matrix of the same shape with entries
/// `w_ij · 1(|w_ij| ≥ δ)`. The operator is applied element-wise and
/// does not assume or impose symmetry; `δ = 0` returns the input
/// unchanged (every entry satisfies `|w| ≥ 0`).
///
/// # Arguments
/// - `w`: input matrix; finite entries (validated upstream).
/// - `delta`: threshold level, `δ ≥ 0`.
pub fn hard_threshold(w: &Array2<f64>, delta: f64) -> Array2<f64> {
    w.mapv(|v| if v.abs() >= delta { v } else { 0.0 })
}
