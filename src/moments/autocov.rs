//! moments::autocov — sample lag-k cross-covariance of a vector series.

use ndarray::{Array1, Array2, Axis, s};

/// Subtract column means from an `n×p` series.
///
/// # Arguments
/// - `y`: `n×p` series matrix (rows=time). Must have `n ≥ 1`; callers
///   validate this upstream.
///
/// # Returns
/// A newly allocated `n×p` matrix whose columns are exactly mean-zero.
pub fn center(y: &Array2<f64>) -> Array2<f64> {
    let col_means: Array1<f64> = y.mean_axis(Axis(0)).expect("n >= 1 validated upstream");
    y - &col_means
}

/// Compute the sample lag-k cross-covariance matrix of a centered series.
///
/// For a centered `n×p` matrix `Z` (rows=time) and lag `k`, returns
///
/// ```text
/// Σ̂(k) = (1/n) Z_{k:}ᵀ Z_{:n−k},
/// ```
///
/// i.e. `Σ̂(k)[i, j] = (1/n) ∑_{t} z_{t+k, i} · z_{t, j}`. For `k = 0`
/// this is the sample covariance with the `1/n` divisor; for `k > 0` the
/// result is generally asymmetric.
///
/// # Arguments
/// - `z`: centered `n×p` series, typically produced by [`center`].
/// - `k`: lag, `0 ≤ k < n`. Validated by entry-point callers.
///
/// # Panics
/// - If `k >= z.nrows()`, due to the slice bounds `z[k.., ..]`. Public
///   entry points reject such lags before any computation.
pub fn lagged_autocov(z: &Array2<f64>, k: usize) -> Array2<f64> {
    let n = z.nrows();
    let lagged = z.slice(s![k.., ..]);
    let leading = z.slice(s![..n - k, ..]);
    let lagged_t = lagged.t();
    lagged_t.dot(&leading) * (1.0 / n as f64)
}
