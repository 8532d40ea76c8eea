//! moments::aggregate — thresholded autocovariance aggregation.

use crate::moments::autocov::{center, lagged_autocov};
use crate::moments::threshold::{ThresholdPolicy, hard_threshold};
use ndarray::Array2;

/// Accumulate thresholded lagged autocovariances into one symmetric
/// nonnegative-definite `p×p` matrix.
///
/// Centers the series once, then for each lag `k = 1..=lag_k` computes
/// the sample autocovariance `Σ̂(k)`, applies the hard-threshold policy,
/// and adds the Gram term `T_δ(Σ̂(k)) · T_δ(Σ̂(k))ᵀ` to the accumulator:
///
/// ```text
/// M̂ = [I_p +] ∑_{k=1}^{K} T_δ(Σ̂(k)) · T_δ(Σ̂(k))ᵀ.
/// ```
///
/// The identity term is added when `add_identity` is set (the
/// segmentation convention, which makes the matrix strictly positive
/// definite); factor estimation omits it. The result is explicitly
/// symmetrized so that `M̂ = M̂ᵀ` holds entry-for-entry rather than only
/// up to the round-off of the accumulated products.
///
/// # Arguments
/// - `y`: raw `n×p` series (rows=time); centered internally.
/// - `lag_k`: number of lags `K ≥ 1`, with `K < n`.
/// - `policy`: threshold policy; [`ThresholdPolicy::Off`] aggregates the
///   raw autocovariances.
/// - `add_identity`: whether to seed the accumulator with `I_p`.
///
/// # Panics
/// - If `lag_k >= y.nrows()`, via the autocovariance slice bounds.
///   Entry points validate `1 ≤ K < n` before calling.
pub fn accumulate(
    y: &Array2<f64>, lag_k: usize, policy: ThresholdPolicy, add_identity: bool,
) -> Array2<f64> {
    let (n, p) = y.dim();
    let z = center(y);
    let delta = policy.level_for(n, p);

    let mut agg = if add_identity { Array2::<f64>::eye(p) } else { Array2::<f64>::zeros((p, p)) };
    for k in 1..=lag_k {
        let sigma_k = lagged_autocov(&z, k);
        let t_k = match delta {
            Some(level) => hard_threshold(&sigma_k, level),
            None => sigma_k,
        };
        agg += &t_k.dot(&t_k.t());
    }

    // Exact symmetry, not just symmetry up to accumulated round-off.
    (&agg + &agg.t()) * 0.5
}
