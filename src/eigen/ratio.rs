//! eigen::ratio — eigenvalue-ratio rank selection.

use ndarray::Array1;

/// Relative tolerance below which an eigenvalue counts as numerically
/// zero for rank selection. Scaled by the largest eigenvalue before use.
pub const RANK_REL_TOL: f64 = 1e-10;

/// Select the number of significant components from an ordered spectrum.
///
/// Implements the eigenvalue-ratio rule: with eigenvalues
/// `λ₁ ≥ λ₂ ≥ … ≥ λ_p`, the estimate is
///
/// ```text
/// r̂ = argmin_{1 ≤ j ≤ scan_bound} λ_{j+1} / λ_j,
/// ```
///
/// the location of the sharpest relative drop. Ties are broken toward
/// the smallest `j`. Ratios are only formed where the denominator
/// exceeds the tolerance floor `rel_tol · λ₁`; once the spectrum falls
/// below the floor the scan stops, so a numerically zero tail never
/// causes a division by a vanishing eigenvalue. Negative round-off in
/// the numerator is clamped to zero.
///
/// # Arguments
/// - `eigenvalues`: spectrum in descending order (as produced by
///   `SpectralDecomp::decompose`).
/// - `scan_bound`: largest candidate `j` to consider; clamped to
///   `p − 1`. The standard rule scans the full spectrum; the two-step
///   first pass restricts to `⌊p/2⌋`.
/// - `rel_tol`: relative zero tolerance, typically [`RANK_REL_TOL`].
///
/// # Returns
/// The estimated count `r̂` with `0 ≤ r̂ ≤ p`:
/// - `0` when every eigenvalue is at or below the tolerance floor
///   (pure-noise spectrum, no significant component);
/// - `1` for a one-dimensional spectrum with `λ₁` above the floor;
/// - the ratio minimizer otherwise.
pub fn ratio_rank(eigenvalues: &Array1<f64>, scan_bound: usize, rel_tol: f64) -> usize {
    let p = eigenvalues.len();
    if p == 0 {
        return 0;
    }
    let lambda_1 = eigenvalues[0];
    if !lambda_1.is_finite() || lambda_1 <= 0.0 {
        return 0;
    }
    let floor = rel_tol * lambda_1;
    if p == 1 {
        return 1;
    }

    let bound = scan_bound.clamp(1, p - 1);
    let mut best_j = 1;
    let mut best_ratio = f64::INFINITY;
    for j in 1..=bound {
        let denom = eigenvalues[j - 1];
        if denom <= floor {
            break;
        }
        let ratio = eigenvalues[j].max(0.0) / denom;
        if ratio < best_ratio {
            best_ratio = ratio;
            best_j = j;
        }
    }
    best_j
}
