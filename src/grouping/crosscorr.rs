//! grouping::crosscorr — pairwise cross-correlation statistics.

/// Compute the sample mean of a series.
#[inline]
fn mean(x: &[f64]) -> f64 {
    x.iter().sum::<f64>() / x.len() as f64
}

/// Sample cross-correlation of two equal-length series at lag `h ≥ 0`,
/// pairing `a_{t+h}` with `b_t`.
///
/// Both series are centred internally; the normalization uses the `1/n`
/// convention for covariance and standard deviations, matching the
/// matrix-level autocovariance estimator. Negative lags are obtained by
/// swapping the arguments.
///
/// Returns 0.0 when either series is constant (zero standard
/// deviation): a degenerate component carries no linkage evidence.
///
/// # Panics
/// - If `h >= a.len()` or the lengths differ; callers validate
///   `1 ≤ max_lag < n` and pass equal-length columns.
#[inline]
fn lagged_corr(a: &[f64], b: &[f64], h: usize) -> f64 {
    let n = a.len();
    let mean_a = mean(a);
    let mean_b = mean(b);

    let mut cov = 0.0;
    for t in 0..n - h {
        cov += (a[t + h] - mean_a) * (b[t] - mean_b);
    }
    cov /= n as f64;

    let var_a = a.iter().map(|&v| (v - mean_a) * (v - mean_a)).sum::<f64>() / n as f64;
    let var_b = b.iter().map(|&v| (v - mean_b) * (v - mean_b)).sum::<f64>() / n as f64;
    if var_a <= 0.0 || var_b <= 0.0 {
        return 0.0;
    }
    cov / (var_a.sqrt() * var_b.sqrt())
}

/// Maximum absolute cross-correlation of two series over lags |h| ≤ m.
///
/// Evaluates `ρ̂_ab(h)` for `h = 0, …, m` in both directions
/// (`a` leading `b` and `b` leading `a`) and returns
/// `max_{|h| ≤ m} |ρ̂(h)|`. This is the pairwise statistic underlying
/// both linkage strategies; scaled by `√n` it is compared against a
/// permutation null or mapped to a normal-approximation p-value.
///
/// # Arguments
/// - `a`, `b`: equal-length component series, length `n ≥ 2`.
/// - `max_lag`: lag cap `m` with `1 ≤ m < n` (validated upstream).
pub(crate) fn max_abs_cross_corr(a: &[f64], b: &[f64], max_lag: usize) -> f64 {
    let mut best = lagged_corr(a, b, 0).abs();
    for h in 1..=max_lag {
        best = best.max(lagged_corr(a, b, h).abs());
        best = best.max(lagged_corr(b, a, h).abs());
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Exact lag-0 correlation of proportional series (±1).
    // - Detection of a pure lead-lag relationship in both directions.
    // - The constant-series degenerate case returning 0.
    // - Orthogonal sinusoids yielding near-zero statistics at every lag.
    //
    // They intentionally DO NOT cover:
    // - Statistical calibration of √n-scaled statistics; the strategy
    //   modules test that against their respective nulls.
    // -------------------------------------------------------------------------

    fn sine_series(n: usize, cycles: f64) -> Vec<f64> {
        (0..n)
            .map(|t| (2.0 * std::f64::consts::PI * cycles * t as f64 / n as f64).sin())
            .collect()
    }

    #[test]
    // Purpose
    // -------
    // Verify that proportional series have |ρ̂(0)| = 1, regardless of
    // sign and scale.
    //
    // Given
    // -----
    // - b = −2.5·a for a non-constant series a.
    //
    // Expect
    // ------
    // - max_abs_cross_corr(a, b, 1) = 1 up to round-off.
    fn proportional_series_have_unit_correlation() {
        // Arrange
        let a = vec![0.4, -1.2, 2.0, 0.3, -0.7, 1.1];
        let b: Vec<f64> = a.iter().map(|&v| -2.5 * v).collect();

        // Act
        let stat = max_abs_cross_corr(&a, &b, 1);

        // Assert
        assert_relative_eq!(stat, 1.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a shifted copy is detected at the shifting lag, whichever
    // argument leads.
    //
    // Given
    // -----
    // - A 200-point sinusoid a and b_t = a_{t−2} (b lags a by 2).
    //
    // Expect
    // ------
    // - The max statistic over |h| ≤ 3 is close to 1 for both argument
    //   orders, and well above the statistic capped at |h| ≤ 1.
    fn shifted_copy_detected_at_its_lag() {
        // Arrange
        let n = 200;
        let a = sine_series(n, 3.0);
        let mut b = vec![0.0; n];
        for t in 2..n {
            b[t] = a[t - 2];
        }

        // Act
        let wide = max_abs_cross_corr(&a, &b, 3);
        let wide_swapped = max_abs_cross_corr(&b, &a, 3);

        // Assert
        assert!(wide > 0.95, "expected near-unit correlation at lag 2, got {wide}");
        assert_relative_eq!(wide, wide_swapped, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify the degenerate constant-series case contributes no linkage
    // evidence.
    //
    // Given
    // -----
    // - A constant series paired with a varying one.
    //
    // Expect
    // ------
    // - The statistic is exactly 0.
    fn constant_series_yields_zero_statistic() {
        // Arrange
        let constant = vec![3.0; 10];
        let varying = vec![0.1, -0.4, 0.9, -1.3, 0.6, 0.2, -0.8, 1.4, -0.2, 0.5];

        // Act
        let stat = max_abs_cross_corr(&constant, &varying, 2);

        // Assert
        assert_eq!(stat, 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Check that sinusoids at distinct integer frequencies are nearly
    // uncorrelated at every examined lag (exact orthogonality holds at
    // lag 0; truncation leaves only O(m/n) edge effects elsewhere).
    //
    // Given
    // -----
    // - 400-point sinusoids at 3 and 11 cycles.
    //
    // Expect
    // ------
    // - The max statistic over |h| ≤ 5 stays below 0.05.
    fn orthogonal_sinusoids_are_nearly_uncorrelated() {
        // Arrange
        let n = 400;
        let a = sine_series(n, 3.0);
        let b = sine_series(n, 11.0);

        // Act
        let stat = max_abs_cross_corr(&a, &b, 5);

        // Assert
        assert!(stat < 0.05, "expected near-zero cross-correlation, got {stat}");
    }
}
