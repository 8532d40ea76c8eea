//! grouping::fdr — FDR-controlled pairwise linkage.
//!
//! The deterministic alternative to the permutation test. Each pair's
//! maximum absolute cross-correlation statistic `T = √n · L̂` is mapped
//! to a p-value through the normal approximation with a Bonferroni
//! correction over the `2m + 1` examined lags,
//!
//! ```text
//! p = min(1, (2m + 1) · 2 · (1 − Φ(T))),
//! ```
//!
//! and the full collection of p(p−1)/2 pair p-values is thinned by the
//! Benjamini–Hochberg step-up procedure at level β. Pairs surviving the
//! step-up are linked. Everything here is a pure function of the input
//! series, so the FDR path is reproducible without any seed.

use crate::grouping::crosscorr::max_abs_cross_corr;
use statrs::distribution::{ContinuousCDF, Normal};

/// Normal-approximation p-value for a max-cross-correlation statistic.
///
/// Under independence `√n·ρ̂(h)` is asymptotically standard normal at
/// each lag; the Bonferroni factor `n_lags = 2m + 1` bounds the tail of
/// the maximum over the examined lags.
#[inline]
fn pair_p_value(t_stat: f64, n_lags: usize) -> f64 {
    let normal = Normal::new(0.0, 1.0).expect("unit normal");
    let two_sided = 2.0 * (1.0 - normal.cdf(t_stat));
    (n_lags as f64 * two_sided).min(1.0)
}

/// Benjamini–Hochberg step-up selection over pair p-values.
///
/// Sorts ascending, finds the largest rank `k` with
/// `p_(k) ≤ β·k/M`, and returns the pairs at ranks `1..=k` (empty when
/// no rank qualifies).
fn benjamini_hochberg(
    mut pvals: Vec<(f64, (usize, usize))>, beta: f64,
) -> Vec<(usize, usize)> {
    let m = pvals.len();
    pvals.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut cutoff = None;
    for (rank0, (p_value, _)) in pvals.iter().enumerate() {
        if *p_value <= beta * (rank0 + 1) as f64 / m as f64 {
            cutoff = Some(rank0);
        }
    }
    match cutoff {
        Some(k) => pvals[..=k].iter().map(|&(_, pair)| pair).collect(),
        None => Vec::new(),
    }
}

/// Find all linked pairs under FDR control at level β.
///
/// # Arguments
/// - `cols`: `p` equal-length component series (already pre-whitened if
///   requested), length `n ≥ 2`.
/// - `max_lag`: cross-correlation lag cap `m`, `1 ≤ m < n`.
/// - `beta`: FDR level in (0, 1).
///
/// # Returns
/// Linked pairs `(i, j)` with `i < j`. Fully deterministic for a given
/// input.
pub(crate) fn linked_pairs(
    cols: &[Vec<f64>], max_lag: usize, beta: f64,
) -> Vec<(usize, usize)> {
    let p = cols.len();
    let n = cols.first().map_or(0, Vec::len);
    let scale = (n as f64).sqrt();
    let n_lags = 2 * max_lag + 1;

    let mut pvals = Vec::with_capacity(p * (p.saturating_sub(1)) / 2);
    for i in 0..p {
        for j in (i + 1)..p {
            let stat = scale * max_abs_cross_corr(&cols[i], &cols[j], max_lag);
            pvals.push((pair_p_value(stat, n_lags), (i, j)));
        }
    }
    benjamini_hochberg(pvals, beta)
}
