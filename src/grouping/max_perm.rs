//! grouping::max_perm — max-statistic permutation linkage.
//!
//! For every pair of component series the observed statistic is
//! `T = √n · max_{|h| ≤ m} |ρ̂(h)|`. Its null distribution is built by
//! shuffling one series of the pair `n_perm` times with the
//! caller-owned generator and recomputing the statistic; the pair is
//! declared linked when the observed value exceeds the empirical
//! `(1 − level)` quantile of the replicates. Shuffling destroys the
//! temporal alignment while preserving the marginal distribution, so
//! the replicates approximate the statistic under independence.
//!
//! Pairs are visited in a fixed `(i, j)` order, so a seeded generator
//! reproduces the same linkage set on every run; no process-global
//! random state is ever consulted.

use crate::grouping::crosscorr::max_abs_cross_corr;
use rand::Rng;
use rand::seq::SliceRandom;

/// Empirical `(1 − level)` quantile of sorted-ascending replicates.
///
/// Uses the order statistic at index `⌈(1 − level)·B⌉` (clamped to the
/// last replicate), a conservative convention for moderate `B`.
#[inline]
fn critical_value(sorted: &[f64], level: f64) -> f64 {
    let b = sorted.len();
    let idx = ((1.0 - level) * b as f64).ceil() as usize;
    sorted[idx.min(b - 1)]
}

/// Find all linked pairs under the max-statistic permutation test.
///
/// # Arguments
/// - `cols`: `p` equal-length component series (already pre-whitened if
///   requested), length `n ≥ 2`.
/// - `max_lag`: cross-correlation lag cap `m`, `1 ≤ m < n`.
/// - `n_perm`: permutation replicates per pair, `≥ 1`.
/// - `level`: significance level in (0, 1) defining the null quantile.
/// - `rng`: caller-owned generator; seeding it makes the run
///   reproducible.
///
/// # Returns
/// Linked pairs `(i, j)` with `i < j`, in lexicographic order.
pub(crate) fn linked_pairs<R: Rng>(
    cols: &[Vec<f64>], max_lag: usize, n_perm: usize, level: f64, rng: &mut R,
) -> Vec<(usize, usize)> {
    let p = cols.len();
    let n = cols.first().map_or(0, Vec::len);
    let scale = (n as f64).sqrt();

    let mut linked = Vec::new();
    let mut replicates = vec![0.0; n_perm];
    for i in 0..p {
        for j in (i + 1)..p {
            let observed = scale * max_abs_cross_corr(&cols[i], &cols[j], max_lag);

            let mut shuffled = cols[j].clone();
            for slot in replicates.iter_mut() {
                shuffled.shuffle(rng);
                *slot = scale * max_abs_cross_corr(&cols[i], &shuffled, max_lag);
            }
            replicates.sort_by(f64::total_cmp);

            if observed > critical_value(&replicates, level) {
                linked.push((i, j));
            }
        }
    }
    linked
}
