//! grouping::options — linkage strategy selection and validation.

use crate::grouping::errors::{GroupingError, GroupingResult};

/// GroupingMethod — tagged strategy for pairwise linkage testing.
///
/// Purpose
/// -------
/// Select how pairs of transformed component series are declared
/// "linked" before the connected-components pass. Exactly two
/// strategies exist, mirroring the enumerated `{max, fdr}` selector of
/// the statistical procedure; no open-ended extensibility is intended.
///
/// Variants
/// --------
/// - `MaxPermutation { n_perm, level }`
///   Maximum-cross-correlation statistic per pair, calibrated against a
///   permutation null built by shuffling one series `n_perm` times with
///   the caller-owned generator. A pair is linked when the observed
///   statistic exceeds the empirical `(1 − level)` quantile of its null
///   replicates.
/// - `Fdr { beta }`
///   Deterministic normal-approximation p-values per pair, thinned by
///   the Benjamini–Hochberg step-up procedure at level `beta`.
///
/// Invariants
/// ----------
/// - `n_perm ≥ 1`, `level ∈ (0, 1)`, `beta ∈ (0, 1)`; enforced by
///   [`GroupingOptions::validate`] before any statistic is computed.
///
/// Notes
/// -----
/// - Reproducibility of the permutation path is governed entirely by
///   the generator the caller passes in; this type holds no random
///   state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroupingMethod {
    /// Max-statistic permutation test.
    MaxPermutation {
        /// Number of permutation replicates per pair.
        n_perm: usize,
        /// Significance level defining the null quantile.
        level: f64,
    },
    /// FDR-controlled multiple testing over all pairs.
    Fdr {
        /// False-discovery-rate level β.
        beta: f64,
    },
}

impl GroupingMethod {
    /// Short label identifying the strategy in outcome objects.
    pub fn label(&self) -> &'static str {
        match self {
            GroupingMethod::MaxPermutation { .. } => "max",
            GroupingMethod::Fdr { .. } => "fdr",
        }
    }
}

/// GroupingOptions — configuration for the grouping module.
///
/// Purpose
/// -------
/// Bundle the cross-correlation lag cap, the optional per-component AR
/// pre-whitening switch, and the linkage strategy into one value that
/// entry points thread through to the grouping routines.
///
/// Fields
/// ------
/// - `max_lag`: `usize`
///   Cross-correlations are examined at lags `|h| ≤ max_lag`; must
///   satisfy `1 ≤ max_lag < n`.
/// - `prewhiten`: `bool`
///   When set, each component series is replaced by the residuals of a
///   univariate AR fit (order selected in 0..=5 by AIC) before any
///   pairwise statistic is computed.
/// - `method`: [`GroupingMethod`]
///   The linkage strategy.
///
/// Notes
/// -----
/// - A `Default` implementation provides the common baseline: lag cap
///   5, no pre-whitening, max-statistic permutation with 199 replicates
///   at level 0.05.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupingOptions {
    /// Lag cap m for pairwise cross-correlations.
    pub max_lag: usize,
    /// Pre-whiten each component by an AIC-selected AR fit.
    pub prewhiten: bool,
    /// Linkage strategy.
    pub method: GroupingMethod,
}

impl GroupingOptions {
    /// Construct options from explicit settings.
    pub fn new(max_lag: usize, prewhiten: bool, method: GroupingMethod) -> GroupingOptions {
        GroupingOptions { max_lag, prewhiten, method }
    }

    /// Validate the options against a series of length `n`.
    ///
    /// # Errors
    /// - `GroupingError::InvalidMaxLag` — `max_lag` outside `1 ≤ m < n`.
    /// - `GroupingError::ZeroPermutations` — permutation count of 0.
    /// - `GroupingError::InvalidSignificanceLevel` — `level` outside
    ///   (0, 1) or non-finite.
    /// - `GroupingError::InvalidFdrLevel` — `beta` outside (0, 1) or
    ///   non-finite.
    pub fn validate(&self, n: usize) -> GroupingResult<()> {
        if self.max_lag == 0 || self.max_lag >= n {
            return Err(GroupingError::InvalidMaxLag { max_lag: self.max_lag, n });
        }
        match self.method {
            GroupingMethod::MaxPermutation { n_perm, level } => {
                if n_perm == 0 {
                    return Err(GroupingError::ZeroPermutations);
                }
                if !level.is_finite() || level <= 0.0 || level >= 1.0 {
                    return Err(GroupingError::InvalidSignificanceLevel { level });
                }
            }
            GroupingMethod::Fdr { beta } => {
                if !beta.is_finite() || beta <= 0.0 || beta >= 1.0 {
                    return Err(GroupingError::InvalidFdrLevel { beta });
                }
            }
        }
        Ok(())
    }
}

impl Default for GroupingOptions {
    /// Baseline configuration: lag cap 5, no pre-whitening,
    /// max-statistic permutation with 199 replicates at level 0.05.
    fn default() -> Self {
        GroupingOptions {
            max_lag: 5,
            prewhiten: false,
            method: GroupingMethod::MaxPermutation { n_perm: 199, level: 0.05 },
        }
    }
}
