//! factors::options — configuration for factor estimation.

use crate::moments::threshold::ThresholdPolicy;

/// FactorOptions — configuration for the factor estimation entry point.
///
/// Purpose
/// -------
/// Bundle the lag count, threshold policy, and rank-selection procedure
/// into one value passed alongside the series.
///
/// Fields
/// ------
/// - `lag_k`: `usize`
///   Number of lags `K` aggregated into the eigenanalysis matrix; must
///   satisfy `1 ≤ K < n`.
/// - `threshold`: [`ThresholdPolicy`]
///   Element-wise hard-threshold policy for the lagged autocovariances.
/// - `two_step`: `bool`
///   When set, the factor count comes from the two-step procedure: a
///   first ratio pass with scan bound `⌊p/2⌋`, then a refinement pass
///   on the series projected onto a leading eigenvector subset.
/// - `refine_bound`: `Option<usize>`
///   Size of the projection subset for the refinement pass. `None`
///   selects the default policy `2·r₀`, clamped to `[r₀ + 1, p]`. The
///   subset rule is a policy point, not a fixed constant; override it
///   when calibrating against a reference procedure.
///
/// Notes
/// -----
/// - `Default` gives `lag_k = 5`, thresholding off, the standard
///   one-pass rank rule, and the default refinement policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorOptions {
    /// Number of lags aggregated into the eigenanalysis matrix.
    pub lag_k: usize,
    /// Hard-threshold policy for lagged autocovariances.
    pub threshold: ThresholdPolicy,
    /// Use the two-step rank selection procedure.
    pub two_step: bool,
    /// Projection subset size for the two-step refinement pass.
    pub refine_bound: Option<usize>,
}

impl FactorOptions {
    /// Construct options from the commonly varied settings, with the
    /// default refinement policy.
    pub fn new(lag_k: usize, threshold: ThresholdPolicy, two_step: bool) -> FactorOptions {
        FactorOptions { lag_k, threshold, two_step, refine_bound: None }
    }
}

impl Default for FactorOptions {
    /// Baseline configuration: `K = 5`, thresholding off, standard
    /// one-pass rank selection.
    fn default() -> Self {
        FactorOptions {
            lag_k: 5,
            threshold: ThresholdPolicy::Off,
            two_step: false,
            refine_bound: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The documented defaults and `new` field pass-through.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the documented defaults and that `new` preserves its
    // arguments.
    //
    // Given
    // -----
    // - `FactorOptions::default()` and an explicit `new` call.
    //
    // Expect
    // ------
    // - Default: K = 5, thresholding off, one-pass, no override.
    // - `new(3, Default, true)` stores exactly those values.
    fn defaults_and_new_preserve_fields() {
        // Arrange / Act
        let defaults = FactorOptions::default();
        let explicit = FactorOptions::new(3, ThresholdPolicy::Default, true);

        // Assert
        assert_eq!(defaults.lag_k, 5);
        assert_eq!(defaults.threshold, ThresholdPolicy::Off);
        assert!(!defaults.two_step);
        assert!(defaults.refine_bound.is_none());

        assert_eq!(explicit.lag_k, 3);
        assert_eq!(explicit.threshold, ThresholdPolicy::Default);
        assert!(explicit.two_step);
        assert!(explicit.refine_bound.is_none());
    }
}
