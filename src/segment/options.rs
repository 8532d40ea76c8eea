//! segment::options — configuration for the segmentation entry point.

use crate::grouping::options::GroupingOptions;
use crate::moments::threshold::ThresholdPolicy;

/// SegmentOptions — configuration for the segmentation entry point.
///
/// Purpose
/// -------
/// Bundle the settings of the linear stage (lag count, threshold
/// policy) with the grouping configuration applied to the transformed
/// series. The whitening strategy is passed separately because it may
/// borrow a collaborator.
///
/// Fields
/// ------
/// - `lag_k`: `usize`
///   Number of lags `K` aggregated into `Ŵ_y`; must satisfy
///   `1 ≤ K < n`.
/// - `threshold`: [`ThresholdPolicy`]
///   Hard-threshold policy for the lagged autocovariances of the
///   whitened series.
/// - `grouping`: [`GroupingOptions`]
///   Lag cap, pre-whitening switch, and linkage strategy for the
///   grouping stage.
///
/// Notes
/// -----
/// - `Default` gives `K = 5`, thresholding off, and the grouping
///   baseline (lag cap 5, no pre-whitening, max-permutation with 199
///   replicates at level 0.05).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentOptions {
    /// Number of lags aggregated into Ŵ_y.
    pub lag_k: usize,
    /// Hard-threshold policy for lagged autocovariances.
    pub threshold: ThresholdPolicy,
    /// Grouping configuration for the transformed series.
    pub grouping: GroupingOptions,
}

impl SegmentOptions {
    /// Construct options from explicit settings.
    pub fn new(
        lag_k: usize, threshold: ThresholdPolicy, grouping: GroupingOptions,
    ) -> SegmentOptions {
        SegmentOptions { lag_k, threshold, grouping }
    }
}

impl Default for SegmentOptions {
    fn default() -> Self {
        SegmentOptions {
            lag_k: 5,
            threshold: ThresholdPolicy::Off,
            grouping: GroupingOptions::default(),
        }
    }
}
