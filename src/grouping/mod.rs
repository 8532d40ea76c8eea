//! grouping — pairwise linkage testing and component partitioning.
//!
//! Purpose
//! -------
//! Partition the components of a transformed series into groups that
//! are mutually uncorrelated across time lags. Every pair of component
//! series is tested for cross-correlation up to a lag cap; significant
//! pairs form edges of a linkage graph whose connected components are
//! the groups. Two interchangeable strategies calibrate significance:
//! a max-statistic permutation test (randomized, caller-owned
//! generator) and an FDR-controlled multiple-testing procedure
//! (deterministic).
//!
//! Key behaviors
//! -------------
//! - Compute max-absolute cross-correlation statistics per pair
//!   (`crosscorr`).
//! - Optionally pre-whiten each component by an AIC-selected AR fit,
//!   delegated to the `arima` crate (`prewhiten`).
//! - Calibrate pairwise significance by permutation (`max_perm`) or by
//!   normal-approximation p-values under Benjamini–Hochberg control
//!   (`fdr`).
//! - Assemble linked pairs into a deterministic partition
//!   (`partition`), driven end-to-end by
//!   [`linkage::group_components`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite `n×p` matrices with `n ≥ 2`, `p ≥ 1`; options
//!   are validated before any statistic is computed.
//! - The output always partitions `{0, …, p−1}`: groups are nonempty,
//!   disjoint, and exhaustive.
//! - The permutation strategy consumes randomness only from the
//!   generator passed by the caller; the FDR strategy is a pure
//!   function of its input.
//!
//! Conventions
//! -----------
//! - Component series are handled as `&[f64]` slices (univariate
//!   statistics), matrices only at the module boundary.
//! - Pairs are visited in lexicographic order; groups are ordered by
//!   size descending, ties by smallest member.
//!
//! Downstream usage
//! ----------------
//! - `segment` runs this module on the transformed series Ẑ as the
//!   final stage of the segmentation entry point.
//! - [`group_components`] is also public for callers that bring their
//!   own transformed series.
//!
//! Testing notes
//! -------------
//! - Strategy modules test linkage decisions against constructions with
//!   known cross-correlation structure; `linkage` tests exact recovery
//!   of a three-block partition by both strategies; the integration
//!   test exercises the full segmentation pipeline.

mod crosscorr;
pub mod errors;
mod fdr;
pub mod linkage;
mod max_perm;
pub mod options;
pub mod partition;
mod prewhiten;

pub use self::errors::{GroupingError, GroupingResult};
pub use self::linkage::group_components;
pub use self::options::{GroupingMethod, GroupingOptions};
pub use self::partition::Grouping;
