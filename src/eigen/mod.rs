//! eigen — symmetric eigendecomposition and rank selection.
//!
//! Purpose
//! -------
//! Wrap the numerical eigendecomposition behind a deterministic, ordered
//! interface, and provide the eigenvalue-ratio rule that turns an
//! ordered spectrum into a component count. These are the two
//! eigenanalysis pieces shared by factor estimation (count and loading
//! selection) and segmentation (full orthonormal transform and matrix
//! square roots).
//!
//! Key behaviors
//! -------------
//! - [`SpectralDecomp::decompose`] validates, decomposes, orders the
//!   spectrum descending, and applies a deterministic eigenvector sign
//!   convention.
//! - [`ratio_rank`] locates the sharpest relative eigenvalue drop with
//!   tolerance guards against numerically zero tails.
//!
//! Conventions
//! -----------
//! - Failures surface as [`EigenError`] / [`EigenResult`]; no panics on
//!   user-reachable inputs, no global state, no `unsafe`.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its ordering, orthonormality,
//!   tolerance, and error-path behavior; entry-point integration tests
//!   exercise the combination on simulated series.

pub mod decomposition;
pub mod errors;
pub mod ratio;

pub use self::decomposition::SpectralDecomp;
pub use self::errors::{EigenError, EigenResult};
pub use self::ratio::{RANK_REL_TOL, ratio_rank};
