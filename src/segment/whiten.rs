//! segment::whiten — normalization of the series before aggregation.
//!
//! Purpose
//! -------
//! Rescale the input series so its contemporaneous covariance becomes
//! (approximately) the identity: `Ỹ = Y_c · V̂^{-1/2}`, where `V̂` is
//! either the sample covariance or a sparse precision estimate obtained
//! from a black-box collaborator. The inverse square root is formed
//! through the shared symmetric eigendecomposition.
//!
//! Key behaviors
//! -------------
//! - Sample-covariance branch: `V̂ = Σ̂(0)` of the centred series;
//!   `V̂^{-1/2} = Q̂ diag(λ̂_j^{-1/2}) Q̂ᵀ`. A numerically singular
//!   spectrum is a hard error, since the segmentation transform must be
//!   invertible.
//! - Precision branch: the collaborator returns `Ω̂ ≈ V̂^{-1}`; after
//!   shape and symmetry validation, `V̂^{-1/2} = Ω̂^{1/2}` is rebuilt
//!   from the spectrum with negative round-off eigenvalues clamped to
//!   zero (the estimate is PSD by contract).
//!
//! Invariants & assumptions
//! ------------------------
//! - The input series has been validated (finite, `n ≥ 2`, `p ≥ 1`).
//! - The returned matrix is symmetric `p×p`; for the sample-covariance
//!   branch `V̂^{-1/2} V̂ V̂^{-1/2} = I` up to round-off.
//!
//! Conventions
//! -----------
//! - Collaborator failures propagate as `SegmentError::Estimation`; the
//!   collaborator itself reports through `anyhow::Error` so estimators
//!   can compose arbitrary error chains.
//!
//! Testing notes
//! -------------
//! - Unit tests cover identity-covariance recovery, whitening of a
//!   correlated series to unit covariance, the singularity error, the
//!   precision branch against a known inverse, and the collaborator
//!   validation errors.

use crate::eigen::decomposition::SpectralDecomp;
use crate::moments::autocov::{center, lagged_autocov};
use crate::segment::errors::{SegmentError, SegmentResult};
use ndarray::{Array2, Axis};

/// Relative tolerance below which a sample-covariance eigenvalue is
/// treated as zero, making the whitening stage fail rather than divide
/// by a vanishing value.
const SINGULARITY_REL_TOL: f64 = 1e-12;

/// Absolute symmetry tolerance for collaborator precision estimates,
/// scaled by the largest entry magnitude.
const SYMMETRY_REL_TOL: f64 = 1e-8;

/// PrecisionEstimator — black-box sparse precision-matrix collaborator.
///
/// Implementors receive the raw series and return a `p×p` symmetric
/// positive semi-definite estimate of the precision matrix `V^{-1}`.
/// The whitening stage validates shape and symmetry and derives the
/// inverse square root; estimator failures propagate to the entry
/// point as `SegmentError::Estimation`.
pub trait PrecisionEstimator {
    /// Estimate the `p×p` precision matrix of the series.
    fn estimate(&self, y: &Array2<f64>) -> anyhow::Result<Array2<f64>>;
}

/// WhitenMethod — tagged selector for the normalization stage.
///
/// Exactly the two enumerated strategies of the procedure:
///
/// - `SampleCovariance` — whiten by the inverse square root of the
///   sample covariance.
/// - `SparsePrecision(estimator)` — whiten by the square root of a
///   collaborator-supplied precision estimate, for regimes where the
///   sample covariance is a poor or singular estimate.
pub enum WhitenMethod<'a> {
    /// Whiten by the sample covariance of the series.
    SampleCovariance,
    /// Whiten by a black-box sparse precision estimate.
    SparsePrecision(&'a dyn PrecisionEstimator),
}

/// Rebuild `Q diag(f(λ)) Qᵀ` from a spectral decomposition.
fn rebuild_with(decomp: &SpectralDecomp, f: impl Fn(f64) -> f64) -> Array2<f64> {
    let q = decomp.eigenvectors();
    let mut scaled = q.to_owned();
    for (j, mut column) in scaled.axis_iter_mut(Axis(1)).enumerate() {
        let factor = f(decomp.eigenvalues()[j]);
        column.mapv_inplace(|v| v * factor);
    }
    scaled.dot(&q.t())
}

/// Whiten a validated series, returning `(Ỹ, V̂^{-1/2})`.
///
/// # Arguments
/// - `y`: validated `n×p` series (finite, `n ≥ 2`, `p ≥ 1`).
/// - `method`: normalization strategy.
///
/// # Errors
/// - `SegmentError::SingularCovariance` — a sample-covariance
///   eigenvalue at or below the relative tolerance floor.
/// - `SegmentError::PrecisionDimension` /
///   `SegmentError::PrecisionAsymmetric` — collaborator contract
///   violations.
/// - `SegmentError::Estimation` — collaborator failure.
/// - `SegmentError::Eigen` — eigenanalysis breakdown.
pub(crate) fn whiten(
    y: &Array2<f64>, method: &WhitenMethod<'_>,
) -> SegmentResult<(Array2<f64>, Array2<f64>)> {
    let p = y.ncols();
    let centred = center(y);

    let v_inv_sqrt = match method {
        WhitenMethod::SampleCovariance => {
            let covariance = lagged_autocov(&centred, 0);
            let decomp = SpectralDecomp::decompose(&covariance)?;
            let floor = SINGULARITY_REL_TOL * decomp.eigenvalues()[0].max(1.0);
            for &lambda in decomp.eigenvalues() {
                if lambda <= floor {
                    return Err(SegmentError::SingularCovariance { eigenvalue: lambda });
                }
            }
            rebuild_with(&decomp, |lambda| 1.0 / lambda.sqrt())
        }
        WhitenMethod::SparsePrecision(estimator) => {
            let omega = estimator.estimate(y)?;
            let (rows, cols) = omega.dim();
            if rows != p || cols != p {
                return Err(SegmentError::PrecisionDimension { rows, cols, expected: p });
            }
            let scale = omega.iter().fold(1.0_f64, |acc, &v| acc.max(v.abs()));
            for row in 0..p {
                for col in (row + 1)..p {
                    let gap = (omega[[row, col]] - omega[[col, row]]).abs();
                    if gap > SYMMETRY_REL_TOL * scale {
                        return Err(SegmentError::PrecisionAsymmetric { row, col, gap });
                    }
                }
            }
            let decomp = SpectralDecomp::decompose(&omega)?;
            rebuild_with(&decomp, |lambda| lambda.max(0.0).sqrt())
        }
    };

    let whitened = centred.dot(&v_inv_sqrt);
    Ok((whitened, v_inv_sqrt))
}
