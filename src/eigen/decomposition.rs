//! eigen::decomposition — ordered symmetric eigendecomposition.
//!
//! Purpose
//! -------
//! Decompose a symmetric nonnegative-definite matrix into an ordered
//! spectrum, bridging from `ndarray` storage to `nalgebra`'s
//! `symmetric_eigen` and back. Eigenvalues are returned in descending
//! order; eigenvectors form the orthonormal columns of Γ̂ with a
//! deterministic sign convention so that repeated runs on identical
//! input reproduce identical output.
//!
//! Key behaviors
//! -------------
//! - Validate squareness and entry finiteness before any numerical work.
//! - Copy the matrix into a `nalgebra::DMatrix` (column-major writes),
//!   decompose, and reorder eigenpairs by descending eigenvalue with a
//!   stable sort (ties keep backend order).
//! - Fix each eigenvector's sign so its largest-magnitude component is
//!   positive (first such component on exact magnitude ties).
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are symmetric up to round-off; asymmetry is not detected
//!   here (the aggregate builder symmetrizes explicitly, and whitening
//!   validates collaborator symmetry before calling in).
//! - A successful decomposition has a fully finite spectrum; a NaN or
//!   infinite eigenvalue or eigenvector entry is reported as
//!   [`EigenError::NonFiniteSpectrum`] rather than passed downstream.
//!
//! Conventions
//! -----------
//! - Eigenvectors are columns: `eigenvectors()[[i, j]]` is component `i`
//!   of the `j`-th ordered eigenvector.
//! - No `unsafe`; pure function of the input matrix.
//!
//! Downstream usage
//! ----------------
//! - `factors` reads the ordered eigenvalues for the ratio rank rule and
//!   takes leading eigenvector blocks as loading matrices.
//! - `segment` uses the full orthonormal matrix Γ̂ for the transform
//!   B̂ = Γ̂ᵀ V̂^{-1/2}, and the whitening stage rebuilds matrix square
//!   roots from the spectrum.
//!
//! Testing notes
//! -------------
//! - Unit tests cover ordering, orthonormality, the sign convention,
//!   reconstruction of the input from the spectrum, and the error paths
//!   for non-square and non-finite input.

use crate::eigen::errors::{EigenError, EigenResult};
use nalgebra::DMatrix;
use ndarray::{Array1, Array2, s};

/// Ordered spectrum of a symmetric matrix.
///
/// Holds eigenvalues in descending order together with the matching
/// orthonormal eigenvector columns. Construct via
/// [`SpectralDecomp::decompose`]; accessors expose the parts without
/// copying.
#[derive(Debug, Clone)]
pub struct SpectralDecomp {
    eigenvalues: Array1<f64>,
    eigenvectors: Array2<f64>,
}

impl SpectralDecomp {
    /// Eigendecompose a symmetric `p×p` matrix.
    ///
    /// Parameters
    /// ----------
    /// - `m`: `&Array2<f64>`
    ///   Symmetric matrix to decompose. Must be square with finite
    ///   entries; symmetry itself is the caller's responsibility.
    ///
    /// Returns
    /// -------
    /// `EigenResult<SpectralDecomp>`
    ///   - `Ok(decomp)` with eigenvalues sorted descending and
    ///     sign-normalized orthonormal eigenvector columns.
    ///   - `Err(EigenError)` when the input is malformed or the backend
    ///     produces a non-finite spectrum.
    ///
    /// Errors
    /// ------
    /// - `EigenError::NotSquare` — `m` is not `p×p`.
    /// - `EigenError::NonFinite` — an input entry is NaN or ±∞, with the
    ///   offending position in the payload.
    /// - `EigenError::NonFiniteSpectrum` — the decomposition itself
    ///   degenerated numerically.
    ///
    /// Notes
    /// -----
    /// - The sign convention (largest-magnitude component positive) is
    ///   implementation-defined but deterministic, so identical inputs
    ///   give identical eigenvector matrices across runs.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use hdts::eigen::decomposition::SpectralDecomp;
    /// let m = array![[2.0, 0.0], [0.0, 1.0]];
    /// let decomp = SpectralDecomp::decompose(&m).unwrap();
    /// assert!((decomp.eigenvalues()[0] - 2.0).abs() < 1e-12);
    /// assert!((decomp.eigenvalues()[1] - 1.0).abs() < 1e-12);
    /// ```
    pub fn decompose(m: &Array2<f64>) -> EigenResult<Self> {
        let (rows, cols) = m.dim();
        if rows != cols {
            return Err(EigenError::NotSquare { rows, cols });
        }
        for ((row, col), &value) in m.indexed_iter() {
            if !value.is_finite() {
                return Err(EigenError::NonFinite { row, col, value });
            }
        }

        let mut m_nalg = DMatrix::<f64>::zeros(rows, cols);
        fill_dmatrix(m, &mut m_nalg);
        let eigen_decomp = m_nalg.symmetric_eigen();

        if eigen_decomp.eigenvalues.iter().any(|v| !v.is_finite())
            || eigen_decomp.eigenvectors.iter().any(|v| !v.is_finite())
        {
            return Err(EigenError::NonFiniteSpectrum);
        }

        let mut order: Vec<usize> = (0..rows).collect();
        order.sort_by(|&a, &b| {
            eigen_decomp.eigenvalues[b].total_cmp(&eigen_decomp.eigenvalues[a])
        });

        let mut eigenvalues = Array1::<f64>::zeros(rows);
        let mut eigenvectors = Array2::<f64>::zeros((rows, cols));
        for (dst, &src) in order.iter().enumerate() {
            eigenvalues[dst] = eigen_decomp.eigenvalues[src];
            let column = eigen_decomp.eigenvectors.column(src);

            let mut pivot = 0;
            let mut pivot_abs = 0.0;
            for (i, &v) in column.iter().enumerate() {
                if v.abs() > pivot_abs {
                    pivot_abs = v.abs();
                    pivot = i;
                }
            }
            let sign = if column[pivot] < 0.0 { -1.0 } else { 1.0 };
            for i in 0..rows {
                eigenvectors[[i, dst]] = sign * column[i];
            }
        }

        Ok(SpectralDecomp { eigenvalues, eigenvectors })
    }

    /// Eigenvalues in descending order.
    pub fn eigenvalues(&self) -> &Array1<f64> {
        &self.eigenvalues
    }

    /// Orthonormal eigenvector columns, matching [`Self::eigenvalues`].
    pub fn eigenvectors(&self) -> &Array2<f64> {
        &self.eigenvectors
    }

    /// The first `r` eigenvector columns as an owned `p×r` matrix.
    ///
    /// `r = 0` yields a `p×0` matrix; callers rely on this for the
    /// no-factor edge case.
    ///
    /// # Panics
    /// - If `r` exceeds the matrix dimension.
    pub fn leading(&self, r: usize) -> Array2<f64> {
        self.eigenvectors.slice(s![.., ..r]).to_owned()
    }
}

/// Copy an `ndarray` matrix into a preallocated `nalgebra::DMatrix`.
///
/// Column-major writes to match `DMatrix` storage. Shapes must agree;
/// mismatches are programmer errors and panic via indexing.
fn fill_dmatrix(src: &Array2<f64>, dst: &mut DMatrix<f64>) {
    let n = src.ncols();
    for j in 0..n {
        for i in 0..src.nrows() {
            dst[(i, j)] = src[[i, j]];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Descending eigenvalue order and nonnegativity for a PSD input.
    // - Orthonormality of the eigenvector columns.
    // - The deterministic sign convention on a matrix whose eigenvectors
    //   have a unique largest-magnitude component.
    // - Reconstruction Γ Λ Γᵀ ≈ M.
    // - Error paths: non-square and non-finite inputs.
    //
    // They intentionally DO NOT cover:
    // - Conditioning of nearly defective matrices; the crate only feeds
    //   symmetrized PSD aggregates into this routine.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify ordering and PSD nonnegativity of the returned spectrum.
    //
    // Given
    // -----
    // - A symmetric PSD 3×3 matrix A = BᵀB + I built by hand.
    //
    // Expect
    // ------
    // - Eigenvalues non-increasing and all ≥ -1e-10.
    fn decompose_orders_eigenvalues_descending() {
        // Arrange
        let b = array![[1.0, 2.0, 0.5], [0.0, 1.0, -1.0], [2.0, 0.0, 1.0]];
        let m = (&b.t().dot(&b) + &Array2::<f64>::eye(3)).to_owned();

        // Act
        let decomp = SpectralDecomp::decompose(&m).expect("PSD matrix should decompose");

        // Assert
        let vals = decomp.eigenvalues();
        for j in 1..vals.len() {
            assert!(vals[j] <= vals[j - 1], "eigenvalues must be non-increasing");
        }
        for &v in vals {
            assert!(v >= -1e-10, "PSD spectrum should be nonnegative, got {v}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Check that eigenvector columns are orthonormal.
    //
    // Given
    // -----
    // - The same PSD matrix as the ordering test.
    //
    // Expect
    // ------
    // - ΓᵀΓ = I up to 1e-10.
    fn decompose_eigenvectors_are_orthonormal() {
        // Arrange
        let b = array![[1.0, 2.0, 0.5], [0.0, 1.0, -1.0], [2.0, 0.0, 1.0]];
        let m = (&b.t().dot(&b) + &Array2::<f64>::eye(3)).to_owned();

        // Act
        let decomp = SpectralDecomp::decompose(&m).expect("PSD matrix should decompose");
        let gamma = decomp.eigenvectors();
        let gram = gamma.t().dot(gamma);

        // Assert
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(gram[[i, j]], expected, epsilon = 1e-10);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the sign convention and the exact eigenpairs of a diagonal
    // matrix, plus reconstruction of a non-diagonal one.
    //
    // Given
    // -----
    // - diag(1, 3, 2), whose ordered eigenvectors are signed unit axes.
    // - The symmetric matrix [[0, 1], [1, 0]] with eigenpairs
    //   (1, [1,1]/√2) and (−1, [1,−1]/√2).
    //
    // Expect
    // ------
    // - Ordered eigenvalues (3, 2, 1) with +e₂, +e₃, +e₁ columns.
    // - Γ Λ Γᵀ reconstructs the off-diagonal matrix.
    fn decompose_sign_convention_and_reconstruction() {
        // Arrange
        let d = array![[1.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 2.0]];

        // Act
        let decomp = SpectralDecomp::decompose(&d).expect("diagonal matrix should decompose");

        // Assert: ordered values and positively-signed axis vectors
        assert_relative_eq!(decomp.eigenvalues()[0], 3.0, epsilon = 1e-12);
        assert_relative_eq!(decomp.eigenvalues()[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(decomp.eigenvalues()[2], 1.0, epsilon = 1e-12);
        let gamma = decomp.eigenvectors();
        assert_relative_eq!(gamma[[1, 0]], 1.0, epsilon = 1e-12);
        assert_relative_eq!(gamma[[2, 1]], 1.0, epsilon = 1e-12);
        assert_relative_eq!(gamma[[0, 2]], 1.0, epsilon = 1e-12);

        // Arrange: reconstruction case
        let m = array![[0.0, 1.0], [1.0, 0.0]];

        // Act
        let decomp = SpectralDecomp::decompose(&m).expect("symmetric matrix should decompose");
        let gamma = decomp.eigenvectors();
        let mut rebuilt = Array2::<f64>::zeros((2, 2));
        for j in 0..2 {
            let lambda = decomp.eigenvalues()[j];
            for a in 0..2 {
                for b in 0..2 {
                    rebuilt[[a, b]] += lambda * gamma[[a, j]] * gamma[[b, j]];
                }
            }
        }

        // Assert
        for a in 0..2 {
            for b in 0..2 {
                assert_relative_eq!(rebuilt[[a, b]], m[[a, b]], epsilon = 1e-10);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure malformed inputs surface typed errors before any numerical
    // work.
    //
    // Given
    // -----
    // - A 2×3 (non-square) matrix.
    // - A square matrix containing a NaN.
    //
    // Expect
    // ------
    // - `NotSquare { rows: 2, cols: 3 }` for the first.
    // - `NonFinite` with the offending position for the second.
    fn decompose_rejects_malformed_input() {
        // Arrange
        let rect = Array2::<f64>::zeros((2, 3));
        let mut bad = Array2::<f64>::eye(2);
        bad[[0, 1]] = f64::NAN;

        // Act
        let rect_result = SpectralDecomp::decompose(&rect);
        let nan_result = SpectralDecomp::decompose(&bad);

        // Assert
        match rect_result {
            Err(EigenError::NotSquare { rows, cols }) => {
                assert_eq!((rows, cols), (2, 3));
            }
            other => panic!("expected NotSquare, got {other:?}"),
        }
        match nan_result {
            Err(EigenError::NonFinite { row, col, .. }) => {
                assert_eq!((row, col), (0, 1));
            }
            other => panic!("expected NonFinite, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that `leading` returns the expected block, including the
    // r = 0 edge used by the no-factor case.
    //
    // Given
    // -----
    // - diag(5, 1) with known ordered eigenvectors.
    //
    // Expect
    // ------
    // - `leading(1)` is the 2×1 column [1, 0]ᵀ.
    // - `leading(0)` has shape 2×0.
    fn leading_returns_prefix_columns() {
        // Arrange
        let m = array![[5.0, 0.0], [0.0, 1.0]];
        let decomp = SpectralDecomp::decompose(&m).expect("diagonal matrix should decompose");

        // Act
        let one = decomp.leading(1);
        let none = decomp.leading(0);

        // Assert
        assert_eq!(one.shape(), &[2, 1]);
        assert_relative_eq!(one[[0, 0]], 1.0, epsilon = 1e-12);
        assert_relative_eq!(one[[1, 0]], 0.0, epsilon = 1e-12);
        assert_eq!(none.shape(), &[2, 0]);
    }
}
