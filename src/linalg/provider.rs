//! Linear-algebra capability required by the chain statistics

use crate::io::error::{Result, invalid_input};
use nalgebra::Complex;
use ndarray::{Array1, Array2, ArrayView2};

/// Dense linear-algebra provider over real square matrices
///
/// Chain statistics only need the eigenvalues of a matrix, an eigenvector for
/// one chosen eigenvalue, and a matrix inverse. Implementations must be
/// reentrant so one provider can serve concurrent analyses.
pub trait LinearAlgebra: Send + Sync {
    /// All eigenvalues of `matrix`, in no particular order
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square or the solver does not converge
    fn eigenvalues(&self, matrix: ArrayView2<'_, f64>) -> Result<Vec<Complex<f64>>>;

    /// A right eigenvector of `matrix` for the real `eigenvalue`, at any scale
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square or the solver does not converge
    fn eigenvector(&self, matrix: ArrayView2<'_, f64>, eigenvalue: f64) -> Result<Array1<f64>>;

    /// Inverse of `matrix`
    ///
    /// # Errors
    ///
    /// Returns [`SingularMatrix`](crate::ErgodicError::SingularMatrix) if the
    /// matrix is not invertible
    fn inverse(&self, matrix: ArrayView2<'_, f64>) -> Result<Array2<f64>>;
}

/// Dimension of a non-empty square matrix
///
/// # Errors
///
/// Returns an error if the matrix is empty or not square
pub fn square_dimension(matrix: ArrayView2<'_, f64>) -> Result<usize> {
    let (rows, cols) = matrix.dim();
    if rows == 0 || cols == 0 {
        return Err(invalid_input(&"matrix is empty"));
    }
    if rows != cols {
        return Err(invalid_input(&format!(
            "matrix is {rows}x{cols}, expected a square matrix"
        )));
    }
    Ok(rows)
}
