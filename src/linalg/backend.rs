//! Default linear-algebra provider backed by nalgebra decompositions

use crate::io::configuration::{DECOMPOSITION_EPSILON, DECOMPOSITION_MAX_ITERATIONS};
use crate::io::error::{ErgodicError, Result, decomposition_error};
use crate::linalg::provider::{LinearAlgebra, square_dimension};
use nalgebra::{Complex, DMatrix, SVD, Schur};
use ndarray::{Array1, Array2, ArrayView2, ShapeBuilder};

/// Provider using nalgebra's real Schur form, SVD and LU inverse
///
/// Eigenvalues come from the quasi-triangular Schur factor. The eigenvector
/// for a chosen eigenvalue is the right singular vector of `A - λI` with the
/// smallest singular value, which spans the eigenspace when it is
/// one-dimensional.
#[derive(Debug, Clone, Copy, Default)]
pub struct NalgebraBackend;

impl NalgebraBackend {
    /// Create the default provider
    pub const fn new() -> Self {
        Self
    }
}

impl LinearAlgebra for NalgebraBackend {
    fn eigenvalues(&self, matrix: ArrayView2<'_, f64>) -> Result<Vec<Complex<f64>>> {
        let dimension = square_dimension(matrix)?;
        let values = to_dmatrix(matrix);

        // A 1x1 matrix is its own Schur form
        if dimension == 1 {
            return Ok(values.iter().map(|&v| Complex::new(v, 0.0)).collect());
        }

        let schur = Schur::try_new(values, DECOMPOSITION_EPSILON, DECOMPOSITION_MAX_ITERATIONS)
            .ok_or_else(|| {
                decomposition_error(
                    "eigenvalues",
                    &format!(
                        "real Schur decomposition did not converge within {DECOMPOSITION_MAX_ITERATIONS} iterations"
                    ),
                )
            })?;

        Ok(schur.complex_eigenvalues().iter().copied().collect())
    }

    fn eigenvector(&self, matrix: ArrayView2<'_, f64>, eigenvalue: f64) -> Result<Array1<f64>> {
        let dimension = square_dimension(matrix)?;

        if dimension == 1 {
            return Ok(Array1::ones(1));
        }

        let shifted = to_dmatrix(matrix) - DMatrix::identity(dimension, dimension) * eigenvalue;
        let svd = SVD::try_new(
            shifted,
            false,
            true,
            DECOMPOSITION_EPSILON,
            DECOMPOSITION_MAX_ITERATIONS,
        )
        .ok_or_else(|| {
            decomposition_error("eigenvector", &"singular value decomposition did not converge")
        })?;

        let right_vectors = svd.v_t.ok_or_else(|| {
            decomposition_error("eigenvector", &"right singular vectors were not computed")
        })?;

        let smallest = svd
            .singular_values
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(index, _)| index)
            .ok_or_else(|| decomposition_error("eigenvector", &"no singular values"))?;

        Ok(right_vectors.row(smallest).iter().copied().collect())
    }

    fn inverse(&self, matrix: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        let dimension = square_dimension(matrix)?;
        let singular = || ErgodicError::SingularMatrix {
            operation: "matrix inverse",
            dimension,
        };

        let inverse = to_dmatrix(matrix).try_inverse().ok_or_else(singular)?;

        // Near-singular input can invert to infinities rather than failing outright
        if inverse.iter().any(|value| !value.is_finite()) {
            return Err(singular());
        }

        to_ndarray(&inverse)
    }
}

/// Copy a row-major ndarray view into a column-major nalgebra matrix
fn to_dmatrix(matrix: ArrayView2<'_, f64>) -> DMatrix<f64> {
    let (rows, cols) = matrix.dim();
    let row_major: Vec<f64> = matrix.iter().copied().collect();
    DMatrix::from_row_slice(rows, cols, &row_major)
}

/// Copy a column-major nalgebra matrix into an ndarray
fn to_ndarray(matrix: &DMatrix<f64>) -> Result<Array2<f64>> {
    let shape = (matrix.nrows(), matrix.ncols()).f();
    Array2::from_shape_vec(shape, matrix.as_slice().to_vec())
        .map_err(|error| decomposition_error("matrix conversion", &error))
}
