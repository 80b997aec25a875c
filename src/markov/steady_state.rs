//! Stationary distribution from the dominant left eigenvector

use crate::io::configuration::DEGENERACY_EPSILON;
use crate::io::error::{Result, degenerate_input, invalid_input};
use crate::linalg::provider::LinearAlgebra;
use nalgebra::Complex;
use ndarray::{Array1, ArrayView2};
use tracing::{debug, warn};

/// Largest eigenvalue, ordered by real part and then imaginary part
///
/// For a regular stochastic matrix this is 1. Ties between equal maxima
/// (reducible chains) resolve to whichever the solver listed last.
pub fn dominant_eigenvalue(eigenvalues: &[Complex<f64>]) -> Option<Complex<f64>> {
    eigenvalues
        .iter()
        .copied()
        .max_by(|a, b| a.re.total_cmp(&b.re).then_with(|| a.im.total_cmp(&b.im)))
}

/// Scale a vector so its entries sum to 1
///
/// # Errors
///
/// Returns [`DegenerateInput`](crate::ErgodicError::DegenerateInput) if the
/// entries sum to zero or a non-finite value
pub fn normalize(vector: Array1<f64>) -> Result<Array1<f64>> {
    let total = vector.sum();
    if !total.is_finite() || total.abs() < DEGENERACY_EPSILON {
        return Err(degenerate_input(
            "steady state normalization",
            &format!("eigenvector entries sum to {total}"),
        ));
    }
    Ok(vector / total)
}

/// Steady-state distribution of a transition matrix
///
/// Takes the eigenvector of `Pᵗ` for its largest eigenvalue and normalizes it
/// to sum to 1. No stochastic or ergodicity checks are made here; for a
/// non-ergodic chain the selected eigenvector is arbitrary.
///
/// # Errors
///
/// Returns an error if the matrix is not square, the decomposition fails, or
/// the eigenvector cannot be normalized
pub fn stationary_distribution<L>(backend: &L, matrix: ArrayView2<'_, f64>) -> Result<Array1<f64>>
where
    L: LinearAlgebra + ?Sized,
{
    // Left eigenvectors of P are right eigenvectors of its transpose
    let transposed = matrix.t();

    let eigenvalues = backend.eigenvalues(transposed)?;
    let dominant = dominant_eigenvalue(&eigenvalues)
        .ok_or_else(|| invalid_input(&"matrix has no eigenvalues"))?;

    debug!(
        states = matrix.nrows(),
        real = dominant.re,
        imaginary = dominant.im,
        "selected dominant eigenvalue"
    );
    if dominant.im.abs() > DEGENERACY_EPSILON {
        warn!(
            imaginary = dominant.im,
            "dominant eigenvalue is complex, using its real part"
        );
    }

    let eigenvector = backend.eigenvector(transposed, dominant.re)?;
    normalize(eigenvector)
}
