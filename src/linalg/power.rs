//! Integer matrix powers by repeated squaring

use crate::io::error::Result;
use crate::linalg::provider::square_dimension;
use ndarray::{Array2, ArrayView2};
use tracing::trace;

/// Raise a square matrix to a non-negative integer power
///
/// Uses binary exponentiation, so `P^1000` costs 15 matrix products rather
/// than 999. `exponent == 0` yields the identity.
///
/// # Errors
///
/// Returns an error if the matrix is empty or not square
pub fn matrix_power(matrix: ArrayView2<'_, f64>, exponent: u32) -> Result<Array2<f64>> {
    let dimension = square_dimension(matrix)?;

    let mut result = Array2::<f64>::eye(dimension);
    let mut base = matrix.to_owned();
    let mut remaining = exponent;
    let mut products = 0_u32;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.dot(&base);
            products += 1;
        }
        remaining >>= 1;
        if remaining > 0 {
            base = base.dot(&base);
            products += 1;
        }
    }

    trace!(dimension, exponent, products, "computed matrix power");
    Ok(result)
}
