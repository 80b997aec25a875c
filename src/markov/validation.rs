//! Precondition checks for transition matrices

use crate::io::error::{Result, invalid_input};
use crate::linalg::provider::square_dimension;
use crate::markov::config::Validation;
use ndarray::ArrayView2;

/// Check that a matrix is non-empty, square, and finite, returning its dimension
///
/// # Errors
///
/// Returns [`InvalidInput`](crate::ErgodicError::InvalidInput) describing the
/// first violation found
pub fn check_structure(matrix: ArrayView2<'_, f64>) -> Result<usize> {
    let dimension = square_dimension(matrix)?;

    if let Some(((row, col), value)) = matrix.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(invalid_input(&format!(
            "entry ({row}, {col}) is not finite: {value}"
        )));
    }

    Ok(dimension)
}

/// Check that every entry is non-negative and every row sums to 1 within `tolerance`
///
/// # Errors
///
/// Returns [`InvalidInput`](crate::ErgodicError::InvalidInput) naming the
/// offending entry or row
pub fn check_stochastic(matrix: ArrayView2<'_, f64>, tolerance: f64) -> Result<()> {
    if let Some(((row, col), value)) = matrix.indexed_iter().find(|(_, v)| **v < 0.0) {
        return Err(invalid_input(&format!(
            "entry ({row}, {col}) is a negative probability: {value}"
        )));
    }

    for (row, values) in matrix.rows().into_iter().enumerate() {
        let sum = values.sum();
        if (sum - 1.0).abs() > tolerance {
            return Err(invalid_input(&format!(
                "row {row} sums to {sum}, expected 1 within {tolerance}"
            )));
        }
    }

    Ok(())
}

/// Apply the configured validation mode, returning the matrix dimension
///
/// # Errors
///
/// Returns [`InvalidInput`](crate::ErgodicError::InvalidInput) if any
/// configured check fails
pub fn validate(matrix: ArrayView2<'_, f64>, validation: Validation) -> Result<usize> {
    let dimension = check_structure(matrix)?;

    if let Validation::Strict { tolerance } = validation {
        check_stochastic(matrix, tolerance)?;
    }

    Ok(dimension)
}
