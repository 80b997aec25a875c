//! Tests for square matrix shape checks shared by providers

#[cfg(test)]
mod tests {
    use ergodic::ErgodicError;
    use ergodic::linalg::provider::square_dimension;
    use ndarray::{Array2, array};

    // Tests that square matrices report their dimension
    #[test]
    fn test_square_dimension_of_square_matrix() {
        let matrix = array![[0.5, 0.5], [0.2, 0.8]];
        assert_eq!(square_dimension(matrix.view()).ok(), Some(2));

        let single = array![[1.0]];
        assert_eq!(square_dimension(single.view()).ok(), Some(1));
    }

    // Tests that rectangular matrices are rejected with their shape in the message
    // Verified by comparing rows with rows instead of columns
    #[test]
    fn test_square_dimension_rejects_rectangular() {
        let matrix = array![[0.5, 0.5, 0.0], [0.2, 0.8, 0.0]];
        let error = square_dimension(matrix.view()).unwrap_err();

        assert!(matches!(error, ErgodicError::InvalidInput { .. }));
        assert!(error.to_string().contains("2x3"));
    }

    // Tests that an empty matrix is rejected rather than treated as 0x0 square
    #[test]
    fn test_square_dimension_rejects_empty() {
        let matrix = Array2::<f64>::zeros((0, 0));
        let error = square_dimension(matrix.view()).unwrap_err();

        assert!(matches!(error, ErgodicError::InvalidInput { .. }));
        assert!(error.to_string().contains("empty"));
    }
}
