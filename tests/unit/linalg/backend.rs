//! Tests for the nalgebra-backed eigen solver and inverse

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use ergodic::{ErgodicError, LinearAlgebra, NalgebraBackend};
    use ndarray::{Array1, Array2, array};

    fn land_of_oz() -> Array2<f64> {
        array![[0.5, 0.25, 0.25], [0.5, 0.0, 0.5], [0.25, 0.25, 0.5]]
    }

    fn sorted_real_parts(values: &[nalgebra::Complex<f64>]) -> Vec<f64> {
        let mut parts: Vec<f64> = values.iter().map(|value| value.re).collect();
        parts.sort_by(f64::total_cmp);
        parts
    }

    // Tests eigenvalues of the Land of Oz chain, which are 1 and ±1/4
    // Verified by returning diagonal entries instead of Schur eigenvalues
    #[test]
    fn test_eigenvalues_of_transition_matrix() {
        let backend = NalgebraBackend::new();
        let values = backend.eigenvalues(land_of_oz().t()).unwrap();

        assert_eq!(values.len(), 3);
        let parts = sorted_real_parts(&values);
        assert_abs_diff_eq!(parts.as_slice(), [-0.25, 0.25, 1.0].as_slice(), epsilon = 1e-12);
        assert!(values.iter().all(|value| value.im.abs() < 1e-12));
    }

    // Tests that complex conjugate pairs are reported with their imaginary parts
    #[test]
    fn test_eigenvalues_of_rotation_are_complex() {
        let backend = NalgebraBackend::new();
        let rotation = array![[0.0, -1.0], [1.0, 0.0]];
        let values = backend.eigenvalues(rotation.view()).unwrap();

        let mut imaginary: Vec<f64> = values.iter().map(|value| value.im).collect();
        imaginary.sort_by(f64::total_cmp);
        assert_abs_diff_eq!(imaginary.as_slice(), [-1.0, 1.0].as_slice(), epsilon = 1e-12);
        assert!(values.iter().all(|value| value.re.abs() < 1e-12));
    }

    // Tests the single-state shortcut returns the entry itself
    #[test]
    fn test_eigenvalues_of_single_state() {
        let backend = NalgebraBackend::new();
        let values = backend.eigenvalues(array![[1.0]].view()).unwrap();

        assert_eq!(values.len(), 1);
        assert_abs_diff_eq!(values.first().map_or(0.0, |v| v.re), 1.0);
    }

    // Tests the eigenvector for eigenvalue 1 of Pᵗ is proportional to the steady state
    // Verified by choosing the largest instead of the smallest singular value
    #[test]
    fn test_eigenvector_spans_stationary_direction() {
        let backend = NalgebraBackend::new();
        let p = land_of_oz();
        let vector = backend.eigenvector(p.t(), 1.0).unwrap();

        let scaled = &vector / vector.sum();
        assert_abs_diff_eq!(scaled, array![0.4, 0.2, 0.4], epsilon = 1e-12);

        // Unit length from the SVD, sign unspecified
        assert_abs_diff_eq!(vector.dot(&vector), 1.0, epsilon = 1e-12);
    }

    // Tests the eigenvector satisfies A v = λ v for a non-unit eigenvalue
    #[test]
    fn test_eigenvector_satisfies_eigen_equation() {
        let backend = NalgebraBackend::new();
        let p = land_of_oz();
        let vector = backend.eigenvector(p.view(), 0.25).unwrap();

        let image = p.dot(&vector);
        assert_abs_diff_eq!(image, &vector * 0.25, epsilon = 1e-12);
    }

    // Tests the single-state eigenvector shortcut
    #[test]
    fn test_eigenvector_of_single_state() {
        let backend = NalgebraBackend::new();
        let vector = backend.eigenvector(array![[1.0]].view(), 1.0).unwrap();
        assert_eq!(vector, Array1::ones(1));
    }

    // Tests inversion of a well-conditioned matrix, including non-contiguous views
    // Verified by converting with row-major order on the way back
    #[test]
    fn test_inverse_of_invertible_matrix() {
        let backend = NalgebraBackend::new();
        let matrix = array![[2.0, 1.0], [1.0, 1.0]];

        let inverse = backend.inverse(matrix.view()).unwrap();
        assert_abs_diff_eq!(inverse, array![[1.0, -1.0], [-1.0, 2.0]], epsilon = 1e-12);

        let asymmetric = array![[4.0, 7.0], [2.0, 6.0]];
        let inverse_transposed = backend.inverse(asymmetric.t()).unwrap();
        assert_abs_diff_eq!(
            inverse_transposed,
            array![[0.6, -0.2], [-0.7, 0.4]],
            epsilon = 1e-12
        );
    }

    // Tests that singular matrices surface as SingularMatrix rather than garbage
    #[test]
    fn test_inverse_of_singular_matrix_fails() {
        let backend = NalgebraBackend::new();
        let singular = array![[1.0, 2.0], [2.0, 4.0]];

        match backend.inverse(singular.view()) {
            Err(ErgodicError::SingularMatrix { dimension, .. }) => assert_eq!(dimension, 2),
            other => unreachable!("Expected SingularMatrix, got {other:?}"),
        }
    }

    // Tests that non-square input is rejected by every operation
    #[test]
    fn test_operations_reject_non_square() {
        let backend = NalgebraBackend::new();
        let matrix = array![[0.5, 0.5, 0.0], [0.0, 0.5, 0.5]];

        assert!(matches!(
            backend.eigenvalues(matrix.view()),
            Err(ErgodicError::InvalidInput { .. })
        ));
        assert!(matches!(
            backend.eigenvector(matrix.view(), 1.0),
            Err(ErgodicError::InvalidInput { .. })
        ));
        assert!(matches!(
            backend.inverse(matrix.view()),
            Err(ErgodicError::InvalidInput { .. })
        ));
    }
}
