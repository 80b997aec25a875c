//! Tests for the dominant-eigenvector stationary distribution

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use ergodic::markov::steady_state::{dominant_eigenvalue, normalize, stationary_distribution};
    use ergodic::{ErgodicError, LinearAlgebra, NalgebraBackend, Result};
    use nalgebra::Complex;
    use ndarray::{Array1, Array2, ArrayView2, array};

    /// Provider returning canned decompositions
    struct CannedBackend {
        eigenvalues: Vec<Complex<f64>>,
        eigenvector: Array1<f64>,
    }

    impl LinearAlgebra for CannedBackend {
        fn eigenvalues(&self, _matrix: ArrayView2<'_, f64>) -> Result<Vec<Complex<f64>>> {
            Ok(self.eigenvalues.clone())
        }

        fn eigenvector(&self, _matrix: ArrayView2<'_, f64>, _eigenvalue: f64) -> Result<Array1<f64>> {
            Ok(self.eigenvector.clone())
        }

        fn inverse(&self, matrix: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
            Err(ErgodicError::SingularMatrix {
                operation: "canned inverse",
                dimension: matrix.nrows(),
            })
        }
    }

    fn land_of_oz() -> Array2<f64> {
        array![[0.5, 0.25, 0.25], [0.5, 0.0, 0.5], [0.25, 0.25, 0.5]]
    }

    // Tests the dominant eigenvalue is chosen by real part, then imaginary part
    // Verified by comparing magnitudes instead of real parts
    #[test]
    fn test_dominant_eigenvalue_ordering() {
        let values = [
            Complex::new(-1.5, 0.0),
            Complex::new(1.0, 0.0),
            Complex::new(0.5, 0.8),
        ];
        assert_eq!(dominant_eigenvalue(&values), Some(Complex::new(1.0, 0.0)));

        let tied = [Complex::new(0.3, -0.4), Complex::new(0.3, 0.4)];
        assert_eq!(dominant_eigenvalue(&tied), Some(Complex::new(0.3, 0.4)));

        assert_eq!(dominant_eigenvalue(&[]), None);
    }

    // Tests normalization divides by the entry sum regardless of sign
    #[test]
    fn test_normalize_scales_to_unit_sum() {
        let normalized = normalize(array![-2.0, -1.0, -2.0]).unwrap();
        assert_abs_diff_eq!(normalized, array![0.4, 0.2, 0.4], epsilon = 1e-15);
    }

    // Tests normalization of a zero-sum vector is a degenerate input error
    // Verified by removing the zero-sum guard
    #[test]
    fn test_normalize_rejects_zero_sum() {
        match normalize(array![1.0, -1.0, 0.0]) {
            Err(ErgodicError::DegenerateInput { operation, reason }) => {
                assert_eq!(operation, "steady state normalization");
                assert!(reason.contains("sum to 0"));
            }
            other => unreachable!("Expected DegenerateInput, got {other:?}"),
        }

        assert!(normalize(array![f64::NAN, 1.0]).is_err());
    }

    // Tests the Land of Oz steady state from Kemeny and Snell
    #[test]
    fn test_stationary_distribution_land_of_oz() {
        let p = land_of_oz();
        let pi = stationary_distribution(&NalgebraBackend::new(), p.view()).unwrap();

        assert_abs_diff_eq!(pi, array![0.4, 0.2, 0.4], epsilon = 1e-9);
        assert_abs_diff_eq!(pi.sum(), 1.0, epsilon = 1e-12);
    }

    // Tests the distribution is invariant under one step of the chain
    #[test]
    fn test_stationary_distribution_is_invariant() {
        let p = array![
            [0.1, 0.6, 0.2, 0.1],
            [0.3, 0.3, 0.3, 0.1],
            [0.25, 0.25, 0.25, 0.25],
            [0.7, 0.1, 0.1, 0.1]
        ];
        let pi = stationary_distribution(&NalgebraBackend::new(), p.view()).unwrap();

        assert_abs_diff_eq!(pi.dot(&p), pi, epsilon = 1e-9);
        assert!(pi.iter().all(|&value| value > 0.0));
    }

    // Tests that the injected provider's eigenvector is normalized, not recomputed
    #[test]
    fn test_stationary_distribution_uses_injected_provider() {
        let backend = CannedBackend {
            eigenvalues: vec![Complex::new(0.2, 0.0), Complex::new(1.0, 0.0)],
            eigenvector: array![3.0, 1.0],
        };

        let pi = stationary_distribution(&backend, array![[0.9, 0.1], [0.3, 0.7]].view()).unwrap();
        assert_abs_diff_eq!(pi, array![0.75, 0.25], epsilon = 1e-15);
    }

    // Tests that a degenerate eigenvector from the provider propagates as an error
    #[test]
    fn test_stationary_distribution_degenerate_eigenvector() {
        let backend = CannedBackend {
            eigenvalues: vec![Complex::new(1.0, 0.0)],
            eigenvector: array![1.0, -1.0],
        };

        let result = stationary_distribution(&backend, array![[0.5, 0.5], [0.5, 0.5]].view());
        assert!(matches!(result, Err(ErgodicError::DegenerateInput { .. })));
    }

    // Tests the single absorbing state boundary case
    #[test]
    fn test_stationary_distribution_single_state() {
        let pi = stationary_distribution(&NalgebraBackend::new(), array![[1.0]].view()).unwrap();
        assert_eq!(pi, array![1.0]);
    }
}
