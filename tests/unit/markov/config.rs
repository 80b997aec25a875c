//! Tests for limiting method and validation configuration

#[cfg(test)]
mod tests {
    use ergodic::io::configuration::{DEFAULT_POWER_EXPONENT, DEFAULT_ROW_SUM_TOLERANCE};
    use ergodic::{ChainConfig, ErgodicError, LimitingMethod, Validation};

    // Tests default configuration uses exact limiting and strict validation
    // Verified by swapping the default limiting variant
    #[test]
    fn test_default_configuration() {
        let config = ChainConfig::new();

        assert_eq!(config.limiting(), LimitingMethod::Exact);
        assert_eq!(
            config.validation(),
            Validation::Strict {
                tolerance: DEFAULT_ROW_SUM_TOLERANCE
            }
        );
        assert!(config.validate().is_ok());
    }

    // Tests the reference power approximation uses the fixed exponent
    #[test]
    fn test_reference_power_exponent() {
        assert_eq!(
            LimitingMethod::reference_power(),
            LimitingMethod::MatrixPower {
                exponent: DEFAULT_POWER_EXPONENT
            }
        );
        assert_eq!(DEFAULT_POWER_EXPONENT, 1000);
    }

    // Tests builder methods replace only their own field
    #[test]
    fn test_builder_methods() {
        let config = ChainConfig::new()
            .with_limiting(LimitingMethod::MatrixPower { exponent: 64 })
            .with_validation(Validation::Structural);

        assert_eq!(
            config.limiting(),
            LimitingMethod::MatrixPower { exponent: 64 }
        );
        assert_eq!(config.validation(), Validation::Structural);
        assert!(config.validate().is_ok());
    }

    // Tests that a zero exponent is rejected since P^0 is the identity
    #[test]
    fn test_validate_rejects_zero_exponent() {
        let config =
            ChainConfig::new().with_limiting(LimitingMethod::MatrixPower { exponent: 0 });

        match config.validate() {
            Err(ErgodicError::InvalidParameter { parameter, .. }) => {
                assert_eq!(parameter, "exponent");
            }
            other => unreachable!("Expected InvalidParameter, got {other:?}"),
        }
    }

    // Tests that negative and non-finite tolerances are rejected
    // Verified by only checking for negative tolerances
    #[test]
    fn test_validate_rejects_bad_tolerance() {
        for tolerance in [-1e-6, f64::NAN, f64::INFINITY] {
            let config = ChainConfig::new().with_validation(Validation::Strict { tolerance });
            assert!(
                matches!(
                    config.validate(),
                    Err(ErgodicError::InvalidParameter {
                        parameter: "tolerance",
                        ..
                    })
                ),
                "tolerance {tolerance} should be rejected"
            );
        }

        let exact = ChainConfig::new().with_validation(Validation::Strict { tolerance: 0.0 });
        assert!(exact.validate().is_ok());
    }
}
