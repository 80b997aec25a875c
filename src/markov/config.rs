//! Configuration for chain analysis

use crate::io::configuration::{DEFAULT_POWER_EXPONENT, DEFAULT_ROW_SUM_TOLERANCE};
use crate::io::error::{Result, invalid_parameter};

/// How the limiting matrix `A` (every row the stationary distribution) is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LimitingMethod {
    /// Broadcast the dominant-eigenvector steady state into every row
    #[default]
    Exact,
    /// Approximate `A` by `P^exponent`
    ///
    /// Slow-mixing chains may not have converged at the chosen exponent, and
    /// periodic chains never converge.
    MatrixPower {
        /// Power the transition matrix is raised to
        exponent: u32,
    },
}

impl LimitingMethod {
    /// The fixed-exponent power approximation `P^1000`
    pub const fn reference_power() -> Self {
        Self::MatrixPower {
            exponent: DEFAULT_POWER_EXPONENT,
        }
    }
}

/// Checks applied to a transition matrix before analysis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validation {
    /// Only reject empty, non-square, or non-finite matrices
    ///
    /// Non-stochastic input then yields silently meaningless numbers.
    Structural,
    /// Additionally require non-negative entries and unit row sums
    Strict {
        /// Allowed absolute deviation of each row sum from 1
        tolerance: f64,
    },
}

impl Default for Validation {
    fn default() -> Self {
        Self::Strict {
            tolerance: DEFAULT_ROW_SUM_TOLERANCE,
        }
    }
}

/// Configuration for chain analysis
///
/// # Example
///
/// ```
/// use ergodic::{ChainConfig, LimitingMethod, Validation};
///
/// let config = ChainConfig::new()
///     .with_limiting(LimitingMethod::reference_power())
///     .with_validation(Validation::Structural);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChainConfig {
    limiting: LimitingMethod,
    validation: Validation,
}

impl ChainConfig {
    /// Create a configuration with exact limiting and strict validation
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how the limiting matrix is obtained
    pub const fn with_limiting(mut self, limiting: LimitingMethod) -> Self {
        self.limiting = limiting;
        self
    }

    /// Set the checks applied to input matrices
    pub const fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Limiting matrix method
    pub const fn limiting(&self) -> LimitingMethod {
        self.limiting
    }

    /// Input validation mode
    pub const fn validation(&self) -> Validation {
        self.validation
    }

    /// Validate the configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the power exponent is zero or the row-sum
    /// tolerance is negative or not finite
    pub fn validate(&self) -> Result<()> {
        if let LimitingMethod::MatrixPower { exponent: 0 } = self.limiting {
            return Err(invalid_parameter(
                "exponent",
                &0,
                &"matrix power exponent must be at least 1",
            ));
        }

        if let Validation::Strict { tolerance } = self.validation {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(invalid_parameter(
                    "tolerance",
                    &tolerance,
                    &"row-sum tolerance must be finite and non-negative",
                ));
            }
        }

        Ok(())
    }
}
