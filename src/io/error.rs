//! Error types and path context for chain analysis and matrix file handling

use std::fmt;
use std::path::{Path, PathBuf};

/// Placeholder used until a file path is attached to a parse error
const UNKNOWN_PATH: &str = "<unknown>";

/// Main error type for all chain operations
#[derive(Debug)]
pub enum ErgodicError {
    /// Transition matrix failed structural or stochastic validation
    InvalidInput {
        /// Description of what's wrong with the matrix
        reason: String,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A normalization or division met a zero denominator
    ///
    /// Occurs when:
    /// - The dominant eigenvector sums to zero
    /// - A stationary probability is numerically zero
    DegenerateInput {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the degenerate value
        reason: String,
    },

    /// Matrix inversion failed because the matrix is not invertible
    SingularMatrix {
        /// Name of the computation that needed the inverse
        operation: &'static str,
        /// Dimension of the square matrix
        dimension: usize,
    },

    /// Eigen or singular value decomposition failed to converge
    Decomposition {
        /// Name of the decomposition that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Matrix file contents could not be parsed
    Parse {
        /// File being parsed
        path: PathBuf,
        /// One-based line number of the offending line (0 for whole-file problems)
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ErgodicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => {
                write!(f, "Invalid transition matrix: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::DegenerateInput { operation, reason } => {
                write!(f, "Degenerate input in {operation}: {reason}")
            }
            Self::SingularMatrix {
                operation,
                dimension,
            } => {
                write!(
                    f,
                    "Singular {dimension}x{dimension} matrix encountered in {operation}"
                )
            }
            Self::Decomposition { operation, reason } => {
                write!(f, "Decomposition error in {operation}: {reason}")
            }
            Self::Parse { path, line, reason } => {
                write!(
                    f,
                    "Failed to parse '{}' at line {line}: {reason}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ErgodicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for chain results
pub type Result<T> = std::result::Result<T, ErgodicError>;

/// Attaches a file path to errors raised without one
pub trait WithPath<T> {
    /// Replace unknown paths in parse and file system errors with `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<ErgodicError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only file-related errors carry a path
            if let ErgodicError::Parse { path: target, .. }
            | ErgodicError::FileSystem { path: target, .. } = &mut error
            {
                if target.as_os_str() == UNKNOWN_PATH {
                    *target = path.to_path_buf();
                }
            }
            error
        })
    }
}

impl From<std::io::Error> for ErgodicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid input error
pub fn invalid_input(reason: &impl ToString) -> ErgodicError {
    ErgodicError::InvalidInput {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ErgodicError {
    ErgodicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a degenerate input error
pub fn degenerate_input(operation: &'static str, reason: &impl ToString) -> ErgodicError {
    ErgodicError::DegenerateInput {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a decomposition error
pub fn decomposition_error(operation: &'static str, reason: &impl ToString) -> ErgodicError {
    ErgodicError::Decomposition {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a parse error whose path is filled in later by [`WithPath`]
pub fn parse_error(line: usize, reason: &impl ToString) -> ErgodicError {
    ErgodicError::Parse {
        path: PathBuf::from(UNKNOWN_PATH),
        line,
        reason: reason.to_string(),
    }
}
