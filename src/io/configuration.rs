//! Numerical constants and runtime configuration defaults

// Reference formulation approximates the limiting matrix by P^1000
/// Default exponent for the matrix-power limiting method
pub const DEFAULT_POWER_EXPONENT: u32 = 1000;

/// Default tolerance for row sums of a row-stochastic matrix
pub const DEFAULT_ROW_SUM_TOLERANCE: f64 = 1e-8;

// Denominators below this magnitude are treated as zero
/// Threshold for degenerate normalization and division
pub const DEGENERACY_EPSILON: f64 = f64::EPSILON;

/// Convergence threshold passed to the Schur and SVD solvers
pub const DECOMPOSITION_EPSILON: f64 = f64::EPSILON;

// Bounds solver work on pathological input instead of looping forever
/// Maximum solver iterations before reporting non-convergence
pub const DECOMPOSITION_MAX_ITERATIONS: usize = 10_000;

// Matrix file settings
/// File extensions accepted as transition matrix input
pub const INPUT_EXTENSIONS: [&str; 2] = ["txt", "csv"];
/// Suffix added to report filenames
pub const OUTPUT_SUFFIX: &str = "_ergodic";
/// Extension of report files
pub const OUTPUT_EXTENSION: &str = "txt";
/// Comment marker in matrix and report files
pub const COMMENT_MARKER: char = '#';
/// Decimal places written for each reported value
pub const OUTPUT_PRECISION: usize = 12;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
