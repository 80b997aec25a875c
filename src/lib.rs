//! Summary statistics of finite ergodic Markov chains
//!
//! Given a row-stochastic transition matrix, computes the stationary
//! distribution from the dominant left eigenvector and the first mean passage
//! times from the Kemeny–Snell fundamental matrix, along with recurrence times
//! and passage time variances derived from the same quantities.

#![forbid(unsafe_code)]

/// Matrix file input, reports, command-line processing and error handling
pub mod io;
/// Linear-algebra provider abstraction and matrix powers
pub mod linalg;
/// Stationary distribution and first passage statistics
pub mod markov;

pub use io::error::{ErgodicError, Result};
pub use linalg::{LinearAlgebra, NalgebraBackend};
pub use markov::analyzer::{ChainAnalyzer, fmpt, steady_state};
pub use markov::config::{ChainConfig, LimitingMethod, Validation};
