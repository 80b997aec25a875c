/// Validated entry points and the default analyzer
pub mod analyzer;
/// Limiting method and validation configuration
pub mod config;
/// First passage statistics from the fundamental matrix
pub mod passage;
/// Stationary distribution from the dominant eigenvector
pub mod steady_state;
/// Structural and stochastic checks on transition matrices
pub mod validation;
