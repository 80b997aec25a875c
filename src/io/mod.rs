/// Command-line parsing and batch file processing
pub mod cli;
/// Numerical constants and file conventions
pub mod configuration;
/// Error types and path context
pub mod error;
/// Tracing subscriber initialization
pub mod logging;
/// Plain-text matrix parsing
pub mod matrix_file;
/// Batch progress display
pub mod progress;
/// Report assembly and export
pub mod report;
