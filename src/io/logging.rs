//! Tracing subscriber setup driven by command-line verbosity

use tracing_subscriber::EnvFilter;

/// Crate target that receives log output
const CRATE_TARGET: &str = "ergodic";

/// Log level for a verbosity count
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
pub const fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directive used when `RUST_LOG` is unset
pub fn default_filter(verbosity: u8) -> String {
    format!("{CRATE_TARGET}={}", level_for_verbosity(verbosity))
}

/// Initialize tracing to standard error
///
/// `RUST_LOG` overrides the verbosity flag if set. Returns `false` if a
/// global subscriber was already installed.
pub fn init(verbosity: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
