//! Structured logging setup

use crate::io::configuration::{DEFAULT_LOG_FILTER, QUIET_LOG_FILTER};
use tracing_subscriber::{EnvFilter, fmt};

/// Log filter directive for the given `--quiet` / `--verbose` combination
pub const fn filter_directive(quiet: bool, verbose: u8) -> &'static str {
    match (quiet, verbose) {
        (true, _) => QUIET_LOG_FILTER,
        (false, 0) => DEFAULT_LOG_FILTER,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Install the global subscriber writing to stderr
///
/// `RUST_LOG` takes precedence over `directive`. Returns false if a
/// subscriber was already installed, which leaves the existing one in place.
pub fn init_logging(directive: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
