//! Logging initialization.
//!
//! Library code only emits `tracing` events; installing a subscriber is
//! left to the binary. [`init_logging`] sets up a formatted subscriber
//! filtered by the `TILECROP_LOG` environment variable, falling back to
//! `info` (or `debug` with `verbose`).

use tracing_subscriber::EnvFilter;

/// Environment variable controlling the log filter.
pub const LOG_ENV_VAR: &str = "TILECROP_LOG";

/// Install the global tracing subscriber.
///
/// Safe to call once per process; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(false);
        init_logging(true);
    }
}
