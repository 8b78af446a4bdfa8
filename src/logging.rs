//! Logging initialization
//!
//! Installs a `tracing` subscriber for binaries and tests that use this crate.
//! The library itself only emits events; nothing is printed unless a
//! subscriber is installed.

use crate::error::{Error, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Filter directive for a verbosity level (number of `-v` flags)
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `verbose` when it is set and valid.
/// Fails if a global subscriber is already installed.
pub fn init_tracing(verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(verbose >= 3) // Show line numbers for -vvv
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    debug!("Logging initialized with verbosity level: {}", verbose);
    Ok(())
}
