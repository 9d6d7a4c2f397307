//! Logger bootstrap.
//!
//! Diagnostics go to stderr through `env_logger` so they never mix with command
//! output on stdout. `TODOZ_LOG` takes an `env_logger` filter string and wins over
//! the level picked from the command line.

use env_logger::{Builder, Env};
use log::LevelFilter;

pub const LOG_ENV: &str = "TODOZ_LOG";

pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Installs the global logger. Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool) {
    let level = default_level(verbose).to_string().to_lowercase();
    let _ = Builder::from_env(Env::default().filter_or(LOG_ENV, level))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
