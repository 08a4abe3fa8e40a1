//! Logger setup for the command-line binary
//!
//! The library only emits through the `log` facade; installing a logger is
//! left to the binary.

use log::LevelFilter;

/// Default level when `RUST_LOG` is not set
pub const fn default_level(quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install an `env_logger` writing to stderr
///
/// `RUST_LOG` overrides the default level. Calling this more than once is
/// harmless; only the first logger is kept.
pub fn init(quiet: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(default_level(quiet))
        .target(env_logger::Target::Stderr)
        .parse_env("RUST_LOG");
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized");
    }
}
