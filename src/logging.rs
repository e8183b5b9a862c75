//! # Logging Setup
//!
//! Library code logs through the `log` facade only. The binary calls
//! [`init`] once, before any other work, to route those records to stdout
//! through `env_logger`.
//!
//! The `--log-level` flag sets the default filter. `RUST_LOG`, when set,
//! is applied on top of it, so `RUST_LOG=gh_org_invite::github=debug` can
//! show individual requests without raising the level everywhere.

use std::str::FromStr;

use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::error::{Error, Result};

/// Parses a `--log-level` value (`error`, `warn`, `info`, `debug`, `trace`
/// or `off`, case-insensitive).
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level.trim()).map_err(|_| Error::Config {
        message: format!(
            "invalid log level '{}', expected one of: off, error, warn, info, debug, trace",
            level
        ),
    })
}

/// Installs the process-wide logger.
pub fn init(level: &str) -> Result<()> {
    let filter = parse_level(level)?;

    Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .target(Target::Stdout)
        .format_timestamp(None)
        .try_init()
        .map_err(|e| Error::Config {
            message: format!("logger already initialised: {}", e),
        })
}
