//! Process exit codes.
//!
//! - `0`: the run completed (unknown usernames do not change this)
//! - `1`: the run failed (bad input, authentication, organization lookup,
//!   network or API error)
//! - `2`: invalid command-line usage (reported by clap)

/// The run completed.
pub const SUCCESS: i32 = 0;

/// The run stopped on an error.
pub const ERROR: i32 = 1;

/// The command line could not be parsed.
pub const USAGE: i32 = 2;
