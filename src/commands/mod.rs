//! # CLI Command Implementations
//!
//! Each subcommand of `gh-org-invite` lives in its own file and provides:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args`, calls into the
//!   `gh_org_invite` library, and reports the result.

pub mod completions;
pub mod invite;
