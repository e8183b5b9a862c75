//! # GitHub Organization Invite CLI
//!
//! This is the binary entry point for the `gh-org-invite` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Turning a failed run into an error message and a non-zero exit code.
//!
//! The reconciliation logic lives in the library crate; the binary only reads
//! the roster, builds the configuration and reports the outcome.

mod cli;
mod commands;

use clap::Parser;
use gh_org_invite::exit_codes;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(e) = cli.execute() {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_codes::ERROR);
    }
}
