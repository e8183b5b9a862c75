//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Invite users from a roster file to a GitHub organization
#[derive(Parser, Debug)]
#[command(name = "gh-org-invite")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Invite the roster users that are not yet members or invited
    Invite(commands::invite::InviteArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        gh_org_invite::logging::init(&self.log_level)?;

        match self.command {
            Commands::Invite(args) => commands::invite::execute(args, &self.color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
