//! # Invite Command Implementation
//!
//! The invite command runs one reconcile pass:
//! 1. Read the roster file into a list of GitHub logins
//! 2. Validate the configuration and connect to the organization
//! 3. Invite every login that is neither a member nor already invited
//! 4. Print a summary
//!
//! With `--dry-run` every read still happens and every intended invitation is
//! logged, but no invitation is sent.

use anyhow::{Context, Result};
use clap::Args;
use log::info;
use std::path::PathBuf;

use gh_org_invite::config::{OrgConfig, DEFAULT_API_URL, DEFAULT_ORG_NAME, MAX_PER_PAGE};
use gh_org_invite::github::GitHubClient;
use gh_org_invite::output::{summary_lines, OutputConfig};
use gh_org_invite::reconcile::Reconciler;
use gh_org_invite::roster::{self, DEFAULT_LOGIN_FIELD};

/// Arguments for the invite command
#[derive(Args, Debug)]
pub struct InviteArgs {
    /// JSON roster file: the course platform export, a list of records, or a list of logins
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// A GitHub token from an organization admin
    #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// The organization the users are invited to
    #[arg(long, value_name = "ORG", env = "GH_ORG_INVITE_ORG", default_value = DEFAULT_ORG_NAME)]
    pub org_name: String,

    /// Base URL of the GitHub REST API
    #[arg(long, value_name = "URL", env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Show the users to invite, but don't send any invitation
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Column of each roster record holding the GitHub login (0-based)
    #[arg(long, value_name = "INDEX", default_value_t = DEFAULT_LOGIN_FIELD)]
    pub login_field: usize,

    /// Page size used when listing members and invitations
    #[arg(
        long,
        value_name = "N",
        default_value_t = MAX_PER_PAGE,
        value_parser = clap::value_parser!(u32).range(1..=100)
    )]
    pub per_page: u32,
}

/// Execute the invite command
pub fn execute(args: InviteArgs, color_flag: &str) -> Result<()> {
    let logins = roster::from_file(&args.input_file, args.login_field)
        .with_context(|| format!("Failed to read roster {}", args.input_file.display()))?;
    info!("Roster: {}", logins.join(", "));

    if args.dry_run {
        info!("Running with --dry-run, no invitation will be sent");
    }

    let config = OrgConfig::new(&args.org_name, &args.token, &args.api_url)?
        .with_per_page(args.per_page)?;
    let client = GitHubClient::connect(config)?;
    let org = client.organization().login.clone();

    let report = Reconciler::new(Box::new(client)).reconcile(&logins, args.dry_run)?;

    let out = OutputConfig::from_env_and_flag(color_flag);
    for line in summary_lines(&report, &org, &out) {
        println!("{}", line);
    }

    info!("Bye");
    Ok(())
}
