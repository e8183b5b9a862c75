//! # GitHub Organization Invite Library
//!
//! This library invites the users listed in a roster to a GitHub
//! organization, skipping anyone who is already a member or already has a
//! pending invitation. It backs the `gh-org-invite` command-line tool.
//!
//! ## Quick Example
//!
//! ```no_run
//! use gh_org_invite::config::{OrgConfig, DEFAULT_API_URL};
//! use gh_org_invite::github::GitHubClient;
//! use gh_org_invite::reconcile::Reconciler;
//! use gh_org_invite::roster;
//!
//! # fn main() -> gh_org_invite::error::Result<()> {
//! let logins = roster::from_file("students.json", roster::DEFAULT_LOGIN_FIELD)?;
//!
//! let config = OrgConfig::new("my-course", "ghp_token", DEFAULT_API_URL)?;
//! let client = GitHubClient::connect(config)?;
//!
//! let report = Reconciler::new(Box::new(client)).reconcile(&logins, true)?;
//! println!("would invite {} users", report.invited.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! - **Roster (`roster`)**: the list of GitHub logins that should belong to
//!   the organization, read from the course platform's JSON export.
//! - **Configuration (`config`)**: organization, admin token, API location
//!   and dry-run flag for one run.
//! - **GitHub access (`github`)**: the `OrgApi` trait and its blocking REST
//!   implementation, `GitHubClient`.
//! - **Pagination (`pagination`)**: draining a paginated listing page by page
//!   until an empty page.
//! - **Reconciliation (`reconcile`)**: computing who is missing and inviting
//!   them.
//!
//! ## Execution Flow
//!
//! 1.  Read the current members (all pages).
//! 2.  Read the pending invitations (all pages).
//! 3.  Keep the roster logins found in neither set.
//! 4.  Look each one up; unknown accounts are logged and skipped.
//! 5.  Invite the resolved accounts, or only log them in dry-run mode.

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod github;
pub mod logging;
pub mod output;
pub mod pagination;
pub mod reconcile;
pub mod roster;
