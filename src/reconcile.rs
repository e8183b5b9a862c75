//! # Organization Membership Reconciliation
//!
//! The [`Reconciler`] brings an organization in line with a roster: every
//! roster login that is neither a member nor already invited gets an
//! invitation. A run goes through four steps:
//!
//! 1.  **Members**: drain the organization's member listing.
//! 2.  **Pending**: drain the organization's pending-invitation listing.
//! 3.  **Filter & resolve**: keep the roster logins absent from both sets and
//!     look each one up; unknown accounts are logged and skipped.
//! 4.  **Invite**: invite every resolved account, or only log the intent in
//!     dry-run mode.
//!
//! Membership checks use exact string comparison. Both sets are fetched
//! fresh on every run, so running twice in a row invites nobody the second
//! time: the first run's invitees are pending by then.

use std::collections::{BTreeSet, HashSet};

use log::{debug, error, info};

use crate::error::Result;
use crate::github::{OrgApi, UserHandle};
use crate::pagination::{collect_logins, Pages};

/// How the roster splits against the organization's current state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterPartition {
    /// Logins to look up and invite, in roster order, without repeats.
    pub to_invite: Vec<String>,
    /// Roster logins that already belong to the organization.
    pub already_members: Vec<String>,
    /// Roster logins with an outstanding invitation.
    pub already_invited: Vec<String>,
}

/// Splits `roster` into logins to invite and logins to leave alone.
///
/// A login that is both a member and pending counts as a member. Repeated
/// roster entries are reported once.
pub fn partition_roster(
    roster: &[String],
    members: &BTreeSet<String>,
    pending: &BTreeSet<String>,
) -> RosterPartition {
    let mut seen = HashSet::new();
    let mut partition = RosterPartition::default();

    for login in roster {
        if !seen.insert(login.as_str()) {
            continue;
        }
        if members.contains(login) {
            partition.already_members.push(login.clone());
        } else if pending.contains(login) {
            partition.already_invited.push(login.clone());
        } else {
            partition.to_invite.push(login.clone());
        }
    }

    partition
}

/// Outcome of looking up a batch of logins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Distinct accounts, in lookup order.
    pub handles: Vec<UserHandle>,
    /// Logins that do not match any account.
    pub unresolved: Vec<String>,
}

/// Summary of a reconcile run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Number of roster entries received, repeats included.
    pub roster_size: usize,
    pub already_members: Vec<String>,
    pub already_invited: Vec<String>,
    pub unresolved: Vec<String>,
    /// Accounts invited, or that would have been in dry-run mode.
    pub invited: Vec<UserHandle>,
    pub dry_run: bool,
}

/// Reconciles one organization's membership against rosters.
pub struct Reconciler {
    api: Box<dyn OrgApi>,
}

impl Reconciler {
    /// Creates a reconciler acting through `api`.
    pub fn new(api: Box<dyn OrgApi>) -> Self {
        Self { api }
    }

    /// Invites every roster login that is neither a member nor pending.
    ///
    /// Unknown logins are logged and skipped. Any other failure (listing,
    /// authentication, transport, a rejected invitation) stops the run and
    /// is returned.
    pub fn reconcile(&self, roster: &[String], dry_run: bool) -> Result<ReconcileReport> {
        let members = self.fetch_current_members()?;
        let pending = self.fetch_pending_invitations()?;

        let partition = partition_roster(roster, &members, &pending);
        if !partition.already_members.is_empty() {
            debug!("Already members: {}", partition.already_members.join(", "));
        }
        if !partition.already_invited.is_empty() {
            debug!("Already invited: {}", partition.already_invited.join(", "));
        }

        if partition.to_invite.is_empty() {
            info!("Nothing to do: every roster user is already a member or invited");
        } else {
            info!("Users to invite: {}", partition.to_invite.join(", "));
        }

        let resolution = self.resolve_users(&partition.to_invite)?;
        self.invite(&resolution.handles, dry_run)?;

        Ok(ReconcileReport {
            roster_size: roster.len(),
            already_members: partition.already_members,
            already_invited: partition.already_invited,
            unresolved: resolution.unresolved,
            invited: resolution.handles,
            dry_run,
        })
    }

    /// Logins of every current member, across all pages.
    pub fn fetch_current_members(&self) -> Result<BTreeSet<String>> {
        let members = collect_logins(Pages::new(|page| self.api.members_page(page)))?;
        info!("Organization has {} members", members.len());
        Ok(members)
    }

    /// Logins with an outstanding invitation, across all pages.
    ///
    /// E-mail invitations have no login and are not part of the set.
    pub fn fetch_pending_invitations(&self) -> Result<BTreeSet<String>> {
        let pages = Pages::new(|page| self.api.invitations_page(page)).map(|page| {
            page.map(|invitations| {
                invitations
                    .into_iter()
                    .filter_map(|invitation| invitation.login)
                    .collect::<Vec<_>>()
            })
        });
        let pending = collect_logins(pages)?;
        info!("Organization has {} pending invitations", pending.len());
        Ok(pending)
    }

    /// Looks up each login, skipping the ones with no account.
    ///
    /// Handles are deduplicated by account id.
    pub fn resolve_users(&self, logins: &[String]) -> Result<Resolution> {
        let mut resolution = Resolution::default();
        let mut seen = HashSet::new();

        for login in logins {
            match self.api.get_user(login) {
                Ok(handle) => {
                    if seen.insert(handle.clone()) {
                        resolution.handles.push(handle);
                    } else {
                        debug!("{} resolves to an account already selected", login);
                    }
                }
                Err(e) if e.is_user_not_found() => {
                    error!("Username {} cannot be retrieved", login);
                    resolution.unresolved.push(login.clone());
                }
                Err(e) => return Err(e),
            }
        }

        Ok(resolution)
    }

    /// Invites each account; in dry-run mode only logs the intent.
    pub fn invite(&self, handles: &[UserHandle], dry_run: bool) -> Result<()> {
        for handle in handles {
            info!("Inviting user: {}", handle.login);
            if !dry_run {
                self.api.invite(handle)?;
            }
        }
        Ok(())
    }
}
