//! # GitHub Organization Access
//!
//! This module defines the narrow slice of the GitHub REST API the reconciler
//! needs, behind a trait so the reconciliation logic can be exercised without
//! a network.
//!
//! ## Design
//!
//! - **`OrgApi`**: the interface to one organization: list a page of members,
//!   list a page of pending invitations, look up a user by login, and invite a
//!   resolved user.
//!
//! - **`GitHubClient`**: the default implementation, a blocking `reqwest`
//!   client bound to the organization named in an
//!   [`OrgConfig`](crate::config::OrgConfig).
//!
//! In tests the trait is replaced with in-memory fakes that record the calls
//! they receive.

pub mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::{Invitation, UserHandle};

use crate::error::Result;

/// Operations against a single GitHub organization.
pub trait OrgApi {
    /// Logins on one page (1-based) of the organization's member listing.
    fn members_page(&self, page: u32) -> Result<Vec<String>>;

    /// One page (1-based) of the organization's pending invitations.
    ///
    /// Returned unfiltered: a page holding only e-mail invitations (no login)
    /// is still a non-empty page.
    fn invitations_page(&self, page: u32) -> Result<Vec<Invitation>>;

    /// Resolves a login to an account handle.
    ///
    /// Fails with [`Error::UserNotFound`](crate::error::Error::UserNotFound)
    /// when no such account exists.
    fn get_user(&self, login: &str) -> Result<UserHandle>;

    /// Sends an organization invitation to `user`.
    fn invite(&self, user: &UserHandle) -> Result<()>;
}
