//! Wire types for the GitHub REST responses and request bodies used here.
//!
//! Only the fields the tool reads are declared; serde ignores the rest.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// `GET /orgs/{org}`
#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    pub login: String,
    pub id: u64,
}

/// An entry of `GET /orgs/{org}/members`.
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub login: String,
}

/// An entry of `GET /orgs/{org}/invitations`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Invitation {
    pub id: u64,
    /// `None` for invitations sent to an e-mail address.
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A resolved GitHub account, as returned by `GET /users/{login}`.
///
/// Two handles are the same user when their account ids match, whatever
/// spelling of the login was used to look them up.
#[derive(Debug, Clone, Deserialize)]
pub struct UserHandle {
    pub id: u64,
    pub login: String,
}

impl PartialEq for UserHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for UserHandle {}

impl Hash for UserHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Body of `POST /orgs/{org}/invitations`.
#[derive(Debug, Clone, Serialize)]
pub struct InvitationRequest {
    pub invitee_id: u64,
}

/// GitHub's error body (`{"message": "...", "documentation_url": "..."}`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}
