//! Shared test utilities for integration and E2E tests.
//!
//! [`MockGitHub`] runs a `wiremock` server that answers the handful of GitHub
//! REST endpoints the tool uses. The server lives on its own tokio runtime,
//! so blocking code (the library client, or the binary under `assert_cmd`)
//! can talk to it from a plain `#[test]`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let github = MockGitHub::start()
//!         .with_org("acme")
//!         .with_members("acme", &[&["alice"]])
//!         .with_invitations("acme", &[])
//!         .with_user("carol", 3);
//!     let fixture = RosterFixture::new().with_logins(&["alice", "carol"]);
//!     // ... run against github.uri()
//! }
//! ```

use assert_fs::prelude::*;
use serde_json::{json, Value};
use std::path::PathBuf;
use tokio::runtime::Runtime;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Re-export commonly used test dependencies for convenience.
#[allow(unused_imports)]
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::{MockGitHub, RosterFixture, TOKEN};
}

/// Token every mocked endpoint accepts.
pub const TOKEN: &str = "ghp_test_token";

/// A fake GitHub API.
///
/// Requests that match no mounted mock get wiremock's default 404, which is
/// also how GitHub answers for unknown users.
pub struct MockGitHub {
    // Declared before `runtime` so the server is dropped first.
    server: MockServer,
    runtime: Runtime,
}

#[allow(dead_code)]
impl MockGitHub {
    /// Starts an empty server.
    pub fn start() -> Self {
        let runtime = Runtime::new().expect("Failed to build tokio runtime");
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    /// Base URL to pass as `--api-url`.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Mounts an arbitrary mock.
    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    /// `GET /orgs/{org}` answers with the organization.
    pub fn with_org(self, org: &str) -> Self {
        self.mount(
            Mock::given(method("GET"))
                .and(path(format!("/orgs/{}", org)))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "login": org,
                    "id": 1001,
                    "url": format!("https://api.github.com/orgs/{}", org),
                }))),
        );
        self
    }

    /// `GET /orgs/{org}` answers with `status` and a GitHub error body.
    pub fn with_org_status(self, org: &str, status: u16, message: &str) -> Self {
        self.mount(
            Mock::given(method("GET"))
                .and(path(format!("/orgs/{}", org)))
                .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                    "message": message,
                    "documentation_url": "https://docs.github.com/rest",
                }))),
        );
        self
    }

    /// Serves `pages` as member pages 1..=N, then empty pages.
    pub fn with_members(self, org: &str, pages: &[&[&str]]) -> Self {
        let listing = format!("/orgs/{}/members", org);
        for (index, logins) in pages.iter().enumerate() {
            let body: Vec<Value> = logins
                .iter()
                .map(|login| json!({"login": login, "id": 1, "type": "User"}))
                .collect();
            self.mount(
                Mock::given(method("GET"))
                    .and(path(listing.as_str()))
                    .and(query_param("page", (index + 1).to_string()))
                    .respond_with(ResponseTemplate::new(200).set_body_json(body)),
            );
        }
        self.mount(
            Mock::given(method("GET"))
                .and(path(listing.as_str()))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
                .with_priority(10),
        );
        self
    }

    /// Serves `pages` of raw invitation objects as pages 1..=N, then empty
    /// pages.
    pub fn with_invitations(self, org: &str, pages: &[Vec<Value>]) -> Self {
        let listing = format!("/orgs/{}/invitations", org);
        for (index, invitations) in pages.iter().enumerate() {
            self.mount(
                Mock::given(method("GET"))
                    .and(path(listing.as_str()))
                    .and(query_param("page", (index + 1).to_string()))
                    .respond_with(ResponseTemplate::new(200).set_body_json(invitations)),
            );
        }
        self.mount(
            Mock::given(method("GET"))
                .and(path(listing.as_str()))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
                .with_priority(10),
        );
        self
    }

    /// `GET /users/{login}` resolves to account `id`.
    pub fn with_user(self, login: &str, id: u64) -> Self {
        self.mount(
            Mock::given(method("GET"))
                .and(path(format!("/users/{}", login)))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "login": login,
                    "id": id,
                    "type": "User",
                }))),
        );
        self
    }

    /// `POST /orgs/{org}/invitations` for account `id` must arrive `times` times.
    pub fn expect_invite(self, org: &str, id: u64, times: u64) -> Self {
        self.mount(
            Mock::given(method("POST"))
                .and(path(format!("/orgs/{}/invitations", org)))
                .and(body_json(json!({"invitee_id": id})))
                .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                    "id": 9000 + id,
                    "role": "direct_member",
                })))
                .expect(times),
        );
        self
    }

    /// No invitation may be sent to `org` at all.
    pub fn expect_no_invites(self, org: &str) -> Self {
        self.mount(
            Mock::given(method("POST"))
                .and(path(format!("/orgs/{}/invitations", org)))
                .respond_with(ResponseTemplate::new(201))
                .expect(0),
        );
        self
    }

    /// Every request received so far.
    pub fn received(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    /// Paths (with query) of every request received so far.
    pub fn received_paths(&self) -> Vec<String> {
        self.received()
            .iter()
            .map(|r| match r.url.query() {
                Some(q) => format!("{} {}?{}", r.method, r.url.path(), q),
                None => format!("{} {}", r.method, r.url.path()),
            })
            .collect()
    }

    /// Panics if a mock's `expect` count was not met.
    pub fn verify(&self) {
        self.runtime.block_on(self.server.verify());
    }
}

/// An invitation addressed to an existing account.
#[allow(dead_code)]
pub fn invitation_for(login: &str, id: u64) -> Value {
    json!({"id": id, "login": login, "email": null, "role": "direct_member"})
}

/// An invitation addressed to an e-mail only.
#[allow(dead_code)]
pub fn email_invitation(email: &str, id: u64) -> Value {
    json!({"id": id, "login": null, "email": email, "role": "direct_member"})
}

/// A temporary directory holding a roster file.
pub struct RosterFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl RosterFixture {
    /// Create a new fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `content` verbatim as the roster.
    pub fn with_content(self, content: &str) -> Self {
        self.temp_dir
            .child("roster.json")
            .write_str(content)
            .expect("Failed to write roster");
        self
    }

    /// Write a platform export (records wrapped in a list) with these logins
    /// in the fifth column.
    pub fn with_logins(self, logins: &[&str]) -> Self {
        let records: Vec<Value> = logins
            .iter()
            .enumerate()
            .map(|(i, login)| {
                json!([
                    format!("Student {}", i),
                    "L1",
                    format!("student{}@example.com", i),
                    "1/10/2021 10:00:00",
                    login
                ])
            })
            .collect();
        let content = serde_json::to_string(&json!([records])).expect("Failed to encode roster");
        self.with_content(&content)
    }

    /// Path to the roster file.
    pub fn roster_path(&self) -> PathBuf {
        self.temp_dir.path().join("roster.json")
    }

    /// Path to the temporary directory.
    pub fn path(&self) -> &std::path::Path {
        self.temp_dir.path()
    }
}

impl Default for RosterFixture {
    fn default() -> Self {
        Self::new()
    }
}
