//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `gh-org-invite` library. It uses the `thiserror` library to create a
//! single `Error` enum that covers every failure mode of a run, with enough
//! context in each variant to tell the operator what to fix.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the library.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the crate.
//!
//! ## Recoverable vs. fatal
//!
//! Only [`Error::UserNotFound`] is recovered locally: the reconciler logs it
//! and moves on to the next roster entry. Every other variant propagates to
//! the command layer and ends the run with a non-zero exit code.

use thiserror::Error;

/// Main error type for gh-org-invite operations
#[derive(Error, Debug)]
pub enum Error {
    /// The run configuration is invalid (empty token, bad API URL, ...).
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The roster file could not be turned into a list of usernames.
    ///
    /// Includes an optional hint about the expected file shape.
    #[error("Roster error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Roster {
        message: String,
        /// Optional hint for how to fix the roster file
        hint: Option<String>,
    },

    /// The credential was rejected, or lacks the scope for the request.
    #[error("Authentication failed for {url} (HTTP {status}): {message}")]
    Authentication {
        url: String,
        status: u16,
        message: String,
    },

    /// The target organization does not exist or is not visible to the token.
    #[error("Organization not found: {org}")]
    OrganizationNotFound { org: String },

    /// A roster username does not resolve to a GitHub account.
    #[error("User not found: {login}")]
    UserNotFound { login: String },

    /// The GitHub API answered with an unexpected status.
    #[error("GitHub API error for {url} (HTTP {status}): {message}")]
    Api {
        url: String,
        status: u16,
        message: String,
    },

    /// The request never produced a usable response.
    #[error("Network operation error: {url} - {message}")]
    Network { url: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON parsing error, wrapped from `serde_json::Error`.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Whether this error is the recoverable "unknown account" case.
    pub fn is_user_not_found(&self) -> bool {
        matches!(self, Error::UserNotFound { .. })
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
