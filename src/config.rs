//! # Run Configuration
//!
//! This module defines [`OrgConfig`], the validated set of inputs a reconcile
//! run needs: which organization to act on, the credential to act with, where
//! the GitHub REST API lives, and how large a listing page to request.
//!
//! The command layer fills these values from CLI flags and their environment
//! fallbacks; everything that reaches the library has already passed
//! [`OrgConfig::new`], so the client never has to re-check them.

use std::fmt;

use url::Url;

use crate::error::{Error, Result};

/// The public GitHub REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// The organization invited into when `--org-name` is not given.
pub const DEFAULT_ORG_NAME: &str = "SSDD-2021-2022";

/// GitHub caps listing pages at 100 entries.
pub const MAX_PER_PAGE: u32 = 100;

/// Validated configuration for one run against one organization.
#[derive(Clone)]
pub struct OrgConfig {
    /// Organization login (e.g. `"SSDD-2021-2022"`).
    pub org_name: String,
    /// Token of an organization admin.
    pub token: String,
    /// Base URL of the GitHub REST API, always with a trailing slash.
    pub api_url: Url,
    /// Page size requested from listing endpoints.
    pub per_page: u32,
}

impl OrgConfig {
    /// Builds a configuration, rejecting values that cannot lead to a
    /// meaningful run.
    pub fn new(org_name: &str, token: &str, api_url: &str) -> Result<Self> {
        let org_name = org_name.trim();
        if org_name.is_empty() {
            return Err(Error::Config {
                message: "organization name must not be empty".to_string(),
            });
        }

        let token = token.trim();
        if token.is_empty() {
            return Err(Error::Config {
                message: "token must not be empty".to_string(),
            });
        }

        Ok(Self {
            org_name: org_name.to_string(),
            token: token.to_string(),
            api_url: parse_api_url(api_url)?,
            per_page: MAX_PER_PAGE,
        })
    }

    /// Overrides the listing page size.
    pub fn with_per_page(mut self, per_page: u32) -> Result<Self> {
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(Error::Config {
                message: format!(
                    "per-page must be between 1 and {}, got {}",
                    MAX_PER_PAGE, per_page
                ),
            });
        }
        self.per_page = per_page;
        Ok(self)
    }

    /// Builds an API URL from path segments (`["orgs", "acme", "members"]`).
    ///
    /// Each segment is percent-encoded, so a roster entry such as `"../x"`
    /// stays a single segment. A segment that is exactly `.` or `..` is still
    /// resolved away by URL normalisation; callers must not pass one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config {
                message: format!("API URL '{}' cannot be a base", self.api_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl fmt::Debug for OrgConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrgConfig")
            .field("org_name", &self.org_name)
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url.as_str())
            .field("per_page", &self.per_page)
            .finish()
    }
}

/// Parses the API base URL, normalising it to end in `/` (GitHub Enterprise
/// serves the API under `/api/v3`).
fn parse_api_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config {
            message: format!("API URL must use http or https, got '{}'", url.scheme()),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
