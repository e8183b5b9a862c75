//! Blocking GitHub REST client bound to one organization.
//!
//! Every call is a single synchronous request: no retries, no rate-limit
//! handling, and no timeout beyond reqwest's defaults. HTTP statuses are
//! mapped onto [`Error`] as follows:
//!
//! | Status | Error |
//! |--------|-------|
//! | 2xx | success |
//! | 401, 403 | [`Error::Authentication`] |
//! | 404 on `/orgs/{org}` | [`Error::OrganizationNotFound`] |
//! | 404 on `/users/{login}` | [`Error::UserNotFound`] |
//! | anything else | [`Error::Api`] |
//!
//! Transport failures and undecodable bodies become [`Error::Network`].

use log::{debug, info};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use super::types::{ApiErrorBody, Invitation, InvitationRequest, Member, Organization, UserHandle};
use super::OrgApi;
use crate::config::OrgConfig;
use crate::error::{Error, Result};

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";
const API_VERSION_HEADER: &str = "x-github-api-version";

/// The GitHub organization client used by the `invite` command.
pub struct GitHubClient {
    http: Client,
    config: OrgConfig,
    org: Organization,
}

impl GitHubClient {
    /// Authenticates with the configured token and looks the organization up.
    ///
    /// Fails fast when the token is rejected or the organization does not
    /// exist, before any listing is read.
    pub fn connect(config: OrgConfig) -> Result<Self> {
        let http = build_http_client(&config)?;

        let url = config.endpoint(&["orgs", &config.org_name])?;
        debug!("GET {}", url);
        let response = send(http.get(url.clone()), &url)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::OrganizationNotFound {
                org: config.org_name.clone(),
            });
        }
        let org: Organization = decode(check_status(response, &url)?, &url)?;

        info!("Connected to organization {} (id {})", org.login, org.id);
        Ok(Self { http, config, org })
    }

    /// The organization this client acts on.
    pub fn organization(&self) -> &Organization {
        &self.org
    }

    fn listing_url(&self, resource: &str, page: u32) -> Result<Url> {
        let mut url = self
            .config
            .endpoint(&["orgs", &self.config.org_name, resource])?;
        url.query_pairs_mut()
            .append_pair("per_page", &self.config.per_page.to_string())
            .append_pair("page", &page.to_string());
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        debug!("GET {}", url);
        let response = send(self.http.get(url.clone()), url)?;
        decode(check_status(response, url)?, url)
    }
}

impl OrgApi for GitHubClient {
    fn members_page(&self, page: u32) -> Result<Vec<String>> {
        let url = self.listing_url("members", page)?;
        let members: Vec<Member> = self.get_json(&url)?;
        Ok(members.into_iter().map(|m| m.login).collect())
    }

    fn invitations_page(&self, page: u32) -> Result<Vec<Invitation>> {
        let url = self.listing_url("invitations", page)?;
        self.get_json(&url)
    }

    fn get_user(&self, login: &str) -> Result<UserHandle> {
        if !is_plausible_login(login) {
            debug!("Not looking up '{}': no account can have this login", login);
            return Err(Error::UserNotFound {
                login: login.to_string(),
            });
        }
        let url = self.config.endpoint(&["users", login])?;
        debug!("GET {}", url);
        let response = send(self.http.get(url.clone()), &url)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound {
                login: login.to_string(),
            });
        }
        decode(check_status(response, &url)?, &url)
    }

    fn invite(&self, user: &UserHandle) -> Result<()> {
        let url = self
            .config
            .endpoint(&["orgs", &self.config.org_name, "invitations"])?;
        debug!("POST {} (invitee_id {})", url, user.id);
        let request = self
            .http
            .post(url.clone())
            .json(&InvitationRequest { invitee_id: user.id });
        check_status(send(request, &url)?, &url)?;
        Ok(())
    }
}

/// GitHub logins are ASCII letters, digits and hyphens. Anything without a
/// single letter or digit (`.`, `..`, `---`) cannot name an account, and the
/// dot forms would collapse `/users/{login}` into `/users`.
fn is_plausible_login(login: &str) -> bool {
    login.chars().any(|c| c.is_ascii_alphanumeric())
}

fn build_http_client(config: &OrgConfig) -> Result<Client> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token)).map_err(|_| {
        Error::Config {
            message: "token contains characters that are not allowed in an HTTP header"
                .to_string(),
        }
    })?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
    headers.insert(
        HeaderName::from_static(API_VERSION_HEADER),
        HeaderValue::from_static(GITHUB_API_VERSION),
    );
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("gh-org-invite/", env!("CARGO_PKG_VERSION"))),
    );
    headers.insert(AUTHORIZATION, auth);

    Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| Error::Network {
            url: config.api_url.to_string(),
            message: e.to_string(),
        })
}

fn send(request: RequestBuilder, url: &Url) -> Result<Response> {
    request.send().map_err(|e| Error::Network {
        url: url.to_string(),
        message: e.to_string(),
    })
}

fn decode<T: DeserializeOwned>(response: Response, url: &Url) -> Result<T> {
    response.json().map_err(|e| Error::Network {
        url: url.to_string(),
        message: format!("invalid response body: {}", e),
    })
}

/// Passes successful responses through and turns the rest into errors.
fn check_status(response: Response, url: &Url) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = error_message(response);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::Authentication {
            url: url.to_string(),
            status: status.as_u16(),
            message,
        }),
        _ => Err(Error::Api {
            url: url.to_string(),
            status: status.as_u16(),
            message,
        }),
    }
}

/// GitHub's `message` field when present, else the raw body, else the
/// status reason.
fn error_message(response: Response) -> String {
    let status = response.status();
    let body = response.text().unwrap_or_default();

    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) if !parsed.message.is_empty() => parsed.message,
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => status.canonical_reason().unwrap_or("unknown error").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plausible_login() {
        assert!(is_plausible_login("carol"));
        assert!(is_plausible_login("a-b"));
        assert!(is_plausible_login("x.y"));
        assert!(!is_plausible_login("."));
        assert!(!is_plausible_login(".."));
        assert!(!is_plausible_login("---"));
        assert!(!is_plausible_login(""));
    }
}
