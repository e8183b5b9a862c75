//! # Roster Loading
//!
//! The roster is the JSON file exported from the course platform's survey,
//! listing who should be in the organization. This module turns it into the
//! plain list of GitHub logins the reconciler works on.
//!
//! ## Accepted shapes
//!
//! 1.  **Platform export**: the records wrapped in one extra list, each record
//!     being a list of strings such as
//!     `["Real name", "Lab group", "e-mail", "timestamp", "gh-login"]`:
//!
//!     ```json
//!     [[["Ada Lovelace", "L1", "ada@example.com", "1/10/2021 10:00", "ada"]]]
//!     ```
//!
//! 2.  **Bare records**: the same records without the outer wrapper.
//!
//! 3.  **Bare logins**: `["ada", "grace"]`.
//!
//! For record shapes the login is taken from column `login_field`
//! ([`DEFAULT_LOGIN_FIELD`], the fifth column, by default). When the export
//! holds several wrapped groups they are read in order.
//!
//! Logins are trimmed of surrounding whitespace. Blank logins are skipped with
//! a warning. Duplicates and ordering are left untouched; the reconciler
//! handles both.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde_json::Value;

use crate::error::{Error, Result};

/// Column holding the GitHub login in platform export records.
pub const DEFAULT_LOGIN_FIELD: usize = 4;

const SHAPE_HINT: &str = "Expected a JSON list of logins, a list of records, or the platform export (a list wrapping a list of records)";

/// Reads and parses a roster file.
pub fn from_file<P: AsRef<Path>>(path: P, login_field: usize) -> Result<Vec<String>> {
    let path = path.as_ref();
    debug!("Reading roster from {}", path.display());
    let content = fs::read_to_string(path)?;
    parse(&content, login_field)
}

/// Parses roster JSON into a list of logins.
pub fn parse(json: &str, login_field: usize) -> Result<Vec<String>> {
    let value: Value = serde_json::from_str(json)?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(Error::Roster {
                message: format!("top-level value is {}, not a list", kind(&other)),
                hint: Some(SHAPE_HINT.to_string()),
            })
        }
    };

    let records = match shape_of(&items)? {
        Shape::Empty => return Ok(Vec::new()),
        Shape::Logins => return logins_from_strings(&items),
        Shape::Groups => flatten_groups(items)?,
        Shape::Records => items,
    };

    let mut logins = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if let Some(login) = login_from_record(index, record, login_field)? {
            logins.push(login);
        }
    }
    Ok(logins)
}

enum Shape {
    Empty,
    Logins,
    Groups,
    Records,
}

/// Decides the roster shape from its first entry that is not an empty list.
///
/// An empty list is both an empty group and an empty record; a roster made
/// only of empty lists is an export with no records.
fn shape_of(items: &[Value]) -> Result<Shape> {
    let first = items
        .iter()
        .find(|item| !matches!(item, Value::Array(inner) if inner.is_empty()));
    match first {
        None if items.is_empty() => Ok(Shape::Empty),
        None => Ok(Shape::Groups),
        Some(Value::String(_)) => Ok(Shape::Logins),
        Some(Value::Array(inner)) if inner.first().is_some_and(Value::is_array) => {
            Ok(Shape::Groups)
        }
        Some(Value::Array(_)) => Ok(Shape::Records),
        Some(other) => Err(Error::Roster {
            message: format!("roster entries must be lists or strings, found {}", kind(other)),
            hint: Some(SHAPE_HINT.to_string()),
        }),
    }
}

fn logins_from_strings(items: &[Value]) -> Result<Vec<String>> {
    let mut logins = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::String(s) => {
                if let Some(login) = clean(index, s) {
                    logins.push(login);
                }
            }
            other => {
                return Err(Error::Roster {
                    message: format!("entry {} is {}, expected a login string", index, kind(other)),
                    hint: Some(SHAPE_HINT.to_string()),
                })
            }
        }
    }
    Ok(logins)
}

/// Unwraps `[[record, ...], ...]` into `[record, ...]`.
fn flatten_groups(groups: Vec<Value>) -> Result<Vec<Value>> {
    let mut records = Vec::new();
    for (index, group) in groups.into_iter().enumerate() {
        match group {
            Value::Array(group) => records.extend(group),
            other => {
                return Err(Error::Roster {
                    message: format!("group {} is {}, expected a list of records", index, kind(&other)),
                    hint: Some(SHAPE_HINT.to_string()),
                })
            }
        }
    }
    Ok(records)
}

fn login_from_record(index: usize, record: &Value, login_field: usize) -> Result<Option<String>> {
    let fields = match record {
        Value::Array(fields) => fields,
        other => {
            return Err(Error::Roster {
                message: format!("record {} is {}, expected a list of fields", index, kind(other)),
                hint: Some(SHAPE_HINT.to_string()),
            })
        }
    };

    match fields.get(login_field) {
        Some(Value::String(s)) => Ok(clean(index, s)),
        Some(other) => Err(Error::Roster {
            message: format!(
                "record {} has {} in column {}, expected a login string",
                index,
                kind(other),
                login_field
            ),
            hint: Some("Use --login-field to pick the column holding the GitHub login".to_string()),
        }),
        None => Err(Error::Roster {
            message: format!(
                "record {} has {} fields, no column {}",
                index,
                fields.len(),
                login_field
            ),
            hint: Some("Use --login-field to pick the column holding the GitHub login".to_string()),
        }),
    }
}

fn clean(index: usize, raw: &str) -> Option<String> {
    let login = raw.trim();
    if login.is_empty() {
        warn!("Skipping roster entry {}: empty login", index);
        None
    } else {
        Some(login.to_string())
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
