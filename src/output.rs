//! # Output Configuration
//!
//! Controls how the end-of-run summary is printed: with emoji markers on a
//! capable terminal, or with plain `[OK]`-style tags otherwise.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;

use crate::reconcile::ReconcileReport;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `always` and `never` win over the environment; anything else is
    /// treated as `auto`.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_ascii_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => terminal_wants_color(),
        };
        Self { use_color }
    }

    /// Returns `emoji_str` when colors are on, `plain` otherwise.
    pub fn marker<'a>(&self, emoji_str: &'a str, plain: &'a str) -> &'a str {
        if self.use_color {
            emoji_str
        } else {
            plain
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

fn terminal_wants_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
        return false;
    }
    if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
        return true;
    }
    if env::var("TERM").is_ok_and(|v| v == "dumb") {
        return false;
    }
    console::Term::stdout().features().colors_supported()
}

/// Renders the human-readable end-of-run summary, one line per entry.
pub fn summary_lines(report: &ReconcileReport, org: &str, out: &OutputConfig) -> Vec<String> {
    let mut lines = Vec::new();

    let (verb, marker) = if report.dry_run {
        ("Would invite", out.marker("🔎", "[DRY-RUN]"))
    } else {
        ("Invited", out.marker("✅", "[OK]"))
    };
    lines.push(format!(
        "{} {} {} of {} roster entries to {}",
        marker,
        verb,
        report.invited.len(),
        report.roster_size,
        org
    ));

    if !report.already_members.is_empty() {
        lines.push(format!(
            "{} {} already members",
            out.marker("👥", "[SKIP]"),
            report.already_members.len()
        ));
    }
    if !report.already_invited.is_empty() {
        lines.push(format!(
            "{} {} already invited",
            out.marker("📨", "[SKIP]"),
            report.already_invited.len()
        ));
    }
    if !report.unresolved.is_empty() {
        lines.push(format!(
            "{} {} unknown usernames: {}",
            out.marker("⚠️ ", "[WARN]"),
            report.unresolved.len(),
            report.unresolved.join(", ")
        ));
    }

    lines
}
