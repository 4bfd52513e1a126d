//! Rendering helpers shared by the commands.

pub mod links;

use chrono::{DateTime, Utc};

/// Abbreviate a commit hash for display. Identifiers that are not plain
/// hex pass through rather than panicking on a char boundary.
pub fn short_commit(commit: &str) -> &str {
    commit.get(..10).unwrap_or(commit)
}

/// Render a timestamp the way the dashboard does.
pub fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M").to_string()
}
