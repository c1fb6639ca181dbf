//! UTC timestamp formatting for identifiers and filenames.

use std::fmt::Write;

use chrono::{DateTime, Utc};

/// Compact sortable format, e.g. `20240131235959`.
pub const DEFAULT_TIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Formats the current UTC time with `format`, or [`DEFAULT_TIME_FORMAT`]
/// when `format` is `None` or empty. Uses `chrono` strftime syntax.
pub fn formatted_time(format: Option<&str>) -> String {
    format_at(Utc::now(), format)
}

/// Formats a specific instant the same way as [`formatted_time`].
///
/// A format string chrono cannot render falls back to the default.
pub fn format_at(at: DateTime<Utc>, format: Option<&str>) -> String {
    let format = match format {
        Some(f) if !f.is_empty() => f,
        _ => DEFAULT_TIME_FORMAT,
    };

    let mut out = String::new();
    if write!(out, "{}", at.format(format)).is_err() {
        tracing::debug!(format, "Unrenderable time format, using default");
        return at.format(DEFAULT_TIME_FORMAT).to_string();
    }
    out
}
