// File: crates/rates-core/src/dates.rs
// Summary: Date-key parsing (ISO and legacy layouts) for dataset keys.

use chrono::{DateTime, NaiveDate};

/// Non-ISO layouts seen in older feed snapshots.
const GENERIC_FORMATS: &[&str] = &["%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];

/// Parse a dataset date key.
///
/// Keys containing a hyphen are treated as ISO-8601: a plain calendar date,
/// or a full RFC 3339 timestamp whose date part is taken. Anything else is
/// tried against a short list of legacy layouts. Returns `None` for
/// unparseable or calendar-invalid keys; the caller decides how to report.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let key = key.trim();
    if key.contains('-') {
        if let Ok(date) = NaiveDate::parse_from_str(key, "%Y-%m-%d") {
            return Some(date);
        }
        return DateTime::parse_from_rfc3339(key)
            .ok()
            .map(|dt| dt.date_naive());
    }
    GENERIC_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(key, fmt).ok())
}
