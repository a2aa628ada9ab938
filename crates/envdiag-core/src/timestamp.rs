//! Run timestamp formatting.

use chrono::{DateTime, Utc};

/// Fixed report format, e.g. `2024-03-05 07:02:09 UTC`.
const FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Format an instant for the report and the named step output.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(FORMAT).to_string()
}

/// Current instant, formatted.
pub fn now() -> String {
    format_timestamp(Utc::now())
}
