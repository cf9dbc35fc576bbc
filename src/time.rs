use crate::constants::DATE_FORMAT;
use chrono::{DateTime, NaiveDate};

/// Parse a schedule date as stored by the project directory.
///
/// Accepts a plain ISO-8601 calendar date (`2024-01-01`) or an RFC 3339
/// datetime (`2024-01-01T08:30:00Z`), from which only the date component is
/// kept. Returns `None` for anything else.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Check whether two `[start, end]` date ranges intersect.
///
/// Closed-interval semantics: a project ending the same day another begins
/// counts as overlapping. Any date that fails to parse makes the pair
/// non-overlapping rather than raising.
#[must_use]
pub fn dates_overlap(start_a: &str, end_a: &str, start_b: &str, end_b: &str) -> bool {
    let (Some(start_a), Some(end_a), Some(start_b), Some(end_b)) = (
        parse_date(start_a),
        parse_date(end_a),
        parse_date(start_b),
        parse_date(end_b),
    ) else {
        return false;
    };

    start_a <= end_b && start_b <= end_a
}
