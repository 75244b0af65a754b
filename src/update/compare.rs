//! Dotted-integer version ordering and small formatting helpers
//!
//! Release tags here are plain dotted integers of arbitrary length
//! ("1.2", "1.2.3.4"), not full semver: there are no prerelease or build
//! segments, and a missing segment compares as zero.

use std::cmp::Ordering;

use chrono::DateTime;

/// Compare two dotted-integer version strings segment by segment.
///
/// The shorter version is padded with zero segments, so "1.2" and "1.2.0"
/// are equal. Segments that fail to parse count as zero.
pub fn compare_versions(v1: &str, v2: &str) -> Ordering {
    let a = segments(v1);
    let b = segments(v2);

    for i in 0..a.len().max(b.len()) {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            unequal => return unequal,
        }
    }

    Ordering::Equal
}

/// Strip any leading non-digit prefix from a release tag ("v1.2.0" -> "1.2.0").
pub fn normalize_version(tag: &str) -> &str {
    tag.trim_start_matches(|c: char| !c.is_ascii_digit())
}

/// Format an RFC 3339 timestamp (as returned by the GitHub API) as
/// "YYYY-MM-DD HH:mm" for display. Returns `None` for unparseable input.
pub fn format_date(date_str: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(date_str)
        .ok()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
}

fn segments(version: &str) -> Vec<u64> {
    version
        .split('.')
        .map(|part| part.trim().parse().unwrap_or(0))
        .collect()
}
