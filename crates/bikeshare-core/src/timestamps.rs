use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::warn;

/// Naive date-time patterns tried in order when reading `Start Time` and
/// `End Time` cells.
const FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse a trip timestamp into a naive local date-time.
///
/// Timestamps in the datasets carry no zone, so they are kept as wall-clock
/// values. RFC 3339 strings are accepted and reduced to their local part;
/// date-only strings resolve to midnight. Returns `None` for blank or
/// unrecognised input.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    warn!("could not parse timestamp \"{}\"", s);
    None
}
