//! Date tags such as `(1996-06-23)`, `(19960623)` or `(1996)`.
//!
//! Prototype and beta dumps often carry a build date. It only serves as a
//! tie-breaker between otherwise equal releases.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

static DATE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{4})(?:[-/.]?(\d{2})(?:[-/.]?(\d{2}))?)?(?:[ T](\d{2}):(\d{2})(?::(\d{2}))?)?$",
    )
    .expect("static pattern")
});

/// Build date carried by a tag.
pub type Timestamp = NaiveDateTime;

/// Years accepted from a bare four-digit tag.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1950..=2099;

/// Parse a tag as a date or date-time. Missing month/day default to 1.
pub fn parse_date_tag(tag: &str) -> Option<Timestamp> {
    let caps = DATE_TAG.captures(tag.trim())?;
    let field = |i: usize, default: u32| -> Option<u32> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(default),
        }
    };

    let year: i32 = caps[1].parse().ok()?;
    if !YEAR_RANGE.contains(&year) {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(year, field(2, 1)?, field(3, 1)?)?;
    date.and_hms_opt(field(4, 0)?, field(5, 0)?, field(6, 0)?)
}

/// First tag (sorted order) that parses as a date.
pub fn first_date(tags: &BTreeSet<String>) -> Option<Timestamp> {
    tags.iter().find_map(|tag| parse_date_tag(tag))
}

/// Timestamp used for ranking: undated releases count as the latest possible
/// build so they are never beaten by an older dated one.
pub fn timestamp_rank(tags: &BTreeSet<String>) -> Timestamp {
    first_date(tags).unwrap_or(Timestamp::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date_tag("1996-06-23"), Some(ymd(1996, 6, 23)));
        assert_eq!(parse_date_tag("19960623"), Some(ymd(1996, 6, 23)));
        assert_eq!(parse_date_tag("1996.06.23"), Some(ymd(1996, 6, 23)));
        assert_eq!(parse_date_tag("1996-06"), Some(ymd(1996, 6, 1)));
        assert_eq!(parse_date_tag("1996"), Some(ymd(1996, 1, 1)));
    }

    #[test]
    fn test_parse_date_time() {
        let dt = parse_date_tag("1999-12-31 23:59:30").unwrap();
        assert_eq!(dt, ymd(1999, 12, 31).date().and_hms_opt(23, 59, 30).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_non_dates() {
        assert_eq!(parse_date_tag("USA"), None);
        assert_eq!(parse_date_tag("v1.1"), None);
        assert_eq!(parse_date_tag("Disc 1"), None);
        assert_eq!(parse_date_tag("1996-13-01"), None);
        assert_eq!(parse_date_tag("0042"), None);
    }

    #[test]
    fn test_first_date_uses_sorted_order() {
        assert_eq!(
            first_date(&tags(&["USA", "2001-01-01", "1999-05-05"])),
            Some(ymd(1999, 5, 5))
        );
    }

    #[test]
    fn test_undated_ranks_latest() {
        let dated = timestamp_rank(&tags(&["Proto", "1995-03-01"]));
        let undated = timestamp_rank(&tags(&["Proto"]));
        assert!(undated > dated);
        assert!(timestamp_rank(&tags(&["2000"])) > timestamp_rank(&tags(&["1995"])));
    }
}
