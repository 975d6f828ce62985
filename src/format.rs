//! Display Formatting
//!
//! Week labels, timestamps and editor counters.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// "2024-W52" -> "Week 52, 2024". Anything else is shown as given.
pub fn format_week(week_of: &str) -> String {
    match parse_week(week_of) {
        Some((year, week)) => format!("Week {}, {}", week, year),
        None => week_of.to_string(),
    }
}

fn parse_week(week_of: &str) -> Option<(i32, u32)> {
    let (year, week) = week_of.split_once("-W")?;
    let year: i32 = year.parse().ok()?;
    let week: u32 = week.parse().ok()?;
    (1..=53).contains(&week).then_some((year, week))
}

/// Backend timestamps are RFC 3339 or naive ISO; show them as "Dec 23, 2024"
pub fn format_date(timestamp: &str) -> String {
    parse_date(timestamp)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

fn parse_date(timestamp: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(timestamp, "%Y-%m-%d").ok()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Characters left before `max`, never negative
pub fn chars_left(text: &str, max: usize) -> usize {
    max.saturating_sub(text.chars().count())
}

/// "1 story" / "3 stories"
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_week() {
        assert_eq!(format_week("2024-W52"), "Week 52, 2024");
        assert_eq!(format_week("2025-W01"), "Week 1, 2025");
        assert_eq!(format_week("last week"), "last week");
        assert_eq!(format_week("2024-W99"), "2024-W99");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-12-23T08:00:00Z"), "Dec 23, 2024");
        assert_eq!(format_date("2024-12-23T08:00:00.123456"), "Dec 23, 2024");
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(format_date("someday"), "someday");
    }

    #[test]
    fn test_counters() {
        assert_eq!(word_count("  one two\nthree  "), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(chars_left("héllo", 10), 5);
        assert_eq!(chars_left("toolong", 3), 0);
        assert_eq!(pluralize(1, "story", "stories"), "1 story");
        assert_eq!(pluralize(0, "story", "stories"), "0 stories");
    }
}
