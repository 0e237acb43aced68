//! Calendar date arithmetic for recurring occasions.
//!
//! # Responsibility
//! - Compute day differences and "days until" labels relative to a caller
//!   supplied `today`.
//! - Project a stored anchor date (birthday, anniversary, name day) to its
//!   next yearly occurrence.
//!
//! # Invariants
//! - All functions are pure; callers at service edges inject
//!   `Local::now().date_naive()` so tests stay deterministic.
//! - Feb 29 anchors fall back to Mar 1 in non-leap years.

use chrono::{Datelike, NaiveDate};

/// Storage date format used by all date columns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a storage date (`YYYY-MM-DD`).
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Formats a date for storage (`YYYY-MM-DD`).
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Formats a date for display, e.g. `Jan 15, 2025`.
pub fn format_display_date(date: NaiveDate) -> String {
    format!("{} {}, {}", month_abbrev(date.month()), date.day(), date.year())
}

/// Days from `today` to `target`. 0 = today, positive = future.
pub fn days_until(target: NaiveDate, today: NaiveDate) -> i64 {
    (target - today).num_days()
}

/// Upcoming label for a target date: `Today`, `Tomorrow` or `In N days`.
///
/// Returns `None` for past dates; callers hide the label instead of
/// showing a negative count.
pub fn days_until_label(target: NaiveDate, today: NaiveDate) -> Option<String> {
    match days_until(target, today) {
        d if d < 0 => None,
        0 => Some("Today".to_string()),
        1 => Some("Tomorrow".to_string()),
        d => Some(format!("In {d} days")),
    }
}

/// Projects a recurring anchor date to its next occurrence on or after
/// `today`.
///
/// Only the anchor's month/day matter; the year comes from `today` (or the
/// following year when this year's occurrence already passed). A Feb 29
/// anchor lands on Mar 1 in non-leap years.
pub fn next_occurrence(anchor: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(anchor, today.year());
    if this_year >= today {
        this_year
    } else {
        occurrence_in_year(anchor, today.year() + 1)
    }
}

fn occurrence_in_year(anchor: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, anchor.month(), anchor.day()).unwrap_or_else(|| {
        // Only Feb 29 can fail to exist in a target year.
        NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year")
    })
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use super::{
        days_until, days_until_label, format_display_date, next_occurrence, parse_date,
    };
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(parse_date("2025-13-01").is_none());
        assert!(parse_date("not a date").is_none());
        assert_eq!(parse_date("2025-01-15"), Some(date(2025, 1, 15)));
    }

    #[test]
    fn display_format_matches_short_month_style() {
        assert_eq!(format_display_date(date(2025, 1, 15)), "Jan 15, 2025");
        assert_eq!(format_display_date(date(2026, 12, 3)), "Dec 3, 2026");
    }

    #[test]
    fn days_until_counts_from_today() {
        let today = date(2025, 6, 10);
        assert_eq!(days_until(today, today), 0);
        assert_eq!(days_until(date(2025, 6, 13), today), 3);
        assert_eq!(days_until(date(2025, 6, 9), today), -1);
    }

    #[test]
    fn labels_cover_today_tomorrow_and_future() {
        let today = date(2025, 6, 10);
        assert_eq!(days_until_label(today, today).as_deref(), Some("Today"));
        assert_eq!(
            days_until_label(date(2025, 6, 11), today).as_deref(),
            Some("Tomorrow")
        );
        assert_eq!(
            days_until_label(date(2025, 6, 17), today).as_deref(),
            Some("In 7 days")
        );
        assert_eq!(days_until_label(date(2025, 6, 1), today), None);
    }

    #[test]
    fn next_occurrence_stays_in_current_year_when_ahead() {
        let anchor = date(1990, 9, 20);
        let today = date(2025, 6, 10);
        assert_eq!(next_occurrence(anchor, today), date(2025, 9, 20));
    }

    #[test]
    fn next_occurrence_rolls_to_next_year_when_passed() {
        let anchor = date(1990, 2, 14);
        let today = date(2025, 6, 10);
        assert_eq!(next_occurrence(anchor, today), date(2026, 2, 14));
    }

    #[test]
    fn next_occurrence_on_today_counts_as_today() {
        let anchor = date(2000, 6, 10);
        let today = date(2025, 6, 10);
        assert_eq!(next_occurrence(anchor, today), today);
    }

    #[test]
    fn leap_day_anchor_falls_back_to_march_first() {
        let anchor = date(1996, 2, 29);
        assert_eq!(next_occurrence(anchor, date(2025, 1, 10)), date(2025, 3, 1));
        // Leap year keeps the real date.
        assert_eq!(next_occurrence(anchor, date(2028, 1, 10)), date(2028, 2, 29));
    }
}
