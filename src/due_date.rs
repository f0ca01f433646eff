//! Due-date label resolution
//!
//! Bidirectional conversion between the relative due-date labels shown to
//! users ("Today", "Tomorrow", "This Week", ...) and the absolute
//! calendar dates stored in the data file. This module is the only place
//! allowed to translate between the two forms.
//!
//! Both directions take an explicit `today` anchor so the logic is
//! deterministic and testable without mocking a clock; callers pass
//! `momentum::local_date_today()`. Weeks run Sunday through Saturday.

use chrono::{Datelike, Duration, NaiveDate};

/// Days from `today` to the Saturday ending the current week
///
/// Weeks start on Sunday, so a Sunday anchor yields 6 and a Saturday
/// anchor yields 0.
pub fn end_of_week_offset(today: NaiveDate) -> i64 {
    6 - i64::from(today.weekday().num_days_from_sunday())
}

/// Resolve a due-date label to an absolute calendar date
///
/// Recognized labels:
/// - "Today" / "Tomorrow"
/// - "This Week" (end of the current Sunday-started week)
/// - "Next Week" (seven days past the end of the current week)
/// - "In N days" for a non-negative integer N
/// - a canonical `YYYY-MM-DD` string (returned as-is, a fixed point)
/// - "No date" and "Overdue", both `None`. "Overdue" deliberately
///   resolves to no date so callers preserve an existing overdue date
///   instead of snapping it forward
///
/// Anything else is parsed best-effort as a month/day in `today`'s year
/// (e.g. "Jan 25"). Unparseable input yields `None`, never an error;
/// callers treat `None` as "no change".
pub fn resolve_label_to_date(label: &str, today: NaiveDate) -> Option<NaiveDate> {
    match label {
        "Today" => Some(today),
        "Tomorrow" => Some(today + Duration::days(1)),
        "This Week" => Some(today + Duration::days(end_of_week_offset(today))),
        "Next Week" => Some(today + Duration::days(end_of_week_offset(today) + 7)),
        "No date" | "Overdue" => None,
        _ => {
            if let Some(days) = parse_in_n_days(label) {
                return Some(today + Duration::days(days));
            }
            if let Ok(date) = NaiveDate::parse_from_str(label, "%Y-%m-%d") {
                return Some(date);
            }
            parse_month_day(label, today.year())
        }
    }
}

/// Format a stored due date as the label a user would see
///
/// `None` renders as "No date"; past dates as "Overdue"; dates inside
/// the current and following Sunday-started weeks as "Today",
/// "Tomorrow", "This Week", or "Next Week"; anything further out as a
/// short month-day label without a year (e.g. "Apr 1").
pub fn format_date_to_label(date: Option<NaiveDate>, today: NaiveDate) -> String {
    let Some(date) = date else {
        return "No date".to_string();
    };

    let diff = (date - today).num_days();
    if diff == 0 {
        return "Today".to_string();
    }
    if diff == 1 {
        return "Tomorrow".to_string();
    }
    if diff < 0 {
        return "Overdue".to_string();
    }

    let end_of_week = end_of_week_offset(today);
    if diff <= end_of_week {
        return "This Week".to_string();
    }
    if diff <= end_of_week + 7 {
        return "Next Week".to_string();
    }

    date.format("%b %-d").to_string()
}

/// Parse "In N days" with N a non-negative integer
fn parse_in_n_days(label: &str) -> Option<i64> {
    let n = label.strip_prefix("In ")?.strip_suffix(" days")?;
    if n.is_empty() || !n.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    n.parse::<u32>().ok().map(i64::from)
}

/// Best-effort parse of a free-text month/day label in the given year
///
/// chrono's `%b` accepts both abbreviated and full month names when
/// parsing, so "Jan 25" and "January 25" both resolve.
fn parse_month_day(label: &str, year: i32) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{} {}", label, year), "%B %d %Y").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2024-03-14 is a Thursday
    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_today_and_tomorrow() {
        assert_eq!(
            resolve_label_to_date("Today", anchor()),
            Some(date(2024, 3, 14))
        );
        assert_eq!(
            resolve_label_to_date("Tomorrow", anchor()),
            Some(date(2024, 3, 15))
        );
    }

    #[test]
    fn test_resolve_this_week_ends_on_saturday() {
        // Thursday's offset to the week end is 2 days
        assert_eq!(
            resolve_label_to_date("This Week", anchor()),
            Some(date(2024, 3, 16))
        );
    }

    #[test]
    fn test_resolve_next_week() {
        assert_eq!(
            resolve_label_to_date("Next Week", anchor()),
            Some(date(2024, 3, 23))
        );
    }

    #[test]
    fn test_resolve_this_week_from_every_weekday() {
        // 2024-03-10 was a Sunday; the whole week maps to its Saturday
        let saturday = date(2024, 3, 16);
        for day in 10..=16 {
            let today = date(2024, 3, day);
            assert_eq!(
                resolve_label_to_date("This Week", today),
                Some(saturday),
                "anchor {}",
                today
            );
        }
    }

    #[test]
    fn test_resolve_this_week_on_sundays_is_plus_six() {
        // Sundays across month and year boundaries
        for sunday in [date(2024, 3, 31), date(2024, 12, 29), date(2024, 2, 25)] {
            assert_eq!(
                resolve_label_to_date("This Week", sunday),
                Some(sunday + Duration::days(6)),
                "anchor {}",
                sunday
            );
        }
    }

    #[test]
    fn test_resolve_in_n_days() {
        assert_eq!(
            resolve_label_to_date("In 5 days", anchor()),
            Some(date(2024, 3, 19))
        );
        assert_eq!(
            resolve_label_to_date("In 0 days", anchor()),
            Some(anchor())
        );
        for n in [0i64, 1, 2, 7, 30, 365] {
            assert_eq!(
                resolve_label_to_date(&format!("In {} days", n), anchor()),
                Some(anchor() + Duration::days(n))
            );
        }
    }

    #[test]
    fn test_resolve_in_n_days_rejects_malformed() {
        assert_eq!(resolve_label_to_date("In -1 days", anchor()), None);
        assert_eq!(resolve_label_to_date("In +5 days", anchor()), None);
        assert_eq!(resolve_label_to_date("In five days", anchor()), None);
        assert_eq!(resolve_label_to_date("In  days", anchor()), None);
    }

    #[test]
    fn test_resolve_canonical_date_is_fixed_point() {
        let resolved = resolve_label_to_date("2024-04-01", anchor()).unwrap();
        assert_eq!(resolved, date(2024, 4, 1));

        // Resolving the canonical form of the result yields the same date
        let again = resolve_label_to_date(&resolved.format("%Y-%m-%d").to_string(), anchor());
        assert_eq!(again, Some(resolved));
    }

    #[test]
    fn test_resolve_no_date_and_overdue_are_none() {
        assert_eq!(resolve_label_to_date("No date", anchor()), None);
        assert_eq!(resolve_label_to_date("Overdue", anchor()), None);
    }

    #[test]
    fn test_resolve_free_text_month_day() {
        assert_eq!(
            resolve_label_to_date("Jan 25", anchor()),
            Some(date(2024, 1, 25))
        );
        assert_eq!(
            resolve_label_to_date("January 25", anchor()),
            Some(date(2024, 1, 25))
        );
        assert_eq!(
            resolve_label_to_date("Apr 1", anchor()),
            Some(date(2024, 4, 1))
        );
    }

    #[test]
    fn test_resolve_garbage_is_none() {
        for garbage in ["", "whenever", "13-13-13", "Smarch 5", "2024-02-30"] {
            assert_eq!(resolve_label_to_date(garbage, anchor()), None, "{}", garbage);
        }
    }

    #[test]
    fn test_format_null_and_near_dates() {
        assert_eq!(format_date_to_label(None, anchor()), "No date");
        assert_eq!(format_date_to_label(Some(date(2024, 3, 14)), anchor()), "Today");
        assert_eq!(
            format_date_to_label(Some(date(2024, 3, 15)), anchor()),
            "Tomorrow"
        );
        assert_eq!(
            format_date_to_label(Some(date(2024, 3, 10)), anchor()),
            "Overdue"
        );
    }

    #[test]
    fn test_format_week_bands() {
        // Thursday anchor: Saturday the 16th ends the week
        assert_eq!(
            format_date_to_label(Some(date(2024, 3, 16)), anchor()),
            "This Week"
        );
        // The following Sunday through Saturday is "Next Week"
        assert_eq!(
            format_date_to_label(Some(date(2024, 3, 17)), anchor()),
            "Next Week"
        );
        assert_eq!(
            format_date_to_label(Some(date(2024, 3, 23)), anchor()),
            "Next Week"
        );
        // Past the next-week band: short month-day label
        assert_eq!(
            format_date_to_label(Some(date(2024, 3, 24)), anchor()),
            "Mar 24"
        );
        assert_eq!(
            format_date_to_label(Some(date(2024, 4, 1)), anchor()),
            "Apr 1"
        );
    }

    #[test]
    fn test_format_saturday_anchor_collapses_this_week() {
        // On a Saturday the current week has no days left beyond today,
        // so day-after-tomorrow already falls in "Next Week"
        let saturday = date(2024, 3, 16);
        assert_eq!(end_of_week_offset(saturday), 0);
        assert_eq!(
            format_date_to_label(Some(date(2024, 3, 18)), saturday),
            "Next Week"
        );
        assert_eq!(
            format_date_to_label(Some(date(2024, 3, 24)), saturday),
            "Mar 24"
        );
    }

    #[test]
    fn test_canonical_labels_round_trip() {
        // The seven canonical labels survive resolve -> format
        for label in ["Today", "Tomorrow", "No date"] {
            let resolved = resolve_label_to_date(label, anchor());
            assert_eq!(format_date_to_label(resolved, anchor()), label);
        }
        // "This Week"/"Next Week" resolve to band endpoints that format
        // back into the same band
        for label in ["This Week", "Next Week"] {
            let resolved = resolve_label_to_date(label, anchor());
            assert_eq!(format_date_to_label(resolved, anchor()), label);
        }
    }

    #[test]
    fn test_free_text_round_trip_is_lossy() {
        // Outside the relative bands, formatting is month-day, not the
        // original free text
        let resolved = resolve_label_to_date("2024-06-10", anchor());
        assert_eq!(format_date_to_label(resolved, anchor()), "Jun 10");
    }
}
