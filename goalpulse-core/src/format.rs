//! Formatting helpers for presenting derived progress.

use chrono::{DateTime, NaiveDate, Utc};

/// Format a percentage for display (e.g., "63%").
pub fn format_percent(percentage: u8) -> String {
    format!("{}%", percentage)
}

/// Format a timestamp as relative time (e.g., "2m ago").
pub fn format_relative_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(ts);

    if duration.num_seconds() < 0 {
        "just now".to_string()
    } else if duration.num_seconds() < 60 {
        format!("{}s ago", duration.num_seconds())
    } else if duration.num_minutes() < 60 {
        format!("{}m ago", duration.num_minutes())
    } else if duration.num_hours() < 24 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_days() < 7 {
        format!("{}d ago", duration.num_days())
    } else {
        ts.format("%b %d").to_string()
    }
}

/// Format a due date relative to today (e.g., "due in 3d", "overdue by 2d").
pub fn format_due_in(due_date: NaiveDate, today: NaiveDate) -> String {
    let days = (due_date - today).num_days();
    if days > 0 {
        format!("due in {}d", days)
    } else if days == 0 {
        "due today".to_string()
    } else {
        format!("overdue by {}d", -days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0), "0%");
        assert_eq!(format_percent(63), "63%");
    }

    #[test]
    fn test_format_relative_time() {
        let now = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(format_relative_time(now - Duration::seconds(30), now), "30s ago");
        assert_eq!(format_relative_time(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(format_relative_time(now - Duration::hours(3), now), "3h ago");
        assert_eq!(format_relative_time(now - Duration::days(2), now), "2d ago");
        assert_eq!(format_relative_time(now - Duration::days(30), now), "Feb 13");
        assert_eq!(format_relative_time(now + Duration::minutes(1), now), "just now");
    }

    #[test]
    fn test_format_due_in() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        assert_eq!(format_due_in(today + Duration::days(3), today), "due in 3d");
        assert_eq!(format_due_in(today, today), "due today");
        assert_eq!(format_due_in(today - Duration::days(2), today), "overdue by 2d");
    }
}
