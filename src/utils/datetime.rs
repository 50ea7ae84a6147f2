/// Pure date/time utility functions (Discord-agnostic)
use chrono::{FixedOffset, NaiveDateTime, NaiveTime, Offset, Timelike, Utc};

use crate::constants::ANCHOR_UTC_OFFSET_SECS;

/// The fixed +07:00 anchor offset
pub fn anchor_offset() -> FixedOffset {
    FixedOffset::east_opt(ANCHOR_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Current wall-clock time in the anchor timezone
pub fn anchor_now() -> NaiveDateTime {
    Utc::now().with_timezone(&anchor_offset()).naive_local()
}

/// Format a time as zero-padded HH:MM
pub fn format_hm(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Format a date as "Day MonthName" (e.g., "17 August")
pub fn format_date_display(month: i32, day: i32) -> String {
    let month_name = get_month_name(month);
    format!("{} {}", day, month_name)
}

/// Get month name from month number (1-12)
pub fn get_month_name(month: i32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_hm_pads() {
        assert_eq!(format_hm(NaiveTime::from_hms_opt(4, 5, 59).unwrap()), "04:05");
        assert_eq!(format_hm(NaiveTime::from_hms_opt(17, 30, 0).unwrap()), "17:30");
    }

    #[test]
    fn test_format_date_display() {
        assert_eq!(format_date_display(8, 17), "17 August");
        assert_eq!(format_date_display(1, 1), "1 January");
    }

    #[test]
    fn test_get_month_name() {
        assert_eq!(get_month_name(3), "March");
        assert_eq!(get_month_name(0), "Unknown");
        assert_eq!(get_month_name(13), "Unknown");
    }

    #[test]
    fn test_anchor_timezone_is_fixed_plus_seven() {
        assert_eq!(anchor_offset().local_minus_utc(), 7 * 3600);
        for (y, m) in [(1950, 6), (2025, 1), (2025, 7), (2027, 11)] {
            let utc = Utc.with_ymd_and_hms(y, m, 15, 23, 30, 0).unwrap();
            let local = utc.with_timezone(&anchor_offset()).naive_local();
            assert_eq!(local, utc.naive_utc() + chrono::Duration::hours(7));
        }
    }
}
