//! Calendar-bucket key derivation.
//!
//! The usage ledger indexes accumulated seconds by day, month and year.
//! Keys are derived from UTC wall-clock time throughout -- never local time --
//! so a machine changing timezones keeps writing into the same buckets.
//! Day keys are fixed-width and lexicographically sortable.

use chrono::{DateTime, Datelike, Months, TimeDelta, Utc};

/// `YYYY-MM-DD` for the calendar day containing `at`.
pub fn day_key(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// `YYYY-MM` for the calendar month containing `at`.
pub fn month_key(at: DateTime<Utc>) -> String {
    at.format("%Y-%m").to_string()
}

/// `YYYY` for the calendar year containing `at`.
pub fn year_key(at: DateTime<Utc>) -> String {
    format!("{:04}", at.year())
}

/// `at` shifted by `days` calendar days (negative for the past).
pub fn shift_days(at: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    at.checked_add_signed(TimeDelta::days(days)).unwrap_or(at)
}

/// `at` shifted by `months` calendar months.
///
/// Day-of-month clamps to the end of the target month
/// (Jan 31 + 1 month = Feb 28, or Feb 29 in a leap year).
pub fn shift_months(at: DateTime<Utc>, months: i32) -> DateTime<Utc> {
    let shifted = if months >= 0 {
        at.checked_add_months(Months::new(months as u32))
    } else {
        at.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(at)
}

/// `at` shifted by `years` calendar years (Feb 29 clamps to Feb 28).
pub fn shift_years(at: DateTime<Utc>, years: i32) -> DateTime<Utc> {
    shift_months(at, years.saturating_mul(12))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 30, 0).unwrap()
    }

    #[test]
    fn keys_are_fixed_width() {
        let t = at(2024, 3, 7, 9);
        assert_eq!(day_key(t), "2024-03-07");
        assert_eq!(month_key(t), "2024-03");
        assert_eq!(year_key(t), "2024");
    }

    #[test]
    fn same_day_same_key_different_day_different_key() {
        let morning = at(2024, 3, 7, 0);
        let night = at(2024, 3, 7, 23);
        assert_eq!(day_key(morning), day_key(night));
        assert_eq!(month_key(morning), month_key(night));
        assert_eq!(year_key(morning), year_key(night));

        let next = at(2024, 3, 8, 0);
        assert_ne!(day_key(night), day_key(next));
    }

    #[test]
    fn shift_days_crosses_month_boundary() {
        let t = at(2024, 3, 1, 12);
        assert_eq!(day_key(shift_days(t, -1)), "2024-02-29");
        assert_eq!(day_key(shift_days(t, 1)), "2024-03-02");
    }

    #[test]
    fn shift_months_clamps_day_of_month() {
        let jan31 = at(2024, 1, 31, 12);
        assert_eq!(day_key(shift_months(jan31, 1)), "2024-02-29");
        assert_eq!(day_key(shift_months(jan31, -2)), "2023-11-30");

        let jan31_non_leap = at(2023, 1, 31, 12);
        assert_eq!(day_key(shift_months(jan31_non_leap, 1)), "2023-02-28");
    }

    #[test]
    fn shift_years_clamps_leap_day() {
        let leap = at(2024, 2, 29, 12);
        assert_eq!(day_key(shift_years(leap, 1)), "2025-02-28");
        assert_eq!(year_key(shift_years(leap, -3)), "2021");
    }
}
