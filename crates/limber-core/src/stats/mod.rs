//! Read-only statistics aggregator.
//!
//! Computes display values from the usage ledger: minutes per period with
//! offset navigation, the trailing rolling average used as a dynamic daily
//! goal, and goal-progress percentages. Nothing here writes to the ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::buckets;
use crate::ledger::UsageLedger;
use crate::storage::StatisticsConfig;

/// Calendar period kind for statistics queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Month,
    Year,
}

/// Result of the trailing-days average computation.
///
/// `use_average` is true only when every one of the lookback days has
/// recorded usage -- a strict threshold, deliberately not "at least one".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingAverage {
    pub average: f64,
    pub days_with_data: u32,
    pub use_average: bool,
}

/// Minutes recorded for the period `offset` steps away from now
/// (0 = current, negative = past).
pub fn minutes_for_period(
    ledger: &UsageLedger,
    period: Period,
    offset: i32,
    now: DateTime<Utc>,
) -> f64 {
    let seconds = match period {
        Period::Day => {
            let at = buckets::shift_days(now, offset as i64);
            ledger.daily_seconds(&buckets::day_key(at))
        }
        Period::Month => {
            let at = buckets::shift_months(now, offset);
            ledger.monthly_seconds(&buckets::month_key(at))
        }
        Period::Year => {
            let at = buckets::shift_years(now, offset);
            ledger.yearly_seconds(&buckets::year_key(at))
        }
    };
    seconds as f64 / 60.0
}

/// Average minutes/day over the `days` calendar days before today.
///
/// Today is excluded. Days with zero recorded usage are excluded from both
/// the sum and the count.
pub fn rolling_average(ledger: &UsageLedger, days: u32, now: DateTime<Utc>) -> RollingAverage {
    let mut total_minutes = 0.0;
    let mut days_with_data = 0u32;

    for i in 1..=days {
        let key = buckets::day_key(buckets::shift_days(now, -(i as i64)));
        let seconds = ledger.daily_seconds(&key);
        if seconds > 0 {
            total_minutes += seconds as f64 / 60.0;
            days_with_data += 1;
        }
    }

    let average = if days_with_data > 0 {
        total_minutes / days_with_data as f64
    } else {
        0.0
    };

    RollingAverage {
        average,
        days_with_data,
        use_average: days_with_data >= days,
    }
}

/// Goal progress as a percentage, capped at 100. Zero goal reads as 0.
pub fn progress_percentage(minutes: f64, goal_minutes: f64) -> f64 {
    if goal_minutes == 0.0 {
        return 0.0;
    }
    (minutes / goal_minutes * 100.0).min(100.0)
}

/// The configured goal for a period kind, in minutes.
pub fn goal_minutes(period: Period, config: &StatisticsConfig) -> f64 {
    match period {
        Period::Day => config.daily_goal_minutes as f64,
        Period::Month => config.monthly_goal_minutes as f64,
        Period::Year => config.yearly_goal_minutes as f64,
    }
}

/// Human label for a period at an offset ("today", "yesterday", "Aug 29",
/// a month name, or a year).
pub fn period_label(period: Period, offset: i32, now: DateTime<Utc>) -> String {
    match period {
        Period::Day => match offset {
            0 => "today".to_string(),
            -1 => "yesterday".to_string(),
            1 => "tomorrow".to_string(),
            _ => buckets::shift_days(now, offset as i64)
                .format("%b %-d")
                .to_string(),
        },
        Period::Month => buckets::shift_months(now, offset).format("%B").to_string(),
        Period::Year => buckets::year_key(buckets::shift_years(now, offset)),
    }
}

/// Compact minutes display: "45m", "2h", "2h 5m".
pub fn format_minutes_short(minutes: f64) -> String {
    let rounded = minutes.round() as u64;
    if rounded < 60 {
        return format!("{rounded}m");
    }
    let hours = rounded / 60;
    let mins = rounded % 60;
    if mins == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {mins}m")
    }
}
