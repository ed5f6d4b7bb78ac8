//! Duration conversion, validation and display formatting.
//!
//! Validation keeps the original product's policy: out-of-range minutes or
//! seconds reset to zero rather than clamping to 59, and 24 hours is the
//! ceiling expressed as exactly 24:00:00. Compatibility depends on this
//! exact behavior.

/// Default countdown: 40 minutes.
pub const DEFAULT_TIMER_SECONDS: u64 = 40 * 60;
/// Smallest duration a user may set.
pub const MIN_TIMER_SECONDS: u64 = 1;
pub const MAX_HOURS: u64 = 24;
pub const MAX_MINUTES: u64 = 59;
pub const MAX_SECONDS: u64 = 59;

/// Convert an (hours, minutes, seconds) triple to total seconds.
///
/// No validation here; pair with [`validate_time`].
pub fn to_seconds(hours: u64, minutes: u64, seconds: u64) -> u64 {
    hours * 3600 + minutes * 60 + seconds
}

/// Split total seconds into an (hours, minutes, seconds) triple.
pub fn split_seconds(total: u64) -> (u64, u64, u64) {
    (total / 3600, (total % 3600) / 60, total % 60)
}

/// Validate an (hours, minutes, seconds) triple.
///
/// Hours clamp to at most 24. Minutes or seconds above 59 reset to 0
/// (not clamped). At exactly 24 hours, minutes and seconds are forced to 0.
pub fn validate_time(hours: u64, minutes: u64, seconds: u64) -> (u64, u64, u64) {
    let h = hours.min(MAX_HOURS);
    let mut m = if minutes > MAX_MINUTES { 0 } else { minutes };
    let mut s = if seconds > MAX_SECONDS { 0 } else { seconds };

    if h == MAX_HOURS {
        m = 0;
        s = 0;
    }

    (h, m, s)
}

/// Render seconds for display: `HH:MM:SS` from one hour up (hours
/// unbounded, no modulo 24), `MM:SS` below.
pub fn format_time(total_seconds: u64) -> String {
    let (hours, minutes, seconds) = split_seconds(total_seconds);
    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Enforce the 1-second minimum on a user-supplied duration.
pub fn clamp_duration(total_seconds: u64) -> u64 {
    total_seconds.max(MIN_TIMER_SECONDS)
}
