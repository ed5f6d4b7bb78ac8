use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every state change in the system produces an Event.
/// The CLI prints them; the daemon logs them and fires notifications
/// off `TimerCompleted`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    DurationSet {
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// Countdown reached zero; the timer was reset to the custom duration
    /// and stopped within the same tick.
    TimerCompleted {
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        remaining_secs: u64,
        is_running: bool,
        custom_duration_secs: u64,
        formatted_time: String,
        at: DateTime<Utc>,
    },
}
