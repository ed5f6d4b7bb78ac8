use serde::{Deserialize, Serialize};

use crate::duration::DEFAULT_TIMER_SECONDS;

/// The canonical persisted timer record.
///
/// Exclusively owned by the store; the tick controller is the sole writer,
/// with user commands routed through the same store. `remaining_secs` can
/// never go negative (unsigned plus reset-on-zero within the same tick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Seconds left on the countdown.
    pub remaining_secs: u64,
    /// Whether ticks currently decrement the countdown.
    pub is_running: bool,
    /// The duration the countdown resets to, in seconds. Always >= 1.
    pub custom_duration_secs: u64,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            remaining_secs: DEFAULT_TIMER_SECONDS,
            is_running: false,
            custom_duration_secs: DEFAULT_TIMER_SECONDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_forty_minutes_idle() {
        let state = TimerState::default();
        assert_eq!(state.remaining_secs, 2400);
        assert_eq!(state.custom_duration_secs, 2400);
        assert!(!state.is_running);
    }
}
