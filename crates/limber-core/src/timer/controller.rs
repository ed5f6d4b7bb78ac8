//! Tick-driven timer controller.
//!
//! The controller is the sole writer of the persisted timer record and the
//! usage ledger. It has no internal thread and no clock of its own: the
//! daemon calls [`TimerController::tick`] once per scheduling interval, and
//! every tick decrements the countdown by exactly one unit regardless of
//! how late the host actually fired. Drift against wall-clock time
//! accumulates and is accepted.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -(start)-> Running -(pause)-> Idle
//! Running -(tick reaches zero)-> Idle, countdown reset, completion fired
//! any -(reset | set_duration)-> Idle
//! ```
//!
//! Ticks must stay sequential: a caller awaits each `tick()` before issuing
//! the next, so two tick transactions are never in flight at once.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::duration::{clamp_duration, format_time, MIN_TIMER_SECONDS};
use crate::error::Result;
use crate::events::Event;
use crate::notify::Notifier;
use crate::storage::{Config, NotificationsConfig, Store};
use crate::timer::TimerState;
use crate::CoreError;

/// What the view layer needs to render the countdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayState {
    pub formatted_time: String,
    pub is_running: bool,
}

/// Command and tick surface over the persisted timer record.
///
/// One canonical implementation; statistics tracking is a parameter, not a
/// separate copy of the timer logic.
pub struct TimerController<N: Notifier> {
    store: Arc<Store>,
    notifier: N,
    notifications: NotificationsConfig,
    track_stats: bool,
}

impl<N: Notifier> TimerController<N> {
    pub fn new(
        store: Arc<Store>,
        notifier: N,
        notifications: NotificationsConfig,
        track_stats: bool,
    ) -> Self {
        Self {
            store,
            notifier,
            notifications,
            track_stats,
        }
    }

    /// Build from loaded configuration.
    pub fn from_config(store: Arc<Store>, notifier: N, config: &Config) -> Self {
        Self::new(
            store,
            notifier,
            config.notifications.clone(),
            config.statistics.enabled,
        )
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Idle -> Running. The countdown itself is untouched.
    /// Returns `None` if already running.
    pub async fn start(&self) -> Result<Option<Event>> {
        let state = self.store.timer_state().await?;
        if state.is_running {
            return Ok(None);
        }
        self.store.set_running(true).await?;
        Ok(Some(Event::TimerStarted {
            remaining_secs: state.remaining_secs,
            at: Utc::now(),
        }))
    }

    /// Running -> Idle. The countdown itself is untouched.
    /// Returns `None` if already idle.
    pub async fn pause(&self) -> Result<Option<Event>> {
        let state = self.store.timer_state().await?;
        if !state.is_running {
            return Ok(None);
        }
        self.store.set_running(false).await?;
        Ok(Some(Event::TimerPaused {
            remaining_secs: state.remaining_secs,
            at: Utc::now(),
        }))
    }

    /// Any state -> Idle with the countdown back at the custom duration.
    pub async fn reset(&self) -> Result<Event> {
        let mut state = self.store.timer_state().await?;
        state.is_running = false;
        state.remaining_secs = state.custom_duration_secs;
        self.store.set_timer_state(&state).await?;
        Ok(Event::TimerReset {
            remaining_secs: state.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Any state -> Idle with both the custom duration and the countdown set
    /// to `total_seconds` (clamped up to the 1-second minimum).
    pub async fn set_duration(&self, total_seconds: u64) -> Result<Event> {
        let duration = clamp_duration(total_seconds);
        if duration < MIN_TIMER_SECONDS {
            // Unreachable after clamping; kept so a future clamp change
            // cannot silently persist a zero duration.
            return Err(CoreError::InvalidDuration { seconds: duration });
        }
        let state = TimerState {
            remaining_secs: duration,
            is_running: false,
            custom_duration_secs: duration,
        };
        self.store.set_timer_state(&state).await?;
        Ok(Event::DurationSet {
            duration_secs: duration,
            at: Utc::now(),
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub async fn display_state(&self) -> Result<DisplayState> {
        let state = self.store.timer_state().await?;
        Ok(DisplayState {
            formatted_time: format_time(state.remaining_secs),
            is_running: state.is_running,
        })
    }

    /// Build a full state snapshot event.
    pub async fn snapshot(&self) -> Result<Event> {
        let state = self.store.timer_state().await?;
        Ok(Event::StateSnapshot {
            remaining_secs: state.remaining_secs,
            is_running: state.is_running,
            custom_duration_secs: state.custom_duration_secs,
            formatted_time: format_time(state.remaining_secs),
            at: Utc::now(),
        })
    }

    // ── Tick ─────────────────────────────────────────────────────────

    /// Advance the state machine by one tick at `now`.
    ///
    /// No-op while idle. While running: decrement by 1, account one unit of
    /// usage, and on reaching zero reset the countdown, stop, and fire the
    /// completion notification. The state and ledger updates commit in a
    /// single transaction; if it fails the tick's mutation is abandoned and
    /// the error surfaces to the caller, which retries on the next tick.
    pub async fn tick(&self, now: DateTime<Utc>) -> Result<Option<Event>> {
        let state = self.store.timer_state().await?;
        if !state.is_running {
            return Ok(None);
        }

        // remaining_secs of 0 while running should not happen given the
        // reset-on-zero invariant; treat it as reaching zero this tick.
        let completed = state.remaining_secs <= 1;
        let next = if completed {
            TimerState {
                remaining_secs: state.custom_duration_secs,
                is_running: false,
                ..state
            }
        } else {
            TimerState {
                remaining_secs: state.remaining_secs - 1,
                ..state
            }
        };

        if self.track_stats {
            let mut ledger = self.store.ledger().await?;
            ledger.record_one_unit(now);
            self.store.commit_tick(&next, &ledger).await?;
        } else {
            self.store.set_timer_state(&next).await?;
        }

        if completed {
            if self.notifications.enabled {
                self.notifier.notify(
                    &self.notifications.title,
                    &self.notifications.message,
                    &self.notifications.icon,
                );
            }
            return Ok(Some(Event::TimerCompleted {
                duration_secs: next.custom_duration_secs,
                at: now,
            }));
        }
        Ok(None)
    }
}
