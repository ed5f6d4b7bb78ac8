//! # Limber Core Library
//!
//! Core business logic for Limber, a countdown stretch-break timer with
//! usage statistics. The CLI binary (daemon plus command surface) is a thin
//! layer over this library.
//!
//! ## Architecture
//!
//! - **Timer Controller**: a tick-driven state machine over one persisted
//!   timer record; the daemon invokes `tick()` once per scheduling interval
//!   and the controller decrements exactly one unit per call
//! - **Usage Ledger**: day/month/year bucketed usage accounting, incremented
//!   once per running tick
//! - **Storage**: SQLite key-value persistence and TOML-based configuration
//! - **Stats**: read-only aggregation (rolling average, goal progress,
//!   period navigation)
//!
//! ## Key Components
//!
//! - [`TimerController`]: command and tick surface, sole writer of state
//! - [`Store`]: persisted timer record and ledger
//! - [`Config`]: application configuration management
//! - [`Notifier`]: collaborator seam for completion notifications

pub mod buckets;
pub mod duration;
pub mod error;
pub mod events;
pub mod ledger;
pub mod notify;
pub mod stats;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, StorageError};
pub use events::Event;
pub use ledger::UsageLedger;
pub use notify::{Notifier, NullNotifier};
pub use stats::{Period, RollingAverage};
pub use storage::{Config, Store};
pub use timer::{DisplayState, TimerController, TimerState};
