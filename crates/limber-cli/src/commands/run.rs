//! The background tick daemon.
//!
//! Owns the periodic tick source and drives the controller once per
//! interval. Ticks are strictly sequential -- each `tick()` is awaited
//! before the next interval fires -- and a failed tick is logged and
//! abandoned, never retried out of schedule; the next tick picks up from
//! whatever state persisted. No error stops the loop.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use clap::Args;
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::{info, trace, warn};

use limber_core::{Config, Store, TimerController};

use crate::notify::DesktopNotifier;

#[derive(Args)]
pub struct RunArgs {
    /// Override the configured tick interval, in seconds
    #[arg(long)]
    pub interval_secs: Option<u64>,
}

/// Build the repeating tick trigger.
///
/// Idempotent by construction: called once at process start, and the host
/// may coalesce or delay firings arbitrarily. Late ticks are not bursted
/// to catch up -- the state machine counts invocations, not wall-clock
/// time, so catch-up bursts would fast-forward the countdown.
fn tick_source(period_secs: u64) -> Interval {
    let mut source = interval(Duration::from_secs(period_secs.max(1)));
    source.set_missed_tick_behavior(MissedTickBehavior::Delay);
    source
}

pub async fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = Arc::new(Store::open()?);
    store.initialize_defaults().await?;

    let controller = TimerController::from_config(store, DesktopNotifier, &config);

    let period_secs = args.interval_secs.unwrap_or(config.tick.interval_secs);
    let mut ticks = tick_source(period_secs);
    info!(period_secs, "tick daemon started");

    loop {
        tokio::select! {
            _ = ticks.tick() => {
                match controller.tick(Utc::now()).await {
                    Ok(Some(event)) => info!(?event, "countdown completed"),
                    Ok(None) => trace!("tick"),
                    // Mutation abandoned; the next tick retries from
                    // whatever state persisted.
                    Err(e) => warn!(error = %e, "tick abandoned"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }
    Ok(())
}
