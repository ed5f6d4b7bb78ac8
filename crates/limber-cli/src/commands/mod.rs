pub mod config;
pub mod run;
pub mod stats;
pub mod theme;
pub mod timer;

use std::sync::Arc;

use limber_core::{Config, NullNotifier, Store, TimerController};

/// Open the store and build a controller for one-shot commands.
///
/// Commands never fire notifications themselves (only the daemon's tick
/// loop does), so they get the null dispatcher.
pub async fn controller() -> Result<TimerController<NullNotifier>, Box<dyn std::error::Error>> {
    let store = Arc::new(Store::open()?);
    store.initialize_defaults().await?;
    let config = Config::load_or_default();
    Ok(TimerController::from_config(store, NullNotifier, &config))
}
