mod controller;
mod state;

pub use controller::{DisplayState, TimerController};
pub use state::TimerState;
