//! Meeting Timer - A timer-driven HTTP server for running Level 10 meetings
//!
//! This library drives a wall-clock countdown across the named segments of
//! a meeting agenda and exposes start/pause/reset control plus progress
//! and segment-transition reporting over HTTP.

pub mod api;
pub mod config;
pub mod state;
pub mod tasks;
pub mod timer;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use state::AppState;
pub use timer::{Countdown, InvalidConfiguration, Segment, TimerEvent};
pub use utils::signals::shutdown_signal;
