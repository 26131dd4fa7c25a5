//! State management module
//!
//! This module contains the shared application state and the snapshot
//! type published to watchers.

pub mod app_state;
pub mod timer_snapshot;

// Re-export main types
pub use app_state::{shared_state, AppState};
pub use timer_snapshot::TimerSnapshot;
