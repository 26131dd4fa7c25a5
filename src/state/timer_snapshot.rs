//! Point-in-time view of the countdown for watchers and API responses

use serde::{Deserialize, Serialize};

use crate::timer::Countdown;

/// Serializable snapshot of the countdown state.
///
/// Published on the watch channel after every mutation so readers never
/// need to take the timer lock themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub running: bool,
    pub elapsed_secs: u64,
    pub remaining_secs: u64,
    /// Remaining time rendered as zero-padded MM:SS
    pub remaining_display: String,
    /// Progress fraction in [0, 1]
    pub progress: f64,
    /// Active segment name, or "complete" once finished
    pub current_segment: String,
    pub complete: bool,
}

impl TimerSnapshot {
    /// Capture the current state of a countdown
    pub fn of(timer: &Countdown) -> Self {
        Self {
            running: timer.is_running(),
            elapsed_secs: timer.elapsed_secs(),
            remaining_secs: timer.remaining_secs(),
            remaining_display: timer.format_remaining(),
            progress: timer.progress(),
            current_segment: timer.current_segment().to_string(),
            complete: timer.is_complete(),
        }
    }
}
