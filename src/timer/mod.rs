//! Meeting countdown core
//!
//! This module contains the pure countdown state machine and the agenda
//! segment types it runs over. Nothing here touches the runtime or the
//! HTTP layer; ticks are fed in from the outside and events come back out.

pub mod agenda;
pub mod countdown;
pub mod error;
pub mod segment;

// Re-export main types
pub use agenda::level_ten_agenda;
pub use countdown::{format_remaining, Countdown, TimerEvent, COMPLETE};
pub use error::InvalidConfiguration;
pub use segment::{parse_agenda, Segment};
