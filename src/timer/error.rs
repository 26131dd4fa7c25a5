//! Error types for countdown construction

use thiserror::Error;

/// Errors raised when a countdown is built from bad parameters.
///
/// Construction is the only fallible operation in the countdown core;
/// everything after a successful build is total.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidConfiguration {
    #[error("agenda must contain at least one segment")]
    EmptyAgenda,

    #[error("segment {index} has an empty name")]
    EmptySegmentName { index: usize },

    #[error("segment \"{name}\" has a zero duration")]
    ZeroSegmentDuration { name: String },

    #[error("total meeting duration must be positive")]
    ZeroTotalDuration,

    #[error("meeting length of {minutes} minutes overflows the countdown")]
    MeetingTooLong { minutes: u64 },

    #[error("malformed agenda entry \"{entry}\", expected NAME:MINUTES")]
    MalformedAgendaEntry { entry: String },
}
