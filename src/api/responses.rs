//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::TimerSnapshot;
use crate::timer::Segment;

/// API response structure for timer control endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerSnapshot,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, timer: TimerSnapshot) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            timer,
        }
    }

    /// Create a response for a running countdown
    pub fn running(message: String, timer: TimerSnapshot) -> Self {
        Self::new("running".to_string(), message, timer)
    }

    /// Create a response for a paused or reset countdown
    pub fn paused(message: String, timer: TimerSnapshot) -> Self {
        Self::new("paused".to_string(), message, timer)
    }

    /// Create a response for a finished countdown
    pub fn complete(message: String, timer: TimerSnapshot) -> Self {
        Self::new("complete".to_string(), message, timer)
    }

    /// Pick the right status for a snapshot
    pub fn for_snapshot(message: String, timer: TimerSnapshot) -> Self {
        if timer.complete {
            Self::complete(message, timer)
        } else if timer.running {
            Self::running(message, timer)
        } else {
            Self::paused(message, timer)
        }
    }
}

/// Enhanced status response with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerSnapshot,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Agenda listing returned by GET /agenda
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaResponse {
    pub segments: Vec<Segment>,
    pub total_secs: u64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
