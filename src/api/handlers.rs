//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::state::AppState;
use super::responses::{AgendaResponse, ApiResponse, HealthResponse, StatusResponse};

/// Handle POST /start - Start or resume the countdown
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.start() {
        Ok(snapshot) => {
            info!("Start endpoint called - countdown running");
            let message = if snapshot.complete {
                "Countdown already complete, reset to run again".to_string()
            } else {
                format!("Countdown running in segment {}", snapshot.current_segment)
            };
            Ok(Json(ApiResponse::for_snapshot(message, snapshot)))
        }
        Err(e) => {
            error!("Failed to start countdown: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /pause - Freeze the countdown at its current elapsed time
pub async fn pause_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.pause() {
        Ok(snapshot) => {
            info!("Pause endpoint called - countdown paused");
            Ok(Json(ApiResponse::for_snapshot(
                format!("Countdown paused with {} remaining", snapshot.remaining_display),
                snapshot,
            )))
        }
        Err(e) => {
            error!("Failed to pause countdown: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /reset - Return the countdown to its initial state
pub async fn reset_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.reset() {
        Ok(snapshot) => {
            info!("Reset endpoint called - countdown reset");
            Ok(Json(ApiResponse::paused(
                "Countdown reset".to_string(),
                snapshot,
            )))
        }
        Err(e) => {
            error!("Failed to reset countdown: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Current countdown state and server metadata
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let snapshot = match state.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to read timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer: snapshot,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /agenda - The configured segment list
pub async fn agenda_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AgendaResponse>, StatusCode> {
    match state.agenda() {
        Ok((segments, total_secs)) => Ok(Json(AgendaResponse {
            segments,
            total_secs,
        })),
        Err(e) => {
            error!("Failed to read agenda: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /health - Health check
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
