use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::api::{AppState, SuccessResponse};
use crate::domain::LogTime;
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub success: bool,
    pub timestamp: LogTime,
}

pub async fn post_log(State(state): State<AppState>) -> Result<Json<LogResponse>, AppError> {
    let timestamp = state
        .repo
        .add_entry()
        .await
        .map_err(|_| AppError::Internal("Failed to log entry".into()))?;

    info!(%timestamp, "Entry logged");
    Ok(Json(LogResponse {
        success: true,
        timestamp,
    }))
}

pub async fn post_undo(State(state): State<AppState>) -> Result<Json<SuccessResponse>, AppError> {
    let removed = state
        .repo
        .remove_last_entry()
        .await
        .map_err(|_| AppError::Internal("Failed to remove entry".into()))?;

    if !removed {
        return Err(AppError::BadRequest("No entries to remove".into()));
    }

    info!("Last entry removed");
    Ok(Json(SuccessResponse::ok()))
}
