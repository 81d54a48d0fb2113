use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::{debug, info};

use crate::api::{AppState, SuccessResponse};
use crate::domain::DailyTarget;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct TargetRequest {
    pub target: Option<serde_json::Value>,
}

pub async fn post_target(
    State(state): State<AppState>,
    payload: Result<Json<TargetRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, AppError> {
    let invalid = || AppError::BadRequest("Invalid target value".into());

    let Json(request) = payload.map_err(|rejection| {
        debug!(error = %rejection, "Rejected target body");
        invalid()
    })?;
    let target = request
        .target
        .as_ref()
        .ok_or_else(invalid)
        .and_then(|value| DailyTarget::try_from(value).map_err(|_| invalid()))?;

    state
        .repo
        .set_target(target)
        .await
        .map_err(|_| AppError::Internal("Failed to save target".into()))?;

    info!(target = target.get(), "Daily target updated");
    Ok(Json(SuccessResponse::ok()))
}
