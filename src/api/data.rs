use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::AppState;
use crate::domain::{DailyTarget, LogTime};
use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataResponse {
    pub log_entries: Vec<LogTime>,
    pub daily_target: DailyTarget,
}

pub async fn get_data(State(state): State<AppState>) -> Result<Json<DataResponse>, AppError> {
    let log_entries = state
        .repo
        .list_entries()
        .await
        .map_err(|_| AppError::Internal("Failed to fetch data".into()))?;
    let daily_target = state
        .repo
        .get_target()
        .await
        .map_err(|_| AppError::Internal("Failed to fetch data".into()))?;

    Ok(Json(DataResponse {
        log_entries,
        daily_target,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_response_shape() {
        let body = DataResponse {
            log_entries: vec![LogTime::new(0)],
            daily_target: DailyTarget::new(4),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["logEntries"][0], "1970-01-01T00:00:00.000Z");
        assert_eq!(json["dailyTarget"], 4);
    }
}
