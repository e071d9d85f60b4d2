//! HTTP handlers for county weather endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use shared::ForecastRecord;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::weather::{CountySummary, RainfallSummary};
use crate::AppState;

/// County name as typed in the selector
#[derive(Debug, Deserialize, Validate)]
pub struct CountyPath {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}

impl CountyPath {
    fn validated(self) -> AppResult<String> {
        self.validate().map_err(|e| AppError::Validation {
            field: "name".to_string(),
            message: e.to_string(),
        })?;
        Ok(self.name)
    }
}

/// List counties for the selector
pub async fn list_counties(State(state): State<AppState>) -> Json<Vec<CountySummary>> {
    Json(state.weather.list_counties())
}

/// Get the full forecast for a county
pub async fn get_county_forecast(
    State(state): State<AppState>,
    Path(path): Path<CountyPath>,
) -> AppResult<Json<ForecastRecord>> {
    let name = path.validated()?;
    let forecast = state.weather.get_forecast(&name)?;
    Ok(Json(forecast))
}

/// Get the 30-day rainfall digest for a county
pub async fn get_rainfall_summary(
    State(state): State<AppState>,
    Path(path): Path<CountyPath>,
) -> AppResult<Json<RainfallSummary>> {
    let name = path.validated()?;
    let summary = state.weather.get_rainfall_summary(&name)?;
    Ok(Json(summary))
}
