use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use climateqa_core::{ClimateRecord, QueryLogEntry};

use crate::api_error::ApiError;
use crate::AppState;

/// `GET /history` — every logged query, unpaginated.
pub async fn history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<QueryLogEntry>>, ApiError> {
    Ok(Json(state.query_service.history().await?))
}

/// `GET /climate-data` — every climate record, for the frontend map.
pub async fn climate_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ClimateRecord>>, ApiError> {
    Ok(Json(state.query_service.climate_data().await?))
}
