//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer in [`crate::db::services`].

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};

use super::dto::{HealthResponse, API_VERSION};
use super::error::AppError;
use super::state::AppState;
use crate::api::{DateRange, PrecipitationRecord, TemperatureObservation, TemperatureSummary};
use crate::db::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

const INDEX_HTML: &str = r#"<h2>Welcome to the Hawaii Climate API!</h2>
<ul>
<li><a href="/api/v1.0/precipitation">Precipitation</a>: <strong>/api/v1.0/precipitation</strong></li>
<li><a href="/api/v1.0/stations">Stations</a>: <strong>/api/v1.0/stations</strong></li>
<li><a href="/api/v1.0/tobs">TOBS</a>: <strong>/api/v1.0/tobs</strong></li>
<li>To retrieve min, avg, and max temperatures from a start date onward, use <strong>/api/v1.0/&lt;start&gt;</strong> (start date in yyyy-mm-dd format)</li>
<li>To retrieve min, avg, and max temperatures for a date range, use <strong>/api/v1.0/&lt;start&gt;/&lt;end&gt;</strong> (start and end dates in yyyy-mm-dd format)</li>
</ul>
"#;

// =============================================================================
// Index & Health
// =============================================================================

/// GET /
///
/// HTML index listing the available routes.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health
///
/// Verify the service is running and the dataset is reachable.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_status = match services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: API_VERSION.to_string(),
        database: db_status,
    })
}

// =============================================================================
// Dataset Endpoints
// =============================================================================

/// GET /api/v1.0/precipitation
///
/// Precipitation readings for the year before the latest observation.
pub async fn get_precipitation(
    State(state): State<AppState>,
) -> HandlerResult<Vec<PrecipitationRecord>> {
    let records = services::list_precipitation(state.repository.as_ref()).await?;
    tracing::debug!(rows = records.len(), "precipitation");
    Ok(Json(records))
}

/// GET /api/v1.0/stations
///
/// Every station code.
pub async fn get_stations(State(state): State<AppState>) -> HandlerResult<Vec<String>> {
    let stations = services::list_stations(state.repository.as_ref()).await?;
    Ok(Json(stations))
}

/// GET /api/v1.0/tobs
///
/// Temperature observations of the most active station for the trailing year.
pub async fn get_tobs(
    State(state): State<AppState>,
) -> HandlerResult<Vec<TemperatureObservation>> {
    let observations = services::list_temperature_observations(state.repository.as_ref()).await?;
    tracing::debug!(rows = observations.len(), "tobs");
    Ok(Json(observations))
}

/// GET /api/v1.0/{start}
///
/// `[min, avg, max]` temperature from `start` onward.
pub async fn get_temperature_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> HandlerResult<TemperatureSummary> {
    let range = DateRange::parse(&start, None)?;
    let summary = services::temperature_summary(state.repository.as_ref(), range).await?;
    Ok(Json(summary))
}

/// GET /api/v1.0/{start}/{end}
///
/// `[min, avg, max]` temperature between `start` and `end`, both inclusive.
pub async fn get_temperature_range(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> HandlerResult<TemperatureSummary> {
    let range = DateRange::parse(&start, Some(&end))?;
    let summary = services::temperature_summary(state.repository.as_ref(), range).await?;
    Ok(Json(summary))
}
