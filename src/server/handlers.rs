use super::error::ApiError;
use super::state::AppState;
use crate::queries;
use crate::utils::constants::PRECIPITATION_SINCE;
use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Route listing served at `/`.
pub async fn home() -> &'static str {
    "Available Routes:\n\
     /api/v1.0/precipitation\n\
     /api/v1.0/stations\n\
     /api/v1.0/tobs\n\
     /api/v1.0/<start>\n\
     /api/v1.0/<start>/<end>\n"
}

/// Precipitation readings after the fixed snapshot cutoff date.
pub async fn precipitation(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<NaiveDate, Option<f64>>>, ApiError> {
    let since = queries::parse_date(PRECIPITATION_SINCE)?;
    let series = queries::precipitation_since(&state.store, since)?;
    Ok(Json(series))
}

pub async fn stations(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let names = queries::station_names(&state.store)?;
    Ok(Json(names))
}

/// Last year of temperature observations for the most active station.
pub async fn tobs(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<NaiveDate, f64>>, ApiError> {
    let series = queries::active_station_observations(&state.store)?;
    Ok(Json(series))
}

pub async fn temperature_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<queries::TemperatureSummary>, ApiError> {
    let start = queries::parse_date(&start)?;
    let summary = queries::temperature_summary(&state.store, start, None)?;
    Ok(Json(summary))
}

pub async fn temperature_range(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<queries::TemperatureSummary>, ApiError> {
    let start = queries::parse_date(&start)?;
    let end = queries::parse_date(&end)?;
    let summary = queries::temperature_summary(&state.store, start, Some(end))?;
    Ok(Json(summary))
}
