use crate::api_models::{FlightRecord, RegionFlightRecord};
use crate::error::ApiError;
use crate::extractors::params::{Callsign, ValidatedBoundingBox};
use crate::fetcher::StatesFetcher;
use axum::Json;
use axum::extract::State;

/// On success, returns the [`FlightRecord`] whose callsign matches the `callsign` query parameter
pub async fn track(
    State(upstream): State<StatesFetcher>,
    Callsign(callsign): Callsign,
) -> Result<Json<FlightRecord>, ApiError> {
    let record = upstream.track(&callsign).await?;
    Ok(Json(record))
}

/// On success, returns every aircraft upstream reports inside the bounding box, possibly none
pub async fn region(
    State(upstream): State<StatesFetcher>,
    ValidatedBoundingBox(bounds): ValidatedBoundingBox,
) -> Result<Json<Vec<RegionFlightRecord>>, ApiError> {
    let records = upstream.region(bounds).await?;
    Ok(Json(records))
}
