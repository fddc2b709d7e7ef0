use super::{api_error, ApiError};
use crate::{
    dto::{CachedQueryResponse, HazardQueryParams, HazardResponse, RecentQueryParams},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use hazard_zone_application::use_cases::hazard::DEFAULT_RECENT_LIMIT;
use hazard_zone_domain::Coordinate;
use tracing::{debug, error, instrument, warn};

/// Resolution itself never fails; only unparseable coordinates are rejected.
#[instrument(skip(state), name = "api_get_hazard")]
pub async fn get_hazard(
    State(state): State<AppState>,
    Query(params): Query<HazardQueryParams>,
) -> Result<Json<HazardResponse>, ApiError> {
    let coordinate = Coordinate::parse(&params.latitude, &params.longitude).map_err(|e| {
        warn!(error = %e, "Rejected hazard query");
        api_error(StatusCode::BAD_REQUEST, e.to_string())
    })?;

    let result = state
        .resolve_hazard
        .execute(coordinate, params.parcel_id.as_deref())
        .await;

    debug!(source = %result.source, tier = %result.tier, "Hazard query answered");
    Ok(Json(result.into()))
}

#[instrument(skip(state), name = "api_get_recent_queries")]
pub async fn get_recent_queries(
    State(state): State<AppState>,
    Query(params): Query<RecentQueryParams>,
) -> Result<Json<Vec<CachedQueryResponse>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_RECENT_LIMIT);

    match state.get_recent.execute(limit).await {
        Ok(entries) => {
            debug!(count = entries.len(), "Recent queries retrieved");
            Ok(Json(
                entries
                    .into_iter()
                    .map(CachedQueryResponse::from_entry)
                    .collect(),
            ))
        }
        Err(e) => {
            error!(error = %e, "Failed to retrieve recent queries");
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
