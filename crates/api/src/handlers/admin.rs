use super::{api_error, ApiError};
use crate::{
    dto::{ImportRequest, MessageResponse},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use hazard_zone_domain::DomainError;
use hazard_zone_infrastructure::geojson::{SAMPLE_FEATURE_COLLECTION, SAMPLE_SOURCE};
use std::path::Path;
use tracing::{error, info, instrument, warn};

#[instrument(skip(state), name = "api_initialize_store")]
pub async fn initialize_store(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.provision_store.execute().await.map_err(|e| {
        error!(error = %e, "Polygon store initialization failed");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(MessageResponse::new("Polygon store initialized")))
}

#[instrument(skip(state), name = "api_import_features")]
pub async fn import_features(
    State(state): State<AppState>,
    Json(req): Json<ImportRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let _guard = state.import_lock.lock().await;

    match state
        .import_features
        .import_file(Path::new(&req.file_path))
        .await
    {
        Ok(true) => {
            info!(path = %req.file_path, "Feature collection imported");
            Ok(Json(MessageResponse::new(format!(
                "Imported flood data from {}",
                req.file_path
            ))))
        }
        Ok(false) => {
            warn!(path = %req.file_path, "Feature collection missing or unreadable");
            Err(api_error(
                StatusCode::BAD_REQUEST,
                format!("File not found or not a feature collection: {}", req.file_path),
            ))
        }
        Err(e) => {
            error!(path = %req.file_path, error = %e, "Feature import failed");
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

/// Provisions the store, then loads the built-in Auckland sample collection.
#[instrument(skip(state), name = "api_load_sample_data")]
pub async fn load_sample_data(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let _guard = state.import_lock.lock().await;

    let loaded = seed_sample(&state).await.map_err(|e| {
        error!(error = %e, "Sample data load failed");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(MessageResponse::new(format!(
        "Loaded {loaded} sample flood polygons"
    ))))
}

async fn seed_sample(state: &AppState) -> Result<u64, DomainError> {
    state.provision_store.execute().await?;
    state
        .import_features
        .import_text(SAMPLE_FEATURE_COLLECTION, SAMPLE_SOURCE)
        .await
}
