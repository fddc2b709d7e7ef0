pub mod admin;
pub mod hazard;
pub mod health;

pub use admin::{import_features, initialize_store, load_sample_data};
pub use hazard::{get_hazard, get_recent_queries};
pub use health::health_check;

use crate::dto::ErrorResponse;
use axum::{http::StatusCode, Json};

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse::new(message)))
}
