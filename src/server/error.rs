use crate::error::ClimateError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{debug, error};

/// Adapter-side wrapper translating engine errors into HTTP responses.
pub struct ApiError(ClimateError);

impl From<ClimateError> for ApiError {
    fn from(err: ClimateError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ClimateError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ClimateError::NotFound(_) => StatusCode::NOT_FOUND,
            ClimateError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(status = %status, "request failed: {}", self.0);
        } else {
            debug!(status = %status, "request rejected: {}", self.0);
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
