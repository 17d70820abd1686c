use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crease_core::error::ServiceError;

use crate::dto::ErrorResponse;

/// Message shown to pollers; details stay in the server log.
pub const UNAVAILABLE_MESSAGE: &str = "Unable to fetch live score";

/// Wrapper so we can implement `IntoResponse` for `ServiceError`.
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ServiceError::Unavailable(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, UNAVAILABLE_MESSAGE)
            }
        };

        let body = ErrorResponse {
            ok: false,
            error: message.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}
