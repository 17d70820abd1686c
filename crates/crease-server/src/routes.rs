use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::dto::{HealthResponse, ScoreResponse};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router: API routes, docs, and the overlay page as fallback.
pub fn router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/api/score", get(score))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(static_files)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Score
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/score",
    responses(
        (status = 200, description = "Current match state", body = ScoreResponse),
        (status = 500, description = "Every candidate source failed", body = crate::dto::ErrorResponse),
    ),
    tag = "score"
)]
pub async fn score(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.service.current().await?;
    let response = ScoreResponse::from_snapshot(snapshot, state.ball_format);

    Ok(axum::Json(response))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy",
        match_id: state.match_id.to_string(),
        sources: state.service.sources().urls(),
        cache_ttl_ms: state.service.ttl().as_millis() as u64,
    };

    axum::Json(response)
}
