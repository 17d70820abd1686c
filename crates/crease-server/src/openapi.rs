use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Crease API",
        version = "0.1.0",
        description = "Live cricket match state scraped from public scorecards, for browser overlays."
    ),
    paths(crate::routes::score, crate::routes::health),
    components(schemas(
        crate::dto::ScoreResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "score", description = "Match state for overlay pollers"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
