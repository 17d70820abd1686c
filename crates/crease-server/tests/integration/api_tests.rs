use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::integration::common::{INDEX_HTML, MATCH_ID, setup_test_app, setup_test_app_with};

async fn get_json(router: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn score_returns_extracted_state() {
    let app = setup_test_app(&["live"]).await;

    let (status, json) = get_json(app.router.clone(), "/api/score").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ok"], true);
    assert_eq!(json["score"], "45-2 (6.3)");
    assert_eq!(json["crr"], "6.92");
    assert_eq!(json["batsman1"], "Ranchhod R 12(9)");
    assert_eq!(json["batsman2"], "Dev Patel 5(8)");
    assert_eq!(json["bowler"], "Meer Khan 1-12 (2)");
    assert_eq!(
        json["balls"],
        serde_json::json!(["dot", "run", "run", "wicket", "run", "dot"])
    );
    assert_eq!(json["from"], app.url("live"));
    assert!(json.get("cached").is_none());
}

#[tokio::test]
async fn second_poll_within_ttl_is_cached_and_skips_fetch() {
    let app = setup_test_app(&["live"]).await;

    let (_, first) = get_json(app.router.clone(), "/api/score").await;
    let (status, second) = get_json(app.router.clone(), "/api/score").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["cached"], true);
    for field in ["batsman1", "batsman2", "score", "bowler", "crr", "balls", "from"] {
        assert_eq!(first[field], second[field], "{field}");
    }
    assert_eq!(app.hits.get("live"), 1);
}

#[tokio::test]
async fn falls_back_past_failing_sources_in_order() {
    let app = setup_test_app(&["down", "missing", "live", "empty"]).await;

    let (status, json) = get_json(app.router.clone(), "/api/score").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["from"], app.url("live"));
    assert_eq!(app.hits.get("down"), 1);
    assert_eq!(app.hits.get("missing"), 1);
    assert_eq!(app.hits.get("live"), 1);
    assert_eq!(app.hits.get("empty"), 0);
}

#[tokio::test]
async fn empty_page_yields_defaulted_state() {
    let app = setup_test_app(&["empty"]).await;

    let (status, json) = get_json(app.router.clone(), "/api/score").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["score"], "0-0 (0.0)");
    assert_eq!(json["batsman1"], "Batter 1 0(0)");
    assert_eq!(json["batsman2"], "Batter 2 0(0)");
    assert_eq!(json["bowler"], "Bowler 0-0 (0)");
    assert_eq!(json["crr"], "0.00");
    assert_eq!(json["balls"], serde_json::json!(vec!["dot"; 6]));
}

#[tokio::test]
async fn all_sources_failing_returns_500() {
    let app = setup_test_app(&["down", "missing"]).await;

    let (status, json) = get_json(app.router.clone(), "/api/score").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json,
        serde_json::json!({"ok": false, "error": "Unable to fetch live score"})
    );
    assert_eq!(app.hits.total(), 2);
}

#[tokio::test]
async fn failures_are_not_cached() {
    let app = setup_test_app(&["down"]).await;

    get_json(app.router.clone(), "/api/score").await;
    get_json(app.router.clone(), "/api/score").await;

    assert_eq!(app.hits.get("down"), 2);
}

#[tokio::test]
async fn symbols_ball_format() {
    let app = setup_test_app_with(&["live"], &[("CREASE_BALL_FORMAT", "symbols")]).await;

    let (_, json) = get_json(app.router.clone(), "/api/score").await;

    assert_eq!(
        json["balls"],
        serde_json::json!([".", "1", "4", "W", "2", "."])
    );
}

#[tokio::test]
async fn zero_ttl_disables_caching() {
    let app = setup_test_app_with(&["live"], &[("CREASE_CACHE_TTL_MS", "0")]).await;

    get_json(app.router.clone(), "/api/score").await;
    let (_, json) = get_json(app.router.clone(), "/api/score").await;

    assert!(json.get("cached").is_none());
    assert_eq!(app.hits.get("live"), 2);
}

#[tokio::test]
async fn health_lists_sources_in_priority_order() {
    let app = setup_test_app(&["down", "live"]).await;

    let (status, json) = get_json(app.router.clone(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["match_id"], MATCH_ID);
    assert_eq!(
        json["sources"],
        serde_json::json!([app.url("down"), app.url("live")])
    );
    assert_eq!(json["cache_ttl_ms"], 2500);
    assert_eq!(app.hits.total(), 0);
}

#[tokio::test]
async fn overlay_page_is_served_from_static_dir() {
    let app = setup_test_app(&["live"]).await;

    let response = app
        .router
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(body, INDEX_HTML.as_bytes());
}

#[tokio::test]
async fn openapi_document_describes_score_endpoint() {
    let app = setup_test_app(&["live"]).await;

    let (status, json) = get_json(app.router.clone(), "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/api/score"]["get"].is_object());
    assert!(json["paths"]["/health"]["get"].is_object());
}
