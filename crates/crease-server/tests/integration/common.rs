use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use tempfile::TempDir;

use crease_core::CreaseConfig;
use crease_server::routes;
use crease_server::state::AppState;

pub const MATCH_ID: &str = "4242";

/// Scorecard text served by the stub upstream. Recent balls come first so
/// they are the first lone symbols on the page.
pub const LIVE_PAGE: &str = "Recent: • 1 4 W 2 • | Strikers 45-2 (6.3) CRR: 6.92 \
    Ranchhod R 12(9) Dev Patel 5(8) Meer Khan 1-12 (2)";

pub const INDEX_HTML: &str = "<html><body><div id=\"score\"></div></body></html>";

/// Per-path hit counters of the stub upstream.
#[derive(Clone, Default)]
pub struct Hits(Arc<Mutex<HashMap<String, usize>>>);

impl Hits {
    fn record(&self, kind: &str) {
        *self.0.lock().unwrap().entry(kind.to_string()).or_default() += 1;
    }

    pub fn get(&self, kind: &str) -> usize {
        self.0.lock().unwrap().get(kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.lock().unwrap().values().sum()
    }
}

pub struct TestApp {
    pub router: Router,
    pub upstream: SocketAddr,
    pub hits: Hits,
    /// Keeps the static directory alive for the duration of the test.
    pub _static_dir: TempDir,
}

impl TestApp {
    pub fn url(&self, kind: &str) -> String {
        format!("http://{}/{kind}/{MATCH_ID}", self.upstream)
    }
}

async fn upstream_page(
    State(hits): State<Hits>,
    Path((kind, _id)): Path<(String, String)>,
) -> impl IntoResponse {
    hits.record(&kind);
    match kind.as_str() {
        "live" => (StatusCode::OK, LIVE_PAGE).into_response(),
        "empty" => (StatusCode::OK, "").into_response(),
        "down" => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Start a stub scorecard site on an ephemeral port.
async fn spawn_upstream(hits: Hits) -> SocketAddr {
    let app = Router::new()
        .route("/{kind}/{id}", get(upstream_page))
        .with_state(hits);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Build the app with candidate sources pointing at the stub upstream, one
/// per entry of `kinds`, in priority order.
pub async fn setup_test_app(kinds: &[&str]) -> TestApp {
    setup_test_app_with(kinds, &[]).await
}

pub async fn setup_test_app_with(kinds: &[&str], extra_env: &[(&str, &str)]) -> TestApp {
    let hits = Hits::default();
    let upstream = spawn_upstream(hits.clone()).await;

    let static_dir = TempDir::new().expect("Failed to create static dir");
    std::fs::write(static_dir.path().join("index.html"), INDEX_HTML).unwrap();

    let sources = kinds
        .iter()
        .map(|kind| format!("http://{upstream}/{kind}/{{match_id}}"))
        .collect::<Vec<_>>()
        .join(",");

    let mut env: HashMap<String, String> = HashMap::from([
        ("MATCH_ID".to_string(), MATCH_ID.to_string()),
        ("CREASE_SOURCES".to_string(), sources),
        ("CREASE_FETCH_TIMEOUT_SECS".to_string(), "5".to_string()),
        (
            "CREASE_STATIC_DIR".to_string(),
            static_dir.path().display().to_string(),
        ),
    ]);
    for (k, v) in extra_env {
        env.insert(k.to_string(), v.to_string());
    }

    let config = CreaseConfig::from_lookup(|key| env.get(key).cloned())
        .expect("Test configuration is valid");
    let state = Arc::new(AppState::from_config(&config).expect("Failed to build app state"));

    TestApp {
        router: routes::router(state),
        upstream,
        hits,
        _static_dir: static_dir,
    }
}
