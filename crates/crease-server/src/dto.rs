use serde::Serialize;

use crease_core::{BallFormat, Snapshot};

// ---------------------------------------------------------------------------
// Score
// ---------------------------------------------------------------------------

/// Document polled by the overlay page.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ScoreResponse {
    pub ok: bool,
    pub batsman1: String,
    pub batsman2: String,
    /// `"<runs>-<wickets> (<overs>)"`
    pub score: String,
    pub bowler: String,
    /// Current run rate
    pub crr: String,
    /// Recent deliveries, oldest first: `"dot"`/`"run"`/`"wicket"`, or raw
    /// symbols when the server runs with the `symbols` ball format
    pub balls: Vec<String>,
    /// Present (and true) when the state came from the freshness cache
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached: Option<bool>,
    /// Source URL the state was extracted from
    pub from: String,
}

impl ScoreResponse {
    pub fn from_snapshot(snapshot: Snapshot, format: BallFormat) -> Self {
        let Snapshot { resolution, cached } = snapshot;
        let state = resolution.state;

        Self {
            ok: true,
            batsman1: state.batsman1,
            batsman2: state.batsman2,
            score: state.score,
            bowler: state.bowler,
            crr: state.crr,
            balls: state
                .balls
                .iter()
                .map(|b| b.render(format).to_string())
                .collect(),
            cached: cached.then_some(true),
            from: resolution.source,
        }
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub match_id: String,
    /// Candidate sources in priority order
    pub sources: Vec<String>,
    pub cache_ttl_ms: u64,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}
