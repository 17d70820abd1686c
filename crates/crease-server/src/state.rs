use std::path::PathBuf;

use crease_client::ReqwestFetcher;
use crease_core::{BallFormat, CreaseConfig, MatchId, ScoreService, SystemClock};

/// Production service: live HTTP sources, wall-clock cache.
pub type LiveScoreService = ScoreService<ReqwestFetcher, SystemClock>;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub service: LiveScoreService,
    pub match_id: MatchId,
    pub ball_format: BallFormat,
    /// Directory served as the router fallback (the overlay page).
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn from_config(config: &CreaseConfig) -> anyhow::Result<Self> {
        let fetcher = ReqwestFetcher::with_options(&config.user_agent, config.fetch_timeout)?;
        let service = ScoreService::new(
            fetcher,
            config.sources()?,
            config.cache_ttl,
            SystemClock,
        );

        Ok(Self {
            service,
            match_id: config.match_id.clone(),
            ball_format: config.ball_format,
            static_dir: config.static_dir.clone(),
        })
    }
}
