pub mod cache;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod resolve;
pub mod service;
pub mod sources;
pub mod traits;

#[cfg(test)]
pub mod testutil;

pub use cache::FreshnessCache;
pub use config::CreaseConfig;
pub use error::{ConfigError, FetchError, ResolveError, ServiceError};
pub use extract::extract;
pub use models::{
    Ball, BallFormat, CandidateSource, MatchId, MatchState, RawPage, Resolution, Snapshot,
};
pub use resolve::FallbackResolver;
pub use service::ScoreService;
pub use sources::SourceList;
pub use traits::{Clock, Fetcher, SystemClock};
