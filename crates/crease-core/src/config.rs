use std::path::PathBuf;
use std::time::Duration;

use crate::cache::DEFAULT_TTL;
use crate::error::ConfigError;
use crate::models::{BallFormat, MatchId};
use crate::sources::{DEFAULT_SOURCE_TEMPLATES, SourceList};

pub const DEFAULT_MATCH_ID: &str = "18726255";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Overlay Bot)";
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Process configuration for the overlay server.
#[derive(Debug, Clone)]
pub struct CreaseConfig {
    pub match_id: MatchId,
    pub port: u16,
    pub cache_ttl: Duration,
    pub fetch_timeout: Duration,
    pub user_agent: String,
    /// URL templates with a `{match_id}` placeholder, highest priority first.
    pub source_templates: Vec<String>,
    pub static_dir: PathBuf,
    pub ball_format: BallFormat,
}

impl CreaseConfig {
    /// Read configuration from environment variables.
    ///
    /// - `MATCH_ID` (optional, defaults to `18726255`)
    /// - `PORT` (optional, defaults to 8080)
    /// - `CREASE_CACHE_TTL_MS` (optional, defaults to 2500)
    /// - `CREASE_FETCH_TIMEOUT_SECS` (optional, defaults to 10, at least 1)
    /// - `CREASE_USER_AGENT` (optional)
    /// - `CREASE_SOURCES` (optional, comma-separated URL templates)
    /// - `CREASE_STATIC_DIR` (optional, defaults to `public`)
    /// - `CREASE_BALL_FORMAT` (optional, `tokens` or `symbols`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let match_id = MatchId::new(var("MATCH_ID").unwrap_or_else(|| DEFAULT_MATCH_ID.into()))?;

        let port = match var("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: "PORT",
                value: raw.clone(),
                reason: "must be a port number between 0 and 65535".into(),
            })?,
        };

        let cache_ttl = match var("CREASE_CACHE_TTL_MS") {
            None => DEFAULT_TTL,
            Some(raw) => Duration::from_millis(parse_u64("CREASE_CACHE_TTL_MS", &raw)?),
        };

        let fetch_timeout = match var("CREASE_FETCH_TIMEOUT_SECS") {
            None => DEFAULT_FETCH_TIMEOUT,
            Some(raw) => {
                let secs = parse_u64("CREASE_FETCH_TIMEOUT_SECS", &raw)?;
                if secs == 0 {
                    return Err(ConfigError::InvalidValue {
                        var: "CREASE_FETCH_TIMEOUT_SECS",
                        value: raw,
                        reason: "must be at least 1".into(),
                    });
                }
                Duration::from_secs(secs)
            }
        };

        let source_templates = match var("CREASE_SOURCES") {
            None => DEFAULT_SOURCE_TEMPLATES
                .iter()
                .map(|t| t.to_string())
                .collect(),
            Some(raw) => raw
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        };

        let ball_format = match var("CREASE_BALL_FORMAT") {
            None => BallFormat::default(),
            Some(raw) => raw
                .parse()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "CREASE_BALL_FORMAT",
                    value: raw.clone(),
                    reason,
                })?,
        };

        let config = Self {
            match_id,
            port,
            cache_ttl,
            fetch_timeout,
            user_agent: var("CREASE_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.into()),
            source_templates,
            static_dir: var("CREASE_STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.into())
                .into(),
            ball_format,
        };

        // Fail at startup rather than on the first poll.
        config.sources()?;
        Ok(config)
    }

    /// Candidate sources for the configured match, in priority order.
    pub fn sources(&self) -> Result<SourceList, ConfigError> {
        SourceList::from_templates(&self.source_templates, &self.match_id)
    }
}

fn parse_u64(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: raw.to_string(),
        reason: "must be a non-negative integer".into(),
    })
}
