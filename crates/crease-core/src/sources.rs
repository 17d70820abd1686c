use url::Url;

use crate::error::ConfigError;
use crate::models::{CandidateSource, MatchId};

/// Placeholder substituted with the match identifier in source templates.
pub const MATCH_ID_PLACEHOLDER: &str = "{match_id}";

/// Known scorecard locations, highest priority first. The site moves pages
/// between domains and paths, so every one of them is tried in turn.
pub const DEFAULT_SOURCE_TEMPLATES: &[&str] = &[
    "https://cricheroes.com/scorecard/{match_id}/live",
    "https://cricheroes.com/scorecard/{match_id}",
    "https://cricheroes.in/scorecard/{match_id}/live",
    "https://cricheroes.in/live-video-scorecard-customize/{match_id}",
];

/// Ordered, non-empty list of candidate sources. Priority is list position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceList {
    sources: Vec<CandidateSource>,
}

impl SourceList {
    /// Build the list by substituting `match_id` into each template.
    ///
    /// Every resulting URL must be an absolute `http`/`https` URL.
    pub fn from_templates<S: AsRef<str>>(
        templates: &[S],
        match_id: &MatchId,
    ) -> Result<Self, ConfigError> {
        let sources = templates
            .iter()
            .map(|t| t.as_ref().trim())
            .filter(|t| !t.is_empty())
            .map(|t| build_source(t, match_id))
            .collect::<Result<Vec<_>, _>>()?;

        if sources.is_empty() {
            return Err(ConfigError::NoSources);
        }

        Ok(Self { sources })
    }

    /// The default cricheroes locations for `match_id`.
    pub fn defaults(match_id: &MatchId) -> Result<Self, ConfigError> {
        Self::from_templates(DEFAULT_SOURCE_TEMPLATES, match_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CandidateSource> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Never true for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn urls(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.url().to_string()).collect()
    }
}

fn build_source(template: &str, match_id: &MatchId) -> Result<CandidateSource, ConfigError> {
    let raw = template.replace(MATCH_ID_PLACEHOLDER, match_id.as_str());
    let parsed = Url::parse(&raw).map_err(|e| ConfigError::InvalidSource {
        url: raw.clone(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ConfigError::InvalidSource {
                url: raw,
                reason: format!("scheme '{scheme}' is not allowed (only http/https)"),
            });
        }
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidSource {
            url: raw,
            reason: "URL has no host".to_string(),
        });
    }

    Ok(CandidateSource::new(parsed.to_string()))
}
