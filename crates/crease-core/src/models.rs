use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ConfigError;

/// Opaque token naming a match on the source site (e.g. `"18726255"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchId(String);

impl MatchId {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ConfigError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyMatchId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One location where the match summary might be published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSource {
    url: String,
}

impl CandidateSource {
    /// Wrap an already-validated URL. Use [`SourceList`](crate::sources::SourceList)
    /// to build sources from templates.
    pub(crate) fn new(url: String) -> Self {
        Self { url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A fetched page body and the source it came from.
#[derive(Debug, Clone)]
pub struct RawPage {
    pub source: CandidateSource,
    pub body: String,
}

/// One recent delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ball {
    Dot,
    Runs(u8),
    Wicket,
}

impl Ball {
    /// Parse a single-character ball symbol. The bullet `•` is read as a dot.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' | '\u{2022}' => Some(Ball::Dot),
            'W' => Some(Ball::Wicket),
            '0'..='6' => Some(Ball::Runs(c as u8 - b'0')),
            _ => None,
        }
    }

    /// Raw scorecard symbol: `"."`, `"0"`..`"6"` or `"W"`.
    pub fn symbol(self) -> &'static str {
        match self {
            Ball::Dot => ".",
            Ball::Wicket => "W",
            Ball::Runs(n) => match n {
                0 => "0",
                1 => "1",
                2 => "2",
                3 => "3",
                4 => "4",
                5 => "5",
                _ => "6",
            },
        }
    }

    /// Display token used by the overlay for styling.
    pub fn token(self) -> &'static str {
        match self {
            Ball::Dot | Ball::Runs(0) => "dot",
            Ball::Runs(_) => "run",
            Ball::Wicket => "wicket",
        }
    }

    pub fn render(self, format: BallFormat) -> &'static str {
        match format {
            BallFormat::Tokens => self.token(),
            BallFormat::Symbols => self.symbol(),
        }
    }
}

impl Serialize for Ball {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// How recent balls are rendered in the published document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BallFormat {
    /// `"dot"`, `"run"`, `"wicket"`.
    #[default]
    Tokens,
    /// `"."`, `"4"`, `"W"`.
    Symbols,
}

impl FromStr for BallFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tokens" | "token" => Ok(BallFormat::Tokens),
            "symbols" | "symbol" => Ok(BallFormat::Symbols),
            other => Err(format!(
                "unknown ball format '{other}' (expected 'tokens' or 'symbols')"
            )),
        }
    }
}

impl fmt::Display for BallFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BallFormat::Tokens => write!(f, "tokens"),
            BallFormat::Symbols => write!(f, "symbols"),
        }
    }
}

/// Normalized match summary. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchState {
    pub batsman1: String,
    pub batsman2: String,
    /// Canonical `"<runs>-<wickets> (<overs>)"`.
    pub score: String,
    pub bowler: String,
    /// Current run rate, e.g. `"6.43"`.
    pub crr: String,
    /// At most six recent deliveries, in page order.
    pub balls: Vec<Ball>,
}

/// A match state together with the URL that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub state: MatchState,
    pub source: String,
}

/// What the state endpoint hands back to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub resolution: Resolution,
    /// True when served from the freshness cache.
    pub cached: bool,
}
