use thiserror::Error;

/// Failure of a single fetch against one candidate source.
///
/// Always recoverable: the resolver moves on to the next candidate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Source answered with a non-2xx status.
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Network/connection error.
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// The response body could not be read as text.
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// The HTTP client itself could not be built or the request was malformed.
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl FetchError {
    /// Returns true if the source is likely to answer on a later poll.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Network(_) | FetchError::Timeout(_) | FetchError::Body(_) => true,
            FetchError::Status { status, .. } => *status == 429 || *status >= 500,
            FetchError::Client(_) => false,
        }
    }
}

/// Every candidate source failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("All {attempts} candidate sources failed (last error: {last_error})")]
    Exhausted { attempts: usize, last_error: String },
}

/// Error surfaced at the state endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Unable to fetch live score: {0}")]
    Unavailable(#[from] ResolveError),
}

/// Invalid process configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {var} '{value}': {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("Match identifier must not be empty")]
    EmptyMatchId,

    #[error("At least one candidate source is required")]
    NoSources,

    #[error("Invalid source URL '{url}': {reason}")]
    InvalidSource { url: String, reason: String },
}
