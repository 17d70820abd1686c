use std::time::Duration;

use crease_core::config::{DEFAULT_FETCH_TIMEOUT, DEFAULT_USER_AGENT};
use crease_core::error::FetchError;
use crease_core::models::{CandidateSource, RawPage};
use crease_core::traits::Fetcher;
use reqwest::Client;

/// HTTP fetcher using reqwest.
///
/// Downloads the raw scorecard page with a descriptive User-Agent and a
/// bounded timeout, so a slow source cannot stall queued polls indefinitely.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
    timeout_secs: u64,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_options(DEFAULT_USER_AGENT, DEFAULT_FETCH_TIMEOUT)
    }

    pub fn with_options(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: timeout.as_secs(),
        })
    }
}

impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, source: &CandidateSource) -> Result<RawPage, FetchError> {
        let url = source.url();

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout_secs)
            } else if e.is_connect() {
                FetchError::Network(format!("Connection failed: {e}"))
            } else if e.is_builder() {
                FetchError::Client(e.to_string())
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout_secs)
            } else {
                FetchError::Body(e.to_string())
            }
        })?;

        tracing::debug!(%url, bytes = body.len(), "Fetched page");

        Ok(RawPage {
            source: source.clone(),
            body,
        })
    }
}
