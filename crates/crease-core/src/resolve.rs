use std::time::Instant;

use crate::error::ResolveError;
use crate::extract::extract;
use crate::models::Resolution;
use crate::sources::SourceList;
use crate::traits::Fetcher;

/// Walks the candidate sources in priority order until one yields a page.
///
/// The first successful fetch is extracted and returned; later candidates are
/// never contacted. Fetch failures are logged and skipped. There is no memory
/// of which source worked last time: every call starts again at the top.
#[derive(Clone)]
pub struct FallbackResolver<F: Fetcher> {
    fetcher: F,
    sources: SourceList,
}

impl<F: Fetcher> FallbackResolver<F> {
    pub fn new(fetcher: F, sources: SourceList) -> Self {
        Self { fetcher, sources }
    }

    pub fn sources(&self) -> &SourceList {
        &self.sources
    }

    pub async fn resolve(&self) -> Result<Resolution, ResolveError> {
        let mut attempts = 0;
        let mut last_error = String::from("no candidate sources");

        for source in self.sources.iter() {
            attempts += 1;
            let started = Instant::now();

            match self.fetcher.fetch(source).await {
                Ok(page) => {
                    tracing::debug!(
                        url = %source,
                        attempt = attempts,
                        bytes = page.body.len(),
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "Fetched candidate source"
                    );
                    let state = extract(&page.body);
                    return Ok(Resolution {
                        state,
                        source: page.source.url().to_string(),
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        url = %source,
                        attempt = attempts,
                        error = %e,
                        transient = e.is_transient(),
                        "Candidate source failed, trying next"
                    );
                    last_error = e.to_string();
                }
            }
        }

        Err(ResolveError::Exhausted {
            attempts,
            last_error,
        })
    }
}
