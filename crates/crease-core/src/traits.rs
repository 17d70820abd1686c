use std::future::Future;
use std::time::Instant;

use crate::error::FetchError;
use crate::models::{CandidateSource, RawPage};

/// Retrieves the raw page text from one candidate source.
///
/// Implementations issue a single request and never retry; falling back to
/// other sources is the resolver's job.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(
        &self,
        source: &CandidateSource,
    ) -> impl Future<Output = Result<RawPage, FetchError>> + Send;
}

/// Source of monotonic time for cache freshness checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time via [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
