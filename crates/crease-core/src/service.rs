use std::time::Duration;

use crate::cache::FreshnessCache;
use crate::error::ServiceError;
use crate::models::Snapshot;
use crate::resolve::FallbackResolver;
use crate::sources::SourceList;
use crate::traits::{Clock, Fetcher};

/// Serves the current match state: cache first, then the source fallback.
///
/// Owns the freshness cache for the lifetime of the process. Generic over the
/// fetcher and clock so tests run without network or real time.
pub struct ScoreService<F, C>
where
    F: Fetcher,
    C: Clock,
{
    resolver: FallbackResolver<F>,
    cache: FreshnessCache<C>,
}

impl<F, C> ScoreService<F, C>
where
    F: Fetcher,
    C: Clock,
{
    pub fn new(fetcher: F, sources: SourceList, ttl: Duration, clock: C) -> Self {
        Self {
            resolver: FallbackResolver::new(fetcher, sources),
            cache: FreshnessCache::new(ttl, clock),
        }
    }

    pub fn sources(&self) -> &SourceList {
        self.resolver.sources()
    }

    pub fn ttl(&self) -> Duration {
        self.cache.ttl()
    }

    /// Return the current match state.
    ///
    /// 1. Fresh cache entry → returned as-is, flagged `cached`
    /// 2. Otherwise resolve across the candidate sources
    /// 3. On success, write through to the cache
    /// 4. If every source failed, report the service as unavailable
    pub async fn current(&self) -> Result<Snapshot, ServiceError> {
        if let Some(resolution) = self.cache.get() {
            tracing::debug!(source = %resolution.source, "Serving match state from cache");
            return Ok(Snapshot {
                resolution,
                cached: true,
            });
        }

        let resolution = self.resolver.resolve().await.map_err(|e| {
            tracing::error!(error = %e, "Unable to resolve match state");
            ServiceError::from(e)
        })?;

        tracing::info!(
            source = %resolution.source,
            score = %resolution.state.score,
            "Refreshed match state"
        );
        self.cache.set(resolution.clone());

        Ok(Snapshot {
            resolution,
            cached: false,
        })
    }
}
