use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::models::Resolution;
use crate::traits::Clock;

/// Validity window used by the overlay: a little under its 3 s poll interval,
/// so most polls are answered from cache.
pub const DEFAULT_TTL: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone)]
struct CacheEntry {
    resolution: Resolution,
    stored_at: Instant,
}

/// Single-slot cache of the latest successful resolution.
///
/// One slot per process: the service tracks a single match. Entries are only
/// ever replaced wholesale by [`set`](Self::set). The lock is held for the
/// read or the write alone, never across a fetch, so two requests that both
/// miss will both resolve and the later write wins.
pub struct FreshnessCache<C: Clock> {
    slot: Mutex<Option<CacheEntry>>,
    ttl: Duration,
    clock: C,
}

impl<C: Clock> FreshnessCache<C> {
    pub fn new(ttl: Duration, clock: C) -> Self {
        Self {
            slot: Mutex::new(None),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Acquires the slot lock, recovering from poison if necessary.
    fn lock_slot(&self) -> MutexGuard<'_, Option<CacheEntry>> {
        self.slot.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("Recovered from poisoned cache mutex");
            poisoned.into_inner()
        })
    }

    /// The cached resolution, if it is younger than the TTL.
    pub fn get(&self) -> Option<Resolution> {
        let now = self.clock.now();
        let slot = self.lock_slot();
        let entry = slot.as_ref()?;

        if now.saturating_duration_since(entry.stored_at) < self.ttl {
            Some(entry.resolution.clone())
        } else {
            None
        }
    }

    /// Overwrite the slot, stamped with the current time.
    pub fn set(&self, resolution: Resolution) {
        let stored_at = self.clock.now();
        *self.lock_slot() = Some(CacheEntry {
            resolution,
            stored_at,
        });
    }

    /// Age of the stored entry, fresh or not.
    pub fn age(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.lock_slot()
            .as_ref()
            .map(|entry| now.saturating_duration_since(entry.stored_at))
    }
}
