//! Test utilities: mock implementations of the core traits.
//!
//! Handwritten mocks for dependency injection in unit tests.
//! All mocks use `Arc<Mutex<_>>` for interior mutability, allowing
//! test assertions on recorded calls.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::error::FetchError;
use crate::models::{CandidateSource, RawPage};
use crate::traits::{Clock, Fetcher};

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

/// Mock fetcher that replays a queue of responses and records every URL.
#[derive(Clone)]
pub struct MockFetcher {
    /// Queue of responses. Each call pops the first element.
    /// If empty, returns a default HTML string.
    responses: Arc<Mutex<Vec<Result<String, FetchError>>>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new(body: &str) -> Self {
        Self::with_responses(vec![Ok(body.to_string())])
    }

    pub fn with_error(error: FetchError) -> Self {
        Self::with_responses(vec![Err(error)])
    }

    pub fn with_responses(responses: Vec<Result<String, FetchError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fetcher whose every call fails with the given error.
    pub fn always_failing(error: FetchError, calls: usize) -> Self {
        Self::with_responses(vec![Err(error); calls])
    }

    /// URLs fetched so far, in call order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, source: &CandidateSource) -> Result<RawPage, FetchError> {
        self.requested.lock().unwrap().push(source.url().to_string());

        let next = {
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                Ok("<html><body>default</body></html>".to_string())
            } else {
                responses.remove(0)
            }
        };

        next.map(|body| RawPage {
            source: source.clone(),
            body,
        })
    }
}

// ---------------------------------------------------------------------------
// ManualClock
// ---------------------------------------------------------------------------

/// Clock that only moves when told to.
#[derive(Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}
