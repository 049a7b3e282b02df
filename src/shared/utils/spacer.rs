use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

/// Enforces a minimum interval between successive calls at one call site.
///
/// This is the fixed inter-call spacing layered on top of retry/backoff:
/// a caller issuing a known sequence of requests against the same endpoint
/// family waits here before each request so the steady-state rate stays
/// under the upstream ceiling. Each `RequestSpacer` is independent; it does
/// not coordinate across call sites.
pub struct RequestSpacer {
    last_request: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl RequestSpacer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            last_request: Mutex::new(None),
            min_interval,
        }
    }

    /// Suspends until at least `min_interval` has passed since the previous
    /// call. The first call never waits.
    pub async fn wait(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}
