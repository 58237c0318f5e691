//! GitHub rate-limit backoff.
//!
//! Every API response carries `X-RateLimit-Remaining` and `X-RateLimit-Reset`
//! (epoch seconds). Once one request or fewer is left, the governor sleeps
//! until `reset * 1000 + buffer` before the response is handed back, so the
//! next request starts in a fresh window. The aggregation driver is strictly
//! sequential, so a plain sleep is enough; there is no queue.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::http::HttpResponse;

const REMAINING_HEADER: &str = "x-ratelimit-remaining";
const RESET_HEADER: &str = "x-ratelimit-reset";

/// Backoff starts when this many requests or fewer remain.
const REMAINING_THRESHOLD: u64 = 1;

/// Wall clock and sleep, injectable for tests.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    async fn sleep(&self, duration: Duration);
}

/// Real time via chrono and tokio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

pub struct RateLimitGovernor {
    clock: Arc<dyn Clock>,
    reset_buffer: Duration,
}

impl RateLimitGovernor {
    pub fn new(clock: Arc<dyn Clock>, reset_buffer: Duration) -> Self {
        Self {
            clock,
            reset_buffer,
        }
    }

    /// How long to wait given the two header values, if at all.
    ///
    /// Missing or unparsable headers never trigger a wait, and neither does a
    /// reset instant that has already passed.
    pub fn backoff(&self, remaining: Option<u64>, reset_secs: Option<i64>) -> Option<Duration> {
        let remaining = remaining?;
        let reset_secs = reset_secs?;
        if remaining > REMAINING_THRESHOLD {
            return None;
        }

        let buffer = i64::try_from(self.reset_buffer.as_millis()).unwrap_or(i64::MAX);
        let wait_ms = reset_secs
            .saturating_mul(1000)
            .saturating_add(buffer)
            .saturating_sub(self.clock.now_millis());
        u64::try_from(wait_ms)
            .ok()
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    /// Inspect a response's rate-limit headers and sleep if the window is spent.
    pub async fn observe(&self, response: &HttpResponse) {
        let remaining = response
            .header(REMAINING_HEADER)
            .and_then(|v| v.trim().parse::<u64>().ok());
        let reset_secs = response
            .header(RESET_HEADER)
            .and_then(|v| v.trim().parse::<i64>().ok());

        if let Some(remaining) = remaining {
            debug!(remaining, "GitHub rate limit remaining");
        }

        if let Some(wait) = self.backoff(remaining, reset_secs) {
            warn!(
                wait_secs = wait.as_secs_f64(),
                "About to hit GitHub rate limit, waiting for reset"
            );
            self.clock.sleep(wait).await;
        }
    }
}
