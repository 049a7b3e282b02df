//! Retrying executor for single remote calls.
//!
//! Every catalog request funnels through [`RequestExecutor::execute`]: one
//! bounded retry loop, a shared token bucket acquired before each attempt,
//! exponential backoff on 429s and a flat delay on transient failures.
//! Each execution backs off on its own task; concurrent executions are
//! never blocked by one call's waits.

use super::retry_policy::{ErrorClass, RetryPolicy};
use crate::shared::errors::{AppError, AppResult};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use std::future::Future;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Direct (not-keyed) token bucket shared by every execution against one
/// endpoint family.
pub type SharedRateLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

pub struct RequestExecutor {
    limiter: Option<Arc<SharedRateLimiter>>,
    name: String,
}

impl RequestExecutor {
    /// Executor without a token bucket; retries and backoff only.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            limiter: None,
            name: name.into(),
        }
    }

    /// Executor that acquires a permit from `limiter` before every attempt.
    pub fn with_rate_limiter(name: impl Into<String>, limiter: Arc<SharedRateLimiter>) -> Self {
        Self {
            limiter: Some(limiter),
            name: name.into(),
        }
    }

    /// Build a token bucket for a steady-state rate with burst headroom,
    /// shareable across executors hitting the same endpoint family.
    pub fn shared_limiter(requests_per_second: f64, burst_size: u32) -> Arc<SharedRateLimiter> {
        // clamp so an extreme rate can't round the period down to zero,
        // which Quota::with_period rejects
        let period = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second).max(Duration::from_nanos(1))
        } else {
            Duration::MAX
        };
        let burst = NonZeroU32::new(burst_size.max(1)).unwrap();
        let quota = Quota::with_period(period).unwrap().allow_burst(burst);
        Arc::new(GovernorRateLimiter::direct(quota))
    }

    /// Run `operation`, retrying per `policy` until it succeeds, fails
    /// fatally, or the retry budget runs out.
    ///
    /// `operation` must be idempotent. Exhaustion surfaces as
    /// [`AppError::FetchExhausted`] carrying the last underlying cause;
    /// nothing is swallowed.
    pub async fn execute<F, Fut, T>(&self, policy: &RetryPolicy, operation: F) -> AppResult<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        let mut last_error = None;

        for attempt in 0..=policy.max_retries {
            if let Some(limiter) = &self.limiter {
                limiter.until_ready().await;
            }

            match operation().await {
                Ok(result) => {
                    if attempt > 0 {
                        debug!(
                            "{} request succeeded on attempt {}/{}",
                            self.name,
                            attempt + 1,
                            policy.max_retries + 1
                        );
                    }
                    return Ok(result);
                }
                Err(error) => {
                    let class = (policy.classify)(&error);
                    if class == ErrorClass::Fatal {
                        debug!("{} request failed fatally: {}", self.name, error);
                        return Err(error);
                    }

                    if attempt < policy.max_retries {
                        let delay = policy.delay_for(attempt, class);
                        warn!(
                            "{} request failed (attempt {}/{}): {}. Retrying in {:?}",
                            self.name,
                            attempt + 1,
                            policy.max_retries + 1,
                            error,
                            delay
                        );
                        last_error = Some(error);
                        sleep(delay).await;
                    } else {
                        warn!(
                            "{} request failed on final attempt {}/{}: {}",
                            self.name,
                            attempt + 1,
                            policy.max_retries + 1,
                            error
                        );
                        last_error = Some(error);
                    }
                }
            }
        }

        Err(AppError::FetchExhausted {
            attempts: policy.max_retries + 1,
            cause: Box::new(last_error.unwrap_or_else(|| {
                AppError::InternalError("retry loop exited without an error".to_string())
            })),
        })
    }
}
