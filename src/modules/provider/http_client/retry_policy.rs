//! Retry configuration for catalog API calls.
//!
//! The upstream signals rate limiting distinguishably from other failures,
//! so the backoff branches on a classification of the error rather than
//! treating every failure the same way.

use crate::shared::errors::AppError;
use std::time::Duration;

/// How a failed attempt should be treated by the retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Upstream quota exceeded; back off exponentially before retrying.
    RateLimited,
    /// Network/5xx/timeout-like failure; retry after a flat delay.
    Transient,
    /// Will not succeed on repeat; surfaced immediately.
    Fatal,
}

impl ErrorClass {
    /// Default classification table.
    pub fn of(error: &AppError) -> Self {
        match error {
            AppError::RateLimitError(_) => Self::RateLimited,
            AppError::NotFound(_)
            | AppError::InvalidInput(_)
            | AppError::Unauthorized(_)
            | AppError::ValidationError(_) => Self::Fatal,
            _ => Self::Transient,
        }
    }
}

/// Configuration for HTTP retry behavior.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt.
    pub max_retries: u32,
    /// Flat delay for transient failures, and the backoff base for 429s.
    pub base_delay: Duration,
    /// Cap on any single computed wait.
    pub max_delay: Duration,
    /// Add up to 10% random jitter to each wait.
    pub jitter: bool,
    /// Maps a failure to its retry treatment.
    pub classify: fn(&AppError) -> ErrorClass,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(1000),
            max_delay: Duration::from_secs(10),
            jitter: false,
            classify: ErrorClass::of,
        }
    }
}

impl RetryPolicy {
    /// Policy used against Jikan (3 req/sec ceiling, strict 429s).
    pub fn jikan() -> Self {
        Self {
            max_delay: Duration::from_secs(5),
            jitter: true,
            ..Self::default()
        }
    }

    /// Wait before the next attempt, given how many attempts have already
    /// been consumed. Rate-limited failures grow exponentially from
    /// `base_delay` and are capped at `max_delay`; transient failures wait
    /// the flat base.
    pub fn delay_for(&self, attempts_used: u32, class: ErrorClass) -> Duration {
        let delay = match class {
            ErrorClass::RateLimited => {
                let factor = 1u32 << attempts_used.min(20);
                self.base_delay.saturating_mul(factor).min(self.max_delay)
            }
            _ => self.base_delay,
        };

        if self.jitter {
            delay + delay.mul_f64(0.1 * rand::random::<f64>())
        } else {
            delay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_policy() -> RetryPolicy {
        RetryPolicy {
            max_retries: 3,
            base_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(5000),
            jitter: false,
            classify: ErrorClass::of,
        }
    }

    #[test]
    fn rate_limited_waits_double_and_cap() {
        let policy = reference_policy();
        let waits: Vec<u64> = (0..5)
            .map(|attempt| {
                policy
                    .delay_for(attempt, ErrorClass::RateLimited)
                    .as_millis() as u64
            })
            .collect();
        assert_eq!(waits, vec![1000, 2000, 4000, 5000, 5000]);

        // non-decreasing, never above the cap
        for pair in waits.windows(2) {
            assert!(pair[0] <= pair[1]);
            assert!(pair[1] <= 5000);
        }
    }

    #[test]
    fn transient_waits_stay_flat() {
        let policy = reference_policy();
        for attempt in 0..4 {
            assert_eq!(
                policy.delay_for(attempt, ErrorClass::Transient),
                Duration::from_millis(1000)
            );
        }
    }

    #[test]
    fn classification_table() {
        assert_eq!(
            ErrorClass::of(&AppError::RateLimitError("quota".into())),
            ErrorClass::RateLimited
        );
        assert_eq!(
            ErrorClass::of(&AppError::ExternalServiceError("timeout".into())),
            ErrorClass::Transient
        );
        assert_eq!(
            ErrorClass::of(&AppError::ApiError("HTTP 500".into())),
            ErrorClass::Transient
        );
        assert_eq!(
            ErrorClass::of(&AppError::NotFound("anime 1".into())),
            ErrorClass::Fatal
        );
        assert_eq!(
            ErrorClass::of(&AppError::InvalidInput("bad id".into())),
            ErrorClass::Fatal
        );
    }

    #[test]
    fn jitter_never_exceeds_ten_percent() {
        let policy = RetryPolicy {
            jitter: true,
            ..reference_policy()
        };
        for _ in 0..50 {
            let wait = policy.delay_for(0, ErrorClass::Transient);
            assert!(wait >= Duration::from_millis(1000));
            assert!(wait <= Duration::from_millis(1100));
        }
    }
}
