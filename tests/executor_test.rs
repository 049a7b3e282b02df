//! Timing and retry-budget behavior of the request executor, run on a
//! paused tokio clock so the waits are measured deterministically.

use aniview::modules::provider::http_client::{ErrorClass, RequestExecutor, RetryPolicy};
use aniview::shared::errors::{AppError, AppResult};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tokio::time::Instant;

fn reference_policy() -> RetryPolicy {
    RetryPolicy {
        max_retries: 3,
        base_delay: Duration::from_millis(1000),
        max_delay: Duration::from_millis(5000),
        jitter: false,
        classify: ErrorClass::of,
    }
}

#[tokio::test(start_paused = true)]
async fn rate_limited_backoff_doubles_each_retry() {
    let executor = RequestExecutor::new("test");
    let policy = reference_policy();
    let start = Instant::now();

    let result: AppResult<()> = executor
        .execute(&policy, || async {
            Err(AppError::RateLimitError("Too many requests".to_string()))
        })
        .await;

    // waits 1000 + 2000 + 4000 between the four attempts
    assert_eq!(start.elapsed(), Duration::from_millis(7000));
    assert!(matches!(
        result,
        Err(AppError::FetchExhausted { attempts: 4, .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn rate_limited_backoff_is_capped_at_max_delay() {
    let executor = RequestExecutor::new("test");
    let policy = RetryPolicy {
        max_retries: 5,
        ..reference_policy()
    };
    let start = Instant::now();

    let result: AppResult<()> = executor
        .execute(&policy, || async {
            Err(AppError::RateLimitError("Too many requests".to_string()))
        })
        .await;

    // 1000 + 2000 + 4000 + 5000 + 5000: capped, never exceeding 5000
    assert_eq!(start.elapsed(), Duration::from_millis(17_000));
    assert!(result.is_err());
}

#[tokio::test(start_paused = true)]
async fn transient_failures_wait_the_flat_base_delay() {
    let executor = RequestExecutor::new("test");
    let policy = reference_policy();
    let start = Instant::now();

    let result: AppResult<()> = executor
        .execute(&policy, || async {
            Err(AppError::ExternalServiceError("connection reset".to_string()))
        })
        .await;

    assert_eq!(start.elapsed(), Duration::from_millis(3000));
    assert!(matches!(
        result,
        Err(AppError::FetchExhausted { attempts: 4, .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn exhaustion_error_carries_the_last_cause() {
    let executor = RequestExecutor::new("test");
    let policy = reference_policy();
    let calls = AtomicU32::new(0);

    // rate-limited at first, then the upstream goes down
    let result: AppResult<()> = executor
        .execute(&policy, || async {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            if n < 2 {
                Err(AppError::RateLimitError("Too many requests".to_string()))
            } else {
                Err(AppError::ExternalServiceError("gateway timeout".to_string()))
            }
        })
        .await;

    match result {
        Err(err @ AppError::FetchExhausted { .. }) => {
            assert!(matches!(
                err.root_cause(),
                AppError::ExternalServiceError(_)
            ));
        }
        other => panic!("expected FetchExhausted, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn concurrent_executions_back_off_independently() {
    let executor = std::sync::Arc::new(RequestExecutor::new("test"));
    let policy = reference_policy();
    let start = Instant::now();

    let slow = {
        let executor = std::sync::Arc::clone(&executor);
        let policy = policy.clone();
        tokio::spawn(async move {
            let _: AppResult<()> = executor
                .execute(&policy, || async {
                    Err(AppError::RateLimitError("Too many requests".to_string()))
                })
                .await;
            Instant::now()
        })
    };
    let fast = {
        let executor = std::sync::Arc::clone(&executor);
        let policy = policy.clone();
        tokio::spawn(async move {
            let result = executor.execute(&policy, || async { Ok(1) }).await;
            (Instant::now(), result)
        })
    };

    let (fast_done, fast_result) = fast.await.unwrap();
    let slow_done = slow.await.unwrap();

    // the succeeding call is not delayed by the failing call's backoff
    assert!(fast_done.duration_since(start) < Duration::from_millis(1000));
    assert_eq!(fast_result.unwrap(), 1);
    assert_eq!(slow_done.duration_since(start), Duration::from_millis(7000));
}
