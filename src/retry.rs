use std::future::Future;
use std::time::Duration;

use crate::environment::CallError;

/// The transient-transport regime: bounded re-issues of a failed call with
/// backoff. Distinct from the domain-conditional polling the shift pipeline
/// performs, which has its own schedule and terminal semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of calls, the first one included.
    pub max_attempts: u32,
    pub delay: Duration,
    pub exponential: bool,
}

impl RetryPolicy {
    pub const fn transient() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_millis(500),
            exponential: true,
        }
    }

    fn delay_for(&self, attempt: u32) -> Duration {
        if self.exponential {
            // 500ms, 1s, 2s, ...
            self.delay * 2u32.saturating_pow(attempt.saturating_sub(1))
        } else {
            self.delay
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::transient()
    }
}

/// Re-invokes `op` while it fails transiently (network or 5xx), up to the
/// policy bound, then propagates the last error unchanged. `op` rebuilds the
/// request on every attempt, so each retry picks up the freshest token.
/// Validation errors (4xx) and the not-ready kind are never retried here.
pub async fn with_retry<T, F, Fut>(policy: RetryPolicy, mut op: F) -> Result<T, CallError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CallError>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(error) if error.is_transient() && attempt < policy.max_attempts => {
                let delay = policy.delay_for(attempt);
                log::warn!("transient failure on attempt {attempt}: {error}; retrying in {delay:?}");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn flaky(failures: u32, calls: &AtomicU32) -> impl Future<Output = Result<u32, CallError>> + '_ {
        let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
        async move {
            if n <= failures {
                Err(CallError::Status {
                    code: 502,
                    message: "bad gateway".to_string(),
                })
            } else {
                Ok(n)
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn recovers_after_transient_failures() {
        let calls = AtomicU32::new(0);
        let result = with_retry(RetryPolicy::transient(), || flaky(2, &calls)).await;
        assert_eq!(result, Ok(3));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn propagates_the_last_error_after_the_bound() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, _> = with_retry(RetryPolicy::transient(), || flaky(10, &calls)).await;
        assert!(matches!(result, Err(CallError::Status { code: 502, .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn does_not_retry_validation_errors() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, _> = with_retry(RetryPolicy::transient(), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async {
                Err(CallError::Status {
                    code: 422,
                    message: "invalid submission".to_string(),
                })
            }
        })
        .await;
        assert!(matches!(result, Err(CallError::Status { code: 422, .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn backs_off_exponentially() {
        let start = tokio::time::Instant::now();
        let calls = AtomicU32::new(0);
        let _ = with_retry(RetryPolicy::transient(), || flaky(10, &calls)).await;
        // two delays: 500ms + 1000ms
        assert_eq!(start.elapsed(), Duration::from_millis(1500));
    }
}
