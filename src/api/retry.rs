//! Retry on server errors
//!
//! Only 5xx responses are retried. Network failures and 4xx are returned
//! to the caller immediately.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;

use super::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Delay after the first failure; doubled after each further failure
    pub base_delay_ms: u32,
}

impl RetryPolicy {
    pub const SERVER_ERRORS: RetryPolicy = RetryPolicy {
        max_attempts: 3,
        base_delay_ms: 1_000,
    };

    /// Delay before the next attempt, or `None` to give up
    pub fn delay_after(&self, attempts_made: u32, err: &ApiError) -> Option<u32> {
        if attempts_made == 0 || attempts_made >= self.max_attempts || !err.is_server_error() {
            return None;
        }
        Some(self.base_delay_ms.saturating_mul(1 << (attempts_made - 1).min(16)))
    }
}

/// Run `op` under `policy`, sleeping with browser timers between attempts
pub async fn with_retry<T, F, Fut>(policy: RetryPolicy, op: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    with_retry_using(policy, op, TimeoutFuture::new).await
}

pub async fn with_retry_using<T, F, Fut, S, SFut>(policy: RetryPolicy, mut op: F, sleep: S) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
    S: Fn(u32) -> SFut,
    SFut: Future<Output = ()>,
{
    let mut attempts = 0;
    loop {
        attempts += 1;
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) => match policy.delay_after(attempts, &err) {
                Some(delay) => {
                    log::warn!("[Retry] attempt {} failed ({}), retrying in {}ms", attempts, err, delay);
                    sleep(delay).await;
                }
                None => return Err(err),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    fn server_error() -> ApiError {
        ApiError::from_status(503, "")
    }

    #[test]
    fn test_delays_grow_and_stop() {
        let policy = RetryPolicy::SERVER_ERRORS;
        let err = server_error();
        assert_eq!(policy.delay_after(1, &err), Some(1_000));
        assert_eq!(policy.delay_after(2, &err), Some(2_000));
        assert_eq!(policy.delay_after(3, &err), None);
    }

    #[test]
    fn test_client_errors_not_retried() {
        let policy = RetryPolicy::SERVER_ERRORS;
        assert_eq!(policy.delay_after(1, &ApiError::from_status(404, "")), None);
        assert_eq!(policy.delay_after(1, &ApiError::Network { detail: String::new() }), None);
    }

    #[test]
    fn test_gives_up_after_three_attempts() {
        let calls = Cell::new(0);
        let slept = RefCell::new(Vec::new());

        let result: Result<(), ApiError> = futures::executor::block_on(with_retry_using(
            RetryPolicy::SERVER_ERRORS,
            || {
                calls.set(calls.get() + 1);
                async { Err(server_error()) }
            },
            |ms| {
                slept.borrow_mut().push(ms);
                async {}
            },
        ));

        assert!(matches!(result, Err(ApiError::Server { status: 503, .. })));
        assert_eq!(calls.get(), 3);
        assert_eq!(*slept.borrow(), vec![1_000, 2_000]);
    }

    #[test]
    fn test_recovers_on_second_attempt() {
        let calls = Cell::new(0);

        let result = futures::executor::block_on(with_retry_using(
            RetryPolicy::SERVER_ERRORS,
            || {
                calls.set(calls.get() + 1);
                let attempt = calls.get();
                async move {
                    if attempt == 1 {
                        Err(server_error())
                    } else {
                        Ok(attempt)
                    }
                }
            },
            |_| async {},
        ));

        assert_eq!(result, Ok(2));
    }
}
