//! Retrying request helper
//!
//! Wraps a fallible network attempt with exponential backoff: a 1 second
//! base delay doubling after each failed attempt (1s, 2s, 4s, ...), up to
//! five attempts, no jitter. A non-success HTTP status and a transport
//! failure are retried identically. The first success wins; exhaustion
//! yields `RequestFailed` carrying the last observed error.
//!
//! Callers treat the wrapped operation as atomic. A cancellation token is
//! threaded through so navigation away abandons the sequence between
//! attempts and mid-sleep.

use crate::error::GenAiError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Maximum attempt count before the helper gives up
pub const MAX_ATTEMPTS: u32 = 5;

/// Base delay, doubled after each failed attempt
pub const BASE_DELAY: Duration = Duration::from_secs(1);

/// Granularity at which a backoff sleep re-checks the cancel token
const SLEEP_SLICE: Duration = Duration::from_millis(100);

/// Shared cancellation flag handed to in-flight request sequences
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Backoff policy. The default matches the production endpoints; tests use a
/// zero base delay to exercise the attempt accounting without sleeping.
#[derive(Debug, Clone, Copy)]
pub struct Backoff {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            base_delay: BASE_DELAY,
        }
    }
}

impl Backoff {
    /// Delay slept after failed attempt `attempt` (0-based): base * 2^attempt
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt)
    }

    /// Run `attempt_fn` until it succeeds, the attempt budget is spent, or
    /// the token cancels. The closure receives the 0-based attempt index and
    /// reports failure as a displayable string (status line or transport
    /// error), which becomes the `RequestFailed` payload on exhaustion.
    pub fn run<T, F>(&self, cancel: &CancelToken, mut attempt_fn: F) -> Result<T, GenAiError>
    where
        F: FnMut(u32) -> Result<T, String>,
    {
        let mut last_error = String::from("no attempt made");

        for attempt in 0..self.max_attempts {
            if cancel.is_cancelled() {
                debug!(attempt, "request sequence cancelled");
                return Err(GenAiError::Cancelled);
            }

            match attempt_fn(attempt) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    warn!(attempt, error = %err, "request attempt failed");
                    last_error = err;
                }
            }

            // No sleep after the final attempt
            if attempt + 1 < self.max_attempts {
                self.sleep_checking_cancel(self.delay_after(attempt), cancel);
            }
        }

        Err(GenAiError::RequestFailed {
            attempts: self.max_attempts,
            last_error,
        })
    }

    /// Sleep in short slices so a cancel is observed promptly
    fn sleep_checking_cancel(&self, total: Duration, cancel: &CancelToken) {
        let mut remaining = total;
        while !remaining.is_zero() && !cancel.is_cancelled() {
            let slice = remaining.min(SLEEP_SLICE);
            std::thread::sleep(slice);
            remaining = remaining.saturating_sub(slice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_backoff() -> Backoff {
        Backoff {
            max_attempts: MAX_ATTEMPTS,
            base_delay: Duration::ZERO,
        }
    }

    #[test]
    fn test_backoff_delays_double_from_one_second() {
        let backoff = Backoff::default();
        assert_eq!(backoff.delay_after(0), Duration::from_secs(1));
        assert_eq!(backoff.delay_after(1), Duration::from_secs(2));
        assert_eq!(backoff.delay_after(2), Duration::from_secs(4));
        assert_eq!(backoff.delay_after(3), Duration::from_secs(8));
        assert_eq!(backoff.delay_after(4), Duration::from_secs(16));
    }

    #[test]
    fn test_first_success_short_circuits() {
        let mut calls = 0;
        let result = instant_backoff().run(&CancelToken::new(), |_| {
            calls += 1;
            Ok::<_, String>(42)
        });
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_success_after_failures_returns_value() {
        let mut calls = 0;
        let result = instant_backoff().run(&CancelToken::new(), |attempt| {
            calls += 1;
            if attempt < 2 {
                Err("status 503".to_string())
            } else {
                Ok(attempt)
            }
        });
        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_exhaustion_makes_exactly_five_attempts() {
        let mut calls = 0;
        let result = instant_backoff().run::<(), _>(&CancelToken::new(), |_| {
            calls += 1;
            Err("status 404".to_string())
        });

        assert_eq!(calls, MAX_ATTEMPTS);
        match result {
            Err(GenAiError::RequestFailed {
                attempts,
                last_error,
            }) => {
                assert_eq!(attempts, MAX_ATTEMPTS);
                assert_eq!(last_error, "status 404");
            }
            other => panic!("expected RequestFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_last_error_is_the_most_recent_one() {
        let result = instant_backoff().run::<(), _>(&CancelToken::new(), |attempt| {
            Err(format!("status {}", 500 + attempt))
        });
        match result {
            Err(GenAiError::RequestFailed { last_error, .. }) => {
                assert_eq!(last_error, "status 504");
            }
            other => panic!("expected RequestFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_cancelled_token_stops_before_next_attempt() {
        let cancel = CancelToken::new();
        let mut calls = 0;
        let result = instant_backoff().run::<(), _>(&cancel, |_| {
            calls += 1;
            cancel.cancel();
            Err("status 500".to_string())
        });

        assert_eq!(calls, 1);
        assert!(matches!(result, Err(GenAiError::Cancelled)));
    }

    #[test]
    fn test_pre_cancelled_token_makes_no_attempt() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let mut calls = 0;
        let result = instant_backoff().run::<(), _>(&cancel, |_| {
            calls += 1;
            Ok(())
        });
        assert_eq!(calls, 0);
        assert!(matches!(result, Err(GenAiError::Cancelled)));
    }
}
