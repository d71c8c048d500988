// Polling wait handler for asynchronous control-plane operations.
//
// Mutating calls return before the remote resource settles. A
// `WaitHandler` repeatedly runs a check closure until it reports a
// terminal result, the timeout elapses, or the caller cancels.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::Error;

pub const DEFAULT_THROTTLE: Duration = Duration::from_secs(5);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(45 * 60);
pub const DEFAULT_TEMPORARY_ERROR_RETRIES: u32 = 5;

/// Outcome of a single poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitState<T> {
    /// Not terminal yet, poll again.
    Pending,
    /// Terminal success.
    Done(T),
}

pub type CheckFuture<T> = Pin<Box<dyn Future<Output = Result<WaitState<T>, Error>> + Send>>;

type CheckFn<T> = Box<dyn FnMut() -> CheckFuture<T> + Send>;

/// Repeats a status check until the resource reaches a terminal state.
pub struct WaitHandler<T> {
    what: String,
    check: CheckFn<T>,
    throttle: Duration,
    timeout: Duration,
    temporary_error_retries: u32,
}

impl<T> std::fmt::Debug for WaitHandler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaitHandler")
            .field("what", &self.what)
            .field("throttle", &self.throttle)
            .field("timeout", &self.timeout)
            .field("temporary_error_retries", &self.temporary_error_retries)
            .finish_non_exhaustive()
    }
}

impl<T: Send + 'static> WaitHandler<T> {
    /// `what` names the awaited resource in logs and errors (e.g. `"zone abc"`).
    pub fn new<F>(what: impl Into<String>, check: F) -> Self
    where
        F: FnMut() -> CheckFuture<T> + Send + 'static,
    {
        Self {
            what: what.into(),
            check: Box::new(check),
            throttle: DEFAULT_THROTTLE,
            timeout: DEFAULT_TIMEOUT,
            temporary_error_retries: DEFAULT_TEMPORARY_ERROR_RETRIES,
        }
    }

    #[must_use]
    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_temporary_error_retries(mut self, retries: u32) -> Self {
        self.temporary_error_retries = retries;
        self
    }

    /// Poll until done, failed, timed out, or cancelled.
    pub async fn wait(mut self, cancel: &CancellationToken) -> Result<T, Error> {
        let deadline = tokio::time::Instant::now() + self.timeout;
        let mut temporary_errors = 0u32;

        loop {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }

            let polled = tokio::select! {
                () = cancel.cancelled() => return Err(Error::Cancelled),
                polled = (self.check)() => polled,
            };

            match polled {
                Ok(WaitState::Done(value)) => {
                    debug!(what = %self.what, "wait finished");
                    return Ok(value);
                }
                Ok(WaitState::Pending) => {
                    temporary_errors = 0;
                    debug!(what = %self.what, "still waiting");
                }
                Err(e) if e.is_temporary() && temporary_errors < self.temporary_error_retries => {
                    temporary_errors += 1;
                    warn!(what = %self.what, error = %e, attempt = temporary_errors, "temporary error while waiting");
                }
                Err(e) => return Err(e),
            }

            if tokio::time::Instant::now() + self.throttle > deadline {
                return Err(Error::WaitTimeout {
                    what: self.what,
                    timeout_secs: self.timeout.as_secs(),
                });
            }

            tokio::select! {
                () = cancel.cancelled() => return Err(Error::Cancelled),
                () = tokio::time::sleep(self.throttle) => {}
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn counting_handler(done_after: u32, calls: Arc<AtomicU32>) -> WaitHandler<u32> {
        WaitHandler::new("thing", move || {
            let calls = Arc::clone(&calls);
            Box::pin(async move {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                if n >= done_after {
                    Ok(WaitState::Done(n))
                } else {
                    Ok(WaitState::Pending)
                }
            })
        })
        .with_throttle(Duration::from_millis(10))
    }

    #[tokio::test(start_paused = true)]
    async fn polls_until_done() {
        let calls = Arc::new(AtomicU32::new(0));
        let result = counting_handler(3, Arc::clone(&calls))
            .wait(&CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(result, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn times_out() {
        let calls = Arc::new(AtomicU32::new(0));
        let result = counting_handler(u32::MAX, calls)
            .with_timeout(Duration::from_millis(55))
            .wait(&CancellationToken::new())
            .await;
        assert!(
            matches!(result, Err(Error::WaitTimeout { ref what, .. }) if what == "thing"),
            "got {result:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_before_first_poll() {
        let calls = Arc::new(AtomicU32::new(0));
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = counting_handler(1, Arc::clone(&calls)).wait(&cancel).await;
        assert!(matches!(result, Err(Error::Cancelled)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_during_slow_poll() {
        let handler = WaitHandler::new("slow", || {
            Box::pin(async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(WaitState::Done("finished"))
            })
        });
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            trigger.cancel();
        });

        let started = tokio::time::Instant::now();
        let result = handler.wait(&cancel).await;
        assert!(matches!(result, Err(Error::Cancelled)), "got {result:?}");
        assert!(started.elapsed() < Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn rides_out_temporary_errors() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let handler = WaitHandler::new("flaky", move || {
            let counter = Arc::clone(&counter);
            Box::pin(async move {
                if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(Error::Api {
                        message: "bad gateway".into(),
                        code: None,
                        status: 502,
                    })
                } else {
                    Ok(WaitState::Done(()))
                }
            })
        })
        .with_throttle(Duration::from_millis(1));

        handler.wait(&CancellationToken::new()).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn permanent_error_stops_immediately() {
        let handler: WaitHandler<()> = WaitHandler::new("broken", || {
            Box::pin(async {
                Err(Error::Api {
                    message: "forbidden".into(),
                    code: None,
                    status: 403,
                })
            })
        });
        let result = handler.wait(&CancellationToken::new()).await;
        assert!(matches!(result, Err(Error::Api { status: 403, .. })));
    }
}
