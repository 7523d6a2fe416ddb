use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use log::{debug, warn};
use tokio::time::Instant;

/// Result of [`poll_until_ready`].
#[derive(Debug, PartialEq)]
pub enum PollOutcome<T> {
    /// The check produced a value before the deadline.
    Ready(T),
    /// The deadline passed. `last_error` holds the most recent failed check, if any.
    TimedOut { last_error: Option<String> },
}

/// Polls until `check` yields a value or `max_wait` elapses.
///
/// # Arguments
/// * `check` - Closure returning `Ok(Some(value))` when done, `Ok(None)` to keep polling
/// * `max_wait` - Maximum time to wait before giving up
/// * `poll_interval` - Time to sleep between polls
/// * `operation_name` - Name of the operation for logging
///
/// Errors from `check` are logged and polling continues; they never end the wait early.
/// A check still running when `max_wait` runs out is dropped.
pub async fn poll_until_ready<T, E, F, Fut>(
    check: F,
    max_wait: Duration,
    poll_interval: Duration,
    operation_name: &str,
) -> PollOutcome<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
    E: Display,
{
    let start = Instant::now();
    let deadline = start + max_wait;
    let mut last_error = None;

    loop {
        match tokio::time::timeout_at(deadline, check()).await {
            Ok(Ok(Some(value))) => {
                debug!("{operation_name} completed after {:?}", start.elapsed());
                return PollOutcome::Ready(value);
            }
            Ok(Ok(None)) => {}
            Ok(Err(e)) => {
                warn!("Error checking {operation_name} status while waiting: {e}");
                last_error = Some(e.to_string());
            }
            Err(_) => {
                warn!("Timed out after {max_wait:?} waiting for {operation_name} (check still running)");
                return PollOutcome::TimedOut { last_error };
            }
        }

        let now = Instant::now();
        if now >= deadline {
            warn!("Timed out after {max_wait:?} waiting for {operation_name}");
            return PollOutcome::TimedOut { last_error };
        }

        tokio::time::sleep(poll_interval.min(deadline - now)).await;
    }
}
