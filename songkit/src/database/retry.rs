use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::warn;

use super::cluster::RetryConfig;

/// Exponential-backoff retry around a single statement execution.
///
/// The first attempt runs immediately; each failure sleeps for the
/// current delay and doubles it, capped at `max_backoff`. `max_retries`
/// counts re-attempts after the first, so an operation runs at most
/// `max_retries + 1` times.
pub struct RetryPolicy {
    min_backoff: Duration,
    max_backoff: Duration,
    max_retries: u32,
}

impl RetryPolicy {
    pub fn new(config: &RetryConfig) -> Self {
        Self {
            min_backoff: config.min_backoff,
            max_backoff: config.max_backoff,
            max_retries: config.max_retries,
        }
    }

    pub async fn execute<F, Fut, T, E>(&self, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let mut attempt: u32 = 0;
        let mut delay = self.min_backoff;

        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if attempt >= self.max_retries => {
                    warn!(
                        "statement failed after {} attempts: {}",
                        attempt + 1,
                        err
                    );
                    return Err(err);
                }
                Err(err) => {
                    attempt += 1;
                    warn!(
                        "statement failed (attempt {}): {}, retrying in {:?}",
                        attempt, err, delay
                    );
                    sleep(delay).await;
                    delay = std::cmp::min(self.max_backoff, delay * 2);
                }
            }
        }
    }
}
