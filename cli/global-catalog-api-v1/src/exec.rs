use std::fmt::Debug;
use std::time::Duration;

use futures::future::BoxFuture;
use progenitor_client::Error;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::types::ErrorResponse;
use crate::Client;

/// A hook that can modify every request before it is sent,
/// e.g. to add an `Authorization` header.
///
/// An error returned by the hook aborts the request with
/// [Error::InvalidRequest].
pub trait RequestHook: Send + Sync + Debug {
    fn on_request<'a>(
        &'a self,
        request: &'a mut reqwest::Request,
    ) -> BoxFuture<'a, Result<(), String>>;
}

/// Policy for automatically retrying failed requests.
///
/// Connection failures, `429 Too Many Requests` and server errors other than
/// `501 Not Implemented` are retried up to `max_retries` times.
/// The delay between attempts follows the `Retry-After` header when the
/// server sends one, and an exponential backoff starting at one second
/// otherwise. Either way the delay never exceeds `max_interval`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub max_interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 4,
            max_interval: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    const INITIAL_INTERVAL: Duration = Duration::from_secs(1);

    pub fn new(max_retries: u32, max_interval: Duration) -> Self {
        Self {
            max_retries,
            max_interval,
        }
    }

    pub(crate) fn is_retryable_status(status: StatusCode) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS
            || (status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED)
    }

    /// Delay before retry number `attempt` (starting at 0).
    pub(crate) fn delay(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        let delay = retry_after.unwrap_or_else(|| {
            Self::INITIAL_INTERVAL.saturating_mul(2u32.saturating_pow(attempt))
        });
        delay.min(self.max_interval)
    }
}

/// Parse a `Retry-After` header given in seconds.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

impl Client {
    /// Run the request hooks and send the request,
    /// retrying according to the client's [RetryPolicy].
    pub(crate) async fn exec(
        &self,
        mut request: reqwest::Request,
    ) -> Result<reqwest::Response, Error<ErrorResponse>> {
        for hook in &self.hooks {
            hook.on_request(&mut request)
                .await
                .map_err(Error::InvalidRequest)?;
        }

        let Some(policy) = self.retry_policy else {
            return Ok(self.client.execute(request).await?);
        };

        let mut attempt = 0;
        loop {
            // Requests with streaming bodies can't be cloned and are sent once.
            let next = if attempt < policy.max_retries {
                request.try_clone()
            } else {
                None
            };
            let method = request.method().clone();
            let url = request.url().clone();

            let result = self.client.execute(request).await;
            let Some(next) = next else {
                return Ok(result?);
            };

            let delay = match &result {
                Ok(response) if RetryPolicy::is_retryable_status(response.status()) => {
                    warn!(
                        %method,
                        %url,
                        status = %response.status(),
                        attempt = attempt + 1,
                        "request failed, retrying"
                    );
                    policy.delay(attempt, retry_after(response.headers()))
                },
                Err(err) if err.is_connect() => {
                    warn!(%method, %url, attempt = attempt + 1, "failed to connect, retrying: {err}");
                    policy.delay(attempt, None)
                },
                _ => return Ok(result?),
            };

            debug!(?delay, "waiting before retry");
            tokio::time::sleep(delay).await;
            attempt += 1;
            request = next;
        }
    }
}
