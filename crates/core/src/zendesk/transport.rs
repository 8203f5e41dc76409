//! Authenticated HTTP transport with 429 backoff-and-retry.

use std::time::Duration;

use reqwest::{header, Client, Method, StatusCode};
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, warn};

use super::TransportError;

/// Wait applied when a 429 carries no usable `Retry-After` header.
const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(1);

/// Issues authenticated calls against the instance.
///
/// Rate limiting is handled here and never surfaces to callers: a 429
/// suspends the calling operation for the server-suggested interval and
/// the identical request is retried. Without a configured retry bound
/// that loop runs indefinitely.
pub struct Transport {
    client: Client,
    token: String,
    max_rate_limit_retries: Option<u32>,
}

impl Transport {
    pub fn new(
        token: impl Into<String>,
        max_rate_limit_retries: Option<u32>,
    ) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            token: token.into(),
            max_rate_limit_retries,
        })
    }

    /// Perform a call and return the parsed JSON body.
    ///
    /// Non-2xx statuses other than 429 become `TransportError::Status`;
    /// whether that is fatal is the caller's decision.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
        on_behalf_of: Option<&str>,
    ) -> Result<Value, TransportError> {
        let mut rate_limit_hits: u32 = 0;

        loop {
            let mut request = self
                .client
                .request(method.clone(), url)
                .bearer_auth(&self.token);

            if let Some(identity) = on_behalf_of {
                request = request.header("X-On-Behalf-Of", identity);
            }
            if let Some(json) = body {
                request = request.json(json);
            }

            let response = request.send().await?;
            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                rate_limit_hits += 1;
                if let Some(max) = self.max_rate_limit_retries {
                    if rate_limit_hits > max {
                        return Err(TransportError::RetriesExhausted(max));
                    }
                }
                let wait = parse_retry_after(
                    response
                        .headers()
                        .get(header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok()),
                );
                warn!(url = url, wait_secs = wait.as_secs(), "Rate limited, retrying");
                sleep(wait).await;
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(TransportError::Status {
                    status: status.as_u16(),
                    body: body.chars().take(200).collect::<String>(),
                });
            }

            debug!(url = url, status = status.as_u16(), "Request ok");
            return response
                .json::<Value>()
                .await
                .map_err(|e| TransportError::Parse(e.to_string()));
        }
    }
}

/// Interpret a `Retry-After` header value, defaulting to one second when
/// the header is absent or not a whole number of seconds.
fn parse_retry_after(value: Option<&str>) -> Duration {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_RETRY_AFTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_after_missing_defaults_to_one_second() {
        assert_eq!(parse_retry_after(None), Duration::from_secs(1));
    }

    #[test]
    fn test_retry_after_parses_seconds() {
        assert_eq!(parse_retry_after(Some("30")), Duration::from_secs(30));
    }

    #[test]
    fn test_retry_after_invalid_defaults_to_one_second() {
        assert_eq!(
            parse_retry_after(Some("Wed, 21 Oct 2026 07:28:00 GMT")),
            Duration::from_secs(1)
        );
    }

    #[test]
    fn test_retry_after_trims_whitespace() {
        assert_eq!(parse_retry_after(Some(" 5 ")), Duration::from_secs(5));
    }
}
