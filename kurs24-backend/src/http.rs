//! Generic HTTP request helpers
//!
//! One place for the request/response plumbing shared by every backend call:
//! sending, logging, status classification, JSON parsing and bounded retry.
//! Individual client methods keep full control over URL and body construction.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::BackendError;

/// Truncation limit for response bodies in debug logs.
const LOG_BODY_MAX: usize = 500;

fn truncate_for_log(body: &str) -> &str {
    if body.len() <= LOG_BODY_MAX {
        body
    } else {
        // Back off to the nearest char boundary
        let mut end = LOG_BODY_MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        &body[..end]
    }
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns `(status_code, response_text)`.
    ///
    /// Transport failures become [`BackendError::NetworkError`] or
    /// [`BackendError::Timeout`]. HTTP 429 becomes
    /// [`BackendError::RateLimited`] and 502-504 a retryable
    /// [`BackendError::NetworkError`]; other statuses are returned to the
    /// caller for endpoint-specific handling.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<(u16, String), BackendError> {
        log::debug!("{method_name} {url_or_action}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                BackendError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                BackendError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        // Extract Retry-After header (before consuming the response body)
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(BackendError::RateLimited {
                retry_after,
                raw_message: Some(body),
            });
        }

        // 502/503/504 are treated as transient (retryable by the poller)
        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Server error (HTTP {status_code})");
            return Err(BackendError::NetworkError {
                detail: format!("HTTP {status_code}: {body}"),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| BackendError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(response_text: &str) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            BackendError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    /// Extract the `detail` field of a backend error body, falling back to
    /// the raw text when the body is not the expected shape.
    pub fn error_detail(response_text: &str) -> String {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            detail: String,
        }
        serde_json::from_str::<ErrorBody>(response_text)
            .map_or_else(|_| response_text.to_string(), |b| b.detail)
    }

    /// Performs an HTTP request with bounded retry.
    ///
    /// Only transient errors (network, timeout, rate limit) are retried,
    /// with exponential backoff: 100ms, 200ms, 400ms, ... capped at 10s.
    /// A `Retry-After` hint wins over the backoff schedule (capped at 30s).
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        method_name: &str,
        url_or_action: &str,
        max_retries: u32,
    ) -> Result<(u16, String), BackendError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, method_name, url_or_action).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder can only be consumed once
            let Some(req) = request_builder.try_clone() else {
                log::warn!("Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, method_name, url_or_action).await;
            };

            match Self::execute_request(req, method_name, url_or_action).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| BackendError::NetworkError {
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Pick the retry delay for a failed attempt.
///
/// A `RateLimited` error with a `retry_after` hint uses that value (capped at
/// 30s); everything else uses exponential backoff.
fn retry_delay(error: &BackendError, attempt: u32) -> Duration {
    if let BackendError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// Exponential backoff: 100ms, 200ms, 400ms, ... capped at 10 seconds.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // keep 2^attempt in range
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    let delay_ms = delay_ms.min(10_000);
    Duration::from_millis(delay_ms)
}
