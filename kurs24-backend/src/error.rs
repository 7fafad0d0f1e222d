use serde::{Deserialize, Serialize};

/// Unified error type for all backend API operations.
///
/// All variants are serializable for structured error reporting towards the
/// browser-facing proxy layer.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError) — network connectivity issues
/// - [`Timeout`](Self::Timeout) — request timed out
/// - [`RateLimited`](Self::RateLimited) — API rate limit exceeded
///
/// Only the status poller retries these; one-shot proxy calls surface them
/// directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum BackendError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    RateLimited {
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The backend responded with a non-2xx status carrying an error detail.
    ///
    /// A 404 on the lookup/status endpoints never reaches this variant; the
    /// client maps those to `Ok(None)` ("not there yet" is a valid state).
    Upstream {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error detail message, as extracted from the response body.
        detail: String,
    },

    /// Failed to parse the backend's API response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },
}

impl BackendError {
    /// Whether this is expected behavior (a backend verdict on the request,
    /// e.g. a subdomain conflict) used for log-level classification.
    ///
    /// `true` means log at `warn`, `false` at `error`.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Upstream { status, .. } if *status < 500)
    }

    /// Whether the failure is transient and worth retrying.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }

    /// The upstream HTTP status to propagate towards the browser, where one
    /// exists. Transport-level failures have none.
    #[must_use]
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(429),
            _ => None,
        }
    }
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::RateLimited { retry_after, .. } => {
                if let Some(secs) = retry_after {
                    write!(f, "Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "Rate limited")
                }
            }
            Self::Upstream { status, detail } => {
                write!(f, "Backend API error (HTTP {status}): {detail}")
            }
            Self::ParseError { detail } => {
                write!(f, "Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for BackendError {}

/// Convenience type alias for `Result<T, BackendError>`.
pub type Result<T> = std::result::Result<T, BackendError>;
