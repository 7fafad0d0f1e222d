//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use kurs24_backend::BackendError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Request validation failed before any upstream call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Caller identity does not match the resource owner
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Both id-resolution paths failed (502-class towards the browser)
    #[error("Backend API error (user resolution, HTTP {status})")]
    UserResolution {
        /// Upstream status code, or 502 for transport failures
        status: u16,
    },

    /// Backend error (converted from the client library)
    #[error("{0}")]
    Backend(#[from] BackendError),
}

impl CoreError {
    /// Whether this is expected behavior (user input, resource does not
    /// exist) used for log classification.
    ///
    /// Level `warn` should be used when returning `true`, `error` otherwise.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::Forbidden(_) => true,
            Self::Backend(e) => e.is_expected(),
            Self::UserResolution { .. } => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
