//! HTTP error mapping
//!
//! Translates domain errors into JSON responses. Every body is
//! `{"error": "..."}` so the dashboard has a single shape to render.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

use kurs24_core::CoreError;

#[derive(Debug)]
pub enum WebError {
    /// No authenticated session on the request.
    Unauthorized,
    /// Domain-level failure.
    Core(CoreError),
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::Core(e) => write!(f, "{e}"),
        }
    }
}

impl From<CoreError> for WebError {
    fn from(e: CoreError) -> Self {
        Self::Core(e)
    }
}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Core(e) => match e {
                CoreError::Validation(_) => StatusCode::BAD_REQUEST,
                CoreError::Forbidden(_) => StatusCode::FORBIDDEN,
                CoreError::UserResolution { status } => {
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
                }
                CoreError::Backend(be) => be
                    .upstream_status()
                    .and_then(|s| StatusCode::from_u16(s).ok())
                    .unwrap_or(StatusCode::BAD_GATEWAY),
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
