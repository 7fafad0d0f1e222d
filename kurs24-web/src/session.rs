//! Session extraction
//!
//! The portal sits behind an auth proxy that injects identity headers.
//! `SessionUser` pulls them off the request; a missing email header means
//! no session and the request is rejected with 401 before any handler runs.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use kurs24_core::types::Session;

use crate::error::WebError;

pub const HEADER_EMAIL: &str = "x-auth-email";
pub const HEADER_NAME: &str = "x-auth-name";
pub const HEADER_PROVIDER: &str = "x-auth-provider";
pub const HEADER_USER_ID: &str = "x-auth-user-id";
pub const HEADER_PLAN: &str = "x-auth-plan";

/// Authenticated session for the current request.
pub struct SessionUser(pub Session);

fn header_str(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

impl FromRequest for SessionUser {
    type Error = WebError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(email) = header_str(req, HEADER_EMAIL) else {
            return ready(Err(WebError::Unauthorized));
        };
        let session = Session {
            email,
            name: header_str(req, HEADER_NAME),
            auth_provider: header_str(req, HEADER_PROVIDER)
                .unwrap_or_else(|| "unknown".to_string()),
            db_user_id: header_str(req, HEADER_USER_ID).and_then(|v| v.parse().ok()),
            plan: header_str(req, HEADER_PLAN),
        };
        ready(Ok(Self(session)))
    }
}
