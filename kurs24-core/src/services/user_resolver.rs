//! Shared user-id resolution
//!
//! Nearly every proxy route needs the numeric backend id of the caller.
//! The resolution is implemented once here with a single failure contract:
//! fast path reads the id cached in the session, slow path (sessions that
//! predate the cache) looks the email up and registers the user on 404.

use std::sync::Arc;

use kurs24_backend::RegisterUserRequest;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::Session;

/// Resolves a session to a stable numeric backend user id.
pub struct UserResolver {
    ctx: Arc<ServiceContext>,
}

impl UserResolver {
    /// Create a resolver instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Resolve the caller to a numeric user id.
    ///
    /// Idempotent for a given session: a repeated call re-runs the lookup,
    /// which now succeeds, so no duplicate registration is issued. Failures
    /// on either path surface as [`CoreError::UserResolution`] carrying the
    /// upstream status (502 for transport failures); the resolver itself
    /// never retries.
    pub async fn resolve(&self, session: &Session) -> CoreResult<i64> {
        if let Some(id) = session.db_user_id {
            return Ok(id);
        }

        log::debug!("No cached user id in session, falling back to email lookup");
        let looked_up = self
            .ctx
            .backend
            .user_id_by_email(&session.email)
            .await
            .map_err(|e| {
                log::error!("User id lookup failed: {e}");
                CoreError::UserResolution {
                    status: e.upstream_status().unwrap_or(502),
                }
            })?;

        if let Some(id) = looked_up {
            return Ok(id);
        }

        // Unknown email: the session predates registration entirely
        log::info!("Registering new backend user for {}", session.email);
        let req = RegisterUserRequest {
            email: session.email.clone(),
            name: session.display_name().to_string(),
            auth_provider: session.auth_provider.clone(),
        };
        self.ctx.backend.register_user(&req).await.map_err(|e| {
            log::error!("User registration failed: {e}");
            CoreError::UserResolution {
                status: e.upstream_status().unwrap_or(502),
            }
        })
    }
}
