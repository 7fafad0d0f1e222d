//! Caller identity as issued by the external identity collaborator

use serde::{Deserialize, Serialize};

/// Default display name when the identity provider supplied none.
const DEFAULT_DISPLAY_NAME: &str = "Academy Owner";

/// An authenticated caller's session.
///
/// Issued by the external identity collaborator; the portal never mints or
/// mutates sessions, it only reads them. `db_user_id` is the cached numeric
/// backend id — sessions that predate the cache carry `None` and go through
/// the email-lookup slow path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Verified email address.
    pub email: String,
    /// Display name, if the provider supplied one.
    pub name: Option<String>,
    /// Identity provider that authenticated the user (e.g. `google`).
    pub auth_provider: String,
    /// Cached numeric backend user id (fast path for id resolution).
    pub db_user_id: Option<i64>,
    /// Cached plan tier (e.g. `free`, `basis`, `pro`).
    pub plan: Option<String>,
}

impl Session {
    /// Display name with the platform default applied.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_DISPLAY_NAME)
    }

    /// Cached plan tier, defaulting to `basis` for provisioning requests
    /// that carry no explicit plan.
    #[must_use]
    pub fn plan_or_default(&self) -> &str {
        self.plan.as_deref().unwrap_or("basis")
    }
}
