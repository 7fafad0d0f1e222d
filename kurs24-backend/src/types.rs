//! Wire types for the provisioning backend's `/api/v1` surface.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v1/tenant/create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTenantRequest {
    /// Display name of the academy owner.
    pub name: String,
    /// Owner email address.
    pub email: String,
    /// Requested subdomain label (validated by the caller).
    pub subdomain: String,
    /// Plan identifier (e.g. `basis`, `pro`).
    pub plan: String,
}

/// Success body of `POST /api/v1/tenant/create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantCreated {
    /// Full academy URL, e.g. `https://acme.kurs24.io`.
    pub url: String,
    /// Human-readable confirmation message.
    pub message: String,
    /// Estimated provisioning duration, e.g. `5-10 Minuten`.
    pub estimated_time: String,
    /// Backend tenant identifier, e.g. `tenant_acme`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

/// Body of `GET /api/v1/users/{id}/tenant/status`.
///
/// Optional fields carry backend-side NULLs; the core layer applies the
/// presentation defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantStatusResponse {
    /// Backend status vocabulary: `provisioning | active | failed`.
    pub status: String,
    /// Subdomain label.
    pub subdomain: String,
    /// Provisioning progress, 0-100.
    #[serde(default)]
    pub progress: Option<u8>,
    /// Fully qualified hostname once assigned.
    #[serde(default)]
    pub domain: Option<String>,
    /// Advisory SSL sub-phase indicator.
    #[serde(default)]
    pub ssl_status: Option<String>,
    /// Advisory DNS sub-phase indicator.
    #[serde(default)]
    pub dns_status: Option<String>,
    /// Timestamp of the last state change (ISO-8601).
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of `GET /api/v1/users/email/{email}/id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdResponse {
    /// Numeric database user id.
    pub user_id: i64,
}

/// Request body for `POST /api/v1/users/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    /// Email address (unique key on the backend).
    pub email: String,
    /// Display name.
    pub name: String,
    /// Identity provider that authenticated the user (e.g. `google`).
    pub auth_provider: String,
}

/// Body of `POST /api/v1/users/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUser {
    /// Newly issued numeric user id.
    pub id: i64,
}

/// Body of `GET /api/v1/check-subdomain`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubdomainCheck {
    /// The subdomain that was checked.
    pub subdomain: String,
    /// Whether the subdomain can be claimed.
    pub available: bool,
    /// Human-readable explanation.
    pub message: String,
}
