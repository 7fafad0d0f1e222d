//! Provisioning request/response types for the browser-facing surface

use serde::{Deserialize, Serialize};

use super::tenant::TenantStatus;

/// Browser request body for `POST /api/subdomains`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubdomainRequest {
    /// Requested subdomain label.
    pub subdomain: String,
    /// Plan identifier.
    #[serde(rename = "planId")]
    pub plan_id: String,
}

/// Browser request body for `DELETE /api/subdomains`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSubdomainRequest {
    /// Synthetic view id of the subdomain to delete.
    #[serde(rename = "subdomainId")]
    pub subdomain_id: Option<String>,
}

/// Success payload of a subdomain creation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provisioned {
    /// Always `true`; kept for the browser contract.
    pub success: bool,
    /// The claimed subdomain.
    pub subdomain: String,
    /// Always `provisioning` directly after a create.
    pub status: TenantStatus,
    /// Academy URL.
    #[serde(rename = "academyUrl")]
    pub academy_url: String,
    /// Human-readable confirmation.
    pub message: String,
    /// Estimated provisioning duration.
    #[serde(rename = "estimatedTime")]
    pub estimated_time: String,
    /// Backend tenant identifier, absent in degraded mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Set when this payload was synthesized by the offline fallback
    /// instead of the backend. Not part of the browser contract.
    #[serde(skip)]
    pub degraded: bool,
}
