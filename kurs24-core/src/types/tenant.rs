//! Tenant provisioning record types

use serde::{Deserialize, Serialize};

use kurs24_backend::TenantStatusResponse;

/// Apex domain under which tenant academies are provisioned.
pub const TENANT_APEX_DOMAIN: &str = "kurs24.io";

/// Default value for the advisory DNS/SSL sub-phase indicators.
pub const PHASE_PENDING: &str = "pending";

/// Backend status vocabulary for a tenant record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    /// DNS/proxy/SSL allocation in progress
    Provisioning,
    /// Academy is online
    Active,
    /// Provisioning failed
    Failed,
}

impl TenantStatus {
    /// Parse the backend's status string. Unknown vocabulary collapses to
    /// `Failed` (the presentation layer shows both as suspended).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "provisioning" => Self::Provisioning,
            "active" => Self::Active,
            _ => Self::Failed,
        }
    }

    /// Terminal states expect no further transitions without a new request.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Active | Self::Failed)
    }

    /// Backend wire spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Provisioning => "provisioning",
            Self::Active => "active",
            Self::Failed => "failed",
        }
    }
}

/// A tenant's provisioning state as owned by the backend.
///
/// Never persisted portal-side; re-derived from the backend on every poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantProvisioningRecord {
    /// Subdomain label (unique, lowercase alphanumeric plus hyphen).
    pub subdomain: String,
    /// Lifecycle status.
    pub status: TenantStatus,
    /// Progress 0-100, non-decreasing while provisioning.
    pub progress: u8,
    /// Advisory DNS sub-phase indicator.
    pub dns_status: String,
    /// Advisory SSL sub-phase indicator.
    pub ssl_status: String,
    /// Fully qualified hostname.
    pub domain: String,
    /// Timestamp of the last state change (ISO-8601), if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl TenantProvisioningRecord {
    /// Build a record from the backend wire response, applying the
    /// presentation defaults for absent optional fields.
    #[must_use]
    pub fn from_wire(wire: TenantStatusResponse) -> Self {
        let domain = wire
            .domain
            .unwrap_or_else(|| format!("{}.{TENANT_APEX_DOMAIN}", wire.subdomain));
        Self {
            status: TenantStatus::parse(&wire.status),
            subdomain: wire.subdomain,
            progress: wire.progress.unwrap_or(0).min(100),
            dns_status: wire.dns_status.unwrap_or_else(|| PHASE_PENDING.to_string()),
            ssl_status: wire.ssl_status.unwrap_or_else(|| PHASE_PENDING.to_string()),
            domain,
            updated_at: wire.updated_at,
        }
    }

    /// `https://` URL of the academy.
    #[must_use]
    pub fn academy_url(&self) -> String {
        format!("https://{}", self.domain)
    }
}
