//! Dashboard presentation mapping

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::tenant::{TenantProvisioningRecord, TenantStatus};

/// Presentation status vocabulary.
///
/// Deliberately lossy: backend `failed` (and anything unknown) collapses to
/// `suspended` — the dashboard offers no distinct failure treatment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewStatus {
    /// Academy online
    Active,
    /// Creation in progress
    Provisioning,
    /// Not serving (failed or deactivated)
    Suspended,
}

impl From<TenantStatus> for ViewStatus {
    fn from(status: TenantStatus) -> Self {
        match status {
            TenantStatus::Active => Self::Active,
            TenantStatus::Provisioning => Self::Provisioning,
            TenantStatus::Failed => Self::Suspended,
        }
    }
}

/// One row of the dashboard's subdomain list.
///
/// Ephemeral: rebuilt from the backend record on every fetch, never stored.
/// The mixed camel/snake field casing is part of the browser contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubdomainView {
    /// Synthetic id derived from the subdomain.
    pub id: String,
    /// Subdomain label.
    pub subdomain: String,
    /// Presentation status.
    pub status: ViewStatus,
    /// Plan identifier.
    #[serde(rename = "planId")]
    pub plan_id: String,
    /// Academy URL.
    #[serde(rename = "academyUrl")]
    pub academy_url: String,
    /// Creation timestamp shown in the list (backend `updated_at` or now).
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Last-access timestamp (not tracked; always now).
    #[serde(rename = "lastAccessed")]
    pub last_accessed: String,
    /// Advisory SSL sub-phase.
    #[serde(rename = "sslStatus")]
    pub ssl_status: String,
    /// Provisioning progress 0-100.
    pub progress: u8,
    /// Advisory DNS sub-phase.
    pub dns_status: String,
}

impl SubdomainView {
    /// Derive the view row from a provisioning record.
    #[must_use]
    pub fn from_record(record: &TenantProvisioningRecord, plan_id: &str) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: format!("subdomain_{}", record.subdomain),
            subdomain: record.subdomain.clone(),
            status: record.status.into(),
            plan_id: plan_id.to_string(),
            academy_url: record.academy_url(),
            created_at: record.updated_at.clone().unwrap_or_else(|| now.clone()),
            last_accessed: now,
            ssl_status: record.ssl_status.clone(),
            progress: record.progress,
            dns_status: record.dns_status.clone(),
        }
    }
}
