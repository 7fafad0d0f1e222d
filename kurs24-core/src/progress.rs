//! Provisioning phase messages
//!
//! The backend exposes a single 0-100 progress integer; the dashboard maps
//! it to a human-readable phase. The threshold table mirrors the backend's
//! provisioning pipeline: DNS record, propagation, reverse proxy, SSL.

use crate::types::TenantStatus;

/// Phase message for an in-flight provisioning progress value.
#[must_use]
pub fn phase_message(progress: u8) -> &'static str {
    match progress {
        0..=10 => "DNS-Eintrag wird erstellt...",
        11..=30 => "DNS-Propagation läuft...",
        31..=60 => "Reverse-Proxy-Konfiguration wird erstellt...",
        61..=80 => "SSL-Zertifikat wird erstellt...",
        _ => "Fast fertig...",
    }
}

/// Status message shown by the poller, terminal states included.
#[must_use]
pub fn status_message(status: TenantStatus, progress: u8) -> &'static str {
    match status {
        TenantStatus::Provisioning => phase_message(progress),
        TenantStatus::Active => "Subdomain ist online!",
        TenantStatus::Failed => "Erstellung fehlgeschlagen",
    }
}
