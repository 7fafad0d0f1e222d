//! Tenant lifecycle operations behind the browser-facing proxy routes

use std::sync::Arc;

use kurs24_backend::{BackendError, CreateTenantRequest};

use crate::error::{CoreError, CoreResult};
use crate::services::{ServiceContext, UserResolver};
use crate::subdomain::validate_subdomain;
use crate::types::{
    CreateSubdomainRequest, Provisioned, Session, SubdomainCheck, SubdomainView,
    TenantProvisioningRecord, TenantStatus, TENANT_APEX_DOMAIN,
};

/// Message carried by the degraded offline-fallback response. The wording
/// distinguishes it from a real backend confirmation.
const OFFLINE_FALLBACK_MESSAGE: &str =
    "Academy wird erstellt! (Mock-Modus - Backend nicht erreichbar)";
const OFFLINE_FALLBACK_ESTIMATE: &str = "5-10 Minuten";

/// Deletion is not wired to the backend yet; the contract still reports
/// success. TODO: call the backend tenant-delete endpoint once it exists.
const DELETE_STUB_MESSAGE: &str = "Subdomain wurde erfolgreich gelöscht";

/// Tenant provisioning service
pub struct TenantService {
    ctx: Arc<ServiceContext>,
    resolver: UserResolver,
}

impl TenantService {
    /// Create a tenant service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let resolver = UserResolver::new(ctx.clone());
        Self { ctx, resolver }
    }

    /// Submit a subdomain creation request on behalf of the caller.
    ///
    /// Validation happens before any upstream call. A backend error response
    /// propagates with its status and detail. A transport failure degrades
    /// to a synthetic success only when `offline_fallback` is configured.
    pub async fn create_subdomain(
        &self,
        session: &Session,
        request: &CreateSubdomainRequest,
    ) -> CoreResult<Provisioned> {
        validate_subdomain(&request.subdomain)?;
        if request.plan_id.is_empty() {
            return Err(CoreError::Validation("planId must not be empty".to_string()));
        }

        let upstream = CreateTenantRequest {
            name: session.display_name().to_string(),
            email: session.email.clone(),
            subdomain: request.subdomain.clone(),
            plan: request.plan_id.clone(),
        };

        match self.ctx.backend.create_tenant(&upstream).await {
            Ok(created) => Ok(Provisioned {
                success: true,
                subdomain: request.subdomain.clone(),
                status: TenantStatus::Provisioning,
                academy_url: created.url,
                message: created.message,
                estimated_time: created.estimated_time,
                tenant_id: created.tenant_id,
                degraded: false,
            }),
            Err(e @ (BackendError::NetworkError { .. } | BackendError::Timeout { .. }))
                if self.ctx.offline_fallback =>
            {
                log::warn!("Backend unreachable, serving offline fallback: {e}");
                Ok(Provisioned {
                    success: true,
                    subdomain: request.subdomain.clone(),
                    status: TenantStatus::Provisioning,
                    academy_url: format!("https://{}.{TENANT_APEX_DOMAIN}", request.subdomain),
                    message: OFFLINE_FALLBACK_MESSAGE.to_string(),
                    estimated_time: OFFLINE_FALLBACK_ESTIMATE.to_string(),
                    tenant_id: None,
                    degraded: true,
                })
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Tenant creation rejected: {e}");
                } else {
                    log::error!("Tenant creation failed: {e}");
                }
                Err(CoreError::Backend(e))
            }
        }
    }

    /// Availability pre-check used by the signup flow before payment.
    ///
    /// A label that fails local validation reports `available = false` with
    /// the reason instead of an error, matching the backend's own check
    /// contract; only labels that pass locally are sent upstream.
    pub async fn check_subdomain(&self, subdomain: &str) -> CoreResult<SubdomainCheck> {
        match validate_subdomain(subdomain) {
            Ok(()) => Ok(self.ctx.backend.check_subdomain(subdomain).await?),
            Err(CoreError::Validation(message)) => Ok(SubdomainCheck {
                subdomain: subdomain.to_string(),
                available: false,
                message,
            }),
            Err(e) => Err(e),
        }
    }

    /// Latest provisioning record for the caller, `None` when no subdomain
    /// has been requested yet.
    pub async fn tenant_status(
        &self,
        session: &Session,
    ) -> CoreResult<Option<TenantProvisioningRecord>> {
        let user_id = self.resolver.resolve(session).await?;
        let wire = self.ctx.backend.tenant_status(user_id).await?;
        Ok(wire.map(TenantProvisioningRecord::from_wire))
    }

    /// Dashboard subdomain list (0 or 1 element).
    ///
    /// Read path: any failure degrades to an empty list so the dashboard
    /// never hard-crashes on a transient backend outage.
    pub async fn list_subdomains(&self, session: &Session) -> Vec<SubdomainView> {
        let user_id = match self.resolver.resolve(session).await {
            Ok(id) => id,
            Err(e) => {
                log::warn!("Subdomain list: id resolution failed, returning empty: {e}");
                return Vec::new();
            }
        };

        match self.ctx.backend.tenant_status(user_id).await {
            Ok(Some(wire)) => {
                let record = TenantProvisioningRecord::from_wire(wire);
                vec![SubdomainView::from_record(&record, session.plan_or_default())]
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Subdomain list: status fetch failed, returning empty: {e}");
                Vec::new()
            }
        }
    }

    /// Delete a subdomain (stub - not wired to the backend).
    pub fn delete_subdomain(&self, session: &Session, subdomain_id: Option<&str>) -> String {
        log::warn!(
            "Subdomain deletion requested by {} for {:?} - no backend wiring, reporting success",
            session.email,
            subdomain_id
        );
        DELETE_STUB_MESSAGE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        provisioning_wire, session_with_cached_id, session_without_cached_id, MockBackend,
    };
    use crate::types::ViewStatus;
    use kurs24_backend::TenantCreated;

    fn service(backend: Arc<MockBackend>, offline_fallback: bool) -> TenantService {
        TenantService::new(Arc::new(ServiceContext::new(backend, offline_fallback)))
    }

    fn create_request(subdomain: &str) -> CreateSubdomainRequest {
        CreateSubdomainRequest {
            subdomain: subdomain.to_string(),
            plan_id: "basis".to_string(),
        }
    }

    #[tokio::test]
    async fn create_returns_provisioning_payload() {
        let backend = Arc::new(MockBackend::new());
        backend
            .set_create_result(TenantCreated {
                url: "https://acme.kurs24.io".into(),
                message: "Academy acme.kurs24.io wird erstellt!".into(),
                estimated_time: "5-10 Minuten".into(),
                tenant_id: Some("tenant_acme".into()),
            })
            .await;
        let service = service(backend, false);

        let provisioned = service
            .create_subdomain(&session_with_cached_id(1), &create_request("acme"))
            .await
            .unwrap();

        assert!(provisioned.success);
        assert_eq!(provisioned.status, TenantStatus::Provisioning);
        assert_eq!(provisioned.academy_url, "https://acme.kurs24.io");
        assert_eq!(provisioned.tenant_id.as_deref(), Some("tenant_acme"));
        assert!(!provisioned.degraded);
    }

    #[tokio::test]
    async fn create_validates_before_upstream() {
        let backend = Arc::new(MockBackend::new());
        let service = service(backend.clone(), false);

        let err = service
            .create_subdomain(&session_with_cached_id(1), &create_request("Bad Name"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(backend.create_calls().await, 0);
    }

    #[tokio::test]
    async fn create_rejects_empty_plan() {
        let backend = Arc::new(MockBackend::new());
        let service = service(backend, false);
        let request = CreateSubdomainRequest {
            subdomain: "acme".into(),
            plan_id: String::new(),
        };

        let err = service
            .create_subdomain(&session_with_cached_id(1), &request)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn create_propagates_upstream_error() {
        let backend = Arc::new(MockBackend::new());
        backend
            .set_create_error(BackendError::Upstream {
                status: 500,
                detail: "Subdomain-Erstellung fehlgeschlagen".into(),
            })
            .await;
        let service = service(backend, false);

        let err = service
            .create_subdomain(&session_with_cached_id(1), &create_request("acme"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Backend(BackendError::Upstream { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn transport_failure_without_fallback_is_an_error() {
        let backend = Arc::new(MockBackend::new());
        backend
            .set_create_error(BackendError::NetworkError {
                detail: "connection refused".into(),
            })
            .await;
        let service = service(backend, false);

        let err = service
            .create_subdomain(&session_with_cached_id(1), &create_request("acme"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Backend(BackendError::NetworkError { .. })
        ));
    }

    #[tokio::test]
    async fn transport_failure_with_fallback_degrades() {
        let backend = Arc::new(MockBackend::new());
        backend
            .set_create_error(BackendError::NetworkError {
                detail: "connection refused".into(),
            })
            .await;
        let service = service(backend, true);

        let provisioned = service
            .create_subdomain(&session_with_cached_id(1), &create_request("acme"))
            .await
            .unwrap();
        assert!(provisioned.degraded);
        assert_eq!(provisioned.academy_url, "https://acme.kurs24.io");
        assert!(provisioned.message.contains("Mock-Modus"));
        assert!(provisioned.tenant_id.is_none());
    }

    #[tokio::test]
    async fn upstream_error_never_triggers_fallback() {
        // Fallback is for unreachable backends only; an HTTP error response
        // means the backend is alive and its verdict stands
        let backend = Arc::new(MockBackend::new());
        backend
            .set_create_error(BackendError::Upstream {
                status: 409,
                detail: "Subdomain vergeben".into(),
            })
            .await;
        let service = service(backend, true);

        let err = service
            .create_subdomain(&session_with_cached_id(1), &create_request("acme"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Backend(BackendError::Upstream { status: 409, .. })
        ));
    }

    #[tokio::test]
    async fn check_proxies_backend_verdict() {
        let backend = Arc::new(MockBackend::new());
        backend
            .set_check_result(SubdomainCheck {
                subdomain: "acme".into(),
                available: false,
                message: "Subdomain bereits vergeben".into(),
            })
            .await;
        let service = service(backend.clone(), false);

        let verdict = service.check_subdomain("acme").await.unwrap();
        assert!(!verdict.available);
        assert_eq!(verdict.message, "Subdomain bereits vergeben");
        assert_eq!(backend.check_calls().await, 1);
    }

    #[tokio::test]
    async fn check_rejects_reserved_labels_locally() {
        let backend = Arc::new(MockBackend::new());
        let service = service(backend.clone(), false);

        let verdict = service.check_subdomain("admin").await.unwrap();
        assert!(!verdict.available);
        assert!(verdict.message.contains("reserved"));
        // the verdict is local; no upstream round trip
        assert_eq!(backend.check_calls().await, 0);
    }

    #[tokio::test]
    async fn status_immediately_after_create_is_provisioning_zero() {
        let backend = Arc::new(MockBackend::new());
        backend
            .set_status_sequence(vec![provisioning_wire("acme", 0)])
            .await;
        let service = service(backend, false);

        let record = service
            .tenant_status(&session_with_cached_id(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.status, TenantStatus::Provisioning);
        assert_eq!(record.progress, 0);
    }

    #[tokio::test]
    async fn status_none_when_no_tenant() {
        let backend = Arc::new(MockBackend::new());
        let service = service(backend, false);

        let record = service
            .tenant_status(&session_with_cached_id(1))
            .await
            .unwrap();
        assert!(record.is_none());
    }

    #[tokio::test]
    async fn list_maps_record_to_view() {
        let backend = Arc::new(MockBackend::new());
        let mut wire = provisioning_wire("acme", 45);
        wire.status = "failed".to_string();
        backend.set_status_sequence(vec![wire]).await;
        let service = service(backend, false);

        let views = service.list_subdomains(&session_with_cached_id(1)).await;
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].id, "subdomain_acme");
        assert_eq!(views[0].status, ViewStatus::Suspended);
    }

    #[tokio::test]
    async fn list_is_empty_without_tenant() {
        let backend = Arc::new(MockBackend::new());
        let service = service(backend, false);

        let views = service.list_subdomains(&session_with_cached_id(1)).await;
        assert!(views.is_empty());
    }

    #[tokio::test]
    async fn list_degrades_to_empty_on_read_failure() {
        let backend = Arc::new(MockBackend::new());
        backend
            .set_status_error(BackendError::NetworkError {
                detail: "connection refused".into(),
            })
            .await;
        let service = service(backend, false);

        let views = service.list_subdomains(&session_with_cached_id(1)).await;
        assert!(views.is_empty());
    }

    #[tokio::test]
    async fn list_degrades_to_empty_on_resolution_failure() {
        let backend = Arc::new(MockBackend::new());
        backend
            .set_lookup_error(BackendError::Upstream {
                status: 500,
                detail: "db down".into(),
            })
            .await;
        let service = service(backend, false);

        let views = service.list_subdomains(&session_without_cached_id()).await;
        assert!(views.is_empty());
    }

    #[tokio::test]
    async fn delete_is_a_stubbed_success() {
        let backend = Arc::new(MockBackend::new());
        let service = service(backend, false);

        let message =
            service.delete_subdomain(&session_with_cached_id(1), Some("subdomain_acme"));
        assert_eq!(message, "Subdomain wurde erfolgreich gelöscht");
        // Missing id still succeeds per the current contract
        let message = service.delete_subdomain(&session_with_cached_id(1), None);
        assert!(!message.is_empty());
    }
}
