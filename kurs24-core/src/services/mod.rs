//! Business logic service layer

mod tenant_service;
mod user_resolver;

pub use tenant_service::TenantService;
pub use user_resolver::UserResolver;

use std::sync::Arc;

use kurs24_backend::ProvisioningApi;

/// Service context - holds all dependencies
///
/// The platform layer creates this context and injects the backend client
/// (or a mock in tests).
pub struct ServiceContext {
    /// Provisioning backend API
    pub backend: Arc<dyn ProvisioningApi>,
    /// When enabled, a transport failure on tenant creation degrades to a
    /// synthetic success instead of an error. Off by default; must be
    /// switched on explicitly via configuration.
    pub offline_fallback: bool,
}

impl ServiceContext {
    /// Create a service context
    #[must_use]
    pub fn new(backend: Arc<dyn ProvisioningApi>, offline_fallback: bool) -> Self {
        Self {
            backend,
            offline_fallback,
        }
    }
}
