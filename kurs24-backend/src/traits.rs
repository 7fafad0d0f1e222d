use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    CreateTenantRequest, RegisterUserRequest, SubdomainCheck, TenantCreated, TenantStatusResponse,
};

/// Provisioning backend API surface.
///
/// The portal's core layer works against this trait rather than the concrete
/// [`BackendClient`](crate::BackendClient) so the upstream can be replaced
/// with a scripted mock in tests.
#[async_trait]
pub trait ProvisioningApi: Send + Sync {
    /// Submit a tenant creation request (DNS, reverse proxy, SSL).
    async fn create_tenant(&self, req: &CreateTenantRequest) -> Result<TenantCreated>;

    /// Query the latest tenant record for a user.
    ///
    /// `Ok(None)` means the user has no tenant yet — a valid non-error state.
    async fn tenant_status(&self, user_id: i64) -> Result<Option<TenantStatusResponse>>;

    /// Resolve an email address to its numeric user id.
    ///
    /// `Ok(None)` means no user record exists for the email.
    async fn user_id_by_email(&self, email: &str) -> Result<Option<i64>>;

    /// Register a new user and return the issued numeric id.
    async fn register_user(&self, req: &RegisterUserRequest) -> Result<i64>;

    /// Check whether a subdomain is available (reserved names, format).
    async fn check_subdomain(&self, subdomain: &str) -> Result<SubdomainCheck>;
}
