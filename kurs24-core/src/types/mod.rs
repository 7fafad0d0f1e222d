//! Type definition module

mod provision;
mod session;
mod tenant;
mod view;

pub use provision::{CreateSubdomainRequest, DeleteSubdomainRequest, Provisioned};
pub use session::Session;
pub use tenant::{TenantProvisioningRecord, TenantStatus, PHASE_PENDING, TENANT_APEX_DOMAIN};
pub use view::{SubdomainView, ViewStatus};

// Re-export the wire types of the backend client library
pub use kurs24_backend::{
    CreateTenantRequest, RegisterUserRequest, SubdomainCheck, TenantCreated, TenantStatusResponse,
};
