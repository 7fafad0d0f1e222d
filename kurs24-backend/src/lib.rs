//! # kurs24-backend
//!
//! HTTP client library for the kurs24 tenant-provisioning backend.
//!
//! The backend owns tenant records, DNS, reverse-proxy routing, SSL and
//! billing; this crate wraps the subset of its `/api/v1` REST surface the
//! customer portal consumes:
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | [`ProvisioningApi::create_tenant`] | `POST /api/v1/tenant/create` |
//! | [`ProvisioningApi::tenant_status`] | `GET /api/v1/users/{id}/tenant/status` |
//! | [`ProvisioningApi::user_id_by_email`] | `GET /api/v1/users/email/{email}/id` |
//! | [`ProvisioningApi::register_user`] | `POST /api/v1/users/register` |
//! | [`ProvisioningApi::check_subdomain`] | `GET /api/v1/check-subdomain` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kurs24_backend::{BackendClient, ProvisioningApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads BACKEND_API_URL, defaults to http://kurs24-api:8000
//!     let client = BackendClient::from_env();
//!
//!     if let Some(user_id) = client.user_id_by_email("owner@example.com").await? {
//!         match client.tenant_status(user_id).await? {
//!             Some(status) => println!("{}: {}", status.subdomain, status.status),
//!             None => println!("no tenant yet"),
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, BackendError>`](BackendError). A 404 on
//! the lookup/status endpoints is a valid "not there yet" state and maps to
//! `Ok(None)` instead of an error. Transient failures (`NetworkError`,
//! `Timeout`, `RateLimited`) are reported as-is; the caller decides whether
//! to retry ([`HttpUtils::execute_request_with_retry`](http::HttpUtils) is
//! available for loops that do).

mod client;
mod error;
pub mod http;
mod traits;
mod types;

pub use client::{BackendClient, BACKEND_API_URL_VAR, DEFAULT_BACKEND_API_URL};
pub use error::{BackendError, Result};
pub use traits::ProvisioningApi;
pub use types::{
    CreateTenantRequest, RegisteredUser, RegisterUserRequest, SubdomainCheck, TenantCreated,
    TenantStatusResponse, UserIdResponse,
};
