//! kurs24.io portal API
//!
//! Thin actix-web layer over [`kurs24_core`]: session extraction, error
//! mapping and route wiring. All tenant state lives in the backend; this
//! crate holds no storage of its own.

pub mod config;
pub mod error;
pub mod routes;
pub mod session;

use std::sync::Arc;

use actix_web::web;

use kurs24_backend::ProvisioningApi;
use kurs24_core::{ServiceContext, TenantService};

/// Build the shared application state from a backend client.
///
/// Split out of `main` so integration tests can inject a mock backend.
#[must_use]
pub fn app_data(backend: Arc<dyn ProvisioningApi>, offline_fallback: bool) -> web::Data<TenantService> {
    let ctx = Arc::new(ServiceContext::new(backend, offline_fallback));
    web::Data::new(TenantService::new(ctx))
}
