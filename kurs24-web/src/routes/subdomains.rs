//! `/api/subdomains` handlers

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use kurs24_core::types::{CreateSubdomainRequest, DeleteSubdomainRequest};
use kurs24_core::TenantService;

use crate::error::WebError;
use crate::session::SessionUser;

/// `POST /api/subdomains` - claim a subdomain and start provisioning.
pub async fn create(
    user: SessionUser,
    service: web::Data<TenantService>,
    body: web::Json<CreateSubdomainRequest>,
) -> Result<HttpResponse, WebError> {
    info!(
        subdomain = %body.subdomain,
        plan = %body.plan_id,
        email = %user.0.email,
        "subdomain creation requested"
    );
    let provisioned = service.create_subdomain(&user.0, &body).await?;
    Ok(HttpResponse::Ok().json(provisioned))
}

/// `GET /api/subdomains` - dashboard list, 0 or 1 element.
pub async fn list(
    user: SessionUser,
    service: web::Data<TenantService>,
) -> Result<HttpResponse, WebError> {
    let views = service.list_subdomains(&user.0).await;
    Ok(HttpResponse::Ok().json(views))
}

#[derive(Debug, Deserialize)]
pub struct CheckQuery {
    subdomain: String,
}

/// `GET /api/check-subdomain` - availability pre-check for the signup flow.
///
/// Unauthenticated: the marketing page calls this before any session exists.
pub async fn check(
    service: web::Data<TenantService>,
    query: web::Query<CheckQuery>,
) -> Result<HttpResponse, WebError> {
    let verdict = service.check_subdomain(&query.subdomain).await?;
    Ok(HttpResponse::Ok().json(verdict))
}

/// `DELETE /api/subdomains` - deletion stub.
///
/// The body is optional; a missing or id-less body still reports success.
pub async fn delete(
    user: SessionUser,
    service: web::Data<TenantService>,
    body: Option<web::Json<DeleteSubdomainRequest>>,
) -> Result<HttpResponse, WebError> {
    let subdomain_id = body.as_ref().and_then(|b| b.subdomain_id.as_deref());
    let message = service.delete_subdomain(&user.0, subdomain_id);
    Ok(HttpResponse::Ok().json(json!({ "success": true, "message": message })))
}
