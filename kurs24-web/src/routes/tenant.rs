//! `/api/user/tenant/status` handler

use actix_web::{web, HttpResponse};
use serde_json::json;

use kurs24_core::TenantService;

use crate::error::WebError;
use crate::session::SessionUser;

/// `GET /api/user/tenant/status` - latest provisioning record.
///
/// Returns an empty object when the caller has no tenant yet; the dashboard
/// treats that as "nothing to poll".
pub async fn status(
    user: SessionUser,
    service: web::Data<TenantService>,
) -> Result<HttpResponse, WebError> {
    match service.tenant_status(&user.0).await? {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Ok(HttpResponse::Ok().json(json!({}))),
    }
}
