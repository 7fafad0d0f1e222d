//! HTTP route handlers

mod health;
mod subdomains;
mod tenant;

use actix_web::web;

/// Mount all routes under their final paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health)
        .service(
            web::resource("/api/subdomains")
                .route(web::post().to(subdomains::create))
                .route(web::get().to(subdomains::list))
                .route(web::delete().to(subdomains::delete)),
        )
        .service(web::resource("/api/check-subdomain").route(web::get().to(subdomains::check)))
        .service(web::resource("/api/user/tenant/status").route(web::get().to(tenant::status)));
}
