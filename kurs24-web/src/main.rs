use std::sync::Arc;

use actix_web::{App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use kurs24_backend::BackendClient;
use kurs24_web::config::AppConfig;
use kurs24_web::{app_data, routes};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    let bind = config.server.bind.clone();
    let workers = config.workers();

    info!(
        backend = %config.backend.api_url,
        offline_fallback = config.backend.offline_fallback,
        "starting portal API"
    );

    let backend = Arc::new(BackendClient::new(&config.backend.api_url));
    let data = app_data(backend, config.backend.offline_fallback);

    info!(%bind, workers, "listening");
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .workers(workers)
    .bind(&bind)?
    .run()
    .await?;

    Ok(())
}
