mod app_state;
mod handlers;
mod status;

use crate::{
    api::Api,
    catalog::HttpCatalogBackend,
    config::Config,
    network::Network,
    server::app_state::AppState,
};
use actix_web::{App, HttpServer, Result, middleware, web};
use anyhow::Context;
use tracing::info;
use tracing_actix_web::TracingLogger;

#[actix_web::main]
pub async fn run(config: Config) -> Result<(), anyhow::Error> {
    let network = Network::create(&config.backend.client)?;
    let backend = HttpCatalogBackend::new(&config, network.http_client);
    info!(
        catalog.backend = %config.backend.host,
        "Catalog backend is configured."
    );

    let http_server_url = format!("0.0.0.0:{}", config.port);
    let state = web::Data::new(AppState::new(Api::new(config, backend)));
    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::Compat::new(middleware::Compress::default()))
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route(
                        "/status",
                        web::get().to(handlers::status_get::<HttpCatalogBackend>),
                    )
                    .route(
                        "/catalog/{domain}",
                        web::get().to(handlers::catalog_browse::<HttpCatalogBackend>),
                    )
                    .route(
                        "/catalog/{domain}/{segments:.*}",
                        web::get().to(handlers::catalog_browse::<HttpCatalogBackend>),
                    ),
            )
    });

    let http_server = http_server
        .bind(&http_server_url)
        .with_context(|| format!("Failed to bind to {}.", &http_server_url))?;

    info!("Catalogo API server is available at http://{http_server_url}");

    http_server
        .run()
        .await
        .context("Failed to run Catalogo API server.")
}
