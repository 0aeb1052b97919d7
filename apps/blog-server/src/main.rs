//! # Blog Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use blog_server::telemetry::{self, TelemetryConfig};
use blog_server::{AppConfig, AppState, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting blog server on {}:{}",
        config.host,
        config.port
    );

    // A configured database that cannot be reached is fatal.
    let state = AppState::new(config.database.as_ref())
        .await
        .map_err(|e| {
            tracing::error!("Unable to connect to database: {}", e);
            std::io::Error::other(e)
        })?;

    let public_dir = config.public_dir.clone();
    match &public_dir {
        Some(dir) => tracing::info!("Serving static files from {}", dir.display()),
        None => tracing::warn!("No public directory found. The client page will not be served."),
    }

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
            .configure(|cfg| handlers::configure_static(cfg, public_dir.as_deref()))
            .default_service(web::to(handlers::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
