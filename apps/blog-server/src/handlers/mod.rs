//! HTTP handlers and route configuration.

mod posts;

use std::path::Path;

use actix_files::Files;
use actix_web::{HttpResponse, guard, web};

use crate::middleware::error::{json_error_handler, query_error_handler};

/// Configure the JSON API routes.
///
/// Unsupported methods on known paths answer like unknown paths.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::resource("/posts")
                .route(web::get().to(posts::list_posts))
                .default_service(web::to(not_found)),
        )
        .service(
            web::resource("/post")
                .route(web::post().to(posts::create_post))
                .route(web::delete().to(posts::delete_post))
                .default_service(web::to(not_found)),
        );
}

/// Mount the client assets at `/`, after the API routes.
///
/// Only GET and HEAD reach the file service; any other method falls
/// through to the app's default service.
pub fn configure_static(cfg: &mut web::ServiceConfig, public_dir: Option<&Path>) {
    if let Some(dir) = public_dir {
        cfg.service(
            Files::new("/", dir)
                .guard(guard::Any(guard::Get()).or(guard::Head()))
                .index_file("blogger.html")
                .default_handler(web::to(not_found)),
        );
    }
}

/// Fallback for every unmatched request.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain; charset=utf-8")
        .body("404 Not Found")
}
