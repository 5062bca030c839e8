//! HTTP route registration.

use actix_web::web;

use super::handlers;

/// Register all pages and API routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::home))
        .route("/about", web::get().to(handlers::about))
        .service(
            web::resource("/query")
                .route(web::get().to(handlers::query_form))
                .route(web::post().to(handlers::query_submit)),
        )
        .route("/api/query", web::post().to(handlers::api_query))
        .route("/healthcheck", web::get().to(handlers::healthcheck));
}
