//! HTTP handlers and route configuration.

mod health;
pub mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed bodies get the same problem-details shape as every other error.
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .route("/health", web::get().to(health::health_check))
    .service(
        web::scope("/blogposts")
            .route("", web::get().to(posts::list))
            .route("", web::post().to(posts::create))
            .route("/{id}", web::put().to(posts::replace))
            .route("/{id}", web::delete().to(posts::delete)),
    );
}
