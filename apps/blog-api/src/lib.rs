//! # Blog API
//!
//! Actix-web service exposing CRUD access to blog posts at `/blogposts`.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

pub use config::AppConfig;
pub use state::AppState;

/// Build the HTTP server on an already bound listener.
///
/// The returned [`Server`] must be awaited or spawned to start serving.
pub fn run(
    listener: TcpListener,
    state: AppState,
    workers: Option<usize>,
) -> std::io::Result<Server> {
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(handlers::configure_routes)
    });
    let server = match workers {
        Some(workers) => server.workers(workers),
        None => server,
    };

    Ok(server.listen(listener)?.run())
}
