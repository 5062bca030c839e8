//! HTTP server lifecycle.

use actix_web::{web, App, HttpServer};
use tracing::{error, info};

use super::state::AppState;
use super::{middleware, routes};
use crate::error::Result;
use crate::infrastructure::config::server::ServerConfig;

/// Bind, serve until Ctrl+C, then stop gracefully.
///
/// # Errors
///
/// Returns an I/O error if the address cannot be bound.
pub async fn run(server_config: &ServerConfig, state: AppState) -> Result<()> {
    let bind_addr = server_config.bind_addr();
    let workers = server_config.worker_count();
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::request_logger())
            .wrap(middleware::default_headers())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(&bind_addr)?
    .workers(workers)
    .disable_signals()
    .run();

    info!(addr = %bind_addr, workers, "listening");

    let handle = server.handle();
    let task = tokio::spawn(server);

    tokio::select! {
        result = task => {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    error!(error = %e, "server failed");
                    return Err(e.into());
                }
                Err(e) => error!(error = %e, "server task failed"),
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
            handle.stop(true).await;
        }
    }

    info!("server stopped");
    Ok(())
}
