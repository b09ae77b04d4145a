//! HTTP surface: `GET /` and `POST /generate`

pub mod handler;
pub mod response;
pub mod state;

use std::sync::Arc;
use axum::routing::{get, post};
use axum::Router;
use log::info;
use tower_http::cors::CorsLayer;

pub use state::AppState;

/// Routes with permissive CORS, ready to serve
pub fn router(state: Arc<AppState>) -> Router
{   Router::new()
      .route("/", get(handler::home))
      .route("/generate", post(handler::generate))
      .with_state(state)
      .layer(CorsLayer::permissive())
}

/// Bind the configured address and serve until ctrl-c
pub async fn serve(config: &crate::config::RelayConfig)
  -> Result<(), crate::error::Error>
{   let state = AppState::from_config(config)?;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("prompt-relay listening on http://{}", addr);
    info!(
      "Forwarding to {} with model {}",
      config.upstream.endpoint_url, config.upstream.model
    );

    axum::serve(listener, router(state))
      .with_graceful_shutdown(shutdown_signal())
      .await?;

    info!("prompt-relay stopped");
    Ok(())
}

async fn shutdown_signal()
{   match tokio::signal::ctrl_c().await
    {   Ok(()) => info!("Shutdown signal received, draining connections")
      , Err(e) => {
          log::error!("Failed to listen for ctrl-c: {}", e);
          std::future::pending::<()>().await
        }
    }
}
