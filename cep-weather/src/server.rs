// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{handlers, state::AppState};
use anyhow::{Context, Result};
use axum::{routing::any, Router};
use base::ReqwestTransport;
use config::ServiceConfig;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

/// Both routes accept any method; `/temperature` answers 405 itself.
pub fn build_router(state: AppState) -> Router {
  Router::new()
    .route("/temperature", any(handlers::temperature))
    .route("/health", any(handlers::health))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

#[instrument(skip(config))]
pub async fn run(config: ServiceConfig) -> Result<()> {
  let transport = Arc::new(
    ReqwestTransport::new(config.http_timeout()).context("Failed to create HTTP client")?,
  );
  let state = AppState::from_config(&config, transport).context("Invalid provider URL")?;

  if config.weather_api_key.is_none() {
    warn!("WEATHER_API_KEY is not set, temperature lookups will fail");
  }

  let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .with_context(|| format!("Failed to bind to {}", addr))?;

  info!("Server starting on port {}", config.port);
  axum::serve(listener, build_router(state))
    .await
    .context("HTTP server error")
}
