//! Binary entrypoint for the insight service.

use std::sync::Arc;

use insight_api::{AppState, ServerConfig};
use insight_engine::Engine;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer().with_target(false))
    .init();

  let config = ServerConfig::from_env()?;
  let state = Arc::new(AppState {
    engine: Engine::new(config.engine.clone()),
  });
  let app = insight_api::router(state);

  let addr = config.addr();
  tracing::info!("insight-api listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
