//! Commit Insight HTTP service
//!
//! Thin JSON adapter over `insight_engine`: one route per report.
//! Bind to 127.0.0.1 by default (internal only).

mod config;
mod error;
mod handlers;
mod state;

use std::sync::Arc;

use axum::{routing::get, routing::post, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use state::AppState;

/// Build the service router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/", get(handlers::root))
    .route("/health", get(handlers::health))
    .route("/analyze/health", post(handlers::analyze_health))
    .route("/analyze/completion", post(handlers::analyze_completion))
    .route("/analyze/team", post(handlers::analyze_team))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
