//! HTTP handlers for the insight service.

use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;

use insight_engine::types::{AuthorReport, CompletionResponse, HealthResponse};
use insight_engine::RepoRequest;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn root() -> Json<Value> {
  Json(json!({ "status": "Insight service is running" }))
}

pub async fn health() -> &'static str {
  "ok"
}

pub async fn analyze_health(
  State(state): State<Arc<AppState>>,
  Json(request): Json<RepoRequest>,
) -> Result<Json<HealthResponse>, ApiError> {
  Ok(Json(state.engine.health(&request.commits)?))
}

pub async fn analyze_completion(
  State(state): State<Arc<AppState>>,
  Json(request): Json<RepoRequest>,
) -> Result<Json<CompletionResponse>, ApiError> {
  Ok(Json(state.engine.completion(&request, Utc::now())?))
}

pub async fn analyze_team(
  State(state): State<Arc<AppState>>,
  Json(request): Json<RepoRequest>,
) -> Result<Json<Vec<AuthorReport>>, ApiError> {
  Ok(Json(state.engine.team(&request.commits)?))
}
