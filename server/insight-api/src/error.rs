//! HTTP error mapping for engine failures.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use insight_engine::EngineError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Engine(#[from] EngineError),
}

/// Error response JSON body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
  pub error: &'static str,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub index: Option<usize>,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let ApiError::Engine(err) = self;
    let (status, body) = match err {
      EngineError::Validation { index, field, reason } => {
        tracing::warn!(?index, %field, %reason, "rejected commit history");
        (
          StatusCode::UNPROCESSABLE_ENTITY,
          ErrorResponse {
            error: "ValidationError",
            message: reason,
            field: Some(field),
            index,
          },
        )
      }
      other => {
        tracing::error!(error = %other, "analysis failed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          ErrorResponse {
            error: "InternalError",
            message: other.to_string(),
            field: None,
            index: None,
          },
        )
      }
    };
    (status, Json(body)).into_response()
  }
}
