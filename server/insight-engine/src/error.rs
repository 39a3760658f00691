//! Structured error types for the insight engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  /// A record (or request field) failed validation before any analyzer ran.
  /// `index` is the offending commit's position; `None` for request-level fields.
  #[error("validation: {}{field}: {reason}", record_prefix(.index))]
  Validation {
    index: Option<usize>,
    field: String,
    reason: String,
  },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

fn record_prefix(index: &Option<usize>) -> String {
  match index {
    Some(i) => format!("commits[{}].", i),
    None => String::new(),
  }
}

impl EngineError {
  pub fn record(index: usize, field: &str, reason: &str) -> Self {
    Self::Validation {
      index: Some(index),
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn request(field: &str, reason: &str) -> Self {
    Self::Validation {
      index: None,
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn record_error_names_index_and_field() {
    let err = EngineError::record(3, "date", "unrecognized format");
    assert_eq!(
      err.to_string(),
      "validation: commits[3].date: unrecognized format"
    );
  }

  #[test]
  fn request_error_omits_index() {
    let err = EngineError::request("target_date", "expected YYYY-MM-DD");
    assert_eq!(err.to_string(), "validation: target_date: expected YYYY-MM-DD");
  }
}
