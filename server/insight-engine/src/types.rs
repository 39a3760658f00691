//! Core types for the insight engine (JSON contracts + internal models).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// One raw commit as sent by the caller. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundCommit {
  pub date: String,
  pub message: String,
  pub additions: u64,
  pub deletions: u64,
  pub author: String,
}

/// Analysis request: the commit history plus optional forecast targets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepoRequest {
  pub commits: Vec<InboundCommit>,
  #[serde(default)]
  pub total_scope: Option<u64>,
  /// Calendar date, `YYYY-MM-DD`. Switches the forecast into target-date mode.
  #[serde(default)]
  pub target_date: Option<String>,
}

// ---------------------------------------------------------------------------
// Internal normalized types
// ---------------------------------------------------------------------------

/// Canonical commit after validation. Time of day is already discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
  pub date: NaiveDate,
  pub message: String,
  pub additions: u64,
  pub deletions: u64,
  pub author: String,
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
  Increasing,
  Stable,
  Decreasing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
  pub health_score: f64,
  pub consistency: f64,
  pub trend: Trend,
  pub total_commits: usize,
  pub active_days: usize,
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

pub const STATUS_INSUFFICIENT_DATA: &str = "Insufficient data";
pub const STATUS_TARGET_PASSED: &str = "Target date has passed or is today";

/// Forecast shapes, one per outcome. Serialized without a tag so the JSON
/// carries only the fields of the variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CompletionForecast {
  /// Fewer active days than the forecast needs.
  InsufficientData { status: String },
  /// Target-date mode with a date that is today or earlier.
  TargetPassed {
    status: String,
    avg_daily_commits: f64,
    days_remaining: i64,
  },
  /// Target-date mode: can the current velocity deliver the projected scope?
  TargetDate {
    avg_daily_commits: f64,
    estimated_completion: String,
    days_remaining: i64,
    velocity_needed: f64,
    projected_scope: u64,
    on_track: bool,
  },
  /// Scope mode: when will the remaining scope be done at current velocity?
  Scope {
    avg_daily_commits: f64,
    estimated_completion: String,
    days_remaining: i64,
    target_commits: u64,
  },
}

// ---------------------------------------------------------------------------
// Team
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FocusArea {
  #[serde(rename = "Bug Fixing")]
  BugFixing,
  Refactoring,
  Integration,
  #[serde(rename = "Feature Work")]
  FeatureWork,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RiskLevel {
  Low,
  Medium,
  High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorReport {
  pub author: String,
  pub commits: usize,
  /// Totals are widened so summing many `u64` counts cannot overflow.
  pub lines_added: u128,
  pub lines_deleted: u128,
  pub avg_message_length: f64,
  pub churn_ratio: f64,
  pub avg_lines_per_commit: f64,
  pub impact_score: f64,
  pub focus_area: FocusArea,
  pub risk_score: f64,
  pub risk_level: RiskLevel,
  pub feedback: Vec<String>,
}

// ---------------------------------------------------------------------------
// Boundary responses (empty-input conventions)
// ---------------------------------------------------------------------------

pub const STATUS_NO_DATA: &str = "No data";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HealthResponse {
  Report(HealthReport),
  NoData { score: u8, status: String },
}

impl HealthResponse {
  pub fn no_data() -> Self {
    Self::NoData {
      score: 0,
      status: STATUS_NO_DATA.to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CompletionResponse {
  Forecast(CompletionForecast),
  /// Both fields serialize as `null`.
  NoData {
    estimated_date: Option<String>,
    days_remaining: Option<i64>,
  },
}

impl CompletionResponse {
  pub fn no_data() -> Self {
    Self::NoData {
      estimated_date: None,
      days_remaining: None,
    }
  }
}

/// All three reports for one request (stdin binary output).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightBundle {
  pub health: HealthResponse,
  pub completion: CompletionResponse,
  pub team: Vec<AuthorReport>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub index: Option<usize>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
      index: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }

  pub fn with_index(mut self, index: Option<usize>) -> Self {
    self.index = index;
    self
  }
}
