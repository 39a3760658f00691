//! Engine: the request boundary. Validates raw commits, applies the
//! empty-input conventions, then hands a non-empty table to the analyzers.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::completion;
use crate::config::Config;
use crate::error::EngineError;
use crate::health;
use crate::normalize;
use crate::team;
use crate::types::*;

/// Stateless apart from its configuration; safe to share across requests.
#[derive(Debug, Clone, Default)]
pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Health report, or `{score: 0, status: "No data"}` for an empty history.
  pub fn health(&self, commits: &[InboundCommit]) -> Result<HealthResponse, EngineError> {
    let table = normalize::normalize(commits)?;
    if table.is_empty() {
      return Ok(HealthResponse::no_data());
    }
    debug!(commits = table.len(), "analyzing health");
    Ok(HealthResponse::Report(health::analyze(&table, &self.config)))
  }

  /// Completion forecast as of `now`, or all-null fields for an empty history.
  pub fn completion(
    &self,
    request: &RepoRequest,
    now: DateTime<Utc>,
  ) -> Result<CompletionResponse, EngineError> {
    let table = normalize::normalize(&request.commits)?;
    let target_date = normalize::parse_target_date(request.target_date.as_deref())?;
    if table.is_empty() {
      return Ok(CompletionResponse::no_data());
    }
    debug!(commits = table.len(), "forecasting completion");
    let forecast = completion::predict(
      &table,
      normalize::effective_scope(request.total_scope),
      target_date,
      now,
      &self.config,
    )?;
    Ok(CompletionResponse::Forecast(forecast))
  }

  /// Per-author reports ranked by impact; empty for an empty history.
  pub fn team(&self, commits: &[InboundCommit]) -> Result<Vec<AuthorReport>, EngineError> {
    let table = normalize::normalize(commits)?;
    if table.is_empty() {
      return Ok(Vec::new());
    }
    debug!(commits = table.len(), "analyzing team");
    Ok(team::analyze(&table, &self.config))
  }

  /// All three reports for one request.
  pub fn insights(
    &self,
    request: &RepoRequest,
    now: DateTime<Utc>,
  ) -> Result<InsightBundle, EngineError> {
    Ok(InsightBundle {
      health: self.health(&request.commits)?,
      completion: self.completion(request, now)?,
      team: self.team(&request.commits)?,
    })
  }
}
