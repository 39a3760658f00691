//! Completion forecast: average velocity projected against a scope or a target date.
//!
//! Two modes, selected by the presence of a target date:
//! - target-date: is the current velocity enough to deliver the projected scope in time?
//! - scope: at the current velocity, when is the remaining scope done?
//!
//! Without a measured scope the projection assumes `scope_multiplier` times the
//! current commit count.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use tracing::debug;

use crate::config::Config;
use crate::error::EngineError;
use crate::stats::{mean, round_to};
use crate::table::CommitTable;
use crate::types::{CompletionForecast, STATUS_INSUFFICIENT_DATA, STATUS_TARGET_PASSED};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Forecast completion for a non-empty table as of `now`.
///
/// # Errors
///
/// Returns a `total_scope` validation error when the projected completion date
/// falls outside the representable calendar.
pub fn predict(
  table: &CommitTable,
  total_scope: Option<u64>,
  target_date: Option<NaiveDate>,
  now: DateTime<Utc>,
  config: &Config,
) -> Result<CompletionForecast, EngineError> {
  let daily: Vec<f64> = table.daily_counts().values().map(|&c| c as f64).collect();
  if daily.len() < config.min_forecast_days {
    return Ok(CompletionForecast::InsufficientData {
      status: STATUS_INSUFFICIENT_DATA.to_string(),
    });
  }

  // Zero-commit days are absent from the map, so they don't drag the average down.
  let avg_velocity = mean(&daily);
  let current = table.len() as u64;
  let assumed_scope = current.saturating_mul(config.scope_multiplier);

  match target_date {
    Some(target) => {
      debug!(%target, avg_velocity, "forecast in target-date mode");
      Ok(against_target_date(avg_velocity, current, assumed_scope, target, now))
    }
    None => {
      let target = total_scope.unwrap_or(assumed_scope);
      debug!(target, avg_velocity, "forecast in scope mode");
      against_scope(avg_velocity, current, target, now, config)
    }
  }
}

fn against_target_date(
  avg_velocity: f64,
  current: u64,
  projected_scope: u64,
  target: NaiveDate,
  now: DateTime<Utc>,
) -> CompletionForecast {
  // Whole days from now until the start of the target day.
  let days_remaining = (target.and_time(NaiveTime::MIN).and_utc() - now).num_days();
  if days_remaining <= 0 {
    return CompletionForecast::TargetPassed {
      status: STATUS_TARGET_PASSED.to_string(),
      avg_daily_commits: round_to(avg_velocity, 1),
      days_remaining: 0,
    };
  }

  let remaining = projected_scope.saturating_sub(current);
  let velocity_needed = remaining as f64 / days_remaining as f64;

  CompletionForecast::TargetDate {
    avg_daily_commits: round_to(avg_velocity, 1),
    estimated_completion: target.format("%Y-%m-%d").to_string(),
    days_remaining,
    velocity_needed: round_to(velocity_needed, 1),
    projected_scope,
    on_track: avg_velocity >= velocity_needed,
  }
}

fn against_scope(
  avg_velocity: f64,
  current: u64,
  target: u64,
  now: DateTime<Utc>,
  config: &Config,
) -> Result<CompletionForecast, EngineError> {
  let remaining = target.saturating_sub(current);
  let days_needed = if avg_velocity > 0.0 {
    remaining as f64 / avg_velocity
  } else {
    config.unreachable_days
  };

  let estimated = TimeDelta::try_milliseconds((days_needed * MILLIS_PER_DAY).round() as i64)
    .and_then(|delta| now.checked_add_signed(delta))
    .ok_or_else(|| {
      EngineError::request("total_scope", "projected completion date is out of range")
    })?;

  Ok(CompletionForecast::Scope {
    avg_daily_commits: round_to(avg_velocity, 1),
    estimated_completion: estimated.format("%Y-%m-%d").to_string(),
    days_remaining: round_to(days_needed, 0) as i64,
    target_commits: target,
  })
}
