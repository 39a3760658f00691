//! Project health: commit-cadence consistency, activity trend, composite score.

use tracing::debug;

use crate::config::Config;
use crate::stats::{ols_slope, round_to, sample_std_dev};
use crate::table::CommitTable;
use crate::types::{HealthReport, Trend};

const BASE_SCORE: f64 = 50.0;
const CONSISTENCY_WEIGHT: f64 = 20.0;
const VOLUME_WEIGHT: f64 = 30.0;

/// Score a non-empty commit table.
///
/// - consistency = 1 / (1 + sample std of daily counts), or 1.0 with a single active day.
/// - trend = sign of the OLS slope over daily counts, beyond `trend_slope_threshold`.
/// - score = 50 + consistency * 20 + min(total / saturation, 1) * 30, so always in [50, 100].
pub fn analyze(table: &CommitTable, config: &Config) -> HealthReport {
  let daily: Vec<f64> = table.daily_counts().values().map(|&c| c as f64).collect();

  let (consistency, trend) = if daily.len() > 1 {
    let consistency = 1.0 / (1.0 + sample_std_dev(&daily));
    let slope = ols_slope(&daily);
    debug!(slope, active_days = daily.len(), "health trend fitted");
    (consistency, classify_trend(slope, config.trend_slope_threshold))
  } else {
    (1.0, Trend::Stable)
  };

  let total_commits = table.len();
  let volume = (total_commits as f64 / config.volume_saturation_commits as f64).min(1.0);
  let score = BASE_SCORE + consistency * CONSISTENCY_WEIGHT + volume * VOLUME_WEIGHT;

  HealthReport {
    health_score: round_to(score, 1),
    consistency: round_to(consistency, 2),
    trend,
    total_commits,
    active_days: daily.len(),
  }
}

/// Strictly beyond the threshold in either direction; anything else is Stable.
pub fn classify_trend(slope: f64, threshold: f64) -> Trend {
  if slope > threshold {
    Trend::Increasing
  } else if slope < -threshold {
    Trend::Decreasing
  } else {
    Trend::Stable
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::CommitRecord;
  use chrono::NaiveDate;

  /// One commit per entry in `per_day`, on consecutive days starting 2025-02-01.
  fn table(per_day: &[u32]) -> CommitTable {
    let start = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    let mut records = Vec::new();
    for (i, &n) in per_day.iter().enumerate() {
      for _ in 0..n {
        records.push(CommitRecord {
          date: start + chrono::Days::new(i as u64),
          message: "work".into(),
          additions: 5,
          deletions: 1,
          author: "alice".into(),
        });
      }
    }
    CommitTable::new(records)
  }

  #[test]
  fn single_active_day_is_perfectly_consistent() {
    let report = analyze(&table(&[4]), &Config::default());
    assert_eq!(report.consistency, 1.0);
    assert_eq!(report.trend, Trend::Stable);
    assert_eq!(report.active_days, 1);
    assert_eq!(report.total_commits, 4);
    // 50 + 20 + 0.04 * 30
    assert_eq!(report.health_score, 71.2);
  }

  #[test]
  fn flat_cadence_is_stable() {
    let report = analyze(&table(&[1, 1, 1]), &Config::default());
    assert_eq!(report.consistency, 1.0);
    assert_eq!(report.trend, Trend::Stable);
    assert_eq!(report.health_score, 70.9);
  }

  #[test]
  fn rising_cadence_is_increasing() {
    // Daily [1, 2, 3]: sample std 1, slope 1.
    let report = analyze(&table(&[1, 2, 3]), &Config::default());
    assert_eq!(report.consistency, 0.5);
    assert_eq!(report.trend, Trend::Increasing);
    assert_eq!(report.health_score, 61.8);
  }

  #[test]
  fn falling_cadence_is_decreasing() {
    let report = analyze(&table(&[3, 2, 1]), &Config::default());
    assert_eq!(report.trend, Trend::Decreasing);
  }

  #[test]
  fn volume_term_saturates() {
    let report = analyze(&table(&[150]), &Config::default());
    assert_eq!(report.health_score, 100.0);
  }

  #[test]
  fn trend_threshold_is_exclusive() {
    assert_eq!(classify_trend(0.1, 0.1), Trend::Stable);
    assert_eq!(classify_trend(-0.1, 0.1), Trend::Stable);
    assert_eq!(classify_trend(0.11, 0.1), Trend::Increasing);
    assert_eq!(classify_trend(-0.11, 0.1), Trend::Decreasing);
  }
}
