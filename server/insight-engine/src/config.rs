//! Engine configuration with sane defaults.
//!
//! Every heuristic constant the analyzers depend on lives here so it can be
//! overridden and tested independently of the formulas.

/// Tunable thresholds for the three analyzers.
#[derive(Debug, Clone)]
pub struct Config {
  /// Assumed total scope as a multiple of the current commit count when no
  /// explicit scope is given (and always in target-date mode).
  pub scope_multiplier: u64,
  /// Days reported when velocity is zero ("effectively never").
  pub unreachable_days: f64,
  /// Minimum distinct active days before a completion forecast is attempted.
  pub min_forecast_days: usize,
  /// Absolute OLS slope (commits/day per day) above which a trend is reported.
  pub trend_slope_threshold: f64,
  /// Commit count at which the volume term of the health score saturates.
  pub volume_saturation_commits: u64,
  /// Number of most recent messages inspected for an author's focus area.
  pub recent_message_window: usize,
  /// Average lines per commit above which commits are flagged as too large.
  pub large_commit_lines: f64,
  /// Average lines per commit below which commits are praised as atomic.
  pub atomic_commit_lines: f64,
  /// Average message length (chars) below which messages are flagged as short.
  pub short_message_chars: f64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      scope_multiplier: 2,
      unreachable_days: 999.0,
      min_forecast_days: 2,
      trend_slope_threshold: 0.1,
      volume_saturation_commits: 100,
      recent_message_window: 5,
      large_commit_lines: 500.0,
      atomic_commit_lines: 10.0,
      short_message_chars: 20.0,
    }
  }
}
