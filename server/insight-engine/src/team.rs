//! Per-author contribution report: impact, focus area, risk and feedback.

use tracing::debug;

use crate::config::Config;
use crate::focus::{self, DEFAULT_FOCUS_RULES};
use crate::stats::round_to;
use crate::table::CommitTable;
use crate::types::{AuthorReport, CommitRecord, RiskLevel};

pub const FEEDBACK_ATOMIC_COMMITS: &str = "Commits are atomic and well-sized.";
pub const FEEDBACK_SHORT_MESSAGES: &str = "Commit messages are short. Add more context.";
pub const FEEDBACK_HIGH_RISK: &str = "High Risk detected! Focus on smaller commits and better docs.";

// Impact: commits * 2 + ln(added + 1) * 5 + min(msg_len, 50) * 0.5, capped at 100.
const IMPACT_PER_COMMIT: f64 = 2.0;
const IMPACT_VOLUME_WEIGHT: f64 = 5.0;
const IMPACT_MESSAGE_CAP: f64 = 50.0;
const IMPACT_MESSAGE_WEIGHT: f64 = 0.5;
const IMPACT_MAX: f64 = 100.0;

// Risk sub-scores. Churn is 40% of the churn percentage; size and docs are 30 points each.
const RISK_CHURN_WEIGHT: f64 = 0.4;
const RISK_SIZE_POINTS: f64 = 30.0;
const RISK_SIZE_FLOOR_LINES: f64 = 100.0;
const RISK_SIZE_RAMP_LINES: f64 = 200.0;
const RISK_DOC_POINTS: f64 = 30.0;
const RISK_DOC_FULL_CHARS: f64 = 20.0;

const RISK_HIGH_ABOVE: f64 = 60.0;
const RISK_MEDIUM_ABOVE: f64 = 30.0;

/// Build one report per author, ranked by impact (highest first, ties by author).
pub fn analyze(table: &CommitTable, config: &Config) -> Vec<AuthorReport> {
  let mut reports: Vec<AuthorReport> = table
    .author_groups()
    .into_iter()
    .map(|(author, commits)| author_report(author, &commits, config))
    .collect();

  reports.sort_by(|a, b| {
    b.impact_score
      .total_cmp(&a.impact_score)
      .then_with(|| a.author.cmp(&b.author))
  });
  debug!(authors = reports.len(), "team report ranked");
  reports
}

/// Metrics for one author's commits (input order preserved, never empty).
fn author_report(author: &str, commits: &[&CommitRecord], config: &Config) -> AuthorReport {
  let commit_count = commits.len();
  let lines_added: u128 = commits.iter().map(|c| u128::from(c.additions)).sum();
  let lines_deleted: u128 = commits.iter().map(|c| u128::from(c.deletions)).sum();
  let total_chars: usize = commits.iter().map(|c| c.message.chars().count()).sum();
  let avg_message_length = total_chars as f64 / commit_count as f64;
  let avg_lines = (lines_added + lines_deleted) as f64 / commit_count as f64;
  let churn_ratio = lines_deleted as f64 / (lines_added as f64 + 1.0);

  let impact = impact_score(commit_count, lines_added, avg_message_length);

  let recent = focus::recent_text(
    commits.iter().map(|c| c.message.as_str()),
    config.recent_message_window,
  );
  let focus_area = focus::classify(&recent, DEFAULT_FOCUS_RULES);

  let mut feedback = Vec::new();
  if avg_lines > config.large_commit_lines {
    feedback.push(large_commits_feedback(config.large_commit_lines));
  } else if avg_lines < config.atomic_commit_lines {
    feedback.push(FEEDBACK_ATOMIC_COMMITS.to_string());
  }
  if avg_message_length < config.short_message_chars {
    feedback.push(FEEDBACK_SHORT_MESSAGES.to_string());
  }

  let risk = risk_score(churn_ratio, avg_lines, avg_message_length);
  let risk_level = classify_risk(risk);
  if risk_level == RiskLevel::High {
    feedback.push(FEEDBACK_HIGH_RISK.to_string());
  }

  AuthorReport {
    author: author.to_string(),
    commits: commit_count,
    lines_added,
    lines_deleted,
    avg_message_length: round_to(avg_message_length, 1),
    churn_ratio: round_to(churn_ratio, 3),
    avg_lines_per_commit: round_to(avg_lines, 2),
    impact_score: round_to(impact, 1),
    focus_area,
    risk_score: round_to(risk, 1),
    risk_level,
    feedback,
  }
}

/// Names the configured threshold, e.g. "Large commits detected (> 500 lines). ...".
pub fn large_commits_feedback(threshold_lines: f64) -> String {
  format!(
    "Large commits detected (> {} lines). Recommend splitting.",
    threshold_lines
  )
}

/// Logarithmic in lines added; message length only counts up to 50 chars.
pub fn impact_score(commit_count: usize, lines_added: u128, avg_message_length: f64) -> f64 {
  let raw = commit_count as f64 * IMPACT_PER_COMMIT
    + (lines_added as f64 + 1.0).ln() * IMPACT_VOLUME_WEIGHT
    + avg_message_length.min(IMPACT_MESSAGE_CAP) * IMPACT_MESSAGE_WEIGHT;
  raw.min(IMPACT_MAX)
}

/// Weighted sum of three independently capped terms; at most 100.
pub fn risk_score(churn_ratio: f64, avg_lines: f64, avg_message_length: f64) -> f64 {
  let churn = (churn_ratio * 100.0).min(100.0) * RISK_CHURN_WEIGHT;
  let size = ((avg_lines - RISK_SIZE_FLOOR_LINES).max(0.0) / RISK_SIZE_RAMP_LINES).min(1.0)
    * RISK_SIZE_POINTS;
  let docs = (1.0 - (avg_message_length / RISK_DOC_FULL_CHARS).min(1.0)) * RISK_DOC_POINTS;
  churn + size + docs
}

/// Thresholds are exclusive: exactly 60 is Medium, exactly 30 is Low.
pub fn classify_risk(score: f64) -> RiskLevel {
  if score > RISK_HIGH_ABOVE {
    RiskLevel::High
  } else if score > RISK_MEDIUM_ABOVE {
    RiskLevel::Medium
  } else {
    RiskLevel::Low
  }
}
