//! Validate inbound commits and request fields into canonical internal types.
//!
//! Fails fast on the first malformed record, naming its index and field, so no
//! analyzer ever sees a partially valid table.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::EngineError;
use crate::table::CommitTable;
use crate::types::{CommitRecord, InboundCommit};

/// Naive timestamp layouts accepted besides RFC 3339 and a bare date.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse and normalize inbound commits into a table (input order preserved).
pub fn normalize(raw: &[InboundCommit]) -> Result<CommitTable, EngineError> {
  let records = raw
    .iter()
    .enumerate()
    .map(|(i, c)| {
      let date = parse_commit_date(&c.date).ok_or_else(|| {
        EngineError::record(
          i,
          "date",
          &format!("unrecognized date {:?} (expected RFC3339 or YYYY-MM-DD)", c.date),
        )
      })?;
      Ok(CommitRecord {
        date,
        message: c.message.clone(),
        additions: c.additions,
        deletions: c.deletions,
        author: c.author.clone(),
      })
    })
    .collect::<Result<Vec<_>, EngineError>>()?;

  Ok(CommitTable::new(records))
}

/// Parse the optional forecast target date (`YYYY-MM-DD`).
pub fn parse_target_date(raw: Option<&str>) -> Result<Option<NaiveDate>, EngineError> {
  match raw.map(str::trim) {
    None | Some("") => Ok(None),
    Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
      .map(Some)
      .map_err(|e| EngineError::request("target_date", &format!("expected YYYY-MM-DD: {}", e))),
  }
}

/// A zero scope means "not provided".
pub fn effective_scope(raw: Option<u64>) -> Option<u64> {
  raw.filter(|&s| s > 0)
}

/// Calendar date of a commit timestamp. With an explicit offset, the date is
/// taken in that offset (no conversion to UTC).
fn parse_commit_date(s: &str) -> Option<NaiveDate> {
  let s = s.trim();
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Some(dt.date_naive());
  }
  for fmt in NAIVE_DATETIME_FORMATS {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
      return Some(dt.date());
    }
  }
  NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn commit(date: &str) -> InboundCommit {
    InboundCommit {
      date: date.into(),
      message: "add parser".into(),
      additions: 10,
      deletions: 2,
      author: "alice".into(),
    }
  }

  fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn accepts_common_date_layouts() {
    assert_eq!(parse_commit_date("2025-01-15T10:30:00Z"), Some(ymd(2025, 1, 15)));
    assert_eq!(parse_commit_date("2025-01-15T10:30:00.123Z"), Some(ymd(2025, 1, 15)));
    assert_eq!(parse_commit_date("2025-01-15T10:30:00"), Some(ymd(2025, 1, 15)));
    assert_eq!(parse_commit_date("2025-01-15 10:30:00"), Some(ymd(2025, 1, 15)));
    assert_eq!(parse_commit_date("2025-01-15"), Some(ymd(2025, 1, 15)));
  }

  #[test]
  fn offset_dates_keep_local_calendar_day() {
    // 23:30 at -05:00 is already the 16th in UTC; the local day wins.
    assert_eq!(
      parse_commit_date("2025-01-15T23:30:00-05:00"),
      Some(ymd(2025, 1, 15))
    );
  }

  #[test]
  fn normalize_preserves_order_and_fields() {
    let raw = vec![commit("2025-01-16"), commit("2025-01-15T08:00:00Z")];
    let table = normalize(&raw).unwrap();
    let records = table.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date, ymd(2025, 1, 16));
    assert_eq!(records[1].date, ymd(2025, 1, 15));
    assert_eq!(records[1].additions, 10);
    assert_eq!(records[1].author, "alice");
  }

  #[test]
  fn normalize_rejects_bad_date_with_index() {
    let raw = vec![commit("2025-01-15"), commit("yesterday")];
    let err = normalize(&raw).unwrap_err();
    match err {
      EngineError::Validation { index, field, .. } => {
        assert_eq!(index, Some(1));
        assert_eq!(field, "date");
      }
      other => panic!("unexpected error: {}", other),
    }
  }

  #[test]
  fn target_date_parsing() {
    assert_eq!(parse_target_date(None).unwrap(), None);
    assert_eq!(parse_target_date(Some("  ")).unwrap(), None);
    assert_eq!(
      parse_target_date(Some("2026-03-01")).unwrap(),
      Some(ymd(2026, 3, 1))
    );
    let err = parse_target_date(Some("03/01/2026")).unwrap_err();
    assert!(err.to_string().contains("target_date"));
  }

  #[test]
  fn zero_scope_is_absent() {
    assert_eq!(effective_scope(Some(0)), None);
    assert_eq!(effective_scope(Some(40)), Some(40));
    assert_eq!(effective_scope(None), None);
  }
}
