//! Commit table: the normalized, request-scoped view every analyzer reads.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::types::CommitRecord;

/// Ordered sequence of commits in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitTable {
  records: Vec<CommitRecord>,
}

impl CommitTable {
  pub fn new(records: Vec<CommitRecord>) -> Self {
    Self { records }
  }

  pub fn records(&self) -> &[CommitRecord] {
    &self.records
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  /// Commit count per active day, ordered by date.
  pub fn daily_counts(&self) -> BTreeMap<NaiveDate, u64> {
    let mut counts = BTreeMap::new();
    for record in &self.records {
      *counts.entry(record.date).or_insert(0) += 1;
    }
    counts
  }

  /// Number of distinct days with at least one commit.
  pub fn active_days(&self) -> usize {
    self.daily_counts().len()
  }

  /// Partition by author. Groups iterate in ascending author order; each group
  /// keeps the input order of its commits.
  pub fn author_groups(&self) -> BTreeMap<&str, Vec<&CommitRecord>> {
    let mut groups: BTreeMap<&str, Vec<&CommitRecord>> = BTreeMap::new();
    for record in &self.records {
      groups.entry(record.author.as_str()).or_default().push(record);
    }
    groups
  }
}
