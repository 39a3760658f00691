//! Focus-area inference from commit message keywords.

use crate::types::FocusArea;

/// One classification rule: any keyword present selects `area`.
#[derive(Debug, Clone, Copy)]
pub struct FocusRule {
  pub keywords: &'static [&'static str],
  pub area: FocusArea,
}

/// Priority order matters: a message mentioning both "fix" and "refactor" is bug fixing.
pub const DEFAULT_FOCUS_RULES: &[FocusRule] = &[
  FocusRule {
    keywords: &["fix", "bug"],
    area: FocusArea::BugFixing,
  },
  FocusRule {
    keywords: &["refactor", "clean"],
    area: FocusArea::Refactoring,
  },
  FocusRule {
    keywords: &["merge"],
    area: FocusArea::Integration,
  },
];

/// First rule with a keyword contained in `text` wins; no match is feature work.
/// `text` is matched as-is; callers lowercase it.
pub fn classify(text: &str, rules: &[FocusRule]) -> FocusArea {
  rules
    .iter()
    .find(|rule| rule.keywords.iter().any(|k| text.contains(*k)))
    .map(|rule| rule.area)
    .unwrap_or(FocusArea::FeatureWork)
}

/// Lowercased, space-joined text of the last `window` messages.
pub fn recent_text<'a, I>(messages: I, window: usize) -> String
where
  I: ExactSizeIterator<Item = &'a str>,
{
  let skip = messages.len().saturating_sub(window);
  messages
    .skip(skip)
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn first_matching_rule_wins() {
    assert_eq!(
      classify("refactor and fix login", DEFAULT_FOCUS_RULES),
      FocusArea::BugFixing
    );
    assert_eq!(
      classify("clean up merge leftovers", DEFAULT_FOCUS_RULES),
      FocusArea::Refactoring
    );
    assert_eq!(
      classify("merge branch 'main'", DEFAULT_FOCUS_RULES),
      FocusArea::Integration
    );
    assert_eq!(
      classify("add export button", DEFAULT_FOCUS_RULES),
      FocusArea::FeatureWork
    );
  }

  #[test]
  fn keywords_match_inside_words() {
    assert_eq!(classify("debugging session", DEFAULT_FOCUS_RULES), FocusArea::BugFixing);
    assert_eq!(classify("prefix handling", DEFAULT_FOCUS_RULES), FocusArea::BugFixing);
  }

  #[test]
  fn custom_rules_are_respected() {
    let rules = [FocusRule {
      keywords: &["docs"],
      area: FocusArea::Refactoring,
    }];
    assert_eq!(classify("docs: typo", &rules), FocusArea::Refactoring);
    assert_eq!(classify("fix crash", &rules), FocusArea::FeatureWork);
  }

  #[test]
  fn recent_text_keeps_only_tail() {
    let messages = ["Fix A", "b", "c", "d", "e", "F"];
    let text = recent_text(messages.iter().copied(), 5);
    assert_eq!(text, "b c d e f");
  }

  #[test]
  fn recent_text_with_short_history() {
    let messages = ["Merge PR", "Add X"];
    assert_eq!(recent_text(messages.iter().copied(), 5), "merge pr add x");
  }
}
