//! Ordered-fallback pattern strategies.
//!
//! Each contact field is attempted through an ordered list of
//! (pattern, sanity check) pairs: the first strategy whose capture passes the
//! check wins and later strategies are skipped. Stricter patterns go first so
//! precision degrades gracefully instead of collapsing into false positives.

use regex::Regex;

/// One extraction attempt: a compiled pattern, the capture group to take,
/// and an optional length bound (inclusive min, exclusive max) on the
/// trimmed capture.
pub(crate) struct FieldStrategy {
    regex: Regex,
    group: usize,
    bounds: Option<(usize, usize)>,
}

impl FieldStrategy {
    pub(crate) fn new(pattern: &str, group: usize) -> Self {
        Self {
            regex: Regex::new(pattern).expect("valid field pattern"),
            group,
            bounds: None,
        }
    }

    pub(crate) fn bounded(pattern: &str, group: usize, min: usize, max: usize) -> Self {
        Self {
            regex: Regex::new(pattern).expect("valid field pattern"),
            group,
            bounds: Some((min, max)),
        }
    }

    /// Returns the trimmed capture of the first match, or `None` when the
    /// pattern does not match or the capture fails the length bound.
    fn attempt(&self, text: &str) -> Option<String> {
        let caps = self.regex.captures(text)?;
        let candidate = caps.get(self.group)?.as_str().trim();
        if candidate.is_empty() {
            return None;
        }
        if let Some((min, max)) = self.bounds {
            let len = candidate.chars().count();
            if len < min || len >= max {
                return None;
            }
        }
        Some(candidate.to_string())
    }
}

/// An ordered list of strategies for a single field.
pub(crate) struct StrategyList(Vec<FieldStrategy>);

impl StrategyList {
    pub(crate) fn new(strategies: Vec<FieldStrategy>) -> Self {
        Self(strategies)
    }

    /// Evaluates strategies in order; the first success wins.
    pub(crate) fn first_match(&self, text: &str) -> Option<String> {
        self.0.iter().find_map(|s| s.attempt(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_matching_strategy_wins() {
        let list = StrategyList::new(vec![
            FieldStrategy::new(r"strict-(\w+)", 1),
            FieldStrategy::new(r"loose-(\w+)", 1),
        ]);
        let found = list.first_match("loose-aaa strict-bbb");
        assert_eq!(found.as_deref(), Some("bbb"), "strict strategy must win");
    }

    #[test]
    fn test_falls_through_to_later_strategy() {
        let list = StrategyList::new(vec![
            FieldStrategy::new(r"strict-(\w+)", 1),
            FieldStrategy::new(r"loose-(\w+)", 1),
        ]);
        assert_eq!(list.first_match("loose-aaa").as_deref(), Some("aaa"));
    }

    #[test]
    fn test_bound_failure_skips_strategy_entirely() {
        // The first strategy matches but the capture is too short; the second
        // strategy is then consulted.
        let list = StrategyList::new(vec![
            FieldStrategy::bounded(r"name: (\w+)", 1, 4, 50),
            FieldStrategy::new(r"(\w+)$", 1),
        ]);
        assert_eq!(list.first_match("name: Jo fallback").as_deref(), Some("fallback"));
    }

    #[test]
    fn test_no_match_yields_none() {
        let list = StrategyList::new(vec![FieldStrategy::new(r"\d{4}", 0)]);
        assert_eq!(list.first_match("no digits here"), None);
    }
}
