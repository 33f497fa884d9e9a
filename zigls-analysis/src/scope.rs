//! Document-level symbol summary.

use std::collections::HashSet;

use crate::Tree;

/// Tag-like symbols collected from one document, deduplicated and in
/// first-appearance order. The order matters downstream: completion
/// aggregation preserves it.
#[derive(Debug, Clone, Default)]
pub struct DocumentScope {
    /// Error tags from `error{...}` sets and `error.Tag` references.
    pub error_completions: Vec<String>,
    /// Enum member names.
    pub enum_completions: Vec<String>,
}

impl DocumentScope {
    #[must_use]
    pub fn new(tree: &Tree) -> Self {
        Self {
            error_completions: dedup_preserving_order(tree.error_tags()),
            enum_completions: dedup_preserving_order(tree.enum_tags()),
        }
    }
}

fn dedup_preserving_order(labels: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    labels
        .iter()
        .filter(|label| seen.insert(label.as_str()))
        .cloned()
        .collect()
}
