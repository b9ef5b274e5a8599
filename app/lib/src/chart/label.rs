//! Scenario labeling and legend bookkeeping.

use indexmap::{IndexMap, IndexSet};

/// Mapping from scenario key to display label.
pub type LabelMap = IndexMap<String, String>;

/// What to do with a scenario that has no entry in the label map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPolicy {
    /// Drop the series from the chart entirely.
    Skip,
    /// Use the raw scenario key as the display label.
    KeyAsLabel,
}

/// The set of series labels already admitted to a chart's legend.
///
/// Grouped bar charts are built from flat (category, scenario, value)
/// cells, and the same series label recurs once per category. The tracker
/// makes the already-admitted set explicit: [`admit`](Self::admit) hands
/// back a stable series index, flagging the first appearance, so a
/// recurring label extends its series instead of creating a duplicate
/// legend entry.
#[derive(Debug, Clone, Default)]
pub struct LegendTracker {
    seen: IndexSet<String>,
}

impl LegendTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit `label`, returning its index in first-appearance order and
    /// whether this was its first appearance.
    pub fn admit(&mut self, label: &str) -> (usize, bool) {
        match self.seen.get_index_of(label) {
            Some(index) => (index, false),
            None => self.seen.insert_full(label.to_string()),
        }
    }

    /// True when `label` has already been admitted.
    pub fn contains(&self, label: &str) -> bool {
        self.seen.contains(label)
    }

    /// Admitted labels in first-appearance order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.seen.iter().map(|s| s.as_str())
    }

    /// Number of distinct labels admitted.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// True when no label has been admitted.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
