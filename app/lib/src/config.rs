//! Configuration types for the benchsum library.
//!
//! This module provides the configuration struct controlling chart
//! rendering: series labels, the policy for unlabeled scenarios, line
//! width, and the series color palette.

use crate::chart::label::{LabelMap, LabelPolicy};

/// Default series palette used when the caller does not override it.
const DEFAULT_PALETTE: [&str; 6] = [
    "#8ECFC9", "#FFBE7A", "#FA7F6F", "#82B0D2", "#BEB8DC", "#E7DAD2",
];

/// Configuration for chart rendering.
///
/// Controls how scenario keys are turned into legend labels, what happens
/// to scenarios without a label, and the visual style of the traces.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Mapping from scenario key to display label.
    ///
    /// Legend labels always come from this map; scenarios are never
    /// labeled by their position in the input.
    ///
    /// Default: empty
    pub labels: LabelMap,

    /// Policy applied to scenarios that have no entry in `labels`.
    ///
    /// Default: [`LabelPolicy::KeyAsLabel`]
    pub label_policy: LabelPolicy,

    /// Line width for line traces.
    ///
    /// Default: 3.0
    pub line_width: f64,

    /// Color palette cycled through series in emission order.
    ///
    /// Default: a six-color pastel palette
    pub palette: Vec<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            labels: LabelMap::new(),
            label_policy: LabelPolicy::KeyAsLabel,
            line_width: 3.0,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ChartConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole scenario-to-label map.
    pub fn with_labels(mut self, labels: LabelMap) -> Self {
        self.labels = labels;
        self
    }

    /// Add a single scenario-to-label entry.
    pub fn with_label(
        mut self,
        scenario: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.labels.insert(scenario.into(), label.into());
        self
    }

    /// Set the policy for scenarios without a label entry.
    pub fn with_label_policy(mut self, policy: LabelPolicy) -> Self {
        self.label_policy = policy;
        self
    }

    /// Set the line width for line traces.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not strictly positive.
    pub fn with_line_width(mut self, width: f64) -> Self {
        assert!(width > 0.0, "line width must be > 0");
        self.line_width = width;
        self
    }

    /// Replace the series color palette.
    ///
    /// # Panics
    ///
    /// Panics if `palette` is empty.
    pub fn with_palette(mut self, palette: Vec<String>) -> Self {
        assert!(!palette.is_empty(), "palette must not be empty");
        self.palette = palette;
        self
    }

    /// Resolve the display label for a scenario key.
    ///
    /// Returns `None` when the scenario has no label entry and the policy
    /// is [`LabelPolicy::Skip`]; such series are dropped from the chart.
    pub fn display_label<'a>(&'a self, scenario: &'a str) -> Option<&'a str> {
        match self.labels.get(scenario) {
            Some(label) => Some(label.as_str()),
            None => match self.label_policy {
                LabelPolicy::Skip => None,
                LabelPolicy::KeyAsLabel => Some(scenario),
            },
        }
    }

    /// Palette color for the series at `index`, cycling when the palette
    /// is shorter than the series count.
    pub fn color_at(&self, index: usize) -> &str {
        &self.palette[index % self.palette.len()]
    }
}
