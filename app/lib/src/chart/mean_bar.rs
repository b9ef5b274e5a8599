//! Grouped bar charts of per-category means.

use plotly::common::{Marker, Title};
use plotly::layout::{Axis, BarMode};
use plotly::{Bar, Layout, Plot};

use super::label::LegendTracker;
use crate::config::ChartConfig;
use crate::error::{BenchsumError, Result};

/// One bar cell: a category's value for one scenario's series.
#[derive(Debug, Clone, PartialEq)]
pub struct MeanBar {
    /// X-axis category the bar belongs to, e.g. a log or host name
    pub category: String,
    /// Scenario key; resolved to a series label through the config
    pub scenario: String,
    /// Bar height
    pub value: f64,
}

/// One series accumulated from the flat cells.
struct BarSeries {
    label: String,
    categories: Vec<String>,
    values: Vec<f64>,
}

impl BarSeries {
    fn new(label: String) -> Self {
        Self {
            label,
            categories: Vec::new(),
            values: Vec::new(),
        }
    }
}

/// Render flat bar cells as a grouped vertical bar chart, as standalone
/// HTML.
///
/// Cells sharing a series label are accumulated into one trace through a
/// [`LegendTracker`], so the legend carries each label exactly once no
/// matter how many categories the series spans; series order and palette
/// colors follow first appearance. Cells skipped by the label policy are
/// dropped; when `bars` is empty or every cell was skipped, rendering
/// fails with [`BenchsumError::EmptyInput`].
pub fn render_mean_bar_chart(
    bars: &[MeanBar],
    title: &str,
    y_label: &str,
    config: &ChartConfig,
) -> Result<String> {
    let mut tracker = LegendTracker::new();
    let mut series: Vec<BarSeries> = Vec::new();
    for bar in bars {
        let label = match config.display_label(&bar.scenario) {
            Some(label) => label.to_string(),
            None => continue,
        };
        let (index, first) = tracker.admit(&label);
        if first {
            series.push(BarSeries::new(label));
        }
        series[index].categories.push(bar.category.clone());
        series[index].values.push(bar.value);
    }

    if series.is_empty() {
        return Err(BenchsumError::EmptyInput);
    }

    let mut plot = Plot::new();
    for (index, entry) in series.iter().enumerate() {
        let trace = Bar::new(entry.categories.clone(), entry.values.clone())
            .name(&entry.label)
            .marker(Marker::new().color(config.color_at(index).to_string()));
        plot.add_trace(trace);
    }

    let layout = Layout::new()
        .title(Title::new(title))
        .bar_mode(BarMode::Group)
        .y_axis(Axis::new().title(Title::new(y_label)));
    plot.set_layout(layout);

    Ok(super::wrap_page(title, &plot.to_inline_html(None)))
}
