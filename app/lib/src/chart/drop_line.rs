//! Per-size performance-drop line charts.

use plotly::common::{Line, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};

use crate::aggregate::{DropTable, PerformanceDrop, SizeKey};
use crate::config::ChartConfig;
use crate::error::{BenchsumError, Result};

/// X-axis label shared by all drop charts.
const SIZE_AXIS_LABEL: &str = "Payload size (bytes)";

/// Which drop field a line chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropMetric {
    /// Requests-per-second drop
    Request,
    /// Transfer-per-second drop
    Transfer,
}

impl DropMetric {
    /// Y-axis label for this metric.
    pub fn axis_label(&self) -> &'static str {
        match self {
            DropMetric::Request => "Request performance drop (%)",
            DropMetric::Transfer => "Transfer performance drop (%)",
        }
    }

    /// File-name fragment for charts of this metric.
    pub fn file_stem(&self) -> &'static str {
        match self {
            DropMetric::Request => "request-drop",
            DropMetric::Transfer => "transfer-drop",
        }
    }

    fn select(&self, drop: &PerformanceDrop) -> f64 {
        match self {
            DropMetric::Request => drop.request_drop,
            DropMetric::Transfer => drop.transfer_drop,
        }
    }
}

/// Render one line per labeled scenario in `drops` as standalone HTML.
///
/// The x axis is the size-key set of the table's first scenario, sorted
/// ascending regardless of insertion order. All scenarios must cover that
/// set or rendering fails with [`BenchsumError::MissingSizeKey`]; tables
/// produced by [`performance_drops`] always do. Scenarios skipped by the
/// label policy are left out; an empty table, or one where every scenario
/// was skipped, fails with [`BenchsumError::EmptyInput`].
///
/// [`performance_drops`]: crate::aggregate::performance_drops
pub fn render_drop_chart(
    drops: &DropTable,
    metric: DropMetric,
    title: &str,
    config: &ChartConfig,
) -> Result<String> {
    let first = drops.values().next().ok_or(BenchsumError::EmptyInput)?;
    let mut sizes: Vec<SizeKey> = first.keys().copied().collect();
    if sizes.is_empty() {
        return Err(BenchsumError::EmptyInput);
    }
    sizes.sort_unstable();

    let mut plot = Plot::new();
    let mut traces = 0;
    for (scenario, scenario_drops) in drops {
        let label = match config.display_label(scenario) {
            Some(label) => label.to_string(),
            None => continue,
        };

        let mut values = Vec::with_capacity(sizes.len());
        for size in &sizes {
            let drop = scenario_drops
                .get(size)
                .ok_or_else(|| BenchsumError::MissingSizeKey {
                    scenario: scenario.clone(),
                    size: *size,
                })?;
            values.push(metric.select(drop));
        }

        let trace = Scatter::new(sizes.clone(), values)
            .mode(Mode::Lines)
            .name(&label)
            .line(Line::new().width(config.line_width));
        plot.add_trace(trace);
        traces += 1;
    }

    if traces == 0 {
        return Err(BenchsumError::EmptyInput);
    }

    let layout = Layout::new()
        .title(Title::new(title))
        .x_axis(Axis::new().title(Title::new(SIZE_AXIS_LABEL)))
        .y_axis(Axis::new().title(Title::new(metric.axis_label())));
    plot.set_layout(layout);

    Ok(super::wrap_page(title, &plot.to_inline_html(None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::ScenarioDrops;
    use crate::chart::label::LabelPolicy;

    fn drop(request: f64, transfer: f64) -> PerformanceDrop {
        PerformanceDrop {
            request_drop: request,
            transfer_drop: transfer,
        }
    }

    fn sample_table() -> DropTable {
        let mut table = DropTable::new();
        let mut kernel = ScenarioDrops::new();
        kernel.insert(333, drop(5.0, 4.0));
        kernel.insert(111, drop(10.0, 8.0));
        kernel.insert(222, drop(7.5, 6.0));
        table.insert("kernel-probe".to_string(), kernel);
        let mut user = ScenarioDrops::new();
        user.insert(333, drop(15.0, 14.0));
        user.insert(111, drop(20.0, 18.0));
        user.insert(222, drop(17.5, 16.0));
        table.insert("userspace-probe".to_string(), user);
        table
    }

    #[test]
    fn test_renders_one_line_per_scenario() {
        let config = ChartConfig::new()
            .with_label("kernel-probe", "Kernel probe")
            .with_label("userspace-probe", "Userspace probe");
        let html = render_drop_chart(&sample_table(), DropMetric::Request, "drops", &config)
            .expect("chart renders");
        assert!(html.contains("Kernel probe"));
        assert!(html.contains("Userspace probe"));
        assert!(html.contains("Request performance drop"));
    }

    #[test]
    fn test_x_axis_sorted_ascending() {
        let config = ChartConfig::new();
        let html = render_drop_chart(&sample_table(), DropMetric::Request, "drops", &config)
            .expect("chart renders");
        // Insertion order was 333, 111, 222; the trace must carry them
        // sorted.
        assert!(html.contains("[111,222,333]"));
    }

    #[test]
    fn test_transfer_metric_selects_transfer_values() {
        let config = ChartConfig::new();
        let html = render_drop_chart(&sample_table(), DropMetric::Transfer, "drops", &config)
            .expect("chart renders");
        assert!(html.contains("Transfer performance drop"));
    }

    #[test]
    fn test_skip_policy_drops_unlabeled_series() {
        let config = ChartConfig::new()
            .with_label("kernel-probe", "Kernel probe")
            .with_label_policy(LabelPolicy::Skip);
        let html = render_drop_chart(&sample_table(), DropMetric::Request, "drops", &config)
            .expect("chart renders");
        assert!(html.contains("Kernel probe"));
        assert!(!html.contains("userspace-probe"));
    }

    #[test]
    fn test_empty_table_fails() {
        let err = render_drop_chart(
            &DropTable::new(),
            DropMetric::Request,
            "drops",
            &ChartConfig::new(),
        )
        .unwrap_err();
        assert!(matches!(err, BenchsumError::EmptyInput));
    }

    #[test]
    fn test_all_series_skipped_fails() {
        let config = ChartConfig::new().with_label_policy(LabelPolicy::Skip);
        let err = render_drop_chart(&sample_table(), DropMetric::Request, "drops", &config)
            .unwrap_err();
        assert!(matches!(err, BenchsumError::EmptyInput));
    }

    #[test]
    fn test_gap_in_scenario_sizes_fails() {
        let mut table = sample_table();
        table
            .get_mut("userspace-probe")
            .expect("scenario present")
            .shift_remove(&222);

        let err = render_drop_chart(&table, DropMetric::Request, "drops", &ChartConfig::new())
            .unwrap_err();
        match err {
            BenchsumError::MissingSizeKey { scenario, size } => {
                assert_eq!(scenario, "userspace-probe");
                assert_eq!(size, 222);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_metric_file_stems() {
        assert_eq!(DropMetric::Request.file_stem(), "request-drop");
        assert_eq!(DropMetric::Transfer.file_stem(), "transfer-drop");
    }
}
