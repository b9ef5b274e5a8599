//! Integration tests for chart rendering and export.
//!
//! These tests drive result bundles through comparison and into plotly
//! HTML, and check that chart files only appear once the whole
//! aggregation succeeded.

use benchsum::{
    average_by_size, performance_drops, render_drop_chart, render_mean_bar_chart, write_chart,
    BenchsumError, ChartConfig, DropMetric, LabelPolicy, MeanBar, ResultBundle, WrkSamples,
};

const RESULT_BUNDLE: &str = r#"{
    "https": {
        "no-probe": {
            "details": [[
                {"size": 16, "request": 100.0, "transfer": 10.0},
                {"size": 256, "request": 400.0, "transfer": 40.0},
                {"size": 64, "request": 200.0, "transfer": 20.0}
            ]]
        },
        "kernel-probe": {
            "details": [[
                {"size": 16, "request": 80.0, "transfer": 8.0},
                {"size": 256, "request": 300.0, "transfer": 30.0},
                {"size": 64, "request": 150.0, "transfer": 15.0}
            ]]
        },
        "userspace-probe": {
            "details": [[
                {"size": 16, "request": 90.0, "transfer": 9.0},
                {"size": 256, "request": 360.0, "transfer": 36.0},
                {"size": 64, "request": 180.0, "transfer": 18.0}
            ]]
        }
    }
}"#;

fn labeled_config() -> ChartConfig {
    ChartConfig::new()
        .with_label("kernel-probe", "Kernel probe")
        .with_label("userspace-probe", "Userspace probe")
        .with_label_policy(LabelPolicy::Skip)
}

#[test]
fn test_bundle_to_drop_chart() {
    let bundle = ResultBundle::from_json(RESULT_BUNDLE).unwrap();
    let averages = average_by_size(&bundle.groups["https"]);
    let drops = performance_drops(&averages, "no-probe").unwrap();

    let html = render_drop_chart(&drops, DropMetric::Request, "https", &labeled_config()).unwrap();
    assert!(html.contains("<html>"));
    assert!(html.contains("cdn.plot.ly"));
    assert!(html.contains("Kernel probe"));
    assert!(html.contains("Userspace probe"));
    assert!(html.contains("Payload size (bytes)"));
    assert!(html.contains("Request performance drop (%)"));
    // Sizes are plotted ascending even though 256 precedes 64 in the input.
    assert!(html.contains("[16,64,256]"));
}

#[test]
fn test_both_metrics_render_from_one_table() {
    let bundle = ResultBundle::from_json(RESULT_BUNDLE).unwrap();
    let averages = average_by_size(&bundle.groups["https"]);
    let drops = performance_drops(&averages, "no-probe").unwrap();
    let config = labeled_config();

    let request = render_drop_chart(&drops, DropMetric::Request, "https", &config).unwrap();
    let transfer = render_drop_chart(&drops, DropMetric::Transfer, "https", &config).unwrap();
    assert!(request.contains("Request performance drop (%)"));
    assert!(transfer.contains("Transfer performance drop (%)"));
    assert_ne!(request, transfer);
}

#[test]
fn test_chart_written_to_disk() {
    let bundle = ResultBundle::from_json(RESULT_BUNDLE).unwrap();
    let averages = average_by_size(&bundle.groups["https"]);
    let drops = performance_drops(&averages, "no-probe").unwrap();
    let html = render_drop_chart(&drops, DropMetric::Request, "https", &labeled_config()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join(format!("https-{}.html", DropMetric::Request.file_stem()));
    write_chart(&html, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, html);
    assert!(path.file_name().unwrap().eq("https-request-drop.html"));
}

#[test]
fn test_failed_comparison_writes_no_chart() {
    // kernel-probe misses size 64, so comparison fails before any
    // rendering can happen.
    let json = r#"{
        "https": {
            "no-probe": {"details": [[
                {"size": 16, "request": 100.0, "transfer": 10.0},
                {"size": 64, "request": 200.0, "transfer": 20.0}
            ]]},
            "kernel-probe": {"details": [[
                {"size": 16, "request": 80.0, "transfer": 8.0}
            ]]}
        }
    }"#;
    let bundle = ResultBundle::from_json(json).unwrap();
    let averages = average_by_size(&bundle.groups["https"]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("https-request-drop.html");
    match performance_drops(&averages, "no-probe") {
        Ok(drops) => {
            let html =
                render_drop_chart(&drops, DropMetric::Request, "https", &labeled_config()).unwrap();
            write_chart(&html, &path).unwrap();
        }
        Err(err) => {
            assert!(matches!(err, BenchsumError::MissingSizeKey { .. }));
        }
    }
    assert!(!path.exists());
}

#[test]
fn test_log_stats_to_mean_bar_chart() {
    let log = "\
Requests/sec:   9214.43
Transfer/sec:      4.50MB
Requests/sec:   9098.77
Transfer/sec:      4.44MB
";
    let samples = WrkSamples::parse(log);
    let req = samples.req_stats().unwrap();

    let bars = vec![
        MeanBar {
            category: "https".to_string(),
            scenario: "no-probe".to_string(),
            value: req.mean,
        },
        MeanBar {
            category: "https".to_string(),
            scenario: "kernel-probe".to_string(),
            value: req.mean * 0.8,
        },
    ];
    let html = render_mean_bar_chart(&bars, "Mean requests/sec", "Requests/sec", &ChartConfig::new())
        .unwrap();
    assert!(html.contains("no-probe"));
    assert!(html.contains("kernel-probe"));
    assert!(html.contains("Mean requests/sec"));
}

#[test]
fn test_unlabeled_scenarios_can_be_kept() {
    let bundle = ResultBundle::from_json(RESULT_BUNDLE).unwrap();
    let averages = average_by_size(&bundle.groups["https"]);
    let drops = performance_drops(&averages, "no-probe").unwrap();

    // Default policy falls back to the raw key for unmapped scenarios.
    let config = ChartConfig::new().with_label("kernel-probe", "Kernel probe");
    let html = render_drop_chart(&drops, DropMetric::Request, "https", &config).unwrap();
    assert!(html.contains("Kernel probe"));
    assert!(html.contains("userspace-probe"));
}
