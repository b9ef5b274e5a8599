//! Example demonstrating baseline comparison and chart output.
//!
//! Run with: cargo run --example probe_comparison

use benchsum::{
    average_by_size, performance_drops, render_drop_chart, write_chart, ChartConfig, DropMetric,
    LabelPolicy, ResultBundle,
};

const RESULTS: &str = r#"{
    "https": {
        "no-probe": {
            "details": [
                [
                    {"size": 16, "request": 9214.4, "transfer": 4.50},
                    {"size": 256, "request": 8120.9, "transfer": 15.86},
                    {"size": 1024, "request": 5410.2, "transfer": 42.27}
                ],
                [
                    {"size": 16, "request": 9358.3, "transfer": 4.57},
                    {"size": 256, "request": 8004.1, "transfer": 15.63},
                    {"size": 1024, "request": 5388.8, "transfer": 42.10}
                ]
            ]
        },
        "kernel-probe": {
            "details": [
                [
                    {"size": 16, "request": 8110.5, "transfer": 3.96},
                    {"size": 256, "request": 7015.7, "transfer": 13.70},
                    {"size": 1024, "request": 4807.4, "transfer": 37.56}
                ]
            ]
        },
        "userspace-probe": {
            "details": [
                [
                    {"size": 16, "request": 8650.0, "transfer": 4.22},
                    {"size": 256, "request": 7633.2, "transfer": 14.91},
                    {"size": 1024, "request": 5120.6, "transfer": 40.01}
                ]
            ]
        }
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Probe Overhead Comparison ===\n");

    let bundle = ResultBundle::from_json(RESULTS)?;
    println!("Groups: {}", bundle.len());

    let config = ChartConfig::new()
        .with_label("kernel-probe", "Kernel probe")
        .with_label("userspace-probe", "Userspace probe")
        .with_label_policy(LabelPolicy::Skip);

    for (group, sweep) in &bundle.groups {
        let averages = average_by_size(sweep);
        let drops = performance_drops(&averages, "no-probe")?;

        println!("\n--- {} (baseline: no-probe) ---", group);
        for (scenario, sizes) in &drops {
            for (size, entry) in sizes {
                println!(
                    "  {:>16} @ {:>5}B: request {:>6.2}%, transfer {:>6.2}%",
                    scenario, size, entry.request_drop, entry.transfer_drop
                );
            }
        }

        for metric in [DropMetric::Request, DropMetric::Transfer] {
            let html = render_drop_chart(&drops, metric, group, &config)?;
            let path =
                std::env::temp_dir().join(format!("{}-{}.html", group, metric.file_stem()));
            write_chart(&html, &path)?;
            println!("  chart: {}", path.display());
        }
    }

    Ok(())
}
