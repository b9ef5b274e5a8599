//! # benchsum
//!
//! Reduction, comparison, and charting of wrk-style benchmark sweeps.
//!
//! A sweep runs several scenarios (e.g. "no-probe", "kernel-probe",
//! "userspace-probe") across a payload-size parameter, repeating each run
//! multiple times. This library turns the raw output of such sweeps into
//! comparable numbers: it scrapes metric samples out of benchmark logs,
//! reduces them to summary statistics, averages structured result bundles
//! per (scenario, size) key, normalizes the averages into percentage drops
//! against a designated baseline scenario, and renders the results as
//! plotly HTML charts.
//!
//! ## Features
//!
//! - **Log scraping**: regex-backed metric patterns extract every
//!   occurrence of a metric line in repetition order, with built-ins for
//!   wrk's `Requests/sec:` and `Transfer/sec:` summary lines
//! - **Honest statistics**: reduction of an empty sample sequence is an
//!   error, never a silent zero, so missing data cannot masquerade as a
//!   slow run
//! - **Order-preserving aggregation**: grouping maps keep scenario and
//!   size keys in first-appearance order, so outputs read like the inputs
//! - **Explicit baselines**: the baseline scenario is always named by the
//!   caller, never inferred from input order
//! - **Explicit chart labels**: legend labels come from a caller-supplied
//!   map with a configurable policy for unlabeled scenarios
//!
//! ## Quick Start
//!
//! ### Scraping a log
//!
//! ```rust
//! use benchsum::WrkSamples;
//!
//! let log = "\
//! Requests/sec:    100.00
//! Transfer/sec:      5.00MB
//! Requests/sec:    200.00
//! Transfer/sec:     10.00MB
//! Requests/sec:    300.00
//! Transfer/sec:     15.00MB
//! ";
//!
//! let samples = WrkSamples::parse(log);
//! assert_eq!(samples.req_sec, vec![100.0, 200.0, 300.0]);
//!
//! let stats = samples.req_stats().unwrap();
//! assert_eq!(stats.mean, 200.0);
//! assert_eq!(stats.median, 200.0);
//! ```
//!
//! ### Comparing against a baseline
//!
//! ```rust
//! use benchsum::{average_by_size, performance_drops, ResultBundle};
//!
//! let bundle = ResultBundle::from_json(r#"{
//!     "https": {
//!         "no-probe":     {"details": [[{"size": 128, "request": 100.0, "transfer": 10.0}]]},
//!         "kernel-probe": {"details": [[{"size": 128, "request": 80.0,  "transfer": 8.0}]]}
//!     }
//! }"#).unwrap();
//!
//! let averages = average_by_size(&bundle.groups["https"]);
//! let drops = performance_drops(&averages, "no-probe").unwrap();
//! assert_eq!(drops["kernel-probe"][&128].request_drop, 20.0);
//! ```
//!
//! ### Rendering charts
//!
//! ```rust,ignore
//! use benchsum::{render_drop_chart, write_chart, ChartConfig, DropMetric};
//!
//! let config = ChartConfig::new()
//!     .with_label("kernel-probe", "Kernel probe")
//!     .with_label("userspace-probe", "Userspace probe");
//!
//! let html = render_drop_chart(&drops, DropMetric::Request, "https", &config)?;
//! write_chart(&html, "https-request-drop.html")?;
//! ```
//!
//! ### Error Handling
//!
//! ```rust,ignore
//! use benchsum::{performance_drops, BenchsumError};
//!
//! match performance_drops(&averages, "no-probe") {
//!     Ok(drops) => render(drops),
//!     Err(BenchsumError::MissingScenario { scenario }) => {
//!         eprintln!("baseline '{}' absent from input", scenario);
//!     }
//!     Err(BenchsumError::MissingSizeKey { scenario, size }) => {
//!         eprintln!("'{}' lacks data for size {}", scenario, size);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod aggregate;
pub mod chart;
pub mod config;
pub mod error;
pub mod extract;
pub mod stats;

// Re-exports for convenience
pub use aggregate::{
    average_by_size, performance_drops, AverageTable, AveragedMetric, DropTable,
    MeasurementRecord, PerformanceDrop, ResultBundle, ScenarioAverages, ScenarioDrops,
    ScenarioKey, ScenarioRuns, SizeKey, SweepData,
};
pub use chart::{
    render_drop_chart, render_mean_bar_chart, write_chart, DropMetric, LabelMap, LabelPolicy,
    LegendTracker, MeanBar,
};
pub use config::ChartConfig;
pub use error::{BenchsumError, Result};
pub use extract::{MetricPattern, RawSample, WrkSamples};
pub use stats::SummaryStats;
