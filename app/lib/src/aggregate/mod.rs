//! Grouping, averaging, and baseline comparison of benchmark sweeps.
//!
//! A sweep runs every scenario at several payload sizes, several times each.
//! This module carries the sweep data model, loads it from JSON result
//! bundles, collapses repetitions into per-size averages, and normalizes
//! those averages into percentage drops against a designated baseline
//! scenario. All maps keep insertion order, so output tables read in the
//! same order as the input documents.

pub mod average;
pub mod baseline;
pub mod sweep;

pub use average::{average_by_size, AverageTable, AveragedMetric, ScenarioAverages};
pub use baseline::{performance_drops, DropTable, PerformanceDrop, ScenarioDrops};
pub use sweep::{MeasurementRecord, ResultBundle, ScenarioKey, ScenarioRuns, SizeKey, SweepData};
