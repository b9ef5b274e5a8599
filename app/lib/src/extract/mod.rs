//! Sample extraction from raw benchmark logs.
//!
//! Benchmark tools emit one summary block per run; repeating a run N times
//! produces N occurrences of each metric line in the log. This module scrapes
//! those occurrences into ordered numeric samples, either through a single
//! [`MetricPattern`] or through the [`WrkSamples`] convenience type that
//! applies both built-in wrk patterns at once.

pub mod pattern;
pub mod wrk;

pub use pattern::{MetricPattern, RawSample};
pub use wrk::WrkSamples;
