//! Convenience extraction for wrk benchmark logs.

use crate::error::Result;
use crate::stats::SummaryStats;

use super::pattern::MetricPattern;

/// The two wrk summary metrics scraped from a log, one entry per run.
///
/// The sequences are extracted independently and may differ in length when
/// a run was cut short mid-log. Statistics are computed per metric, so no
/// cross-metric alignment is required or checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrkSamples {
    /// Requests-per-second values in log order
    pub req_sec: Vec<f64>,
    /// Transfer-per-second values (MB) in log order
    pub transfer_sec: Vec<f64>,
}

impl WrkSamples {
    /// Scrape both wrk summary metrics from a log.
    pub fn parse(text: &str) -> Self {
        Self {
            req_sec: MetricPattern::requests_per_sec().extract_values(text),
            transfer_sec: MetricPattern::transfer_per_sec().extract_values(text),
        }
    }

    /// True when the log contained neither metric.
    pub fn is_empty(&self) -> bool {
        self.req_sec.is_empty() && self.transfer_sec.is_empty()
    }

    /// Summary statistics over the requests-per-second samples.
    ///
    /// Fails with [`BenchsumError::EmptyInput`] when the log contained no
    /// `Requests/sec:` lines.
    ///
    /// [`BenchsumError::EmptyInput`]: crate::error::BenchsumError::EmptyInput
    pub fn req_stats(&self) -> Result<SummaryStats> {
        SummaryStats::from_samples(&self.req_sec)
    }

    /// Summary statistics over the transfer-per-second samples.
    ///
    /// Fails with [`BenchsumError::EmptyInput`] when the log contained no
    /// `Transfer/sec:` lines.
    ///
    /// [`BenchsumError::EmptyInput`]: crate::error::BenchsumError::EmptyInput
    pub fn transfer_stats(&self) -> Result<SummaryStats> {
        SummaryStats::from_samples(&self.transfer_sec)
    }
}
