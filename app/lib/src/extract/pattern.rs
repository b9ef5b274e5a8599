//! Regex-backed metric patterns.
//!
//! A [`MetricPattern`] pairs a metric name with a compiled regex whose single
//! capture group matches the numeric portion of a metric line. Applying the
//! pattern to a log yields every occurrence in appearance order, which is the
//! repetition order of the benchmark runs that produced the log.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{BenchsumError, Result};

/// Pattern text for wrk's requests-per-second summary line.
const REQUESTS_PER_SEC_PATTERN: &str = r"Requests/sec:\s+(\d+\.\d+)";

/// Pattern text for wrk's transfer-per-second summary line.
///
/// Anchored to the `MB` unit: values printed in other units would not be
/// comparable without rescaling, so they are not matched.
const TRANSFER_PER_SEC_PATTERN: &str = r"Transfer/sec:\s+(\d+\.\d+)MB";

static REQUESTS_PER_SEC: Lazy<Regex> =
    Lazy::new(|| Regex::new(REQUESTS_PER_SEC_PATTERN).expect("built-in pattern compiles"));

static TRANSFER_PER_SEC: Lazy<Regex> =
    Lazy::new(|| Regex::new(TRANSFER_PER_SEC_PATTERN).expect("built-in pattern compiles"));

/// One numeric measurement extracted from one log occurrence.
///
/// Immutable once parsed; produced by [`MetricPattern::extract`] and
/// consumed by the statistics reducer.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSample {
    /// Name of the metric the sample belongs to
    pub metric: String,
    /// The extracted numeric value
    pub value: f64,
}

/// A named, regex-backed metric pattern.
///
/// The regex must contain exactly one capture group, matching the numeric
/// portion of the metric line. Patterns are applied independently of each
/// other: two patterns over the same log may yield different sample counts,
/// and no cross-metric alignment is checked.
#[derive(Debug, Clone)]
pub struct MetricPattern {
    metric: String,
    regex: Regex,
}

impl MetricPattern {
    /// Compile a caller-supplied metric pattern.
    ///
    /// Fails with [`BenchsumError::InvalidPattern`] when the regex does not
    /// compile or does not contain exactly one capture group.
    pub fn new(metric: impl Into<String>, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| BenchsumError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        // captures_len() counts the implicit whole-match group 0.
        if regex.captures_len() != 2 {
            return Err(BenchsumError::InvalidPattern {
                pattern: pattern.to_string(),
                message: format!(
                    "expected exactly one capture group for the value, found {}",
                    regex.captures_len() - 1
                ),
            });
        }
        Ok(Self {
            metric: metric.into(),
            regex,
        })
    }

    /// Built-in pattern for wrk's `Requests/sec:` summary line.
    pub fn requests_per_sec() -> Self {
        Self {
            metric: "requests_per_sec".to_string(),
            regex: REQUESTS_PER_SEC.clone(),
        }
    }

    /// Built-in pattern for wrk's `Transfer/sec:` summary line, in MB.
    pub fn transfer_per_sec() -> Self {
        Self {
            metric: "transfer_per_sec".to_string(),
            regex: TRANSFER_PER_SEC.clone(),
        }
    }

    /// Name of the metric this pattern extracts.
    pub fn metric(&self) -> &str {
        &self.metric
    }

    /// Source text of the underlying regex.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Extract the numeric values of every occurrence in `text`, in
    /// appearance order.
    ///
    /// Captures that do not parse as a finite float are skipped; with the
    /// built-in patterns this cannot happen, since their capture groups
    /// only match digit runs.
    pub fn extract_values(&self, text: &str) -> Vec<f64> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .filter_map(|m| m.as_str().parse::<f64>().ok())
            .filter(|value| value.is_finite())
            .collect()
    }

    /// Extract every occurrence in `text` as named samples, in appearance
    /// order.
    pub fn extract(&self, text: &str) -> Vec<RawSample> {
        self.extract_values(text)
            .into_iter()
            .map(|value| RawSample {
                metric: self.metric.clone(),
                value,
            })
            .collect()
    }
}
