//! Five-number summary of a sample sequence.

use serde::Serialize;

use crate::error::{BenchsumError, Result};

/// Summary statistics over a non-empty sample sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Middle element for odd counts, average of the two middle elements
    /// for even counts
    pub median: f64,
    /// Sample standard deviation (n − 1 denominator); 0 for a single sample
    pub stdev: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
}

impl SummaryStats {
    /// Reduce a sample sequence to its summary statistics.
    ///
    /// Fails with [`BenchsumError::EmptyInput`] on an empty slice so that
    /// callers can tell "no data" apart from "zero-valued data". Samples
    /// are expected to be finite; comparison of incomparable pairs falls
    /// back to treating them as equal.
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(BenchsumError::EmptyInput);
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        };
        // Sample variance; a single repetition has no spread to estimate.
        let stdev = if n > 1 {
            let variance = sorted
                .iter()
                .map(|value| {
                    let diff = value - mean;
                    diff * diff
                })
                .sum::<f64>()
                / (n - 1) as f64;
            variance.sqrt()
        } else {
            0.0
        };

        Ok(Self {
            mean,
            median,
            stdev,
            min: sorted[0],
            max: sorted[n - 1],
        })
    }
}
