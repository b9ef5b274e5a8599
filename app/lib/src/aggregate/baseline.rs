//! Baseline-relative performance comparison.

use indexmap::IndexMap;
use serde::Serialize;

use super::average::AverageTable;
use super::sweep::{ScenarioKey, SizeKey};
use crate::error::{BenchsumError, Result};

/// Relative slowdown of a scenario against the baseline, in percent.
///
/// Positive values mean the scenario is slower than the baseline,
/// negative values faster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceDrop {
    /// Drop in requests per second
    pub request_drop: f64,
    /// Drop in transfer per second
    pub transfer_drop: f64,
}

/// Per-size drops for one scenario, sizes in baseline key order.
pub type ScenarioDrops = IndexMap<SizeKey, PerformanceDrop>;

/// Drops for every non-baseline scenario, scenarios in input order.
pub type DropTable = IndexMap<ScenarioKey, ScenarioDrops>;

/// Signed percentage drop from `baseline` to `current`.
///
/// A zero baseline yields 0 rather than infinity or NaN: a scenario with
/// zero baseline throughput has no meaningful relative drop.
fn percent_drop(baseline: f64, current: f64) -> f64 {
    if baseline == 0.0 {
        0.0
    } else {
        (baseline - current) / baseline * 100.0
    }
}

/// Compare every scenario's averages against the designated baseline.
///
/// The baseline scenario must exist or the comparison fails with
/// [`BenchsumError::MissingScenario`]. Iteration covers the baseline's
/// size keys; every other scenario must cover all of them or the
/// comparison fails with [`BenchsumError::MissingSizeKey`] naming the
/// gap. Sizes present only in non-baseline scenarios are ignored. The
/// baseline itself is excluded from the output.
pub fn performance_drops(averages: &AverageTable, baseline: &str) -> Result<DropTable> {
    let baseline_averages =
        averages
            .get(baseline)
            .ok_or_else(|| BenchsumError::MissingScenario {
                scenario: baseline.to_string(),
            })?;

    let mut table = DropTable::new();
    for (scenario, scenario_averages) in averages {
        if scenario == baseline {
            continue;
        }

        let mut drops = ScenarioDrops::new();
        for (size, base) in baseline_averages {
            let current =
                scenario_averages
                    .get(size)
                    .ok_or_else(|| BenchsumError::MissingSizeKey {
                        scenario: scenario.clone(),
                        size: *size,
                    })?;
            drops.insert(
                *size,
                PerformanceDrop {
                    request_drop: percent_drop(base.average_request, current.average_request),
                    transfer_drop: percent_drop(base.average_transfer, current.average_transfer),
                },
            );
        }
        table.insert(scenario.clone(), drops);
    }

    Ok(table)
}
