//! Grouped averaging of sweep data.

use indexmap::IndexMap;
use serde::Serialize;

use super::sweep::{ScenarioKey, SizeKey, SweepData};

/// Mean metrics over every record at one (scenario, size) key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AveragedMetric {
    /// Mean requests per second
    pub average_request: f64,
    /// Mean transfer per second (MB)
    pub average_transfer: f64,
}

/// Per-size averages for one scenario, sizes in first-appearance order.
pub type ScenarioAverages = IndexMap<SizeKey, AveragedMetric>;

/// Averages for every scenario, scenarios in input order.
pub type AverageTable = IndexMap<ScenarioKey, ScenarioAverages>;

/// Average request and transfer per (scenario, size) key.
///
/// Size keys are discovered from the data itself and kept in the order
/// they first appear, not numerically sorted; callers needing numeric
/// order sort explicitly. Records from different repetition batches
/// accumulate into the same key. Pure function: no side effects, and
/// rerunning it on the same input yields the same table.
pub fn average_by_size(data: &SweepData) -> AverageTable {
    let mut table = AverageTable::new();

    for (scenario, runs) in data {
        // request sum, transfer sum, record count per size
        let mut sums: IndexMap<SizeKey, (f64, f64, usize)> = IndexMap::new();
        for batch in &runs.details {
            for record in batch {
                let entry = sums.entry(record.size).or_insert((0.0, 0.0, 0));
                entry.0 += record.request;
                entry.1 += record.transfer;
                entry.2 += 1;
            }
        }

        let averages = sums
            .into_iter()
            .map(|(size, (request, transfer, count))| {
                let count = count as f64;
                (
                    size,
                    AveragedMetric {
                        average_request: request / count,
                        average_transfer: transfer / count,
                    },
                )
            })
            .collect();
        table.insert(scenario.clone(), averages);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::sweep::{MeasurementRecord, ScenarioRuns};

    fn record(size: SizeKey, request: f64, transfer: f64) -> MeasurementRecord {
        MeasurementRecord {
            size,
            request,
            transfer,
        }
    }

    #[test]
    fn test_two_repetitions_average() {
        let mut data = SweepData::new();
        data.insert(
            "A".to_string(),
            ScenarioRuns {
                details: vec![vec![record(10, 100.0, 5.0)], vec![record(10, 200.0, 15.0)]],
            },
        );

        let table = average_by_size(&data);
        let averaged = table["A"][&10];
        assert_eq!(averaged.average_request, 150.0);
        assert_eq!(averaged.average_transfer, 10.0);
    }

    #[test]
    fn test_sizes_keep_first_appearance_order() {
        let mut data = SweepData::new();
        data.insert(
            "A".to_string(),
            ScenarioRuns {
                details: vec![vec![
                    record(512, 1.0, 1.0),
                    record(128, 2.0, 2.0),
                    record(256, 3.0, 3.0),
                ]],
            },
        );

        let table = average_by_size(&data);
        let sizes: Vec<SizeKey> = table["A"].keys().copied().collect();
        assert_eq!(sizes, vec![512, 128, 256]);
    }

    #[test]
    fn test_accumulates_across_batches() {
        let mut data = SweepData::new();
        data.insert(
            "A".to_string(),
            ScenarioRuns {
                details: vec![
                    vec![record(64, 10.0, 1.0), record(128, 30.0, 3.0)],
                    vec![record(64, 20.0, 2.0)],
                ],
            },
        );

        let table = average_by_size(&data);
        assert_eq!(table["A"][&64].average_request, 15.0);
        assert_eq!(table["A"][&64].average_transfer, 1.5);
        assert_eq!(table["A"][&128].average_request, 30.0);
    }

    #[test]
    fn test_scenario_order_preserved() {
        let mut data = SweepData::new();
        data.insert("zeta".to_string(), ScenarioRuns::default());
        data.insert("alpha".to_string(), ScenarioRuns::default());

        let table = average_by_size(&data);
        let scenarios: Vec<&ScenarioKey> = table.keys().collect();
        assert_eq!(scenarios, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_scenario_without_records_has_empty_averages() {
        let mut data = SweepData::new();
        data.insert(
            "A".to_string(),
            ScenarioRuns {
                details: vec![vec![]],
            },
        );

        let table = average_by_size(&data);
        assert!(table["A"].is_empty());
    }

    #[test]
    fn test_averaging_is_idempotent() {
        let mut data = SweepData::new();
        data.insert(
            "A".to_string(),
            ScenarioRuns {
                details: vec![vec![record(10, 1.5, 0.5), record(20, 2.5, 1.5)]],
            },
        );

        assert_eq!(average_by_size(&data), average_by_size(&data));
    }
}
