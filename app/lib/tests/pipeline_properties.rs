//! Property tests over the reduction pipeline.

use benchsum::{
    average_by_size, performance_drops, MeasurementRecord, ScenarioRuns, SummaryStats, SweepData,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn reduction_is_bounded_by_its_extremes(
        samples in proptest::collection::vec(0.0f64..1.0e6, 1..64)
    ) {
        let stats = SummaryStats::from_samples(&samples).unwrap();
        let tolerance = 1e-6 * stats.max.max(1.0);
        prop_assert!(stats.min - tolerance <= stats.mean);
        prop_assert!(stats.mean <= stats.max + tolerance);
        prop_assert!(stats.min <= stats.median);
        prop_assert!(stats.median <= stats.max);
        prop_assert!(stats.stdev >= 0.0);
        prop_assert!(stats.min <= stats.max);
    }

    #[test]
    fn reduction_ignores_sample_order(
        samples in proptest::collection::vec(0.0f64..1.0e6, 1..64)
    ) {
        let mut reversed = samples.clone();
        reversed.reverse();
        // Samples are sorted before reduction, so any permutation of the
        // input produces bitwise-identical statistics.
        prop_assert_eq!(
            SummaryStats::from_samples(&samples).unwrap(),
            SummaryStats::from_samples(&reversed).unwrap()
        );
    }

    #[test]
    fn single_sample_has_no_spread(value in 0.0f64..1.0e9) {
        let stats = SummaryStats::from_samples(&[value]).unwrap();
        prop_assert_eq!(stats.stdev, 0.0);
        prop_assert_eq!(stats.mean, value);
        prop_assert_eq!(stats.median, value);
        prop_assert_eq!(stats.min, value);
        prop_assert_eq!(stats.max, value);
    }

    #[test]
    fn identical_scenarios_show_zero_drop(
        cells in proptest::collection::vec(
            (1u64..1_000_000, 0.1f64..1.0e6, 0.1f64..1.0e6),
            1..16
        )
    ) {
        let records: Vec<MeasurementRecord> = cells
            .iter()
            .map(|&(size, request, transfer)| MeasurementRecord { size, request, transfer })
            .collect();
        let mut data = SweepData::new();
        data.insert(
            "baseline".to_string(),
            ScenarioRuns { details: vec![records.clone()] },
        );
        data.insert("candidate".to_string(), ScenarioRuns { details: vec![records] });

        let averages = average_by_size(&data);
        let drops = performance_drops(&averages, "baseline").unwrap();
        for scenario_drops in drops.values() {
            for entry in scenario_drops.values() {
                prop_assert_eq!(entry.request_drop, 0.0);
                prop_assert_eq!(entry.transfer_drop, 0.0);
            }
        }
    }

    #[test]
    fn zero_baseline_never_divides(
        size in 1u64..1_000_000,
        request in 0.0f64..1.0e6,
        transfer in 0.0f64..1.0e6
    ) {
        let mut data = SweepData::new();
        data.insert(
            "baseline".to_string(),
            ScenarioRuns {
                details: vec![vec![MeasurementRecord { size, request: 0.0, transfer: 0.0 }]],
            },
        );
        data.insert(
            "candidate".to_string(),
            ScenarioRuns { details: vec![vec![MeasurementRecord { size, request, transfer }]] },
        );

        let averages = average_by_size(&data);
        let drops = performance_drops(&averages, "baseline").unwrap();
        let entry = &drops["candidate"][&size];
        prop_assert!(entry.request_drop.is_finite());
        prop_assert!(entry.transfer_drop.is_finite());
        prop_assert_eq!(entry.request_drop, 0.0);
        prop_assert_eq!(entry.transfer_drop, 0.0);
    }

    #[test]
    fn averaging_is_deterministic(
        cells in proptest::collection::vec(
            (1u64..64, 0.1f64..1.0e6, 0.1f64..1.0e6),
            1..32
        )
    ) {
        let records: Vec<MeasurementRecord> = cells
            .iter()
            .map(|&(size, request, transfer)| MeasurementRecord { size, request, transfer })
            .collect();
        let mut data = SweepData::new();
        data.insert("scenario".to_string(), ScenarioRuns { details: vec![records] });

        prop_assert_eq!(average_by_size(&data), average_by_size(&data));
    }
}
