//! Sweep data model and result-bundle loading.
//!
//! A result bundle is a JSON document shaped as group → scenario →
//! `details`, where `details` is an array of record batches and each record
//! carries `size`, `request`, and `transfer`. Bundles are walked as
//! [`serde_json::Value`] rather than derived, so that a bad record fails
//! with a domain error naming the scenario and field instead of a bare
//! deserialization message.

use std::io;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::{BenchsumError, Result};

/// Name of a benchmark configuration, e.g. "no-probe" or "kernel-probe".
pub type ScenarioKey = String;

/// The swept parameter: payload size in bytes.
pub type SizeKey = u64;

/// One benchmark-run result at a given payload size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasurementRecord {
    /// Payload size the run was performed at
    pub size: SizeKey,
    /// Requests per second
    pub request: f64,
    /// Transfer per second (MB)
    pub transfer: f64,
}

/// All runs recorded for one scenario.
///
/// `details` nests repetitions: outer entries are result batches, inner
/// entries are individual run records. Averaging flattens the nesting, so
/// how records are split across batches does not affect the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScenarioRuns {
    /// Result batches, each a list of run records
    pub details: Vec<Vec<MeasurementRecord>>,
}

/// One group's scenarios, in document order.
pub type SweepData = IndexMap<ScenarioKey, ScenarioRuns>;

/// A full result file: groups (e.g. protocol tags) mapping to their sweeps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultBundle {
    /// Groups in document order
    pub groups: IndexMap<String, SweepData>,
}

impl ResultBundle {
    /// Parse a result bundle from JSON text.
    ///
    /// The document must be an object of groups, each group an object of
    /// scenarios, each scenario an object with a `details` array. Sibling
    /// fields beside `details` are ignored. A record with a missing or
    /// non-numeric field fails with [`BenchsumError::MalformedRecord`];
    /// problems above the scenario level fail with
    /// [`BenchsumError::JsonParseError`]. Document order is preserved.
    pub fn from_json(input: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(input)?;
        let groups = match root {
            Value::Object(map) => map,
            _ => return Err(shape_error("expected a top-level object of groups")),
        };

        let mut bundle = ResultBundle::default();
        for (group_name, group_value) in groups {
            let scenarios = match group_value {
                Value::Object(map) => map,
                _ => {
                    return Err(shape_error(&format!(
                        "group '{group_name}' must be an object of scenarios"
                    )))
                }
            };

            let mut sweep = SweepData::new();
            for (scenario_name, scenario_value) in scenarios {
                let runs = parse_scenario(&scenario_name, &scenario_value)?;
                sweep.insert(scenario_name, runs);
            }
            bundle.groups.insert(group_name, sweep);
        }
        Ok(bundle)
    }

    /// Merge another bundle into this one.
    ///
    /// Key union over groups; on a duplicate group key the other bundle's
    /// sweep wins, keeping the original key position.
    pub fn merge(&mut self, other: ResultBundle) {
        for (group, sweep) in other.groups {
            self.groups.insert(group, sweep);
        }
    }

    /// Number of groups in the bundle.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when the bundle has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Build a JSON error for a document whose shape is wrong above the
/// scenario level.
fn shape_error(message: &str) -> BenchsumError {
    BenchsumError::JsonParseError(serde_json::Error::io(io::Error::new(
        io::ErrorKind::InvalidData,
        message,
    )))
}

fn malformed(scenario: &str, field: &str) -> BenchsumError {
    BenchsumError::MalformedRecord {
        scenario: scenario.to_string(),
        field: field.to_string(),
    }
}

/// Parse one scenario object into its run batches.
fn parse_scenario(scenario: &str, value: &Value) -> Result<ScenarioRuns> {
    let fields = match value {
        Value::Object(map) => map,
        _ => return Err(malformed(scenario, "details")),
    };
    let batches = match fields.get("details") {
        Some(Value::Array(batches)) => batches,
        _ => return Err(malformed(scenario, "details")),
    };

    let mut details = Vec::with_capacity(batches.len());
    for batch in batches {
        let records = match batch {
            Value::Array(records) => records,
            _ => return Err(malformed(scenario, "details")),
        };
        let mut parsed = Vec::with_capacity(records.len());
        for record in records {
            parsed.push(parse_record(scenario, record)?);
        }
        details.push(parsed);
    }
    Ok(ScenarioRuns { details })
}

/// Parse one measurement record, naming the offending field on failure.
fn parse_record(scenario: &str, value: &Value) -> Result<MeasurementRecord> {
    let fields = match value {
        Value::Object(map) => map,
        _ => return Err(malformed(scenario, "record")),
    };
    // as_u64 rejects floats, so fractional sizes surface as errors too.
    let size = fields
        .get("size")
        .and_then(Value::as_u64)
        .ok_or_else(|| malformed(scenario, "size"))?;
    let request = fields
        .get("request")
        .and_then(Value::as_f64)
        .ok_or_else(|| malformed(scenario, "request"))?;
    let transfer = fields
        .get("transfer")
        .and_then(Value::as_f64)
        .ok_or_else(|| malformed(scenario, "transfer"))?;
    Ok(MeasurementRecord {
        size,
        request,
        transfer,
    })
}
