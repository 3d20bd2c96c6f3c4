//! FILENAME: core/pivot-engine/src/definition.rs
//! Pivot Aggregation - The pluggable accumulation strategies.
//!
//! A strategy is a pair of callbacks:
//! - `init` seeds a new bucket from the first record that falls into it
//! - `combine` folds each further record into the bucket's accumulator
//!
//! Strategies return `None` when a record cannot be aggregated; the engine
//! turns that into a `NotNumeric` error for the offending record.

use serde::{Deserialize, Serialize};
use engine::ScalarValue;

// ============================================================================
// AGGREGATION
// ============================================================================

/// Supported aggregation functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AggregationType {
    Count,
    #[default]
    Sum,
    Max,
    Min,
}

/// Accumulation strategy applied to the value columns of each record.
pub trait Aggregator {
    /// The per-bucket accumulator. Written to the output as a cell value.
    type Acc: Into<ScalarValue>;

    fn init(&self, record: &[ScalarValue]) -> Option<Self::Acc>;

    fn combine(&self, record: &[ScalarValue], acc: Self::Acc) -> Option<Self::Acc>;
}

/// The first value column of a record, read as a number.
fn leading_number(record: &[ScalarValue]) -> Option<f64> {
    record.first().and_then(ScalarValue::as_number)
}

/// Counts records; values are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Count;

impl Aggregator for Count {
    type Acc = f64;

    fn init(&self, _record: &[ScalarValue]) -> Option<f64> {
        Some(1.0)
    }

    fn combine(&self, _record: &[ScalarValue], acc: f64) -> Option<f64> {
        Some(acc + 1.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;

impl Aggregator for Sum {
    type Acc = f64;

    fn init(&self, record: &[ScalarValue]) -> Option<f64> {
        leading_number(record)
    }

    fn combine(&self, record: &[ScalarValue], acc: f64) -> Option<f64> {
        leading_number(record).map(|n| acc + n)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

impl Aggregator for Max {
    type Acc = f64;

    fn init(&self, record: &[ScalarValue]) -> Option<f64> {
        leading_number(record)
    }

    fn combine(&self, record: &[ScalarValue], acc: f64) -> Option<f64> {
        leading_number(record).map(|n| acc.max(n))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

impl Aggregator for Min {
    type Acc = f64;

    fn init(&self, record: &[ScalarValue]) -> Option<f64> {
        leading_number(record)
    }

    fn combine(&self, record: &[ScalarValue], acc: f64) -> Option<f64> {
        leading_number(record).map(|n| acc.min(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold<A: Aggregator<Acc = f64>>(aggregator: &A, records: &[f64]) -> Option<f64> {
        let mut iter = records.iter().map(|n| [ScalarValue::Number(*n)]);
        let first = iter.next()?;
        let mut acc = aggregator.init(&first)?;
        for record in iter {
            acc = aggregator.combine(&record, acc)?;
        }
        Some(acc)
    }

    #[test]
    fn test_strategies() {
        let records = [4.0, -2.0, 7.5];
        assert_eq!(fold(&Count, &records), Some(3.0));
        assert_eq!(fold(&Sum, &records), Some(9.5));
        assert_eq!(fold(&Max, &records), Some(7.5));
        assert_eq!(fold(&Min, &records), Some(-2.0));
    }

    #[test]
    fn test_count_ignores_values() {
        let record = [ScalarValue::text("not a number")];
        assert_eq!(Count.init(&record), Some(1.0));
        assert_eq!(Sum.init(&record), None);
    }

    #[test]
    fn test_missing_value_column() {
        assert_eq!(Sum.init(&[]), None);
        assert_eq!(Count.combine(&[], 2.0), Some(3.0));
    }

    #[test]
    fn test_aggregation_type_serde() {
        let json = serde_json::to_string(&AggregationType::Max).unwrap();
        assert_eq!(json, "\"Max\"");
        assert_eq!(AggregationType::default(), AggregationType::Sum);
    }
}
