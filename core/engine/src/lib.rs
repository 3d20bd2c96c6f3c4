//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the table engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod cell;
pub mod error;
pub mod grid;
pub mod host;
pub mod key;
pub mod lookup;
pub mod set_ops;

// Re-export commonly used types at the crate root
pub use cell::{ErrorCode, ScalarValue};
pub use error::{ensure_dimension, Dimension, EngineError, Result};
pub use grid::Table;
pub use host::{classify, convert, HostScalar, ScalarKind};
pub use key::CompositeKey;
pub use lookup::{exact_match, exact_vlookup, filter, FilterOptions, IndexBase};
pub use set_ops::{intersection, sort, union, unique};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_creates_tables() {
        let mut table = Table::new(1, 1);
        table.set(0, 0, ScalarValue::Number(42.0)).unwrap();
        assert_eq!(table.get(0, 0), Some(&ScalarValue::Number(42.0)));
    }

    #[test]
    fn integration_test_lookup_after_unique() {
        // Deduplicate a column, then find where each value sits in the original
        let data = Table::column(vec!["b".into(), "a".into(), "b".into()]);
        let distinct = unique(&data);
        let positions = exact_match(&distinct, &data, IndexBase::One).unwrap();

        // "a" is at row 2; "b" repeats, the last occurrence (row 3) wins
        let values: Vec<_> = positions.flatten().cloned().collect();
        assert_eq!(values, vec![ScalarValue::Number(2.0), ScalarValue::Number(3.0)]);
    }

    #[test]
    fn integration_test_table_serializes() {
        let table = Table::from_rows(vec![vec![1.0.into(), ScalarValue::not_available()]]).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        let back: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
