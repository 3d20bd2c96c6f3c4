//! FILENAME: core/engine/src/error.rs

use std::fmt;

use thiserror::Error;

/// Which dimension of two aligned tables disagreed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Column counts (number of fields per record).
    Fields,
    /// Row counts (number of records).
    Records,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Fields => write!(f, "fields"),
            Dimension::Records => write!(f, "records"),
        }
    }
}

/// Errors that abort an operation. No partial table is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Inputs do not have the same number of {dimension}: expected {expected}, got {actual}")]
    DimensionMismatch {
        dimension: Dimension,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown value type at row {row}, column {column}")]
    UnknownType { row: usize, column: usize },

    #[error("Value in record {row} is not numeric")]
    NotNumeric { row: usize },

    #[error("Cell ({row}, {column}) is outside a {rows}x{columns} table")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("Row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Fails with `DimensionMismatch` unless `actual == expected`.
pub fn ensure_dimension(dimension: Dimension, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(EngineError::DimensionMismatch {
            dimension,
            expected,
            actual,
        });
    }
    Ok(())
}
