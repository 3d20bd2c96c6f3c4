//! FILENAME: core/pivot-engine/src/lib.rs
//! Pivot aggregation subsystem.
//!
//! This crate provides the group-by pivot calculation as a standalone
//! module, separate from the table engine. It depends on `engine` only for
//! shared types (ScalarValue, Table, CompositeKey, EngineError).
//!
//! Layers:
//! - `definition`: Aggregation strategies (WHAT we accumulate)
//! - `engine`: Grouping and layout (HOW we calculate)

pub mod definition;
pub mod engine;

pub use definition::*;
pub use crate::engine::{
    calculate_pivot, pivot_count, pivot_max, pivot_min, pivot_sum, pivot_table,
};
