//! FILENAME: core/engine/src/lookup.rs
//! PURPOSE: Exact-match lookups over whole-row composite keys.
//! CONTEXT: Every row of the lookup table is matched against every row of
//! the keyed table, using all columns as the key. Two duplicate-key policies
//! exist and are kept separate:
//! - `exact_vlookup` keeps the LAST row for a repeated key and always emits
//!   one output row per lookup row (#N/A when unmatched).
//! - `filter` keeps ALL rows for a key, in table order, and drops unmatched
//!   lookup rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cell::ScalarValue;
use crate::error::{ensure_dimension, Dimension, Result};
use crate::grid::Table;
use crate::key::CompositeKey;

// ============================================================================
// OPTIONS
// ============================================================================

/// Base of the positions reported by `exact_match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndexBase {
    #[default]
    Zero,
    One,
}

impl IndexBase {
    pub fn offset(self) -> usize {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }
}

/// Options for `filter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Prefix each output row with the lookup key's own columns.
    #[serde(default)]
    pub include_lookup: bool,
}

// ============================================================================
// SHARED CHECKS
// ============================================================================

/// The lookup rows must have as many fields as the table, and the output
/// rows must have one record per table record.
fn check_alignment(lookup: &Table, table: &Table, output: &Table) -> Result<()> {
    ensure_dimension(Dimension::Fields, table.columns(), lookup.columns())?;
    ensure_dimension(Dimension::Records, table.rows(), output.rows())?;
    Ok(())
}

fn copy_row(
    result: &mut Table,
    row: usize,
    column_offset: usize,
    values: &[ScalarValue],
) -> Result<()> {
    for (col, value) in values.iter().enumerate() {
        result.set(row, column_offset + col, value.clone())?;
    }
    Ok(())
}

// ============================================================================
// EXACT LOOKUP
// ============================================================================

/// For each lookup row, copies the output row of the matching table row.
/// Unmatched lookup rows are filled with #N/A. When a key repeats in the
/// table, the last occurrence wins.
pub fn exact_vlookup(lookup: &Table, table: &Table, output: &Table) -> Result<Table> {
    check_alignment(lookup, table, output)?;

    let mut positions: BTreeMap<CompositeKey, usize> = BTreeMap::new();
    for (row, values) in table.iter_rows().enumerate() {
        positions.insert(CompositeKey::from_row(values), row);
    }
    log::debug!(
        "exact_vlookup: {} table rows, {} distinct keys, {} lookups",
        table.rows(),
        positions.len(),
        lookup.rows()
    );

    let mut result = Table::new(lookup.rows(), output.columns());
    let not_available = vec![ScalarValue::not_available(); output.columns()];

    for (row, values) in lookup.iter_rows().enumerate() {
        let key = CompositeKey::from_row(values);
        match positions.get(&key).and_then(|&index| output.row(index)) {
            Some(matched) => copy_row(&mut result, row, 0, matched)?,
            None => copy_row(&mut result, row, 0, &not_available)?,
        }
    }
    Ok(result)
}

/// Reports the position of each lookup row within `table`, or #N/A.
pub fn exact_match(lookup: &Table, table: &Table, base: IndexBase) -> Result<Table> {
    let indices = Table::column(
        (0..table.rows()).map(|row| ScalarValue::Number((row + base.offset()) as f64)),
    );
    exact_vlookup(lookup, table, &indices)
}

// ============================================================================
// FILTER
// ============================================================================

/// Emits every output row whose table key matches a lookup row.
///
/// Matches are grouped by lookup row, in lookup order, and within a lookup
/// row follow table order. Lookup rows without a match produce nothing.
pub fn filter(lookup: &Table, table: &Table, output: &Table, options: FilterOptions) -> Result<Table> {
    check_alignment(lookup, table, output)?;

    let mut matches: BTreeMap<CompositeKey, Vec<usize>> = BTreeMap::new();
    for (row, values) in table.iter_rows().enumerate() {
        matches.entry(CompositeKey::from_row(values)).or_default().push(row);
    }

    let hits: Vec<(&[ScalarValue], &Vec<usize>)> = lookup
        .iter_rows()
        .filter_map(|values| {
            matches
                .get(&CompositeKey::from_row(values))
                .map(|rows| (values, rows))
        })
        .collect();

    let total_rows: usize = hits.iter().map(|(_, rows)| rows.len()).sum();
    let column_offset = if options.include_lookup { lookup.columns() } else { 0 };
    log::debug!(
        "filter: {} of {} lookups matched, {} output rows",
        hits.len(),
        lookup.rows(),
        total_rows
    );

    let mut result = Table::new(total_rows, output.columns() + column_offset);
    let mut row = 0;
    for (key_values, rows) in hits {
        for &index in rows {
            if options.include_lookup {
                copy_row(&mut result, row, 0, key_values)?;
            }
            if let Some(values) = output.row(index) {
                copy_row(&mut result, row, column_offset, values)?;
            }
            row += 1;
        }
    }
    Ok(result)
}
