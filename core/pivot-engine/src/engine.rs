//! FILENAME: core/pivot-engine/src/engine.rs
//! Pivot Engine - Two-level group-by with grand totals.
//!
//! Records are grouped by a required horizontal key (one output row per
//! distinct key) and an optional vertical key (one output column per
//! distinct key). Every record is also folded into its horizontal key's
//! grand total, stored under the empty vertical key.
//!
//! Output layout, with H = horizontal key width and V = vertical key width
//! (0 when vertical keys are omitted):
//!
//! ```text
//!            | vkey 1 | vkey 2 | ... | total
//!   ---------+--------+--------+-----+------
//!   (V header rows holding the vertical key values)
//!   hkey 1   |  agg   |  agg   | ... |  agg
//!   hkey 2   |  agg   | Empty  | ... |  agg
//! ```
//!
//! Combinations with no records stay Empty.

use std::collections::{BTreeMap, BTreeSet};

use engine::{ensure_dimension, CompositeKey, Dimension, EngineError, Result, ScalarValue, Table};

use crate::definition::{AggregationType, Aggregator, Count, Max, Min, Sum};

/// Buckets for one horizontal key, keyed by vertical key.
/// The empty key holds the grand total.
type Buckets<A> = BTreeMap<CompositeKey, A>;

/// Accumulated state of one pivot calculation.
struct PivotGroups<A> {
    rows: BTreeMap<CompositeKey, Buckets<A>>,
    columns: BTreeSet<CompositeKey>,
}

impl<A> PivotGroups<A> {
    fn new() -> Self {
        PivotGroups {
            rows: BTreeMap::new(),
            columns: BTreeSet::new(),
        }
    }
}

/// Seeds the bucket with `init` on first use, otherwise folds with `combine`.
fn fold_into<G: Aggregator>(
    buckets: &mut Buckets<G::Acc>,
    key: CompositeKey,
    record: &[ScalarValue],
    row: usize,
    aggregator: &G,
) -> Result<()> {
    let not_numeric = || EngineError::NotNumeric { row };
    let next = match buckets.remove(&key) {
        Some(acc) => aggregator.combine(record, acc).ok_or_else(not_numeric)?,
        None => aggregator.init(record).ok_or_else(not_numeric)?,
    };
    buckets.insert(key, next);
    Ok(())
}

fn row_at(table: &Table, row: usize) -> &[ScalarValue] {
    table.row(row).unwrap_or(&[])
}

/// Groups `values` by `horizontal` and (when present) `vertical` keys,
/// aggregating with `aggregator`.
pub fn pivot_table<G: Aggregator>(
    values: &Table,
    horizontal: &Table,
    vertical: &Table,
    aggregator: &G,
) -> Result<Table> {
    let has_vertical = vertical.is_present();

    ensure_dimension(Dimension::Records, horizontal.rows(), values.rows())?;
    if has_vertical {
        ensure_dimension(Dimension::Records, horizontal.rows(), vertical.rows())?;
    }

    let mut groups: PivotGroups<G::Acc> = PivotGroups::new();

    for row in 0..horizontal.rows() {
        let record = row_at(values, row);
        let horizontal_key = CompositeKey::from_row(row_at(horizontal, row));
        let buckets = groups.rows.entry(horizontal_key).or_default();

        fold_into(buckets, CompositeKey::empty(), record, row, aggregator)?;

        if has_vertical {
            let vertical_key = CompositeKey::from_row(row_at(vertical, row));
            fold_into(buckets, vertical_key.clone(), record, row, aggregator)?;
            groups.columns.insert(vertical_key);
        }
    }

    log::debug!(
        "pivot_table: {} records, {} row groups, {} column groups",
        horizontal.rows(),
        groups.rows.len(),
        groups.columns.len()
    );

    render(groups, horizontal.columns(), if has_vertical { vertical.columns() } else { 0 })
}

/// Lays the groups out as a table (see the module docs).
fn render<A: Into<ScalarValue>>(
    groups: PivotGroups<A>,
    row_label_cols: usize,
    header_rows: usize,
) -> Result<Table> {
    let PivotGroups { rows, columns } = groups;
    let total_col = row_label_cols + columns.len();
    let mut result = Table::new(header_rows + rows.len(), total_col + 1);

    // Column headers
    for (offset, column) in columns.iter().enumerate() {
        for (i, value) in column.values().iter().enumerate() {
            result.set(i, row_label_cols + offset, value.clone())?;
        }
    }

    let empty = CompositeKey::empty();
    for (offset, (row_key, mut buckets)) in rows.into_iter().enumerate() {
        let row = header_rows + offset;

        // Row headers
        for (col, value) in row_key.values().iter().enumerate() {
            result.set(row, col, value.clone())?;
        }

        // Data cells
        for (col_offset, column) in columns.iter().enumerate() {
            if let Some(acc) = buckets.remove(column) {
                result.set(row, row_label_cols + col_offset, acc.into())?;
            }
        }

        // Grand total
        if let Some(total) = buckets.remove(&empty) {
            result.set(row, total_col, total.into())?;
        }
    }

    Ok(result)
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Dispatches to the strategy named by `aggregation`.
/// `values` is ignored for `Count`.
pub fn calculate_pivot(
    aggregation: AggregationType,
    values: &Table,
    horizontal: &Table,
    vertical: &Table,
) -> Result<Table> {
    match aggregation {
        AggregationType::Count => pivot_count(horizontal, vertical),
        AggregationType::Sum => pivot_sum(values, horizontal, vertical),
        AggregationType::Max => pivot_max(values, horizontal, vertical),
        AggregationType::Min => pivot_min(values, horizontal, vertical),
    }
}

/// Number of records per group. Needs no value column.
pub fn pivot_count(horizontal: &Table, vertical: &Table) -> Result<Table> {
    let values = Table::new(horizontal.rows(), 1);
    pivot_table(&values, horizontal, vertical, &Count)
}

pub fn pivot_sum(values: &Table, horizontal: &Table, vertical: &Table) -> Result<Table> {
    pivot_table(values, horizontal, vertical, &Sum)
}

pub fn pivot_max(values: &Table, horizontal: &Table, vertical: &Table) -> Result<Table> {
    pivot_table(values, horizontal, vertical, &Max)
}

pub fn pivot_min(values: &Table, horizontal: &Table, vertical: &Table) -> Result<Table> {
    pivot_table(values, horizontal, vertical, &Min)
}
