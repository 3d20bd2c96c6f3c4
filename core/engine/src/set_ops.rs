//! FILENAME: core/engine/src/set_ops.rs
//! PURPOSE: Sorting, deduplication, union and intersection of table cells.
//! CONTEXT: These operations flatten their inputs. Every cell is an
//! independent member of a set (or multiset); row structure is discarded.
//! Results are always ascending N x 1 column tables.

use std::collections::BTreeSet;

use crate::cell::ScalarValue;
use crate::grid::Table;

fn distinct_cells(table: &Table) -> BTreeSet<ScalarValue> {
    table.flatten().cloned().collect()
}

/// Keeps only the supplied arguments; 0x0 (omitted) tables are dropped
/// rather than treated as empty sets.
fn present<'s, 'a>(tables: &'s [&'a Table]) -> impl Iterator<Item = &'a Table> + 's {
    tables.iter().copied().filter(|table| table.is_present())
}

/// All cells in ascending order, duplicates kept.
pub fn sort(table: &Table) -> Table {
    let mut cells: Vec<ScalarValue> = table.flatten().cloned().collect();
    cells.sort();
    log::trace!("sort: {} cells", cells.len());
    Table::column(cells)
}

/// One representative per distinct cell value, ascending.
pub fn unique(table: &Table) -> Table {
    let cells = distinct_cells(table);
    log::trace!("unique: {} distinct of {} cells", cells.len(), table.rows() * table.columns());
    Table::column(cells)
}

/// Distinct values appearing in any supplied table.
pub fn union(tables: &[&Table]) -> Table {
    let mut result = BTreeSet::new();
    for table in present(tables) {
        result.extend(table.flatten().cloned());
    }
    log::trace!("union: {} distinct values", result.len());
    Table::column(result)
}

/// Distinct values appearing in every supplied table.
/// With no supplied tables the result has no rows.
pub fn intersection(tables: &[&Table]) -> Table {
    let mut supplied = present(tables);
    let Some(first) = supplied.next() else {
        return Table::column(Vec::new());
    };

    let mut result = distinct_cells(first);
    for table in supplied {
        if result.is_empty() {
            break;
        }
        let items = distinct_cells(table);
        result.retain(|value| items.contains(value));
    }
    log::trace!("intersection: {} distinct values", result.len());
    Table::column(result)
}
