//! FILENAME: core/functions/src/lib.rs
//! PURPOSE: The fixed function surface offered to the host application.
//! CONTEXT: Each function takes tables (0x0 = argument omitted) plus optional
//! flag tables and returns exactly one table, or fails the whole call.
//! The heavy lifting lives in `engine` and `pivot-engine`; this layer
//! interprets flags, skips omitted arguments and logs each call.

#[macro_use]
pub mod logging;
pub mod error;
pub mod flags;
pub mod json;

use engine::{FilterOptions, Table};
use pivot_engine::AggregationType;

pub use error::{FunctionError, FunctionResult};
pub use json::{scalar_to_json, table_from_json, table_to_json, JsonScalar};

/// Number of table arguments the host registers for `union`/`intersection`.
/// The functions themselves accept any number.
pub const MAX_SET_ARGUMENTS: usize = 6;

fn dims(table: &Table) -> String {
    format!("{}x{}", table.rows(), table.columns())
}

fn dims_list(tables: &[&Table]) -> String {
    tables.iter().map(|t| dims(t)).collect::<Vec<_>>().join(",")
}

/// Logs the outcome of a call under `category` and passes it through.
fn finish(category: &str, name: &str, result: engine::Result<Table>) -> FunctionResult<Table> {
    match &result {
        Ok(table) => log_exit!(category, name, "-> {}", dims(table)),
        Err(e) => log_warn!(category, "{} failed: {}", name, e),
    }
    Ok(result?)
}

/// Describes this library.
pub fn about() -> String {
    format!(
        "{} {}: sort, set algebra, keyed lookups and pivot tables over cell grids",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

// ============================================================================
// SETS
// ============================================================================

/// Every cell of `x`, ascending, duplicates kept.
pub fn sort(x: &Table) -> FunctionResult<Table> {
    log_enter!("FN", "sort", "x={}", dims(x));
    finish("FN", "sort", Ok(engine::sort(x)))
}

/// The distinct cells of `x`, ascending.
pub fn unique(x: &Table) -> FunctionResult<Table> {
    log_enter!("FN", "unique", "x={}", dims(x));
    finish("FN", "unique", Ok(engine::unique(x)))
}

/// Distinct cells found in any argument. Omitted arguments are skipped.
pub fn union(args: &[&Table]) -> FunctionResult<Table> {
    log_enter!("FN", "union", "args=[{}]", dims_list(args));
    finish("FN", "union", Ok(engine::union(args)))
}

/// Distinct cells found in every argument. Omitted arguments are skipped.
pub fn intersection(args: &[&Table]) -> FunctionResult<Table> {
    log_enter!("FN", "intersection", "args=[{}]", dims_list(args));
    finish("FN", "intersection", Ok(engine::intersection(args)))
}

// ============================================================================
// LOOKUPS
// ============================================================================

/// Position of each lookup row in `table`, or #N/A.
/// Positions are 1-based when `one_index` is on, otherwise 0-based.
pub fn exact_match(lookup: &Table, table: &Table, one_index: &Table) -> FunctionResult<Table> {
    let base = flags::index_base(one_index);
    log_enter!("FN", "exact_match", "lookup={} table={} base={:?}", dims(lookup), dims(table), base);
    finish("FN", "exact_match", engine::exact_match(lookup, table, base))
}

/// The `output` row matching each lookup row, or a row of #N/A.
pub fn exact_vlookup(lookup: &Table, table: &Table, output: &Table) -> FunctionResult<Table> {
    log_enter!(
        "FN",
        "exact_vlookup",
        "lookup={} table={} output={}",
        dims(lookup),
        dims(table),
        dims(output)
    );
    finish("FN", "exact_vlookup", engine::exact_vlookup(lookup, table, output))
}

/// All `output` rows matching each lookup row; unmatched lookups are dropped.
/// When `include_lookup` is on, each row is prefixed with its lookup key.
pub fn filter(
    lookup: &Table,
    table: &Table,
    output: &Table,
    include_lookup: &Table,
) -> FunctionResult<Table> {
    let options = FilterOptions {
        include_lookup: flags::is_truthy(include_lookup),
    };
    log_enter!(
        "FN",
        "filter",
        "lookup={} table={} output={} include_lookup={}",
        dims(lookup),
        dims(table),
        dims(output),
        options.include_lookup
    );
    finish("FN", "filter", engine::filter(lookup, table, output, options))
}

// ============================================================================
// PIVOTS
// ============================================================================

fn pivot(
    aggregation: AggregationType,
    value: &Table,
    horizontal: &Table,
    vertical: &Table,
) -> FunctionResult<Table> {
    let name = format!("pivot_{:?}", aggregation).to_lowercase();
    log_enter!(
        "PIVOT",
        &name,
        "value={} horizontal={} vertical={}",
        dims(value),
        dims(horizontal),
        dims(vertical)
    );
    finish(
        "PIVOT",
        &name,
        pivot_engine::calculate_pivot(aggregation, value, horizontal, vertical),
    )
}

/// Number of records per (horizontal, vertical) group, plus row totals.
pub fn pivot_count(horizontal: &Table, vertical: &Table) -> FunctionResult<Table> {
    pivot(AggregationType::Count, &Table::omitted(), horizontal, vertical)
}

pub fn pivot_sum(value: &Table, horizontal: &Table, vertical: &Table) -> FunctionResult<Table> {
    pivot(AggregationType::Sum, value, horizontal, vertical)
}

pub fn pivot_max(value: &Table, horizontal: &Table, vertical: &Table) -> FunctionResult<Table> {
    pivot(AggregationType::Max, value, horizontal, vertical)
}

pub fn pivot_min(value: &Table, horizontal: &Table, vertical: &Table) -> FunctionResult<Table> {
    pivot(AggregationType::Min, value, horizontal, vertical)
}
