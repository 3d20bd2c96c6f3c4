//! FILENAME: tests/common/mod.rs
//! Fixtures for function surface integration tests.

#![allow(dead_code)]

use engine::Table;
use functions::{table_from_json, table_to_json};
use serde_json::Value;

/// Builds a table from a JSON grid literal.
pub fn grid(value: Value) -> Table {
    table_from_json(&value).expect("fixture grid should parse")
}

/// Renders a result table back to JSON for comparison.
pub fn render(table: &Table) -> Value {
    table_to_json(table)
}

/// A small sales ledger: region, product, quarter, amount.
pub struct Ledger {
    pub region: Table,
    pub product: Table,
    pub quarter: Table,
    pub amount: Table,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger {
            region: grid(serde_json::json!(["North", "North", "South", "South", "North", "East"])),
            product: grid(serde_json::json!([
                "Apples", "Oranges", "Apples", "Oranges", "Apples", "Pears"
            ])),
            quarter: grid(serde_json::json!(["Q1", "Q1", "Q2", "Q1", "Q2", "Q2"])),
            amount: grid(serde_json::json!([100, 150, 200, 250, 50, 75])),
        }
    }
}
