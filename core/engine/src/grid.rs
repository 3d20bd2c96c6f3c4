//! FILENAME: core/engine/src/grid.rs
//! PURPOSE: The rectangular table of scalar values every operation consumes and produces.
//! CONTEXT: Unlike a spreadsheet sheet, a `Table` is dense and its dimensions
//! are fixed at construction. A 0x0 table stands for an omitted argument.

use serde::{Deserialize, Serialize};

use crate::cell::ScalarValue;
use crate::error::{EngineError, Result};

/// A rows x columns grid of values stored in row-major order.
/// Row and column are 0-based indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    rows: usize,
    columns: usize,
    cells: Vec<ScalarValue>,
}

impl Table {
    /// Creates a table with every cell `Empty`.
    pub fn new(rows: usize, columns: usize) -> Self {
        Table {
            rows,
            columns,
            cells: vec![ScalarValue::Empty; rows * columns],
        }
    }

    /// The 0x0 table used for an omitted argument.
    pub fn omitted() -> Self {
        Table::new(0, 0)
    }

    /// Builds a table from explicit rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<ScalarValue>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * columns);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != columns {
                return Err(EngineError::RaggedRows {
                    row,
                    expected: columns,
                    actual: values.len(),
                });
            }
            cells.extend(values);
        }
        // Rows without any cells carry no area
        let rows = if columns == 0 { 0 } else { row_count };
        Ok(Table { rows, columns, cells })
    }

    /// Builds an N x 1 table from a sequence of values.
    pub fn column<I>(values: I) -> Self
    where
        I: IntoIterator<Item = ScalarValue>,
    {
        let cells: Vec<ScalarValue> = values.into_iter().collect();
        Table {
            rows: cells.len(),
            columns: 1,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// True when the table has a non-zero area, i.e. the argument was supplied.
    pub fn is_present(&self) -> bool {
        self.rows * self.columns != 0
    }

    /// Retrieves the cell at the specified coordinates.
    /// Returns None outside the table.
    pub fn get(&self, row: usize, column: usize) -> Option<&ScalarValue> {
        if row < self.rows && column < self.columns {
            self.cells.get(row * self.columns + column)
        } else {
            None
        }
    }

    /// Writes a cell, failing with `OutOfBounds` outside the table.
    pub fn set(&mut self, row: usize, column: usize, value: ScalarValue) -> Result<()> {
        if row >= self.rows || column >= self.columns {
            return Err(EngineError::OutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        self.cells[row * self.columns + column] = value;
        Ok(())
    }

    /// The cells of one row, or None outside the table.
    pub fn row(&self, row: usize) -> Option<&[ScalarValue]> {
        if row < self.rows {
            let start = row * self.columns;
            Some(&self.cells[start..start + self.columns])
        } else {
            None
        }
    }

    /// Iterates over the rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[ScalarValue]> {
        (0..self.rows).map(move |row| {
            let start = row * self.columns;
            &self.cells[start..start + self.columns]
        })
    }

    /// Every cell in row-major order, ignoring row boundaries.
    pub fn flatten(&self) -> impl Iterator<Item = &ScalarValue> {
        self.cells.iter()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::omitted()
    }
}
