//! FILENAME: core/functions/src/json.rs
//! PURPOSE: Marshals host grids encoded as JSON to and from `Table`.
//! CONTEXT: Cells map as follows:
//! - `null` = Empty
//! - number, string, boolean = Number, Text, Boolean
//! - `{"error": <code>}` = error marker
//! - anything else cannot be classified and fails the call (UnknownType)

use engine::{convert, ErrorCode, HostScalar, ScalarValue, Table};
use serde_json::{Map, Value};

use crate::error::{FunctionError, FunctionResult};

/// Key of the single-field object that carries an error marker.
const ERROR_KEY: &str = "error";

/// A JSON cell seen through the host scalar predicates.
#[derive(Debug, Clone, Copy)]
pub struct JsonScalar<'a>(pub &'a Value);

impl JsonScalar<'_> {
    fn error_object(&self) -> Option<&Map<String, Value>> {
        self.0
            .as_object()
            .filter(|object| object.len() == 1 && object.contains_key(ERROR_KEY))
    }
}

impl HostScalar for JsonScalar<'_> {
    fn is_number(&self) -> bool {
        self.0.is_number()
    }

    fn is_text(&self) -> bool {
        self.0.is_string()
    }

    fn is_boolean(&self) -> bool {
        self.0.is_boolean()
    }

    fn is_error(&self) -> bool {
        self.error_value().is_some()
    }

    fn is_empty(&self) -> bool {
        self.0.is_null()
    }

    fn number_value(&self) -> Option<f64> {
        self.0.as_f64()
    }

    fn text_value(&self) -> Option<String> {
        self.0.as_str().map(str::to_string)
    }

    fn boolean_value(&self) -> Option<bool> {
        self.0.as_bool()
    }

    fn error_value(&self) -> Option<ErrorCode> {
        self.error_object()
            .and_then(|object| object.get(ERROR_KEY))
            .and_then(Value::as_i64)
            .and_then(|code| i32::try_from(code).ok())
            .map(ErrorCode)
    }
}

fn is_cell(value: &Value) -> bool {
    !value.is_array()
}

/// Parses a host grid.
///
/// Accepted shapes: `null` or `[]` (omitted argument), a bare scalar (1x1),
/// a flat array of scalars (one column) or an array of equal-length row
/// arrays.
pub fn table_from_json(grid: &Value) -> FunctionResult<Table> {
    let rows: Vec<&Value> = match grid {
        Value::Null => return Ok(Table::omitted()),
        Value::Array(rows) if rows.is_empty() => return Ok(Table::omitted()),
        Value::Array(rows) => rows.iter().collect(),
        scalar => vec![scalar],
    };

    let mut cells = Vec::with_capacity(rows.len());
    for (row, item) in rows.into_iter().enumerate() {
        let values: Vec<&Value> = match item {
            Value::Array(values) => values.iter().collect(),
            scalar => vec![scalar],
        };
        let mut converted = Vec::with_capacity(values.len());
        for (column, value) in values.into_iter().enumerate() {
            if !is_cell(value) {
                return Err(FunctionError::InvalidGrid(format!(
                    "nested array at row {}, column {}",
                    row, column
                )));
            }
            converted.push(convert(&JsonScalar(value), row, column)?);
        }
        cells.push(converted);
    }

    let table = Table::from_rows(cells).map_err(|e| FunctionError::InvalidGrid(e.to_string()))?;
    log_debug!("JSON", "parsed grid {}x{}", table.rows(), table.columns());
    Ok(table)
}

fn error_to_json(code: ErrorCode) -> Value {
    let mut object = Map::new();
    object.insert(ERROR_KEY.to_string(), Value::from(code.0));
    Value::Object(object)
}

/// Converts a cell back to the host representation.
/// Non-finite numbers have no JSON form and become #NUM!.
pub fn scalar_to_json(value: &ScalarValue) -> Value {
    match value {
        ScalarValue::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or_else(|| error_to_json(ErrorCode::NUM)),
        ScalarValue::Text(s) => Value::String(s.clone()),
        ScalarValue::Boolean(b) => Value::Bool(*b),
        ScalarValue::Error(code) => error_to_json(*code),
        ScalarValue::Empty => Value::Null,
    }
}

/// Emits a table as an array of row arrays.
pub fn table_to_json(table: &Table) -> Value {
    Value::Array(
        table
            .iter_rows()
            .map(|row| Value::Array(row.iter().map(scalar_to_json).collect()))
            .collect(),
    )
}
