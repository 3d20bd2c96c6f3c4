//! FILENAME: core/engine/src/cell.rs
//! PURPOSE: Defines the scalar value held by a single table cell.
//! CONTEXT: This file contains the `ScalarValue` enum, the `ErrorCode` marker
//! type and the total order used everywhere values are sorted, deduplicated
//! or used as map keys.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// ERROR MARKERS
// ============================================================================

/// A host error marker carried as a cell value (e.g. #N/A).
/// The numeric codes are the host's native error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub i32);

impl ErrorCode {
    pub const NULL: ErrorCode = ErrorCode(0);
    pub const DIV_0: ErrorCode = ErrorCode(7);
    pub const VALUE: ErrorCode = ErrorCode(15);
    pub const REF: ErrorCode = ErrorCode(23);
    pub const NAME: ErrorCode = ErrorCode(29);
    pub const NUM: ErrorCode = ErrorCode(36);
    /// Not available: the marker emitted for an unmatched lookup key.
    pub const NA: ErrorCode = ErrorCode(42);
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ErrorCode::NULL => write!(f, "#NULL!"),
            ErrorCode::DIV_0 => write!(f, "#DIV/0!"),
            ErrorCode::VALUE => write!(f, "#VALUE!"),
            ErrorCode::REF => write!(f, "#REF!"),
            ErrorCode::NAME => write!(f, "#NAME?"),
            ErrorCode::NUM => write!(f, "#NUM!"),
            ErrorCode::NA => write!(f, "#N/A"),
            ErrorCode(code) => write!(f, "#ERR{}", code),
        }
    }
}

// ============================================================================
// SCALAR VALUE
// ============================================================================

/// Represents the raw data within a cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum ScalarValue {
    Number(f64),
    Text(String),
    Boolean(bool),
    Error(ErrorCode),
    #[default]
    Empty,
}

impl ScalarValue {
    pub fn text(s: impl Into<String>) -> Self {
        ScalarValue::Text(s.into())
    }

    /// The not-available marker.
    pub fn not_available() -> Self {
        ScalarValue::Error(ErrorCode::NA)
    }

    /// Position of the value's case in the sort order:
    /// Number < Boolean < Text < Error < Empty.
    ///
    /// This is deliberately not the order in which host scalars are
    /// classified (see `host::classify`).
    pub fn type_rank(&self) -> u8 {
        match self {
            ScalarValue::Number(_) => 0,
            ScalarValue::Boolean(_) => 1,
            ScalarValue::Text(_) => 2,
            ScalarValue::Error(_) => 3,
            ScalarValue::Empty => 4,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ScalarValue::Empty)
    }

    /// Reads the value as a number for aggregation.
    /// Booleans count as 1/0 and Empty as 0; text and errors have no number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ScalarValue::Number(n) => Some(*n),
            ScalarValue::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            ScalarValue::Empty => Some(0.0),
            ScalarValue::Text(_) | ScalarValue::Error(_) => None,
        }
    }

    /// Returns the display value as a String.
    pub fn display_value(&self) -> String {
        match self {
            ScalarValue::Empty => String::new(),
            ScalarValue::Number(n) => {
                // Format without unnecessary decimal places
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{:.0}", n)
                } else {
                    format!("{}", n)
                }
            }
            ScalarValue::Text(s) => s.clone(),
            ScalarValue::Boolean(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            ScalarValue::Error(e) => e.to_string(),
        }
    }
}

/// Numbers compare numerically. NaN has no numeric order, so it is placed
/// after every other number and is equal to itself.
fn compare_numbers(a: f64, b: f64) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => a.is_nan().cmp(&b.is_nan()),
    }
}

impl Ord for ScalarValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ScalarValue::Number(a), ScalarValue::Number(b)) => compare_numbers(*a, *b),
            (ScalarValue::Boolean(a), ScalarValue::Boolean(b)) => a.cmp(b),
            // String ordering is byte-wise, i.e. by code point
            (ScalarValue::Text(a), ScalarValue::Text(b)) => a.cmp(b),
            (ScalarValue::Error(a), ScalarValue::Error(b)) => a.cmp(b),
            (ScalarValue::Empty, ScalarValue::Empty) => Ordering::Equal,
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }
}

impl PartialOrd for ScalarValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Two values are equal when neither sorts before the other.
impl PartialEq for ScalarValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScalarValue {}

impl From<f64> for ScalarValue {
    fn from(n: f64) -> Self {
        ScalarValue::Number(n)
    }
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        ScalarValue::Boolean(b)
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue::Text(s.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        ScalarValue::Text(s)
    }
}

impl From<ErrorCode> for ScalarValue {
    fn from(code: ErrorCode) -> Self {
        ScalarValue::Error(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<ScalarValue> {
        vec![
            ScalarValue::Number(-1.5),
            ScalarValue::Number(0.0),
            ScalarValue::Number(2.0),
            ScalarValue::Number(f64::NAN),
            ScalarValue::Boolean(false),
            ScalarValue::Boolean(true),
            ScalarValue::text(""),
            ScalarValue::text("a"),
            ScalarValue::text("b"),
            ScalarValue::Error(ErrorCode::NULL),
            ScalarValue::Error(ErrorCode::NA),
            ScalarValue::Empty,
        ]
    }

    #[test]
    fn test_type_rank_separates_cases() {
        assert!(ScalarValue::Number(1e300) < ScalarValue::Boolean(false));
        assert!(ScalarValue::Boolean(true) < ScalarValue::text(""));
        assert!(ScalarValue::text("zzz") < ScalarValue::Error(ErrorCode::NULL));
        assert!(ScalarValue::Error(ErrorCode(i32::MAX)) < ScalarValue::Empty);
    }

    #[test]
    fn test_within_rank_ordering() {
        assert!(ScalarValue::Number(1.0) < ScalarValue::Number(2.0));
        assert!(ScalarValue::Boolean(false) < ScalarValue::Boolean(true));
        assert!(ScalarValue::text("B") < ScalarValue::text("a"));
        assert!(ScalarValue::Error(ErrorCode::DIV_0) < ScalarValue::Error(ErrorCode::NA));
        assert_eq!(ScalarValue::Empty.cmp(&ScalarValue::Empty), Ordering::Equal);
    }

    #[test]
    fn test_exact_numeric_equality() {
        assert_eq!(ScalarValue::Number(0.0), ScalarValue::Number(-0.0));
        assert_ne!(ScalarValue::Number(0.1 + 0.2), ScalarValue::Number(0.3));
        assert_eq!(ScalarValue::Number(f64::NAN), ScalarValue::Number(f64::NAN));
        assert!(ScalarValue::Number(f64::INFINITY) < ScalarValue::Number(f64::NAN));
    }

    #[test]
    fn test_order_is_total_and_transitive() {
        let values = samples();
        for a in &values {
            for b in &values {
                let forward = a.cmp(b);
                assert_eq!(forward, b.cmp(a).reverse(), "antisymmetry {:?} {:?}", a, b);
                for c in &values {
                    if a < b && b < c {
                        assert!(a < c, "transitivity {:?} {:?} {:?}", a, b, c);
                    }
                }
            }
        }
        // The sample list is already in ascending order
        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(sorted, values);
    }

    #[test]
    fn test_as_number() {
        assert_eq!(ScalarValue::Number(3.5).as_number(), Some(3.5));
        assert_eq!(ScalarValue::Boolean(true).as_number(), Some(1.0));
        assert_eq!(ScalarValue::Empty.as_number(), Some(0.0));
        assert_eq!(ScalarValue::text("3").as_number(), None);
        assert_eq!(ScalarValue::not_available().as_number(), None);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ErrorCode::NA.to_string(), "#N/A");
        assert_eq!(ErrorCode::DIV_0.to_string(), "#DIV/0!");
        assert_eq!(ErrorCode(99).to_string(), "#ERR99");
        assert_eq!(ScalarValue::Number(42.0).display_value(), "42");
        assert_eq!(ScalarValue::Boolean(false).display_value(), "FALSE");
    }
}
