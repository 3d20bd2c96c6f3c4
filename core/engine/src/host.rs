//! FILENAME: core/engine/src/host.rs
//! PURPOSE: Classification and conversion of host scalars into `ScalarValue`.
//! CONTEXT: The host application hands us its own scalar representation.
//! Anything implementing `HostScalar` can be classified and converted; a
//! scalar that fits none of the five cases is rejected with `UnknownType`.

use crate::cell::{ErrorCode, ScalarValue};
use crate::error::{EngineError, Result};

/// The classification of a host scalar.
///
/// Variants are declared in classification precedence order, which differs
/// from the sort order of `ScalarValue::type_rank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Number,
    Text,
    Boolean,
    Error,
    Empty,
    Unknown,
}

/// A scalar value as supplied by the host.
///
/// The predicates are expected to be mutually exclusive. Accessors are only
/// called after the matching predicate returned true.
pub trait HostScalar {
    fn is_number(&self) -> bool;
    fn is_text(&self) -> bool;
    fn is_boolean(&self) -> bool;
    fn is_error(&self) -> bool;
    fn is_empty(&self) -> bool;

    fn number_value(&self) -> Option<f64>;
    fn text_value(&self) -> Option<String>;
    fn boolean_value(&self) -> Option<bool>;
    fn error_value(&self) -> Option<ErrorCode>;
}

/// Classifies a host scalar, checking Number, Text, Boolean, Error, Empty
/// in that order.
pub fn classify<T: HostScalar + ?Sized>(item: &T) -> ScalarKind {
    if item.is_number() {
        ScalarKind::Number
    } else if item.is_text() {
        ScalarKind::Text
    } else if item.is_boolean() {
        ScalarKind::Boolean
    } else if item.is_error() {
        ScalarKind::Error
    } else if item.is_empty() {
        ScalarKind::Empty
    } else {
        ScalarKind::Unknown
    }
}

/// Converts a host scalar found at (row, column) into a `ScalarValue`.
pub fn convert<T: HostScalar + ?Sized>(item: &T, row: usize, column: usize) -> Result<ScalarValue> {
    let unknown = || EngineError::UnknownType { row, column };
    let value = match classify(item) {
        ScalarKind::Number => ScalarValue::Number(item.number_value().ok_or_else(unknown)?),
        ScalarKind::Text => ScalarValue::Text(item.text_value().ok_or_else(unknown)?),
        ScalarKind::Boolean => ScalarValue::Boolean(item.boolean_value().ok_or_else(unknown)?),
        ScalarKind::Error => ScalarValue::Error(item.error_value().ok_or_else(unknown)?),
        ScalarKind::Empty => ScalarValue::Empty,
        ScalarKind::Unknown => return Err(unknown()),
    };
    Ok(value)
}

impl HostScalar for ScalarValue {
    fn is_number(&self) -> bool {
        matches!(self, ScalarValue::Number(_))
    }

    fn is_text(&self) -> bool {
        matches!(self, ScalarValue::Text(_))
    }

    fn is_boolean(&self) -> bool {
        matches!(self, ScalarValue::Boolean(_))
    }

    fn is_error(&self) -> bool {
        matches!(self, ScalarValue::Error(_))
    }

    fn is_empty(&self) -> bool {
        matches!(self, ScalarValue::Empty)
    }

    fn number_value(&self) -> Option<f64> {
        match self {
            ScalarValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    fn text_value(&self) -> Option<String> {
        match self {
            ScalarValue::Text(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn boolean_value(&self) -> Option<bool> {
        match self {
            ScalarValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    fn error_value(&self) -> Option<ErrorCode> {
        match self {
            ScalarValue::Error(code) => Some(*code),
            _ => None,
        }
    }
}
