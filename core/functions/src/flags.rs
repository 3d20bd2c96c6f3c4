//! FILENAME: core/functions/src/flags.rs
//! PURPOSE: Interprets optional scalar flag arguments.
//! CONTEXT: Flags arrive as tables like every other argument. An omitted
//! flag, 0, FALSE or an empty cell means "off"; anything else means "on".

use engine::{IndexBase, ScalarValue, Table};

/// Reads the first cell of a flag argument as a boolean.
pub fn is_truthy(flag: &Table) -> bool {
    if !flag.is_present() {
        return false;
    }
    match flag.get(0, 0) {
        None | Some(ScalarValue::Empty) | Some(ScalarValue::Boolean(false)) => false,
        Some(ScalarValue::Number(n)) => *n != 0.0,
        Some(_) => true,
    }
}

/// Zero-based positions unless the flag is on.
pub fn index_base(flag: &Table) -> IndexBase {
    if is_truthy(flag) {
        IndexBase::One
    } else {
        IndexBase::Zero
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag(value: ScalarValue) -> Table {
        Table::column(vec![value])
    }

    #[test]
    fn test_falsy_flags() {
        assert!(!is_truthy(&Table::omitted()));
        assert!(!is_truthy(&flag(ScalarValue::Number(0.0))));
        assert!(!is_truthy(&flag(ScalarValue::Boolean(false))));
        assert!(!is_truthy(&flag(ScalarValue::Empty)));
    }

    #[test]
    fn test_truthy_flags() {
        assert!(is_truthy(&flag(ScalarValue::Number(1.0))));
        assert!(is_truthy(&flag(ScalarValue::Number(-2.5))));
        assert!(is_truthy(&flag(ScalarValue::Boolean(true))));
        assert!(is_truthy(&flag(ScalarValue::text("yes"))));
        assert!(is_truthy(&flag(ScalarValue::not_available())));
    }

    #[test]
    fn test_index_base() {
        assert_eq!(index_base(&Table::omitted()), IndexBase::Zero);
        assert_eq!(index_base(&flag(true.into())), IndexBase::One);
    }
}
