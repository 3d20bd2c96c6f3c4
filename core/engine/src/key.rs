//! FILENAME: core/engine/src/key.rs
//! PURPOSE: Multi-column keys used for grouping and matching rows.
//! CONTEXT: A `CompositeKey` holds one value per selected column of a row.
//! Keys order lexicographically by `ScalarValue`'s total order, and a key
//! that is a prefix of another sorts first. Equality is derived from the
//! same order, so keys can be used directly in `BTreeMap`/`BTreeSet`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cell::ScalarValue;

/// Most keys span only a handful of columns.
type KeyValues = SmallVec<[ScalarValue; 4]>;

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompositeKey(KeyValues);

impl CompositeKey {
    /// The zero-length key. Sorts before every other key.
    pub fn empty() -> Self {
        CompositeKey(SmallVec::new())
    }

    /// Builds a key from the full contents of a row.
    pub fn from_row(row: &[ScalarValue]) -> Self {
        CompositeKey(row.iter().cloned().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[ScalarValue] {
        &self.0
    }
}

impl FromIterator<ScalarValue> for CompositeKey {
    fn from_iter<I: IntoIterator<Item = ScalarValue>>(iter: I) -> Self {
        CompositeKey(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn key(values: &[ScalarValue]) -> CompositeKey {
        CompositeKey::from_row(values)
    }

    #[test]
    fn test_lexicographic_order() {
        let a = key(&[1.0.into(), "b".into()]);
        let b = key(&[1.0.into(), "c".into()]);
        let c = key(&[2.0.into(), "a".into()]);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_shorter_prefix_sorts_first() {
        let short = key(&[1.0.into()]);
        let long = key(&[1.0.into(), ScalarValue::Empty]);
        assert!(short < long);
        assert!(CompositeKey::empty() < short);
    }

    #[test]
    fn test_equality_follows_order() {
        let a = key(&[ScalarValue::Empty, 0.0.into()]);
        let b = key(&[ScalarValue::Empty, (-0.0).into()]);
        assert_eq!(a, b);

        let mut map = BTreeMap::new();
        map.insert(a, 1);
        map.insert(b, 2);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_more_than_inline_capacity() {
        let values: Vec<ScalarValue> = (0..10).map(|i| ScalarValue::Number(i as f64)).collect();
        let long = CompositeKey::from_row(&values);
        assert_eq!(long.len(), 10);
        assert_eq!(long.values()[9], ScalarValue::Number(9.0));
    }
}
