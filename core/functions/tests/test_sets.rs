//! FILENAME: tests/test_sets.rs
//! Integration tests for sort, unique, union and intersection.

mod common;

use common::{grid, render};
use engine::Table;
use functions::{intersection, sort, union, unique, MAX_SET_ARGUMENTS};
use serde_json::json;

#[test]
fn test_unique_flattens_rows() {
    let x = grid(json!([[1, "a"], [2, "b"], [1, "a"]]));
    let result = unique(&x).unwrap();
    assert_eq!(render(&result), json!([[1.0], [2.0], ["a"], ["b"]]));
}

#[test]
fn test_sort_same_multiset() {
    let x = grid(json!([[3, true, null], ["z", {"error": 42}, 3]]));
    let result = sort(&x).unwrap();
    assert_eq!(result.rows(), 6);
    assert_eq!(
        render(&result),
        json!([[3.0], [3.0], [true], ["z"], [{"error": 42}], [null]])
    );
}

#[test]
fn test_union_of_host_arguments() {
    let a = grid(json!([1, 2, 2]));
    let b = grid(json!([["x", 2]]));
    let omitted = Table::omitted();
    let args = [&a, &omitted, &b, &omitted, &omitted, &omitted];
    assert_eq!(args.len(), MAX_SET_ARGUMENTS);

    let result = union(&args).unwrap();
    assert_eq!(render(&result), json!([[1.0], [2.0], ["x"]]));
    assert_eq!(union(&[&a, &b]).unwrap(), result);
}

#[test]
fn test_union_with_itself_equals_unique() {
    let a = grid(json!([["b", 1], [1, "b"]]));
    assert_eq!(union(&[&a, &a]).unwrap(), unique(&a).unwrap());
    assert_eq!(intersection(&[&a, &a]).unwrap(), unique(&a).unwrap());
}

#[test]
fn test_intersection_across_arguments() {
    let a = grid(json!([1, 2, 3, "a"]));
    let b = grid(json!([[3, "a", 1]]));
    let c = grid(json!([["a"], [3]]));
    let result = intersection(&[&a, &b, &c]).unwrap();
    assert_eq!(render(&result), json!([[3.0], ["a"]]));
}

#[test]
fn test_intersection_all_omitted() {
    let omitted = Table::omitted();
    let result = intersection(&[&omitted, &omitted]).unwrap();
    assert_eq!(result.rows(), 0);
    assert_eq!(render(&result), json!([]));
}
