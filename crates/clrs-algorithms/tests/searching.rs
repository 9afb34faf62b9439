//! Integration tests for linear and binary search.

use clrs_algorithms::searching::{binary_search, linear_search};
use clrs_algorithms::SortOrder;

#[test]
fn linear_search_returns_first_match() {
    let v = [4.0, 1.0, 7.0, 1.0];
    assert_eq!(linear_search(&v, &1.0), Some(1));
    assert_eq!(linear_search(&v, &4.0), Some(0));
    assert_eq!(linear_search(&v, &9.0), None);
}

#[test]
fn linear_search_empty() {
    let v: [f64; 0] = [];
    assert_eq!(linear_search(&v, &0.0), None);
}

#[test]
fn binary_search_ascending_every_element() {
    let v: Vec<i32> = (0..50).map(|i| i * 3).collect();
    for (i, x) in v.iter().enumerate() {
        assert_eq!(binary_search(&v, x, SortOrder::Ascend), Some(i));
    }
    assert_eq!(binary_search(&v, &1, SortOrder::Ascend), None);
    assert_eq!(binary_search(&v, &-3, SortOrder::Ascend), None);
    assert_eq!(binary_search(&v, &150, SortOrder::Ascend), None);
}

#[test]
fn binary_search_descending() {
    let v = [9.5, 7.0, 3.25, 0.0, -2.0];
    assert_eq!(binary_search(&v, &3.25, SortOrder::Descend), Some(2));
    assert_eq!(binary_search(&v, &-2.0, SortOrder::Descend), Some(4));
    assert_eq!(binary_search(&v, &8.0, SortOrder::Descend), None);
}

#[test]
fn binary_search_duplicates_returns_a_match() {
    let v = [1, 2, 2, 2, 2, 3];
    let idx = binary_search(&v, &2, SortOrder::Ascend).unwrap();
    assert_eq!(v[idx], 2);
}

#[test]
fn binary_search_empty_and_single() {
    let empty: [i32; 0] = [];
    assert_eq!(binary_search(&empty, &1, SortOrder::Ascend), None);
    assert_eq!(binary_search(&[5], &5, SortOrder::Descend), Some(0));
    assert_eq!(binary_search(&[5], &4, SortOrder::Descend), None);
}
