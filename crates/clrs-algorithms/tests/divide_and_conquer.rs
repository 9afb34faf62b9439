//! Integration tests for inversion counting and the maximum subarray.

use clrs_algorithms::inversions::{
    count_inversions, count_inversions_brute, count_inversions_with_threshold,
};
use clrs_algorithms::order::is_sorted;
use clrs_algorithms::subarray::{
    find_max_subarray, find_max_subarray_linear, max_subarray_brute, SubarrayMethod,
};
use clrs_algorithms::SortOrder;

// ---------------------------------------------------------------------------
// Inversions
// ---------------------------------------------------------------------------

#[test]
fn textbook_inversion_example() {
    // Problem 2-4: <2, 3, 8, 6, 1> has five inversions.
    let mut v = vec![2.0, 3.0, 8.0, 6.0, 1.0];
    assert_eq!(count_inversions(&mut v, SortOrder::Ascend), 5);
    assert_eq!(v, vec![1.0, 2.0, 3.0, 6.0, 8.0]);
}

#[test]
fn reversed_array_has_all_pairs() {
    let mut v: Vec<i32> = (0..40).rev().collect();
    assert_eq!(count_inversions(&mut v, SortOrder::Ascend), 40 * 39 / 2);

    let mut w: Vec<i32> = (0..40).rev().collect();
    assert_eq!(count_inversions(&mut w, SortOrder::Descend), 0);
}

#[test]
fn equal_elements_are_not_inversions() {
    let mut v = vec![3, 3, 3, 3];
    assert_eq!(count_inversions(&mut v, SortOrder::Ascend), 0);
    assert_eq!(count_inversions(&mut v, SortOrder::Descend), 0);
}

#[test]
fn every_threshold_agrees_with_brute_force() {
    let input: Vec<i32> = (0..75).map(|i| (i * 53 + 7) % 31).collect();
    for order in [SortOrder::Ascend, SortOrder::Descend] {
        let expected = count_inversions_brute(&input, order);
        for k in [0, 1, 2, 3, 8, 75, 200] {
            let mut v = input.clone();
            assert_eq!(
                count_inversions_with_threshold(&mut v, order, k),
                expected,
                "order {} threshold {}",
                order,
                k
            );
            assert!(is_sorted(&v, order));
        }
    }
}

#[test]
fn empty_inversions() {
    let mut v: Vec<f64> = vec![];
    assert_eq!(count_inversions(&mut v, SortOrder::Ascend), 0);
}

// ---------------------------------------------------------------------------
// Maximum subarray
// ---------------------------------------------------------------------------

const STOCK_CHANGES: [i64; 16] = [
    13, -3, -25, 20, -3, -16, -23, 18, 20, -7, 12, -5, -22, 15, -4, 7,
];

#[test]
fn textbook_stock_example() {
    for method in [SubarrayMethod::DivideAndConquer, SubarrayMethod::Linear] {
        let best = method.find(&STOCK_CHANGES);
        assert_eq!((best.begin, best.end, best.sum), (7, 11, 43), "{:?}", method);
    }
}

#[test]
fn all_negative_returns_largest_element() {
    let v = [-8.0, -3.0, -6.0, -2.0, -5.0];
    let dc = find_max_subarray(&v);
    let lin = find_max_subarray_linear(&v);
    assert_eq!((dc.begin, dc.end, dc.sum), (3, 4, -2.0));
    assert_eq!((lin.begin, lin.end, lin.sum), (3, 4, -2.0));
}

#[test]
fn empty_subarray() {
    let v: [f64; 0] = [];
    for method in [SubarrayMethod::DivideAndConquer, SubarrayMethod::Linear] {
        let best = method.find(&v);
        assert!(best.is_empty());
        assert_eq!(best.sum, 0.0);
        assert_eq!((best.begin, best.end), (0, 0));
    }
    assert_eq!(max_subarray_brute(&v), None);
}

#[test]
fn reported_range_sums_to_reported_sum() {
    let v: Vec<i64> = (0..60).map(|i| ((i * 29 + 3) % 23) - 11).collect();
    for method in [SubarrayMethod::DivideAndConquer, SubarrayMethod::Linear] {
        let best = method.find(&v);
        assert!(!best.is_empty());
        assert_eq!(v[best.begin..best.end].iter().sum::<i64>(), best.sum);
        assert_eq!(Some(best.sum), max_subarray_brute(&v));
    }
}

#[test]
fn method_names_parse() {
    assert_eq!("kadane".parse::<SubarrayMethod>().unwrap(), SubarrayMethod::Linear);
    assert_eq!(
        "divide".parse::<SubarrayMethod>().unwrap(),
        SubarrayMethod::DivideAndConquer
    );
    assert!("greedy".parse::<SubarrayMethod>().is_err());
}
