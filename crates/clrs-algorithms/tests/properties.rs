//! Property tests: every routine against its definition or a brute-force
//! reference on small random inputs.

use clrs_algorithms::inversions::{count_inversions, count_inversions_brute};
use clrs_algorithms::order::is_sorted;
use clrs_algorithms::polynomial::{evaluate_direct, horners_rule};
use clrs_algorithms::searching::{binary_search, linear_search};
use clrs_algorithms::sorting::SortAlgorithm;
use clrs_algorithms::subarray::{find_max_subarray, find_max_subarray_linear, max_subarray_brute};
use clrs_algorithms::two_sum::{TwoSumMethod, DEFAULT_MAX_TABLE_RANGE};
use clrs_algorithms::SortOrder;
use proptest::prelude::*;

fn arb_order() -> impl Strategy<Value = SortOrder> {
    prop_oneof![Just(SortOrder::Ascend), Just(SortOrder::Descend)]
}

fn arb_algorithm() -> impl Strategy<Value = SortAlgorithm> {
    prop_oneof![
        Just(SortAlgorithm::Insertion),
        Just(SortAlgorithm::BinaryInsertion),
        Just(SortAlgorithm::Selection),
        Just(SortAlgorithm::Merge),
        Just(SortAlgorithm::MergeCoarsened),
    ]
}

proptest! {
    #[test]
    fn sorts_produce_monotonic_permutation(
        v in prop::collection::vec(-50i32..50, 0..120),
        order in arb_order(),
        algorithm in arb_algorithm(),
    ) {
        let mut sorted = v.clone();
        algorithm.sort(&mut sorted, order, None);
        prop_assert!(is_sorted(&sorted, order));

        let mut expected = v;
        expected.sort_unstable();
        let mut got = sorted.clone();
        got.sort_unstable();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn linear_search_index_holds_target(
        v in prop::collection::vec(-20i32..20, 0..60),
        target in -25i32..25,
    ) {
        match linear_search(&v, &target) {
            Some(i) => {
                prop_assert_eq!(v[i], target);
                prop_assert!(!v[..i].contains(&target));
            }
            None => prop_assert!(!v.contains(&target)),
        }
    }

    #[test]
    fn binary_search_index_holds_target(
        mut v in prop::collection::vec(-20i32..20, 0..60),
        target in -25i32..25,
        order in arb_order(),
    ) {
        SortAlgorithm::Merge.sort(&mut v, order, None);
        match binary_search(&v, &target, order) {
            Some(i) => prop_assert_eq!(v[i], target),
            None => prop_assert!(!v.contains(&target)),
        }
    }

    #[test]
    fn inversions_match_brute_force(
        v in prop::collection::vec(-30i64..30, 0..150),
        order in arb_order(),
    ) {
        let expected = count_inversions_brute(&v, order);
        let mut work = v;
        prop_assert_eq!(count_inversions(&mut work, order), expected);
        prop_assert!(is_sorted(&work, order));
    }

    #[test]
    fn max_subarray_matches_brute_force(v in prop::collection::vec(-100i64..100, 1..80)) {
        let expected = max_subarray_brute(&v).unwrap();
        for best in [find_max_subarray(&v), find_max_subarray_linear(&v)] {
            prop_assert_eq!(best.sum, expected);
            prop_assert!(best.end > best.begin);
            prop_assert_eq!(v[best.begin..best.end].iter().sum::<i64>(), best.sum);
        }
    }

    #[test]
    fn horner_matches_direct_evaluation(
        coefficients in prop::collection::vec(-9i64..10, 0..8),
        x in -5i64..6,
    ) {
        prop_assert_eq!(horners_rule(&coefficients, x), evaluate_direct(&coefficients, x));
    }

    #[test]
    fn two_sum_methods_agree_on_existence(
        v in prop::collection::vec(-40i64..40, 0..50),
        target in -80i64..80,
    ) {
        let mut exists = false;
        for i in 0..v.len() {
            for j in i + 1..v.len() {
                exists |= v[i] + v[j] == target;
            }
        }
        for method in TwoSumMethod::ALL {
            let found = method.solve(&v, target, DEFAULT_MAX_TABLE_RANGE).unwrap();
            prop_assert_eq!(found.is_some(), exists, "{:?}", method);
            if let Some((a, b)) = found {
                prop_assert_eq!(a + b, target);
            }
        }
    }
}
