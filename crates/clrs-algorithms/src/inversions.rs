//! Inversion counting with merge sort (Problem 2-4).
//!
//! An inversion is a pair `i < j` whose elements are out of the requested
//! order, i.e. `array[i]` goes after `array[j]`. Counting piggybacks on a
//! merge sort with insertion-sort leaves, so the array ends up sorted.
use crate::order::SortOrder;
use crate::sorting::coarsening_threshold;

/// Insertion sort over a leaf, returning how many positions each key moved.
fn insertion_count<T: PartialOrd + Copy>(array: &mut [T], order: SortOrder) -> u64 {
    let mut inversions = 0u64;
    for i in 1..array.len() {
        let key = array[i];
        let mut j = i;
        while j > 0 && order.goes_after(&array[j - 1], &key) {
            array[j] = array[j - 1];
            j -= 1;
        }
        array[j] = key;
        inversions += (i - j) as u64;
    }
    inversions
}

/// Merge two sorted runs. Whenever a right-hand element is taken first, it
/// forms an inversion with every element still waiting on the left.
fn merge_count<T: PartialOrd + Copy>(
    array: &mut [T],
    buf: &mut [T],
    mid: usize,
    order: SortOrder,
) -> u64 {
    let end = array.len();
    let (mut i, mut j, mut k) = (0, mid, 0);
    let mut inversions = 0u64;
    while i < mid && j < end {
        if order.goes_after(&array[i], &array[j]) {
            inversions += (mid - i) as u64;
            buf[k] = array[j];
            j += 1;
        } else {
            buf[k] = array[i];
            i += 1;
        }
        k += 1;
    }
    buf[k..k + (mid - i)].copy_from_slice(&array[i..mid]);
    k += mid - i;
    buf[k..k + (end - j)].copy_from_slice(&array[j..end]);
    array.copy_from_slice(&buf[..end]);
    inversions
}

fn count_rec<T: PartialOrd + Copy>(
    array: &mut [T],
    buf: &mut [T],
    order: SortOrder,
    leaf: usize,
) -> u64 {
    let n = array.len();
    if n <= leaf {
        return if leaf == 1 { 0 } else { insertion_count(array, order) };
    }
    let mid = n / 2;
    let left = count_rec(&mut array[..mid], &mut buf[..mid], order, leaf);
    let right = count_rec(&mut array[mid..], &mut buf[mid..], order, leaf);
    left + right + merge_count(array, &mut buf[..n], mid, order)
}

/// Count inversions with the default leaf threshold for the array length.
pub fn count_inversions<T: PartialOrd + Copy>(array: &mut [T], order: SortOrder) -> u64 {
    let k = coarsening_threshold(array.len());
    count_inversions_with_threshold(array, order, k)
}

/// Count inversions, sorting `array` per `order`. Sub-arrays of length
/// `<= threshold` are handled by insertion sort. Θ(nk + n log(n/k)).
pub fn count_inversions_with_threshold<T: PartialOrd + Copy>(
    array: &mut [T],
    order: SortOrder,
    threshold: usize,
) -> u64 {
    if array.len() < 2 {
        return 0;
    }
    let leaf = threshold.max(1);
    log::debug!("Insertion sort used for sub-arrays of length <= {}", leaf);
    let mut buf = array.to_vec();
    count_rec(array, &mut buf, order, leaf)
}

/// Θ(n²) pairwise count; the reference the merge-based count must match.
pub fn count_inversions_brute<T: PartialOrd>(array: &[T], order: SortOrder) -> u64 {
    let mut inversions = 0u64;
    for i in 0..array.len() {
        for j in i + 1..array.len() {
            if order.goes_after(&array[i], &array[j]) {
                inversions += 1;
            }
        }
    }
    inversions
}
