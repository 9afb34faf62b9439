use crate::order::SortOrder;
use crate::sorting::insertion::insertion_sort;

/// Leaf size below which the coarsened merge sort switches to insertion sort.
///
/// `max(floor(log2 n) - 1, 1)` for a non-empty array, `0` for an empty one.
pub fn coarsening_threshold(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let log2 = (usize::BITS - 1 - n.leading_zeros()) as usize;
    log2.saturating_sub(1).max(1)
}

/// Merge the sorted runs `array[..mid]` and `array[mid..]` through `buf`.
///
/// `buf` must be at least as long as `array`.
pub(crate) fn merge<T: PartialOrd + Copy>(
    array: &mut [T],
    buf: &mut [T],
    mid: usize,
    order: SortOrder,
) {
    let end = array.len();
    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < mid && j < end {
        if order.goes_after(&array[i], &array[j]) {
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
}

fn merge_sort_rec<T: PartialOrd + Copy>(
    array: &mut [T],
    buf: &mut [T],
    order: SortOrder,
    leaf: usize,
) {
    let n = array.len();
    if n <= leaf.max(1) {
        if n > 1 {
            insertion_sort(array, order);
        }
        return;
    }
    let mid = n / 2;
    merge_sort_rec(&mut array[..mid], &mut buf[..mid], order, leaf);
    merge_sort_rec(&mut array[mid..], &mut buf[mid..], order, leaf);
    merge(array, &mut buf[..n], mid, order);
}

/// Top-down merge sort, Θ(n log n). One scratch buffer is allocated per call.
pub fn merge_sort<T: PartialOrd + Copy>(array: &mut [T], order: SortOrder) {
    merge_sort_coarsened(array, order, 1);
}

/// Merge sort whose recursion stops at sub-arrays of length `<= threshold`,
/// which are finished with insertion sort. Θ(nk + n log(n/k)).
pub fn merge_sort_coarsened<T: PartialOrd + Copy>(
    array: &mut [T],
    order: SortOrder,
    threshold: usize,
) {
    if array.len() < 2 {
        return;
    }
    log::debug!(
        "Merge sort over {} elements, leaf threshold {}",
        array.len(),
        threshold
    );
    let mut buf = array.to_vec();
    merge_sort_rec(array, &mut buf, order, threshold);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_follows_log2() {
        assert_eq!(coarsening_threshold(0), 0);
        assert_eq!(coarsening_threshold(1), 1);
        assert_eq!(coarsening_threshold(4), 1);
        assert_eq!(coarsening_threshold(8), 2);
        assert_eq!(coarsening_threshold(1000), 8);
        assert_eq!(coarsening_threshold(1024), 9);
    }

    #[test]
    fn merge_keeps_left_on_ties() {
        let mut v = [1, 3, 3, 2, 3, 4];
        let mut buf = [0; 6];
        merge(&mut v, &mut buf, 3, SortOrder::Ascend);
        assert_eq!(v, [1, 2, 3, 3, 3, 4]);
    }
}
