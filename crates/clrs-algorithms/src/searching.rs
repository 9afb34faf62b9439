//! Linear and binary search over slices.
use crate::order::SortOrder;

/// Index of the first element equal to `value`, scanning left to right. Θ(n).
pub fn linear_search<T: PartialEq>(array: &[T], value: &T) -> Option<usize> {
    array.iter().position(|v| v == value)
}

/// Binary search in an array sorted according to `order`. Θ(log n).
///
/// The half-open window `[lo, hi)` is halved around its middle element
/// until the value is found or the window is empty. With duplicates any
/// matching index may be returned.
pub fn binary_search<T: PartialOrd>(array: &[T], value: &T, order: SortOrder) -> Option<usize> {
    let (mut lo, mut hi) = (0, array.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if array[mid] == *value {
            return Some(mid);
        }
        if order.goes_after(&array[mid], value) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    None
}

/// Position at which `value` is inserted into the `sorted` prefix: after
/// every element that does not go after it (upper bound).
pub fn insertion_point<T: PartialOrd>(sorted: &[T], value: &T, order: SortOrder) -> usize {
    let (mut lo, mut hi) = (0, sorted.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if order.goes_after(&sorted[mid], value) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_point_is_upper_bound() {
        let v = [1, 2, 2, 2, 5];
        assert_eq!(insertion_point(&v, &2, SortOrder::Ascend), 4);
        assert_eq!(insertion_point(&v, &0, SortOrder::Ascend), 0);
        assert_eq!(insertion_point(&v, &9, SortOrder::Ascend), 5);

        let d = [9, 7, 7, 1];
        assert_eq!(insertion_point(&d, &7, SortOrder::Descend), 3);
        assert_eq!(insertion_point(&d, &8, SortOrder::Descend), 1);
    }
}
