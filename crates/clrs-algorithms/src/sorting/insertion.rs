use crate::order::SortOrder;
use crate::searching::insertion_point;

/// Insertion sort, Θ(n²).
///
/// `array[..i]` is sorted before step `i`; the element at `i` is carried
/// leftwards past every element that goes after it.
pub fn insertion_sort<T: PartialOrd + Copy>(array: &mut [T], order: SortOrder) {
    for i in 1..array.len() {
        let key = array[i];
        let mut j = i;
        while j > 0 && order.goes_after(&array[j - 1], &key) {
            array[j] = array[j - 1];
            j -= 1;
        }
        array[j] = key;
    }
}

/// Insertion sort that locates the insertion position with a binary search.
///
/// Comparisons drop to Θ(n log n) but the shifting keeps the sort Θ(n²).
pub fn binary_insertion_sort<T: PartialOrd + Copy>(array: &mut [T], order: SortOrder) {
    for i in 1..array.len() {
        let key = array[i];
        let pos = insertion_point(&array[..i], &key, order);
        array.copy_within(pos..i, pos + 1);
        array[pos] = key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_sort_handles_duplicates() {
        let mut v = vec![5.0, 2.0, 9.0, 2.0, 1.0];
        insertion_sort(&mut v, SortOrder::Ascend);
        assert_eq!(v, vec![1.0, 2.0, 2.0, 5.0, 9.0]);
    }

    #[test]
    fn binary_insertion_sort_is_stable() {
        // Sort pairs by key only; the tag records input order.
        #[derive(Clone, Copy, Debug, PartialEq)]
        struct Tagged(i32, u8);
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let mut v = vec![Tagged(2, 0), Tagged(1, 1), Tagged(2, 2), Tagged(1, 3)];
        binary_insertion_sort(&mut v, SortOrder::Ascend);
        assert_eq!(
            v,
            vec![Tagged(1, 1), Tagged(1, 3), Tagged(2, 0), Tagged(2, 2)]
        );
    }
}
