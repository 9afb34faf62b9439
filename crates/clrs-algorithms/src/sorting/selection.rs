use crate::order::SortOrder;

/// Index of the element that belongs first among `array[begin..]`:
/// the minimum for ascending order, the maximum for descending order.
fn arg_first<T: PartialOrd>(array: &[T], begin: usize, order: SortOrder) -> usize {
    let mut best = begin;
    for i in begin + 1..array.len() {
        if order.goes_after(&array[best], &array[i]) {
            best = i;
        }
    }
    best
}

/// Selection sort, Θ(n²) comparisons and at most n - 1 swaps.
pub fn selection_sort<T: PartialOrd>(array: &mut [T], order: SortOrder) {
    let n = array.len();
    for i in 0..n.saturating_sub(1) {
        let k = arg_first(array, i, order);
        array.swap(i, k);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_maximum_for_descend() {
        let v = [3, 9, 1, 9];
        assert_eq!(arg_first(&v, 0, SortOrder::Descend), 1);
        assert_eq!(arg_first(&v, 0, SortOrder::Ascend), 2);
    }
}
