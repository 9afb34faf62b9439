//! Does any pair of elements sum to a given number? (Exercise 2.3-7.)
//!
//! Three methods are provided: sort and binary search, sort and a
//! two-pointer sweep, and a linear presence table over the value range.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AlgoError;
use crate::order::SortOrder;
use crate::searching::binary_search;
use crate::sorting::merge_sort;

/// Default cap on the number of entries in the presence table.
pub const DEFAULT_MAX_TABLE_RANGE: usize = 1 << 24;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TwoSumMethod {
    SortSearch,
    TwoPointer,
    Table,
}

impl TwoSumMethod {
    pub const ALL: [TwoSumMethod; 3] = [
        TwoSumMethod::SortSearch,
        TwoSumMethod::TwoPointer,
        TwoSumMethod::Table,
    ];

    /// 1-based position in the menu; a method keeps its number whichever
    /// subset of methods runs.
    pub fn index(&self) -> usize {
        match self {
            TwoSumMethod::SortSearch => 1,
            TwoSumMethod::TwoPointer => 2,
            TwoSumMethod::Table => 3,
        }
    }

    /// Bit selecting this method in the 0-7 menu number.
    pub fn bit(&self) -> u32 {
        match self {
            TwoSumMethod::SortSearch => 1 << 2,
            TwoSumMethod::TwoPointer => 1 << 1,
            TwoSumMethod::Table => 1 << 0,
        }
    }

    /// Decode the menu number into the methods it selects, in menu order.
    pub fn from_mask(mask: u32) -> Result<Vec<TwoSumMethod>, AlgoError> {
        if mask > 7 {
            return Err(AlgoError::InvalidMethodMask(mask));
        }
        Ok(Self::ALL
            .iter()
            .copied()
            .filter(|m| mask & m.bit() != 0)
            .collect())
    }

    pub fn complexity(&self) -> &'static str {
        match self {
            TwoSumMethod::SortSearch | TwoSumMethod::TwoPointer => "n log n",
            TwoSumMethod::Table => "n",
        }
    }

    /// Run this method. `max_table_range` only applies to [`TwoSumMethod::Table`].
    pub fn solve(
        &self,
        array: &[i64],
        target: i64,
        max_table_range: usize,
    ) -> Result<Option<(i64, i64)>, AlgoError> {
        match self {
            TwoSumMethod::SortSearch => Ok(two_sum_sort_search(array, target)),
            TwoSumMethod::TwoPointer => Ok(two_sum_two_pointer(array, target)),
            TwoSumMethod::Table => two_sum_table(array, target, max_table_range),
        }
    }
}

impl fmt::Display for TwoSumMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwoSumMethod::SortSearch => write!(f, "sort and binary search"),
            TwoSumMethod::TwoPointer => write!(f, "sort and two-pointer sweep"),
            TwoSumMethod::Table => write!(f, "presence table"),
        }
    }
}

fn sorted_copy(array: &[i64]) -> Vec<i64> {
    let mut sorted = array.to_vec();
    merge_sort(&mut sorted, SortOrder::Ascend);
    sorted
}

/// Sort, then binary-search the complement of each element among the
/// elements to its right.
pub fn two_sum_sort_search(array: &[i64], target: i64) -> Option<(i64, i64)> {
    let sorted = sorted_copy(array);
    for i in 0..sorted.len().saturating_sub(1) {
        let Some(want) = target.checked_sub(sorted[i]) else {
            continue;
        };
        if let Some(j) = binary_search(&sorted[i + 1..], &want, SortOrder::Ascend) {
            return Some((sorted[i], sorted[i + 1 + j]));
        }
    }
    None
}

/// Sort, then move the low cursor up while the sum is too small and the
/// high cursor down while it is too large.
pub fn two_sum_two_pointer(array: &[i64], target: i64) -> Option<(i64, i64)> {
    let sorted = sorted_copy(array);
    if sorted.len() < 2 {
        return None;
    }
    let (mut i, mut j) = (0, sorted.len() - 1);
    while i < j {
        // i128 keeps the comparison exact for extreme values.
        let sum = sorted[i] as i128 + sorted[j] as i128;
        match sum.cmp(&(target as i128)) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j -= 1,
            std::cmp::Ordering::Equal => return Some((sorted[i], sorted[j])),
        }
    }
    None
}

/// One pass over the array with a presence table indexed by `value - min`.
///
/// Memory is proportional to `max - min + 1`; ranges above
/// `max_table_range` are rejected instead of allocated.
pub fn two_sum_table(
    array: &[i64],
    target: i64,
    max_table_range: usize,
) -> Result<Option<(i64, i64)>, AlgoError> {
    let (Some(&min), Some(&max)) = (array.iter().min(), array.iter().max()) else {
        return Ok(None);
    };
    let span = max as i128 - min as i128 + 1;
    if span > max_table_range as i128 {
        return Err(AlgoError::RangeTooLarge {
            range: u64::try_from(span).unwrap_or(u64::MAX),
            limit: max_table_range,
        });
    }
    let range = span as u64;
    log::debug!("Presence table of {} entries over [{}, {}]", range, min, max);

    let mut seen = vec![false; range as usize];
    for &value in array {
        if let Some(diff) = target.checked_sub(value) {
            if diff >= min && diff <= max && seen[(diff - min) as usize] {
                return Ok(Some((value, diff)));
            }
        }
        seen[(value - min) as usize] = true;
    }
    Ok(None)
}
