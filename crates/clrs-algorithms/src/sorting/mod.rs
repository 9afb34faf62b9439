//! In-place comparison sorts.
//!
//! Every routine takes the array as `&mut [T]` and a [`SortOrder`]; all of
//! them are stable because [`SortOrder::goes_after`] is strict.
//!
//! [`SortOrder`]: crate::order::SortOrder
//! [`SortOrder::goes_after`]: crate::order::SortOrder::goes_after
pub mod insertion;
pub mod merge;
pub mod selection;

pub use insertion::{binary_insertion_sort, insertion_sort};
pub use merge::{coarsening_threshold, merge_sort, merge_sort_coarsened};
pub use selection::selection_sort;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::order::SortOrder;

/// The sorting routines exposed by the front ends.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortAlgorithm {
    Insertion,
    BinaryInsertion,
    Selection,
    Merge,
    MergeCoarsened,
}

impl SortAlgorithm {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortAlgorithm::Insertion => "Insertion sort",
            SortAlgorithm::BinaryInsertion => "Binary insertion sort",
            SortAlgorithm::Selection => "Selection sort",
            SortAlgorithm::Merge => "Merge sort",
            SortAlgorithm::MergeCoarsened => "Merge sort with coarsened leaves",
        }
    }

    /// Run the algorithm. `threshold` only affects [`SortAlgorithm::MergeCoarsened`];
    /// `None` selects [`coarsening_threshold`] for the array length.
    pub fn sort<T: PartialOrd + Copy>(
        &self,
        array: &mut [T],
        order: SortOrder,
        threshold: Option<usize>,
    ) {
        match self {
            SortAlgorithm::Insertion => insertion_sort(array, order),
            SortAlgorithm::BinaryInsertion => binary_insertion_sort(array, order),
            SortAlgorithm::Selection => selection_sort(array, order),
            SortAlgorithm::Merge => merge_sort(array, order),
            SortAlgorithm::MergeCoarsened => {
                let k = threshold.unwrap_or_else(|| coarsening_threshold(array.len()));
                merge_sort_coarsened(array, order, k)
            }
        }
    }
}

impl FromStr for SortAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "insertion" | "insertion-sort" => Ok(SortAlgorithm::Insertion),
            "binary-insertion" | "binary-insertion-sort" => Ok(SortAlgorithm::BinaryInsertion),
            "selection" | "selection-sort" => Ok(SortAlgorithm::Selection),
            "merge" | "merge-sort" => Ok(SortAlgorithm::Merge),
            "merge-coarsened" | "merge-sort-coarsened" => Ok(SortAlgorithm::MergeCoarsened),
            _ => Err(format!("Unknown sorting algorithm: {}", s)),
        }
    }
}
