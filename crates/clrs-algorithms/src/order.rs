//! The comparison abstraction shared by every sorting and searching routine.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AlgoError;

/// Requested monotonic direction of a sorted array.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascend,
    Descend,
}

impl SortOrder {
    /// Returns true if `a` must be placed after `b`.
    ///
    /// Equal elements never go after each other, so every sort built on
    /// this predicate keeps equal keys in their input order.
    #[inline]
    pub fn goes_after<T: PartialOrd>(self, a: &T, b: &T) -> bool {
        match self {
            SortOrder::Ascend => a > b,
            SortOrder::Descend => a < b,
        }
    }

    /// Map the interactive menu choice (`1` ascend, `2` descend).
    pub fn from_choice(choice: i64) -> Result<Self, AlgoError> {
        match choice {
            1 => Ok(SortOrder::Ascend),
            2 => Ok(SortOrder::Descend),
            other => Err(AlgoError::UnknownSortOrder(other)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascend => write!(f, "ascend"),
            SortOrder::Descend => write!(f, "descend"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "asc" | "ascend" | "ascending" => Ok(SortOrder::Ascend),
            "2" | "desc" | "descend" | "descending" => Ok(SortOrder::Descend),
            _ => Err(format!(
                "Unknown sort type: {}. Use 1 (ascend) or 2 (descend)",
                s
            )),
        }
    }
}

/// True if `array` is monotonic according to `order`.
pub fn is_sorted<T: PartialOrd>(array: &[T], order: SortOrder) -> bool {
    array.windows(2).all(|w| !order.goes_after(&w[0], &w[1]))
}
