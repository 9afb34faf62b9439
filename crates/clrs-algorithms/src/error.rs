use std::error::Error;
use std::fmt;

/// Errors raised by the algorithms themselves (I/O failures use `anyhow`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgoError {
    UnknownSortOrder(i64),
    EmptyMatrix,
    DimensionMismatch { left_cols: usize, right_rows: usize },
    ProductTooLarge { rows: usize, cols: usize },
    RangeTooLarge { range: u64, limit: usize },
    InvalidMethodMask(u32),
    InvalidBounds,
}

impl fmt::Display for AlgoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlgoError::UnknownSortOrder(choice) => {
                write!(f, "Unknown sort type: {} (expected 1 for ascend or 2 for descend)", choice)
            }
            AlgoError::EmptyMatrix => write!(f, "Cannot multiply an empty matrix"),
            AlgoError::DimensionMismatch { left_cols, right_rows } => write!(
                f,
                "Matrix size mismatch: left operand has {} columns but right operand has {} rows",
                left_cols, right_rows
            ),
            AlgoError::ProductTooLarge { rows, cols } => {
                write!(f, "Product of size {}x{} is too large to allocate", rows, cols)
            }
            AlgoError::RangeTooLarge { range, limit } => write!(
                f,
                "Value range {} exceeds the lookup table limit of {} entries",
                range, limit
            ),
            AlgoError::InvalidMethodMask(mask) => {
                write!(f, "Method selector must be between 0 and 7, got {}", mask)
            }
            AlgoError::InvalidBounds => write!(f, "Lower bound must not exceed upper bound, and must be below it for floats"),
        }
    }
}

impl Error for AlgoError {}
