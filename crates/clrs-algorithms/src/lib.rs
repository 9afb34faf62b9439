//! clrs-algorithms: classical textbook algorithms and their text I/O.
//!
//! This crate provides the sorting, searching and divide-and-conquer
//! routines (insertion/merge/selection sort, binary search, inversion
//! counting, maximum subarray, Horner's rule, direct matrix multiply)
//! together with the small amount of plumbing every front end needs:
//! a shared sort-order abstraction, readers/writers for the
//! count-prefixed number format, random input generation and a JSON
//! run configuration.
pub mod config;
pub mod error;
pub mod generate;
pub mod inversions;
pub mod io;
pub mod math;
pub mod order;
pub mod polynomial;
pub mod searching;
pub mod sorting;
pub mod subarray;
pub mod two_sum;

pub use error::AlgoError;
pub use order::SortOrder;
