//! Dense row-major matrix used by the matrix multiplication routines.
pub mod matrix;

pub use matrix::{multiply, par_multiply, Matrix, ShapeError};
