//! Readers and writers for the count-prefixed whitespace number format.
//!
//! An array file starts with the element count followed by that many
//! numbers; a matrix file starts with `rows cols` followed by the
//! elements row by row. Output files hold one number per line.
pub mod text;
pub mod tokens;

pub use text::{
    format_values, read_array, read_array_file, read_matrix, read_matrix_file,
    write_array, write_array_file, write_matrix, write_matrix_file, DEFAULT_PRECISION,
};
pub use tokens::TokenReader;
