use anyhow::{Context, Result};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::io::tokens::TokenReader;
use crate::math::Matrix;

/// Decimals written per number in output files.
pub const DEFAULT_PRECISION: usize = 6;

/// Read a count-prefixed array from any buffered reader.
pub fn read_array<T, R>(reader: R) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
    R: BufRead,
{
    let mut tokens = TokenReader::new(reader);
    let len = tokens.next_len("element count")?;
    tokens.next_values(len, "element")
}

/// Read a count-prefixed array from a file.
pub fn read_array_file<T, P>(path: P) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Input file could not be opened: {}", path.display()))?;
    let values = read_array(BufReader::new(file))
        .with_context(|| format!("Failed to parse input file: {}", path.display()))?;
    log::info!("Read {} elements from {}", values.len(), path.display());
    Ok(values)
}

/// Read a matrix prefixed with `rows cols` from any buffered reader.
pub fn read_matrix<T, R>(reader: R) -> Result<Matrix<T>>
where
    T: FromStr,
    T::Err: Display,
    R: BufRead,
{
    let mut tokens = TokenReader::new(reader);
    let rows = tokens.next_len("row count")?;
    let cols = tokens.next_len("column count")?;
    let (rows, cols) = if rows == 0 || cols == 0 { (0, 0) } else { (rows, cols) };
    let Some(len) = rows.checked_mul(cols) else {
        anyhow::bail!(
            "Matrix header `{} {}` announces more elements than can be stored",
            rows,
            cols
        );
    };
    let data = tokens.next_values(len, "matrix element")?;
    Ok(Matrix::from_shape_vec((rows, cols), data)?)
}

/// Read a matrix file.
pub fn read_matrix_file<T, P>(path: P) -> Result<Matrix<T>>
where
    T: FromStr,
    T::Err: Display,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Input file could not be opened: {}", path.display()))?;
    let matrix = read_matrix(BufReader::new(file))
        .with_context(|| format!("Failed to parse matrix file: {}", path.display()))?;
    log::info!(
        "Read {}x{} matrix from {}",
        matrix.nrows(),
        matrix.ncols(),
        path.display()
    );
    Ok(matrix)
}

/// Write one number per line in fixed notation.
pub fn write_array<T: Display, W: Write>(
    writer: &mut W,
    values: &[T],
    precision: usize,
) -> Result<()> {
    for value in values {
        writeln!(writer, "{:.*}", precision, value)?;
    }
    Ok(())
}

/// Write one number per line to `path`, replacing any existing file.
pub fn write_array_file<T: Display, P: AsRef<Path>>(
    path: P,
    values: &[T],
    precision: usize,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Could not open file for writing: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_array(&mut writer, values, precision)?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output file: {}", path.display()))?;
    log::info!("Written array of length {} in {}", values.len(), path.display());
    Ok(())
}

/// Write a matrix as one number per line, row by row.
pub fn write_matrix<T: Display, W: Write>(
    writer: &mut W,
    matrix: &Matrix<T>,
    precision: usize,
) -> Result<()> {
    write_array(writer, matrix.as_slice(), precision)
}

pub fn write_matrix_file<T: Display, P: AsRef<Path>>(
    path: P,
    matrix: &Matrix<T>,
    precision: usize,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Could not open file for writing: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_matrix(&mut writer, matrix, precision)?;
    writer.flush()?;
    log::info!(
        "Written matrix of size {}x{} in {}",
        matrix.nrows(),
        matrix.ncols(),
        path.display()
    );
    Ok(())
}

/// Space-separated rendering for the terminal.
pub fn format_values<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
