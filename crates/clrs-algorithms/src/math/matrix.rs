use num_traits::Zero;
use rayon::prelude::*;
use std::error::Error;
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul};

use crate::error::AlgoError;

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        match rows.checked_mul(cols) {
            Some(len) if len == data.len() => {}
            Some(_) => {
                return Err(ShapeError {
                    rows,
                    cols,
                    len: Some(data.len()),
                })
            }
            None => return Err(ShapeError { rows, cols, len: None }),
        }
        Ok(Self { data, rows, cols })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() panics on a zero chunk size.
        self.data.chunks(self.cols.max(1)).take(self.rows)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone + Zero> Matrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, ShapeError> {
        let len = rows.checked_mul(cols).ok_or(ShapeError {
            rows,
            cols,
            len: None,
        })?;
        Ok(Self {
            data: vec![T::zero(); len],
            rows,
            cols,
        })
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

fn check_operands<T>(a: &Matrix<T>, b: &Matrix<T>) -> Result<(), AlgoError> {
    if a.is_empty() || b.is_empty() {
        return Err(AlgoError::EmptyMatrix);
    }
    if a.cols != b.rows {
        return Err(AlgoError::DimensionMismatch {
            left_cols: a.cols,
            right_rows: b.rows,
        });
    }
    Ok(())
}

/// Fill one output row: `out[j] = sum_k a_row[k] * b[k][j]`.
fn multiply_row<T>(a_row: &[T], b: &Matrix<T>, out: &mut [T])
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    for (j, cell) in out.iter_mut().enumerate() {
        let mut sum = T::zero();
        for (k, &a) in a_row.iter().enumerate() {
            sum = sum + a * b[(k, j)];
        }
        *cell = sum;
    }
}

/// Direct matrix product `C = A x B`, Θ(n³).
pub fn multiply<T>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, AlgoError>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    check_operands(a, b)?;
    let mut c = Matrix::zeros(a.rows, b.cols).map_err(|_| AlgoError::ProductTooLarge {
        rows: a.rows,
        cols: b.cols,
    })?;
    for (i, out) in c.data.chunks_mut(b.cols).enumerate() {
        multiply_row(a.row_slice(i), b, out);
    }
    Ok(c)
}

/// Same product as [`multiply`] with the output rows computed in parallel.
pub fn par_multiply<T>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, AlgoError>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T> + Send + Sync,
{
    check_operands(a, b)?;
    let mut c = Matrix::zeros(a.rows, b.cols).map_err(|_| AlgoError::ProductTooLarge {
        rows: a.rows,
        cols: b.cols,
    })?;
    c.data
        .par_chunks_mut(b.cols)
        .enumerate()
        .for_each(|(i, out)| multiply_row(a.row_slice(i), b, out));
    Ok(c)
}

#[derive(Debug, Clone)]
pub struct ShapeError {
    rows: usize,
    cols: usize,
    /// `None` when `rows * cols` does not fit in `usize`.
    len: Option<usize>,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.len {
            Some(len) => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                self.rows, self.cols, len
            ),
            None => write!(f, "shape ({}, {}) overflows the element count", self.rows, self.cols),
        }
    }
}

impl Error for ShapeError {}
