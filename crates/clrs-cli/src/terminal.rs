use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::{BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;

use clrs_algorithms::io::TokenReader;
use clrs_algorithms::math::Matrix;
use clrs_algorithms::SortOrder;

/// Prompts on an output stream and reads the answers as whitespace
/// separated tokens from an input stream.
///
/// Results are written to the same output stream, so tests can drive a
/// whole command with in-memory buffers.
pub struct Terminal<R, W> {
    tokens: TokenReader<R>,
    out: W,
}

impl Terminal<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Terminal::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            tokens: TokenReader::new(input),
            out,
        }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Print `message` without a newline and parse the next token as `T`.
    pub fn prompt<T>(&mut self, message: &str, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        write!(self.out, "{}", message)?;
        self.out.flush().context("Failed to flush terminal")?;
        self.tokens.next_value(what)
    }

    /// Ask for the sort order with the numbered menu.
    pub fn read_sort_order(&mut self) -> Result<SortOrder> {
        let choice: i64 = self.prompt(
            "Select sort type:\n1. ASCEND\n2. DESCEND\n(1/2): ",
            "sort type",
        )?;
        Ok(SortOrder::from_choice(choice)?)
    }

    /// Ask for a length and then that many elements.
    pub fn read_array<T>(&mut self, length_prompt: &str, elements_prompt: &str) -> Result<Vec<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        let len: i64 = self.prompt(length_prompt, "array length")?;
        let len = usize::try_from(len).unwrap_or(0);
        if len == 0 {
            return Ok(Vec::new());
        }
        write!(self.out, "{}", elements_prompt)?;
        self.out.flush()?;
        self.tokens.next_values(len, "array element")
    }

    /// Ask for `rows cols` and then the elements row by row.
    pub fn read_matrix<T>(&mut self, name: &str) -> Result<Matrix<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        let rows: i64 = self.prompt(
            &format!("Enter the size of matrix {} (as row col): ", name),
            "row count",
        )?;
        let cols: i64 = self.tokens.next_value("column count")?;
        let (rows, cols) = match (usize::try_from(rows), usize::try_from(cols)) {
            (Ok(r), Ok(c)) if r > 0 && c > 0 => (r, c),
            _ => return Ok(Matrix::from_shape_vec((0, 0), Vec::new())?),
        };
        let Some(len) = rows.checked_mul(cols) else {
            anyhow::bail!(
                "Matrix {} size `{} {}` announces more elements than can be stored",
                name,
                rows,
                cols
            );
        };
        write!(self.out, "Enter the elements of matrix {} row-wise: ", name)?;
        self.out.flush()?;
        let data = self.tokens.next_values(len, "matrix element")?;
        Ok(Matrix::from_shape_vec((rows, cols), data)?)
    }
}
