use anyhow::{anyhow, Context, Result};
use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

/// Whitespace tokenizer over a buffered reader.
///
/// Lines are pulled lazily, so the same reader serves files and an
/// interactive terminal where each prompt waits for the next line.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line_no: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line_no: 0,
        }
    }

    /// Line number of the most recently read line (1-based, 0 before any read).
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("Failed to read input")?;
            if read == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Parse the next token as a `T`; `what` names the value in errors.
    pub fn next_value<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let token = self
            .next_token()?
            .ok_or_else(|| anyhow!("Unexpected end of input while reading {}", what))?;
        token.parse::<T>().map_err(|e| {
            anyhow!(
                "Invalid {} '{}' on line {}: {}",
                what,
                token,
                self.line_no,
                e
            )
        })
    }

    /// Read a length announced by the input. Non-positive lengths mean empty.
    pub fn next_len(&mut self, what: &str) -> Result<usize> {
        let len: i64 = self.next_value(what)?;
        Ok(usize::try_from(len).unwrap_or(0))
    }

    /// Read exactly `len` values.
    pub fn next_values<T>(&mut self, len: usize, what: &str) -> Result<Vec<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        // The announced length is untrusted; grow past this as values arrive.
        let mut values = Vec::with_capacity(len.min(1 << 16));
        for i in 0..len {
            let value = self
                .next_value(what)
                .with_context(|| format!("Expected {} values, found {}", len, i))?;
            values.push(value);
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn tokens_span_lines() {
        let mut tokens = TokenReader::new(Cursor::new("3 1.5\n\n 2  7\n"));
        assert_eq!(tokens.next_len("length").unwrap(), 3);
        let v: Vec<f64> = tokens.next_values(3, "element").unwrap();
        assert_eq!(v, vec![1.5, 2.0, 7.0]);
        assert_eq!(tokens.line_no(), 3);
        assert!(tokens.next_token().unwrap().is_none());
    }

    #[test]
    fn negative_length_means_empty() {
        let mut tokens = TokenReader::new(Cursor::new("-4"));
        assert_eq!(tokens.next_len("length").unwrap(), 0);
    }

    #[test]
    fn bad_token_reports_line() {
        let mut tokens = TokenReader::new(Cursor::new("2\n1 abc\n"));
        let len = tokens.next_len("length").unwrap();
        let err = tokens.next_values::<f64>(len, "element").unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }
}
