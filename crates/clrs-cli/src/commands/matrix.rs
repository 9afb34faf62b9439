use anyhow::Result;
use clap::ArgMatches;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use clrs_algorithms::config::RunConfig;
use clrs_algorithms::io::{read_matrix_file, write_matrix_file};
use clrs_algorithms::math::{multiply, par_multiply, Matrix};

use crate::terminal::Terminal;
use crate::util::{report_timing, timed, validate_input_file};

#[derive(Debug, Clone)]
pub struct MatrixParams {
    pub left: Option<PathBuf>,
    pub right: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub parallel: bool,
    pub precision: usize,
}

impl MatrixParams {
    pub fn from_arguments(matches: &ArgMatches, config: &RunConfig) -> Result<Self> {
        let left = matches.get_one::<PathBuf>("left").cloned();
        let right = matches.get_one::<PathBuf>("right").cloned();
        for path in left.iter().chain(right.iter()) {
            validate_input_file(path)?;
        }
        Ok(Self {
            left,
            right,
            output: matches.get_one::<PathBuf>("output").cloned(),
            parallel: matches.get_flag("parallel") || config.parallel_matrix,
            precision: config.precision,
        })
    }
}

pub fn run_matrix_multiply<R: BufRead, W: Write>(
    params: &MatrixParams,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    let a: Matrix<f64> = match &params.left {
        Some(path) => read_matrix_file(path)?,
        None => term.read_matrix("A")?,
    };
    let b: Matrix<f64> = match &params.right {
        Some(path) => read_matrix_file(path)?,
        None => term.read_matrix("B")?,
    };

    let (product, elapsed) = if params.parallel {
        log::debug!("Multiplying rows in parallel");
        timed(|| par_multiply(&a, &b))
    } else {
        timed(|| multiply(&a, &b))
    };
    let product = product?;
    report_timing(term.out(), "Matrix multiplication", elapsed)?;

    match &params.output {
        Some(path) => write_matrix_file(path, &product, params.precision)?,
        None => {
            writeln!(term.out(), "Result:")?;
            for row in product.rows() {
                let line = row
                    .iter()
                    .map(|v| format!("{:.*}", params.precision, v))
                    .collect::<Vec<_>>()
                    .join("\t");
                writeln!(term.out(), "{}", line)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn params(parallel: bool) -> MatrixParams {
        MatrixParams {
            left: None,
            right: None,
            output: None,
            parallel,
            precision: 1,
        }
    }

    #[test]
    fn non_square_product_is_row_major() {
        let input = "2 3\n1 2 3 4 5 6\n3 1\n1 1 1\n";
        for parallel in [false, true] {
            let mut term = Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
            run_matrix_multiply(&params(parallel), &mut term).unwrap();
            let out = String::from_utf8(term.into_output()).unwrap();
            assert!(out.ends_with("Result:\n6.0\n15.0\n"), "{}", out);
        }
    }

    #[test]
    fn mismatched_dimensions_fail() {
        let input = "2 2\n1 2 3 4\n3 1\n1 1 1\n";
        let mut term = Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let err = run_matrix_multiply(&params(false), &mut term).unwrap_err();
        assert!(format!("{}", err).contains("mismatch"));
    }
}
