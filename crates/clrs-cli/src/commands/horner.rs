use anyhow::Result;
use clap::ArgMatches;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use clrs_algorithms::io::read_array_file;
use clrs_algorithms::polynomial::horners_rule;

use crate::terminal::Terminal;
use crate::util::{report_timing, timed, validate_input_file};

#[derive(Debug, Clone)]
pub struct HornerParams {
    /// Coefficient file, highest degree first.
    pub input: Option<PathBuf>,
    pub x: Option<f64>,
}

impl HornerParams {
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let input = matches.get_one::<PathBuf>("input").cloned();
        if let Some(path) = &input {
            validate_input_file(path)?;
        }
        Ok(Self {
            input,
            x: matches.get_one::<f64>("x").copied(),
        })
    }
}

pub fn run_horner<R: BufRead, W: Write>(
    params: &HornerParams,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    let coefficients: Vec<f64> = match &params.input {
        Some(path) => read_array_file(path)?,
        None => term.read_array("Enter number of coefficients: ", "Enter the coefficients: ")?,
    };
    let x = match params.x {
        Some(x) => x,
        None => term.prompt("Enter value at which polynomial to be evaluated: ", "x")?,
    };

    let (y, elapsed) = timed(|| horners_rule(&coefficients, x));
    report_timing(term.out(), "Horner's rule", elapsed)?;
    writeln!(term.out(), "P({}) = {}", x, y)?;
    Ok(())
}
