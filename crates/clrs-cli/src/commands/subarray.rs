use anyhow::Result;
use clap::ArgMatches;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use clrs_algorithms::io::read_array_file;
use clrs_algorithms::subarray::SubarrayMethod;

use crate::terminal::Terminal;
use crate::util::{report_timing, timed, validate_input_file};

#[derive(Debug, Clone)]
pub struct SubarrayParams {
    pub input: Option<PathBuf>,
    pub method: SubarrayMethod,
}

impl SubarrayParams {
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let input = matches.get_one::<PathBuf>("input").cloned();
        if let Some(path) = &input {
            validate_input_file(path)?;
        }
        Ok(Self {
            input,
            method: matches
                .get_one::<SubarrayMethod>("method")
                .copied()
                .unwrap_or_default(),
        })
    }
}

pub fn run_max_subarray<R: BufRead, W: Write>(
    params: &SubarrayParams,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    let array: Vec<f64> = match &params.input {
        Some(path) => read_array_file(path)?,
        None => term.read_array(
            "Enter the length of the array: ",
            "Enter the array elements: ",
        )?,
    };

    let method = params.method;
    let (best, elapsed) = timed(|| method.find(&array));
    let name = match method {
        SubarrayMethod::DivideAndConquer => "Maximum subarray (divide and conquer)",
        SubarrayMethod::Linear => "Maximum subarray (linear)",
    };
    report_timing(term.out(), name, elapsed)?;

    if best.is_empty() {
        writeln!(term.out(), "Maximum subarray is empty!")?;
    } else {
        writeln!(term.out(), "Maximum subarray sum is {}", best.sum)?;
        writeln!(
            term.out(),
            "Maximum subarray lies at [{}, {}].",
            best.begin + 1,
            best.end
        )?;
    }
    Ok(())
}
