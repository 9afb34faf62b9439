use anyhow::Result;
use clap::ArgMatches;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use clrs_algorithms::config::RunConfig;
use clrs_algorithms::io::read_array_file;
use clrs_algorithms::two_sum::TwoSumMethod;

use crate::terminal::Terminal;
use crate::util::{report_timing, timed, validate_input_file};

#[derive(Debug, Clone)]
pub struct TwoSumParams {
    pub input: Option<PathBuf>,
    pub target: Option<i64>,
    /// Bit mask over the three methods (4: sort + search, 2: two pointers, 1: table).
    pub methods: Option<u32>,
    pub max_table_range: usize,
}

impl TwoSumParams {
    pub fn from_arguments(matches: &ArgMatches, config: &RunConfig) -> Result<Self> {
        let input = matches.get_one::<PathBuf>("input").cloned();
        if let Some(path) = &input {
            validate_input_file(path)?;
        }
        Ok(Self {
            input,
            target: matches.get_one::<i64>("target").copied(),
            methods: matches.get_one::<u32>("methods").copied(),
            max_table_range: config.max_table_range,
        })
    }
}

pub fn run_two_sum<R: BufRead, W: Write>(
    params: &TwoSumParams,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    let array: Vec<i64> = match &params.input {
        Some(path) => read_array_file(path)?,
        None => term.read_array(
            "Enter the length of the array: ",
            "Enter the array elements: ",
        )?,
    };

    let target = match params.target {
        Some(target) => target,
        None => term.prompt("Enter the number to factor: ", "target")?,
    };

    let mask = match params.methods {
        Some(mask) => mask,
        None => term.prompt(
            "There are 3 solutions. Enter a binary number to decide which all to use (0 - 7): ",
            "method selector",
        )?,
    };
    let methods = TwoSumMethod::from_mask(mask)?;
    if methods.is_empty() {
        log::warn!("Method selector 0 runs no solution");
    }

    for method in &methods {
        writeln!(
            term.out(),
            "\nSolution {} ({}, complexity = {}):",
            method.index(),
            method,
            method.complexity()
        )?;
        let (result, elapsed) = timed(|| method.solve(&array, target, params.max_table_range));
        match result? {
            Some((a, b)) => writeln!(term.out(), "{} can be factored as {} + {}", target, a, b)?,
            None => writeln!(
                term.out(),
                "{} cannot be written as sums of any two numbers in the given array.",
                target
            )?,
        }
        report_timing(term.out(), &format!("Two-sum by {}", method), elapsed)?;
    }
    Ok(())
}
