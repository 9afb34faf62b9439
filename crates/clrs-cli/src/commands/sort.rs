use anyhow::Result;
use clap::ArgMatches;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use clrs_algorithms::config::RunConfig;
use clrs_algorithms::io::{format_values, read_array_file, write_array_file};
use clrs_algorithms::sorting::{coarsening_threshold, SortAlgorithm};
use clrs_algorithms::SortOrder;

use crate::terminal::Terminal;
use crate::util::{report_timing, timed, validate_input_file};

#[derive(Debug, Clone)]
pub struct SortParams {
    pub algorithm: SortAlgorithm,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub order: Option<SortOrder>,
    pub threshold: Option<usize>,
    pub precision: usize,
}

impl SortParams {
    pub fn from_arguments(
        algorithm: SortAlgorithm,
        matches: &ArgMatches,
        config: &RunConfig,
    ) -> Result<Self> {
        let input = matches.get_one::<PathBuf>("input").cloned();
        if let Some(path) = &input {
            validate_input_file(path)?;
        }
        let threshold = matches
            .try_get_one::<usize>("threshold")
            .ok()
            .flatten()
            .copied()
            .or(config.coarsen_threshold);

        Ok(Self {
            algorithm,
            input,
            output: matches.get_one::<PathBuf>("output").cloned(),
            order: matches.get_one::<SortOrder>("sort").copied().or(config.sort_order),
            threshold,
            precision: config.precision,
        })
    }
}

/// Sort order first, then the array, as the interactive programs always asked.
pub fn run_sort<R: BufRead, W: Write>(params: &SortParams, term: &mut Terminal<R, W>) -> Result<()> {
    let order = match params.order {
        Some(order) => order,
        None => term.read_sort_order()?,
    };

    let mut array: Vec<f64> = match &params.input {
        Some(path) => read_array_file(path)?,
        None => term.read_array(
            "Enter length of array to be sorted: ",
            "Enter a number array to be sorted: ",
        )?,
    };

    if params.algorithm == SortAlgorithm::MergeCoarsened {
        let k = params
            .threshold
            .unwrap_or_else(|| coarsening_threshold(array.len()));
        writeln!(term.out(), "k = {}", k)?;
    }

    let algorithm = params.algorithm;
    let threshold = params.threshold;
    let ((), elapsed) = timed(|| algorithm.sort(&mut array, order, threshold));
    report_timing(term.out(), algorithm.display_name(), elapsed)?;

    match &params.output {
        Some(path) => write_array_file(path, &array, params.precision)?,
        None => {
            writeln!(term.out(), "Sorted array:")?;
            writeln!(term.out(), "{}", format_values(&array))?;
        }
    }
    Ok(())
}
