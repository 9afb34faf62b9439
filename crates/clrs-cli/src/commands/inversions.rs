use anyhow::Result;
use clap::ArgMatches;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use clrs_algorithms::config::RunConfig;
use clrs_algorithms::inversions::count_inversions_with_threshold;
use clrs_algorithms::io::{read_array_file, write_array_file};
use clrs_algorithms::sorting::coarsening_threshold;
use clrs_algorithms::SortOrder;

use crate::terminal::Terminal;
use crate::util::{report_timing, timed, validate_input_file};

#[derive(Debug, Clone)]
pub struct InversionParams {
    pub input: Option<PathBuf>,
    /// Where to write the array after the counting pass sorted it.
    pub output: Option<PathBuf>,
    pub order: Option<SortOrder>,
    pub threshold: Option<usize>,
    pub precision: usize,
}

impl InversionParams {
    pub fn from_arguments(matches: &ArgMatches, config: &RunConfig) -> Result<Self> {
        let input = matches.get_one::<PathBuf>("input").cloned();
        if let Some(path) = &input {
            validate_input_file(path)?;
        }
        Ok(Self {
            input,
            output: matches.get_one::<PathBuf>("output").cloned(),
            order: matches
                .get_one::<SortOrder>("sort")
                .copied()
                .or(config.sort_order),
            threshold: matches
                .get_one::<usize>("threshold")
                .copied()
                .or(config.coarsen_threshold),
            precision: config.precision,
        })
    }
}

pub fn run_count_inversions<R: BufRead, W: Write>(
    params: &InversionParams,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    let order = match params.order {
        Some(order) => order,
        None => term.read_sort_order()?,
    };
    let mut array: Vec<f64> = match &params.input {
        Some(path) => read_array_file(path)?,
        None => term.read_array(
            "Enter the length of the array: ",
            "Enter the array elements: ",
        )?,
    };

    let k = params
        .threshold
        .unwrap_or_else(|| coarsening_threshold(array.len()));
    log::debug!("Counting inversions with leaf threshold {}", k);

    let (count, elapsed) = timed(|| count_inversions_with_threshold(&mut array, order, k));
    report_timing(term.out(), "Inversion count", elapsed)?;
    writeln!(term.out(), "No. of inversions = {}", count)?;

    if let Some(path) = &params.output {
        write_array_file(path, &array, params.precision)?;
    }
    Ok(())
}
