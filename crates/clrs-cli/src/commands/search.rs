use anyhow::Result;
use clap::ArgMatches;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use clrs_algorithms::config::RunConfig;
use clrs_algorithms::io::read_array_file;
use clrs_algorithms::order::is_sorted;
use clrs_algorithms::searching::{binary_search, linear_search};
use clrs_algorithms::SortOrder;

use crate::terminal::Terminal;
use crate::util::{report_timing, timed, validate_input_file};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Linear,
    Binary,
}

impl SearchKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            SearchKind::Linear => "Linear search",
            SearchKind::Binary => "Binary search",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchParams {
    pub kind: SearchKind,
    pub input: Option<PathBuf>,
    pub value: Option<f64>,
    pub order: Option<SortOrder>,
}

impl SearchParams {
    pub fn from_arguments(kind: SearchKind, matches: &ArgMatches, config: &RunConfig) -> Result<Self> {
        let input = matches.get_one::<PathBuf>("input").cloned();
        if let Some(path) = &input {
            validate_input_file(path)?;
        }
        let order = match kind {
            SearchKind::Linear => None,
            SearchKind::Binary => matches
                .get_one::<SortOrder>("sort")
                .copied()
                .or(config.sort_order),
        };
        Ok(Self {
            kind,
            input,
            value: matches.get_one::<f64>("value").copied(),
            order,
        })
    }
}

pub fn run_search<R: BufRead, W: Write>(
    params: &SearchParams,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    let order = match (params.kind, params.order) {
        (SearchKind::Linear, _) => SortOrder::Ascend,
        (SearchKind::Binary, Some(order)) => order,
        (SearchKind::Binary, None) => term.read_sort_order()?,
    };

    let array: Vec<f64> = match &params.input {
        Some(path) => read_array_file(path)?,
        None => term.read_array(
            "Enter length of array to be searched in: ",
            "Enter a number array to be searched in: ",
        )?,
    };

    if params.kind == SearchKind::Binary && !is_sorted(&array, order) {
        log::warn!(
            "Input is not sorted in {} order; binary search may miss the value",
            order
        );
    }

    let value = match params.value {
        Some(value) => value,
        None => term.prompt("Enter the value to be searched for: ", "search value")?,
    };

    let kind = params.kind;
    let (position, elapsed) = timed(|| match kind {
        SearchKind::Linear => linear_search(&array, &value),
        SearchKind::Binary => binary_search(&array, &value, order),
    });
    report_timing(term.out(), kind.display_name(), elapsed)?;

    match position {
        Some(pos) => {
            writeln!(term.out(), "Searched value appears at: {}", pos + 1)?;
            writeln!(term.out(), "Array[{}] = {:.6}", pos, array[pos])?;
        }
        None => writeln!(term.out(), "The searched value does not exist in the array")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(kind: SearchKind, order: Option<SortOrder>, input: &str) -> String {
        let params = SearchParams {
            kind,
            input: None,
            value: None,
            order,
        };
        let mut term = Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run_search(&params, &mut term).unwrap();
        String::from_utf8(term.into_output()).unwrap()
    }

    #[test]
    fn linear_reports_one_based_position() {
        let out = run(SearchKind::Linear, None, "4\n7 3 9 3\n3\n");
        assert!(out.contains("Searched value appears at: 2"));
        assert!(out.contains("Array[1] = 3.000000"));
    }

    #[test]
    fn binary_on_descending_input() {
        let out = run(SearchKind::Binary, None, "2\n5\n9 7 5 3 1\n3\n");
        assert!(out.contains("Binary search took"));
        assert!(out.contains("Searched value appears at: 4"));
    }

    #[test]
    fn missing_value_reported() {
        let out = run(SearchKind::Binary, Some(SortOrder::Ascend), "3\n1 2 3\n10\n");
        assert!(out.contains("does not exist"));
    }

    #[test]
    fn empty_array_reports_missing() {
        let out = run(SearchKind::Linear, None, "0\n4\n");
        assert!(out.contains("does not exist"));
    }
}
