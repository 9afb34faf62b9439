use anyhow::{Context, Result};
use clap::ArgMatches;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use clrs_algorithms::generate::{generate_random, write_generated, NumberKind};

use crate::terminal::Terminal;

#[derive(Debug, Clone)]
pub struct GenerateParams {
    pub kind: NumberKind,
    pub lower: i64,
    pub upper: i64,
    pub count: usize,
    pub output: PathBuf,
    pub seed: Option<u64>,
}

impl GenerateParams {
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        Ok(Self {
            kind: matches
                .get_one::<NumberKind>("kind")
                .copied()
                .unwrap_or(NumberKind::Int),
            lower: matches.get_one::<i64>("lower").copied().unwrap_or(0),
            upper: matches.get_one::<i64>("upper").copied().unwrap_or(100),
            count: matches.get_one::<usize>("count").copied().unwrap_or(10),
            output: matches
                .get_one::<PathBuf>("output")
                .cloned()
                .context("An output file is required")?,
            seed: matches.get_one::<u64>("seed").copied(),
        })
    }
}

pub fn run_generate<R: BufRead, W: Write>(
    params: &GenerateParams,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    let values = generate_random(
        params.kind,
        params.lower,
        params.upper,
        params.count,
        params.seed,
    )?;
    write_generated(&params.output, &values)?;
    writeln!(
        term.out(),
        "Generated {} {} values in [{}, {}] to {}",
        values.len(),
        params.kind,
        params.lower,
        params.upper,
        params.output.display()
    )?;
    Ok(())
}
