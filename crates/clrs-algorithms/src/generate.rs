//! Random input files for the other programs.
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::AlgoError;
use crate::io::DEFAULT_PRECISION;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NumberKind {
    Int,
    Float,
}

impl FromStr for NumberKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int" | "integer" => Ok(NumberKind::Int),
            "float" | "real" => Ok(NumberKind::Float),
            _ => Err(format!("Unknown number kind: {} (expected int or float)", s)),
        }
    }
}

/// A generated sample: integers stay integral so they print without decimals.
#[derive(Debug, Clone, PartialEq)]
pub enum Generated {
    Int(Vec<i64>),
    Float(Vec<f64>),
}

impl Generated {
    pub fn len(&self) -> usize {
        match self {
            Generated::Int(v) => v.len(),
            Generated::Float(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Int => write!(f, "int"),
            NumberKind::Float => write!(f, "float"),
        }
    }
}

/// Draw `n` uniform values: integers from `[lower, upper]`, floats from
/// `[lower, upper)`. A seed makes the output reproducible.
///
/// Floats need `lower < upper`, since `[x, x)` holds no value.
pub fn generate_random(
    kind: NumberKind,
    lower: i64,
    upper: i64,
    n: usize,
    seed: Option<u64>,
) -> Result<Generated, AlgoError> {
    // Distinct i64 bounds can still round to the same f64.
    if lower > upper || (kind == NumberKind::Float && lower as f64 >= upper as f64) {
        return Err(AlgoError::InvalidBounds);
    }
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(match kind {
        NumberKind::Int => Generated::Int((0..n).map(|_| rng.gen_range(lower..=upper)).collect()),
        NumberKind::Float => {
            let (lo, hi) = (lower as f64, upper as f64);
            Generated::Float((0..n).map(|_| rng.gen_range(lo..hi)).collect())
        }
    })
}

/// Write a generated sample with its count header, one value per line.
pub fn write_generated<P: AsRef<Path>>(path: P, values: &Generated) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Could not open file for writing: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", values.len())?;
    match values {
        Generated::Int(v) => {
            for value in v {
                writeln!(writer, "{}", value)?;
            }
        }
        Generated::Float(v) => {
            for value in v {
                writeln!(writer, "{:.*}", DEFAULT_PRECISION, value)?;
            }
        }
    }
    writer.flush()?;
    log::info!("Generated {} values into {}", values.len(), path.display());
    Ok(())
}
