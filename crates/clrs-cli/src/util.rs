use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clrs_algorithms::config::{load_config, RunConfig};

/// Run `f` and measure its wall-clock time.
pub fn timed<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Print and log how long an algorithm took, in milliseconds.
pub fn report_timing<W: Write>(out: &mut W, name: &str, elapsed: Duration) -> Result<()> {
    let ms = elapsed.as_secs_f64() * 1000.0;
    writeln!(out, "{} took {:.3} ms.", name, ms)?;
    log::info!("{} completed in {:?}", name, elapsed);
    Ok(())
}

/// Load the configuration file if one was given, otherwise the defaults.
pub fn load_run_config(path: Option<&PathBuf>) -> Result<RunConfig> {
    match path {
        Some(path) => {
            log::info!("[clrs] Using config: {:?}", path);
            load_config(path)
        }
        None => Ok(RunConfig::default()),
    }
}

pub fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Input file does not exist: {}", path.display());
    }
    if !path.is_file() {
        anyhow::bail!("Input path is not a file: {}", path.display());
    }
    Ok(())
}
