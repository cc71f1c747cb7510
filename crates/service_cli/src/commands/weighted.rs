//! Weighted command implementation
//!
//! Entries are given as `WEIGHT:VALUE`; the value may itself contain `:`.

use std::io::Write;

use tracing::info;
use variate_core::distributions::WeightedChoice;

use super::{write_samples, SampleSettings};
use crate::engine::with_engine;
use crate::{CliError, Result};

/// Parses one `WEIGHT:VALUE` entry.
pub fn parse_entry(entry: &str) -> Result<(u64, String)> {
    let (weight, value) = entry
        .split_once(':')
        .ok_or_else(|| CliError::invalid_argument(format!("expected WEIGHT:VALUE, got '{}'", entry)))?;
    let weight = weight
        .trim()
        .parse()
        .map_err(|_| CliError::invalid_argument(format!("invalid weight in '{}'", entry)))?;
    Ok((weight, value.to_string()))
}

/// Builds a table from `WEIGHT:VALUE` entries, in order.
pub fn build_table(entries: &[String]) -> Result<WeightedChoice<String>> {
    let mut table = WeightedChoice::new();
    for entry in entries {
        let (weight, value) = parse_entry(entry)?;
        table.add(weight, [value])?;
    }
    Ok(table)
}

/// Run the weighted command
///
/// With `probabilities`, prints each entry's exact probability instead of
/// sampling.
pub fn run<W: Write>(
    settings: &SampleSettings,
    entries: &[String],
    probabilities: bool,
    out: &mut W,
) -> Result<()> {
    let table = build_table(entries)?;
    info!(
        entries = table.len(),
        total_weight = table.total_weight(),
        engine = %settings.engine,
        seed = settings.seed,
        "Sampling weighted choice"
    );

    if probabilities {
        let total = table.total_weight() as f64;
        for (weight, value) in table.iter() {
            writeln!(out, "{}\t{}\t{:.6}", value, weight, weight as f64 / total)?;
        }
        return Ok(());
    }

    with_engine!(settings.engine, settings.seed, |rng| {
        write_samples(&table, &mut rng, settings.count, out)
    })
}
