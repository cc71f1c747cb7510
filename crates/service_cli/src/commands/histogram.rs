//! Histogram command implementation
//!
//! Draws uniform integers, tabulates observed against expected frequency
//! and reports Pearson's chi-square statistic. For a sound engine the
//! statistic has mean `df` and standard deviation `sqrt(2 * df)`.

use std::io::Write;

use tracing::info;
use variate_core::distributions::{Distribution, UniformInteger};

use super::SampleSettings;
use crate::engine::with_engine;
use crate::{CliError, Result};

/// Largest number of buckets a histogram may have.
pub const MAX_BUCKETS: u128 = 1_000;

/// Pearson's chi-square statistic against a uniform expectation.
pub fn chi_square(counts: &[u64], expected: f64) -> f64 {
    counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Run the histogram command
pub fn run<W: Write>(settings: &SampleSettings, lo: i64, hi: i64, out: &mut W) -> Result<()> {
    let dist = UniformInteger::new(lo, hi)?;
    if dist.range_size() > MAX_BUCKETS {
        return Err(CliError::invalid_argument(format!(
            "histogram range has {} values; at most {} are supported",
            dist.range_size(),
            MAX_BUCKETS
        )));
    }
    info!(lo, hi, engine = %settings.engine, seed = settings.seed, count = settings.count, "Building histogram");

    let buckets = dist.range_size() as usize;
    let mut counts = vec![0_u64; buckets];
    with_engine!(settings.engine, settings.seed, |rng| {
        for _ in 0..settings.count {
            counts[(dist.sample(&mut rng) - lo) as usize] += 1;
        }
    });

    let expected = settings.count as f64 / buckets as f64;
    writeln!(out, "{:>12} {:>10} {:>10} {:>9}", "VALUE", "COUNT", "FREQ", "DEV%")?;
    for (offset, &observed) in counts.iter().enumerate() {
        writeln!(
            out,
            "{:>12} {:>10} {:>10.6} {:>+9.3}",
            lo + offset as i64,
            observed,
            observed as f64 / settings.count as f64,
            100.0 * (observed as f64 - expected) / expected
        )?;
    }

    let statistic = chi_square(&counts, expected);
    let df = buckets.saturating_sub(1);
    writeln!(
        out,
        "chi-square = {:.3} (df = {}, expected {} +/- {:.1})",
        statistic,
        df,
        df,
        (2.0 * df as f64).sqrt()
    )?;
    Ok(())
}
