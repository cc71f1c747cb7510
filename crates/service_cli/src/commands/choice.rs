//! Choice command implementation
//!
//! Picks uniformly among the values given on the command line.

use std::io::Write;

use tracing::info;
use variate_core::distributions::RandomChoice;

use super::{write_samples, SampleSettings};
use crate::engine::with_engine;
use crate::Result;

/// Run the choice command
pub fn run<W: Write>(settings: &SampleSettings, values: Vec<String>, out: &mut W) -> Result<()> {
    info!(
        candidates = values.len(),
        engine = %settings.engine,
        seed = settings.seed,
        "Sampling uniform choice"
    );
    let dist = RandomChoice::new(values)?;
    with_engine!(settings.engine, settings.seed, |rng| {
        write_samples(&dist, &mut rng, settings.count, out)
    })
}
