//! Uuid command implementation
//!
//! Prints version-4 UUIDs drawn from the selected engine.

use std::io::Write;

use tracing::info;
use variate_core::distributions::Distribution;
use variate_core::RandomUuid;

use super::SampleSettings;
use crate::engine::{with_engine, EngineKind};
use crate::Result;

/// Run the uuid command
///
/// `simple` prints the 32-digit form without hyphens.
pub fn run<W: Write>(settings: &SampleSettings, simple: bool, out: &mut W) -> Result<()> {
    info!(engine = %settings.engine, seed = settings.seed, count = settings.count, "Generating UUIDs");
    if settings.engine != EngineKind::Entropy {
        info!("UUIDs from a seeded engine are reproducible by anyone who knows the seed");
    }

    with_engine!(settings.engine, settings.seed, |rng| {
        for _ in 0..settings.count {
            let id = RandomUuid.sample(&mut rng);
            if simple {
                writeln!(out, "{}", id.simple())?;
            } else {
                writeln!(out, "{}", id.hyphenated())?;
            }
        }
        Ok(())
    })
}
