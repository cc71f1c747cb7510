//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to the supplied writer and log to stderr through `tracing`.

use std::io::Write;

use variate_core::distributions::Distribution;
use variate_core::engine::RandomEngine;

use crate::engine::EngineKind;
use crate::Result;

pub mod choice;
pub mod engines;
pub mod histogram;
pub mod sample;
pub mod unique;
pub mod uuid;
pub mod weighted;
pub mod words;

/// Settings shared by every sampling command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSettings {
    /// Engine to draw from
    pub engine: EngineKind,
    /// Effective seed (already resolved from entropy if none was given)
    pub seed: u64,
    /// Number of values to produce
    pub count: usize,
}

/// Writes `count` samples of `dist`, one per line.
pub(crate) fn write_samples<D, E, W>(dist: &D, engine: &mut E, count: usize, out: &mut W) -> Result<()>
where
    D: Distribution,
    D::Output: std::fmt::Display,
    E: RandomEngine,
    W: Write,
{
    for _ in 0..count {
        writeln!(out, "{}", dist.sample(engine))?;
    }
    Ok(())
}
