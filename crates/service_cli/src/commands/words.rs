//! Words command implementation
//!
//! Prints raw engine output at the engine's native word width.

use std::io::Write;

use clap::ValueEnum;
use tracing::info;
use variate_core::engine::{EngineWord, RandomEngine};

use super::SampleSettings;
use crate::engine::with_engine;
use crate::Result;

/// Rendering of raw words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum WordFormat {
    /// Zero-padded lowercase hexadecimal
    #[default]
    Hex,
    /// Unsigned decimal
    Dec,
}

/// Run the words command
pub fn run<W: Write>(settings: &SampleSettings, format: WordFormat, out: &mut W) -> Result<()> {
    info!(
        engine = %settings.engine,
        seed = settings.seed,
        count = settings.count,
        "Drawing raw words"
    );
    with_engine!(settings.engine, settings.seed, |rng| {
        write_words(&mut rng, settings.count, format, out)
    })
}

fn write_words<E: RandomEngine, W: Write>(
    engine: &mut E,
    count: usize,
    format: WordFormat,
    out: &mut W,
) -> Result<()> {
    let digits = (E::Word::BITS / 4) as usize;
    for _ in 0..count {
        let word = engine.next_word().to_u64();
        match format {
            WordFormat::Hex => writeln!(out, "{:0digits$x}", word, digits = digits)?,
            WordFormat::Dec => writeln!(out, "{}", word)?,
        }
    }
    Ok(())
}
