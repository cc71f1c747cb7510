//! Unique command implementation
//!
//! Draws without replacement. Once every value has been returned the
//! command fails, unless `--cycle` is set, in which case the pool is reset
//! and a new pass begins.

use std::fmt::Display;
use std::io::Write;

use tracing::{debug, info};
use variate_core::distributions::{FiniteDistribution, RandomChoice, UniqueChoice};
use variate_core::engine::RandomEngine;
use variate_core::SampleError;

use super::weighted::build_table;
use super::SampleSettings;
use crate::engine::with_engine;
use crate::Result;

/// Run the unique command
///
/// With `weighted`, `values` are `WEIGHT:VALUE` entries and each pass is a
/// successive weighted draw without replacement.
pub fn run<W: Write>(
    settings: &SampleSettings,
    values: Vec<String>,
    weighted: bool,
    cycle: bool,
    out: &mut W,
) -> Result<()> {
    info!(
        population = values.len(),
        weighted,
        cycle,
        engine = %settings.engine,
        seed = settings.seed,
        "Sampling without replacement"
    );

    if weighted {
        let mut pool = UniqueChoice::new(build_table(&values)?);
        with_engine!(settings.engine, settings.seed, |rng| {
            draw_unique(&mut pool, &mut rng, settings.count, cycle, out)
        })
    } else {
        let mut pool = UniqueChoice::new(RandomChoice::new(values)?);
        with_engine!(settings.engine, settings.seed, |rng| {
            draw_unique(&mut pool, &mut rng, settings.count, cycle, out)
        })
    }
}

fn draw_unique<D, E, W>(
    pool: &mut UniqueChoice<D>,
    engine: &mut E,
    count: usize,
    cycle: bool,
    out: &mut W,
) -> Result<()>
where
    D: FiniteDistribution,
    D::Item: Display,
    E: RandomEngine,
    W: Write,
{
    for _ in 0..count {
        let index = match pool.draw_index(engine) {
            Ok(index) => index,
            Err(SampleError::PoolExhausted { population }) if cycle => {
                debug!(population, "Pool exhausted, starting a new pass");
                pool.reset();
                pool.draw_index(engine)?
            }
            Err(err) => return Err(err.into()),
        };
        writeln!(out, "{}", pool.inner().item(index))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{capture, settings};
    use crate::engine::EngineKind;
    use crate::CliError;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_single_pass_is_permutation() {
        let s = settings(EngineKind::Pcg64, 11, 4);
        let mut lines = capture(|out| run(&s, strings(&["a", "b", "c", "d"]), false, false, out));
        lines.sort();
        assert_eq!(lines, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_exhaustion_without_cycle_fails() {
        let s = settings(EngineKind::Pcg64, 11, 3);
        let err = run(&s, strings(&["a", "b"]), false, false, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Sample(SampleError::PoolExhausted { population: 2 })
        ));
    }

    #[test]
    fn test_cycle_restarts_pool() {
        let s = settings(EngineKind::Lcg64, 12, 9);
        let lines = capture(|out| run(&s, strings(&["x", "y", "z"]), false, true, out));
        assert_eq!(lines.len(), 9);
        for pass in lines.chunks(3) {
            let mut pass = pass.to_vec();
            pass.sort();
            assert_eq!(pass, ["x", "y", "z"]);
        }
    }

    #[test]
    fn test_weighted_pool() {
        let s = settings(EngineKind::Xoshiro256StarStar, 13, 3);
        let mut lines = capture(|out| run(&s, strings(&["1:a", "5:b", "50:c"]), true, false, out));
        lines.sort();
        assert_eq!(lines, ["a", "b", "c"]);
    }
}
