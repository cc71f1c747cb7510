//! Int and real command implementations
//!
//! Draws uniform integers or reals, optionally restricted to an
//! acceptance window by rejection.

use std::io::Write;

use tracing::{debug, info};
use variate_core::distributions::{
    BoundedDistribution, ConstrainedDistribution, Distribution, UniformInteger, UniformReal,
};
use variate_core::engine::RandomEngine;

use super::{write_samples, SampleSettings};
use crate::engine::with_engine;
use crate::Result;

/// Inner draws allowed per accepted value before giving up.
pub const MAX_REJECTIONS: usize = 1_000_000;

/// Run the int command
pub fn run_int<W: Write>(
    settings: &SampleSettings,
    lo: i64,
    hi: i64,
    accept: Option<(i64, i64)>,
    out: &mut W,
) -> Result<()> {
    info!(lo, hi, ?accept, engine = %settings.engine, seed = settings.seed, "Sampling integers");
    let dist = UniformInteger::new(lo, hi)?;

    match accept {
        None => with_engine!(settings.engine, settings.seed, |rng| {
            write_samples(&dist, &mut rng, settings.count, out)
        }),
        Some((min, max)) => {
            let dist = ConstrainedDistribution::new(dist, min, max)?;
            debug!(min = dist.min(), max = dist.max(), "Effective acceptance window");
            with_engine!(settings.engine, settings.seed, |rng| {
                write_constrained(&dist, &mut rng, settings.count, out, |v| v.to_string())
            })
        }
    }
}

/// Run the real command
pub fn run_real<W: Write>(
    settings: &SampleSettings,
    lo: f64,
    hi: f64,
    accept: Option<(f64, f64)>,
    precision: Option<usize>,
    out: &mut W,
) -> Result<()> {
    info!(lo, hi, ?accept, engine = %settings.engine, seed = settings.seed, "Sampling reals");
    let dist = UniformReal::new(lo, hi)?;
    let render = |v: f64| match precision {
        Some(p) => format!("{:.*}", p, v),
        None => v.to_string(),
    };

    match accept {
        None => with_engine!(settings.engine, settings.seed, |rng| {
            for _ in 0..settings.count {
                writeln!(out, "{}", render(dist.sample(&mut rng)))?;
            }
            Ok(())
        }),
        Some((min, max)) => {
            let dist = ConstrainedDistribution::new(dist, min, max)?;
            debug!(min = dist.min(), max = dist.max(), "Effective acceptance window");
            with_engine!(settings.engine, settings.seed, |rng| {
                write_constrained(&dist, &mut rng, settings.count, out, render)
            })
        }
    }
}

fn write_constrained<D, E, W, F>(
    dist: &ConstrainedDistribution<D>,
    engine: &mut E,
    count: usize,
    out: &mut W,
    render: F,
) -> Result<()>
where
    D: BoundedDistribution,
    D::Output: PartialOrd + Clone + std::fmt::Debug,
    E: RandomEngine,
    W: Write,
    F: Fn(D::Output) -> String,
{
    for _ in 0..count {
        let value = dist.try_sample(engine, MAX_REJECTIONS)?;
        writeln!(out, "{}", render(value))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{capture, settings};
    use crate::engine::EngineKind;
    use crate::CliError;

    #[test]
    fn test_int_within_bounds_and_reproducible() {
        let s = settings(EngineKind::Pcg64, 99, 200);
        let first = capture(|out| run_int(&s, -3, 3, None, out));
        let second = capture(|out| run_int(&s, -3, 3, None, out));
        assert_eq!(first, second);
        assert!(first
            .iter()
            .map(|l| l.parse::<i64>().unwrap())
            .all(|v| (-3..=3).contains(&v)));
    }

    #[test]
    fn test_int_acceptance_window() {
        let s = settings(EngineKind::Xoshiro256StarStar, 1, 500);
        let lines = capture(|out| run_int(&s, 0, 100, Some((90, 200)), out));
        assert!(lines
            .iter()
            .map(|l| l.parse::<i64>().unwrap())
            .all(|v| (90..=100).contains(&v)));
    }

    #[test]
    fn test_int_reversed_bounds() {
        let s = settings(EngineKind::Lcg64, 1, 1);
        let err = run_int(&s, 5, 1, None, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, CliError::Distribution(_)));
    }

    #[test]
    fn test_real_precision() {
        let s = settings(EngineKind::SplitMix64, 3, 50);
        let lines = capture(|out| run_real(&s, 0.0, 1.0, None, Some(3), out));
        for line in &lines {
            let (_, fraction) = line.split_once('.').unwrap();
            assert_eq!(fraction.len(), 3);
        }
    }

    #[test]
    fn test_real_acceptance_window() {
        let s = settings(EngineKind::Lcg32, 3, 200);
        let lines = capture(|out| run_real(&s, -1.0, 1.0, Some((0.25, 0.5)), None, out));
        assert!(lines
            .iter()
            .map(|l| l.parse::<f64>().unwrap())
            .all(|v| (0.25..=0.5).contains(&v)));
    }

    #[test]
    fn test_real_disjoint_window() {
        let s = settings(EngineKind::Lcg32, 3, 1);
        let err = run_real(&s, 0.0, 1.0, Some((2.0, 3.0)), None, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, CliError::Distribution(_)));
    }
}
