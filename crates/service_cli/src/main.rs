//! Variate CLI - Command Line Access to Engines and Distributions
//!
//! This is the operational entry point for the variate_core library.
//!
//! # Commands
//!
//! - `variate engines` - List the selectable engines
//! - `variate words` - Print raw engine output
//! - `variate int --lo <n> --hi <n>` - Uniform integers
//! - `variate real --lo <x> --hi <x>` - Uniform reals
//! - `variate choice <values>...` - Uniform pick among values
//! - `variate weighted <weight:value>...` - Weighted pick
//! - `variate unique <values>...` - Draws without replacement
//! - `variate uuid` - Version-4 UUIDs
//! - `variate histogram --lo <n> --hi <n>` - Frequency table and chi-square
//!
//! # Reproducibility
//!
//! Every sampling command is driven by `--engine` and `--seed`. Without a
//! seed, one is drawn from the operating system and logged so the run can
//! be replayed.

use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod engine;
mod error;

pub use error::{CliError, Result};

use commands::words::WordFormat;
use commands::SampleSettings;
use config::{build_config, parse_seed, CliOverrides, LogLevel, VariateConfig};
use engine::EngineKind;

/// Variate random sampling CLI
#[derive(Parser)]
#[command(name = "variate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (default: variate.toml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Engine (run `variate engines` for names)
    #[arg(short, long, global = true, value_parser = EngineKind::from_str)]
    engine: Option<EngineKind>,

    /// Seed, decimal or 0x-prefixed hexadecimal
    #[arg(short, long, global = true, value_parser = parse_seed)]
    seed: Option<u64>,

    /// Number of values to draw
    #[arg(short = 'n', long, global = true)]
    count: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the selectable engines
    Engines,

    /// Print raw engine words
    Words {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = WordFormat::Hex)]
        format: WordFormat,
    },

    /// Draw uniform integers in [lo, hi]
    Int {
        /// Lower bound (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        lo: i64,

        /// Upper bound (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        hi: i64,

        /// Reject values below this
        #[arg(long, allow_hyphen_values = true, requires = "accept_max")]
        accept_min: Option<i64>,

        /// Reject values above this
        #[arg(long, allow_hyphen_values = true, requires = "accept_min")]
        accept_max: Option<i64>,
    },

    /// Draw uniform reals in [lo, hi)
    Real {
        /// Lower bound (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        lo: f64,

        /// Upper bound (exclusive)
        #[arg(long, allow_hyphen_values = true)]
        hi: f64,

        /// Reject values below this
        #[arg(long, allow_hyphen_values = true, requires = "accept_max")]
        accept_min: Option<f64>,

        /// Reject values above this
        #[arg(long, allow_hyphen_values = true, requires = "accept_min")]
        accept_max: Option<f64>,

        /// Digits after the decimal point
        #[arg(short, long)]
        precision: Option<usize>,
    },

    /// Pick uniformly among values
    Choice {
        /// Candidate values
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Pick among values with integer weights
    Weighted {
        /// Entries as WEIGHT:VALUE
        #[arg(required = true, value_name = "WEIGHT:VALUE")]
        entries: Vec<String>,

        /// Print each entry's probability instead of sampling
        #[arg(long)]
        probabilities: bool,
    },

    /// Draw values without replacement
    Unique {
        /// Population values (WEIGHT:VALUE with --weighted)
        #[arg(required = true)]
        values: Vec<String>,

        /// Treat values as WEIGHT:VALUE entries
        #[arg(long)]
        weighted: bool,

        /// Start a new pass when the pool is exhausted instead of failing
        #[arg(long)]
        cycle: bool,
    },

    /// Generate version-4 UUIDs
    Uuid {
        /// Print without hyphens
        #[arg(long)]
        simple: bool,
    },

    /// Tabulate uniform integer frequencies with a chi-square statistic
    Histogram {
        /// Lower bound (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        lo: i64,

        /// Upper bound (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        hi: i64,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_file: self.config.clone(),
            engine: self.engine,
            seed: self.seed,
            count: self.count,
            log_level: if self.verbose {
                Some(LogLevel::Debug)
            } else {
                self.log_level
            },
        }
    }
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.to_string())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Resolves the seed a sampling command will use.
fn sample_settings(config: &VariateConfig) -> SampleSettings {
    let seed = match (config.seed, config.engine.is_seedable()) {
        (Some(seed), true) => seed,
        (Some(_), false) => {
            warn!(engine = %config.engine, "Seed ignored by an unseedable engine");
            0
        }
        (None, true) => {
            let seed = engine::entropy_seed();
            info!(seed, "No seed configured; drew one from entropy (pass --seed {} to replay)", seed);
            seed
        }
        (None, false) => 0,
    };

    SampleSettings {
        engine: config.engine,
        seed,
        count: config.count,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.overrides())?;

    init_tracing(config.log_level);
    debug!(?config, "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Engines => commands::engines::run(&mut out)?,
        Commands::Words { format } => {
            commands::words::run(&sample_settings(&config), format, &mut out)?
        }
        Commands::Int {
            lo,
            hi,
            accept_min,
            accept_max,
        } => commands::sample::run_int(
            &sample_settings(&config),
            lo,
            hi,
            accept_min.zip(accept_max),
            &mut out,
        )?,
        Commands::Real {
            lo,
            hi,
            accept_min,
            accept_max,
            precision,
        } => commands::sample::run_real(
            &sample_settings(&config),
            lo,
            hi,
            accept_min.zip(accept_max),
            precision,
            &mut out,
        )?,
        Commands::Choice { values } => {
            commands::choice::run(&sample_settings(&config), values, &mut out)?
        }
        Commands::Weighted {
            entries,
            probabilities,
        } => commands::weighted::run(&sample_settings(&config), &entries, probabilities, &mut out)?,
        Commands::Unique {
            values,
            weighted,
            cycle,
        } => commands::unique::run(&sample_settings(&config), values, weighted, cycle, &mut out)?,
        Commands::Uuid { simple } => {
            commands::uuid::run(&sample_settings(&config), simple, &mut out)?
        }
        Commands::Histogram { lo, hi } => {
            commands::histogram::run(&sample_settings(&config), lo, hi, &mut out)?
        }
    }

    out.flush()?;
    info!("Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "variate", "int", "--lo", "-5", "--hi", "5", "--seed", "0x2a", "-e", "pcg", "-n", "3",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.engine, Some(EngineKind::Pcg64));
        assert_eq!(cli.count, Some(3));
        assert!(matches!(cli.command, Commands::Int { lo: -5, hi: 5, .. }));
    }

    #[test]
    fn test_accept_window_requires_both_ends() {
        let result = Cli::try_parse_from([
            "variate", "int", "--lo", "0", "--hi", "9", "--accept-min", "3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_overrides_log_level() {
        let cli = Cli::try_parse_from(["variate", "-v", "--log-level", "error", "engines"]).unwrap();
        assert_eq!(cli.overrides().log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn test_explicit_seed_is_used() {
        let config = VariateConfig {
            seed: Some(9),
            ..Default::default()
        };
        assert_eq!(sample_settings(&config).seed, 9);
    }

    #[test]
    fn test_rejects_unknown_engine() {
        assert!(Cli::try_parse_from(["variate", "-e", "mt19937", "words"]).is_err());
    }
}
