//! Command line and resolved configuration for the asciibin tool.
//!
//! The tool works with ZERO arguments: it runs the demonstration. Anything
//! random (the sample seed and length) is resolved once up front and can be
//! printed, so every run is reproducible with `--seed`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// asciibin: convert text to 7-bit binary strings and back.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log level: off, error, warn, info, debug, trace.
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// Random seed for sample generation.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Print the resolved configuration before running.
    #[arg(long, default_value_t = false, global = true)]
    pub print_config: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the built-in demonstrations (default).
    Demo,

    /// Encode text into a binary string.
    Encode {
        #[command(flatten)]
        input: InputArgs,

        /// Separate each 7-symbol code with a space.
        #[arg(long, default_value_t = false)]
        group: bool,
    },

    /// Decode a binary string into text. Whitespace is ignored.
    Decode {
        #[command(flatten)]
        input: InputArgs,

        /// Decode only the first N symbols (default: all).
        #[arg(long)]
        length: Option<usize>,
    },

    /// Check whether a string is a well-formed binary string.
    Validate {
        /// The string to check.
        binary: String,

        /// Check only the first N symbols (default: all).
        #[arg(long)]
        length: Option<usize>,
    },

    /// Print every lookup table entry.
    Table,

    /// Generate random text, then encode and decode it.
    Sample {
        /// Number of characters (default: random 16-64).
        #[arg(long)]
        len: Option<usize>,
    },
}

/// Input given either inline or as a file.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Inline input.
    #[arg(conflicts_with = "file", required_unless_present = "file")]
    pub value: Option<String>,

    /// Read the input from a file instead.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Configuration resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seed used for every random choice
    pub seed: u64,

    /// Length of generated sample text
    pub sample_len: usize,

    /// Separate encoded output into 7-symbol groups
    pub group: bool,

    /// Logging verbosity
    pub log_level: LevelFilter,

    /// Whether to print this configuration
    pub print_config: bool,
}

impl Config {
    /// Resolve the configuration from parsed arguments.
    ///
    /// If no seed is given, a time-based seed is used. Unrecognised log levels
    /// fall back to `warn`.
    pub fn from_cli(cli: &Cli) -> Self {
        let seed = cli.seed.unwrap_or_else(time_seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let sample_len = match &cli.command {
            Some(Command::Sample { len: Some(len) }) => *len,
            _ => rng.gen_range(16..=64),
        };

        Config {
            seed,
            sample_len,
            group: matches!(&cli.command, Some(Command::Encode { group: true, .. })),
            log_level: cli.log_level.parse().unwrap_or(LevelFilter::Warn),
            print_config: cli.print_config,
        }
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Seed: {}", self.seed);
        println!("Sample length: {} characters", self.sample_len);
        println!("Grouped output: {}", self.group);
        println!("Log level: {}", self.log_level);
        println!();
    }
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
