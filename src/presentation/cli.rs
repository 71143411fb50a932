//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - `--verbose` is global and only affects log output on stderr
//! - Flags given to `generate` override config file and environment values

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::domain::value_objects::HashingAlgorithm;

/// asset-sha - post-build asset integrity reporter
#[derive(Parser, Debug)]
#[command(name = "asset-sha")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Digest matching assets of a build output directory into a manifest
    Generate(GenerateArgs),

    /// Print the digest of individual files
    Digest {
        /// Files to digest
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Hashing algorithm
        #[arg(short, long, value_enum, default_value_t = HashingAlgorithm::Sha256)]
        algorithm: HashingAlgorithm,

        /// Print `<algorithm>-<digest>` as used by integrity attributes
        #[arg(long)]
        sri: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Build output directory
    pub dir: PathBuf,

    /// Config file (defaults to ./asset-sha.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base-name glob pattern; repeat for several
    #[arg(short, long = "pattern", value_name = "GLOB")]
    pub patterns: Vec<String>,

    /// Hashing algorithm
    #[arg(short, long, value_enum)]
    pub algorithm: Option<HashingAlgorithm>,

    /// Manifest file name, relative to the output directory
    #[arg(short, long, value_name = "NAME")]
    pub out_file: Option<String>,

    /// Key digests by full asset name
    #[arg(long, conflicts_with = "compact")]
    pub flat: bool,

    /// Group digests by file extension
    #[arg(long)]
    pub compact: bool,

    /// Print the manifest instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

impl GenerateArgs {
    /// Layer command-line values over `config`
    pub fn apply(&self, mut config: Config) -> Config {
        if !self.patterns.is_empty() {
            config.asset_patterns = self.patterns.clone();
        }
        if let Some(algorithm) = self.algorithm {
            config.hashing_algorithm = algorithm.to_string();
        }
        if let Some(out_file) = &self.out_file {
            config.out_file = out_file.clone();
        }
        if self.flat {
            config.compact = false;
        } else if self.compact {
            config.compact = true;
        }
        config
    }
}
