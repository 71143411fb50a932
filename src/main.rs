//! asset-sha CLI
//!
//! Usage: asset-sha <COMMAND>
//!
//! Commands:
//!   generate  Digest matching assets of a build output directory into a manifest
//!   digest    Print the digest of individual files

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use tracing::warn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use asset_sha::presentation::{Cli, Commands, GenerateArgs};
use asset_sha::{digest_asset, Config, FsAssetRepository, HashingAlgorithm, LocalFs, ManifestPipeline};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate(args) => cmd_generate(&args),
        Commands::Digest {
            files,
            algorithm,
            sri,
        } => cmd_digest(&files, algorithm, sri),
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .init();
}

fn cmd_generate(args: &GenerateArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let config = args.apply(config.with_env_overrides());

    let pipeline = ManifestPipeline::new(&config)?;
    let assets = FsAssetRepository::new()
        .skipping(pipeline.out_file())
        .load(&args.dir)
        .with_context(|| format!("failed to read build output {}", args.dir.display()))?;

    let output = pipeline.emit(&assets)?;

    if args.stdout {
        println!("{}", output.content());
    } else {
        let written = LocalFs::new()
            .write_output(&args.dir, &output)
            .with_context(|| format!("failed to write manifest into {}", args.dir.display()))?;
        println!("{}", written.display());
    }
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let (config, warnings) = match explicit {
        Some(path) => Config::load_with_warnings(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load_or_default(Path::new("."))?,
    };
    for warning in &warnings {
        warn!("{}", warning);
    }
    Ok(config)
}

fn cmd_digest(files: &[PathBuf], algorithm: HashingAlgorithm, sri: bool) -> Result<()> {
    let repo = FsAssetRepository::new();
    for path in files {
        let asset = repo
            .load_file(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let digest = digest_asset(algorithm, asset.name(), asset.content())?;
        if sri {
            println!("{}  {}", digest.to_sri(algorithm), path.display());
        } else {
            println!("{}  {}", digest, path.display());
        }
    }
    Ok(())
}
