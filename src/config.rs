//! Command-line and environment configuration for the `blockfall` binary.

use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "blockfall", about = "Falling-block puzzle game for the terminal")]
pub struct Cli {
    #[arg(
        long,
        env = "BLOCKFALL_SEED",
        help = "Seed for the piece randomizer (random when omitted)"
    )]
    pub seed: Option<u64>,

    #[arg(
        long,
        env = "BLOCKFALL_LOG_PATH",
        help = "Append logs to this file (no logging when omitted)"
    )]
    pub log_path: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    pub verbose: u8,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
    pub verbosity: u8,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        // An empty BLOCKFALL_LOG_PATH disables logging.
        let log_path = cli
            .log_path
            .filter(|p| !p.as_os_str().to_string_lossy().trim().is_empty());

        Self {
            seed: cli.seed,
            log_path,
            verbosity: cli.verbose,
        }
    }

    /// Parse process arguments and environment.
    pub fn load() -> Self {
        Self::from_cli(Cli::parse())
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Install the global tracing subscriber.
    ///
    /// The terminal is owned by the game, so logs only go to the configured
    /// file. Without a log path nothing is installed.
    pub fn init_tracing(&self) -> Result<()> {
        let Some(path) = &self.log_path else {
            return Ok(());
        };

        let file: File = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .with(self.log_level())
            .try_init()
            .context("installing tracing subscriber")?;

        Ok(())
    }
}
