//! CLI for fedkern.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fedkern_core::config::{self, FedkernConfig};
use fedkern_core::fetch::CurlFetcher;
use fedkern_core::report::Pipeline;
use std::io;
use std::path::PathBuf;

use commands::{run_urls, run_versions};

/// Top-level CLI for fedkern.
#[derive(Debug, Parser)]
#[command(name = "fedkern")]
#[command(
    about = "List kernel-core RPM URLs for Fedora kernel builds on Koji",
    long_about = None
)]
pub struct Cli {
    /// Directory for cached listings (default: config `cache_dir`, else the current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Skip versions that fail instead of aborting; exit non-zero at the end if any failed.
    #[arg(long, global = true)]
    pub keep_going: bool,

    /// Log at debug level to stderr instead of the log file.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum CliCommand {
    /// Print the kernel-core RPM URL of every Fedora build, oldest first (default).
    Urls,

    /// Print every kernel version in the index, oldest first.
    Versions,
}

/// Settings after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub cache_root: PathBuf,
    pub keep_going: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let cfg = config::load_or_init().context("loading config")?;
        tracing::debug!("loaded config: {:?}", cfg);

        let cwd = std::env::current_dir().context("resolving current directory")?;
        let settings = self.settings(&cfg, cwd);
        tracing::debug!(cache_root = %settings.cache_root.display(), "using cache root");

        let pipeline = Pipeline::new(
            CurlFetcher::new(cfg.curl_options()),
            settings.cache_root.clone(),
        )?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self.command.unwrap_or(CliCommand::Urls) {
            CliCommand::Urls => run_urls(&pipeline, &mut out, settings.keep_going),
            CliCommand::Versions => run_versions(&pipeline, &mut out),
        }
    }

    /// Flags win over config; the cache root falls back to `cwd`.
    pub fn settings(&self, cfg: &FedkernConfig, cwd: PathBuf) -> RunSettings {
        RunSettings {
            cache_root: self
                .cache_dir
                .clone()
                .or_else(|| cfg.cache_dir.clone())
                .unwrap_or(cwd),
            keep_going: self.keep_going || cfg.keep_going,
        }
    }
}

#[cfg(test)]
mod tests;
