//! Command line options.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use corelib::{HashWidth, Md5Partitioner, RingConfig, WideMd5Partitioner};

use crate::commands::Command;
use crate::logging;

#[derive(Debug, Parser)]
#[command(
    name = "ringctl",
    version,
    about = "Inspect and exercise an MD5 consistent hash ring"
)]
pub struct CliConfig {
    /// Path to a JSON ring config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Nodes to place on the ring, comma separated (overrides the config file).
    #[arg(long, global = true, value_delimiter = ',')]
    pub nodes: Vec<String>,

    /// Virtual positions per node (overrides the config file).
    #[arg(short, long, global = true)]
    pub replicas: Option<usize>,

    /// Hash into a 64-bit token space instead of the default 16-bit one.
    #[arg(long, global = true)]
    pub wide: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Config file (or defaults) with command line overrides applied.
    pub fn ring_config(&self) -> Result<RingConfig> {
        let mut config = match &self.config {
            Some(path) => RingConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => RingConfig::default(),
        };

        if !self.nodes.is_empty() {
            config.nodes = self.nodes.clone();
        }
        if let Some(replicas) = self.replicas {
            config.replica_count = replicas;
        }
        if self.wide {
            config.hash_width = HashWidth::Wide;
        }

        config.validate().context("invalid ring config")?;
        Ok(config)
    }

    pub fn run(&self) -> Result<()> {
        logging::init(&self.log_level);

        let config = self.ring_config()?;
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match config.hash_width {
            HashWidth::Narrow => self.command.execute(&config, Md5Partitioner, &mut out),
            HashWidth::Wide => self.command.execute(&config, WideMd5Partitioner, &mut out),
        }
    }
}
