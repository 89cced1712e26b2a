//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use clap::Parser;

use crate::config::Config;

use super::commands::Commands;

#[derive(Parser)]
#[command(name = "roxctx")]
#[command(about = "Workflow helpers: setup label resolution and CI job gating", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Enable debug output (show resolution and gating details)
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }
        self
    }
}
