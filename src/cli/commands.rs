//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Resolve a context string to a human-readable setup label
    Resolve {
        /// Context string identifying the environment instance
        context: String,

        /// JSON cache file mapping context strings to resolved labels
        cache_file: Option<PathBuf>,

        /// Skip the network lookup (cache hit or passthrough only)
        #[arg(short = 'O', long)]
        offline: bool,
    },

    /// Check if a CI job should be skipped (exit 0 = skip, 1 = run, 2 = error but run)
    Check {
        /// Job name as it appears in the CI workflow
        job: String,
    },
}
