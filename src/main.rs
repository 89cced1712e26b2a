mod app;
mod check;
mod cli;
mod config;
mod consts;
mod error;
mod resolve;

use clap::Parser;

use cli::{Cli, Commands};
use config::Config;

fn main() {
    let cli = Cli::parse();

    // stdout is consumed by other tooling (prompt decorations, CI shell
    // snippets), so config diagnostics stay on stderr and go quiet unless
    // --debug is set.
    let config = if cli.debug {
        Config::load()
    } else {
        Config::load_quiet()
    };
    let cli = cli.with_config(&config);

    match &cli.command {
        Commands::Resolve {
            context,
            cache_file,
            offline,
        } => {
            app::run_resolve(&config, context, cache_file.as_deref(), *offline, cli.debug);
        }
        Commands::Check { job } => {
            let code = app::run_check(&config, job, cli.debug);
            std::process::exit(code);
        }
    }
}
