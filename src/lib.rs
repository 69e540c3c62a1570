//! notetex - export Markdown notes to LaTeX

pub mod cli;
pub mod convert;
pub mod domain;
pub mod export;
pub mod infra;
pub mod preprocess;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_check, handle_completions, handle_export},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let vault_dir = config.vault_dir(cli.dir.as_ref());
    let pandoc = config.pandoc_path(cli.pandoc.as_ref());

    match &cli.command {
        Command::Export(args) => handle_export(args, &vault_dir, &config, pandoc.as_deref()),
        Command::Check(args) => handle_check(args, pandoc.as_deref()),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
