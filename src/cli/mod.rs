//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// notetex - export Markdown notes to LaTeX
#[derive(Parser, Debug)]
#[command(name = "notetex", version, about, long_about = None)]
pub struct Cli {
    /// Vault root used to resolve embeds and preambles (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Path to the pandoc binary (overrides config file and discovery)
    #[arg(long, global = true)]
    pub pandoc: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export a note, or a folder of notes, to LaTeX
    Export(ExportArgs),

    /// Report the converter that would be used
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Markdown note, or a folder of notes for a multi-file export
    pub path: PathBuf,

    /// Output file (single note) or folder (multi-file export)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Style definition file (YAML)
    #[arg(short, long)]
    pub style: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `check` command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
