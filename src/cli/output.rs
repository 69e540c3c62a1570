//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain file paths, one per line
    Paths,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Summary of a finished export.
#[derive(Debug, Serialize)]
pub struct ExportSummary {
    /// Main output file
    pub path: String,
    /// Every file written, main output first
    pub files: Vec<String>,
    pub warnings: Vec<String>,
}

/// Converter discovered by `check`.
#[derive(Debug, Serialize)]
pub struct ConverterReport {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
