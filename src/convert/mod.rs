//! The bulk Markdown-to-LaTeX step, delegated to an external tool.

mod pandoc;

use std::path::PathBuf;

use thiserror::Error;

pub use pandoc::{COMMON_PANDOC_PATHS, PandocConverter, find_pandoc, is_pandoc_available, pandoc_version};

/// Options passed to a converter for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Produce a complete document instead of a body fragment.
    pub standalone: bool,
    /// Only consulted when `standalone` is set.
    pub document_class: Option<String>,
}

impl ConvertOptions {
    /// A body fragment meant to be wrapped or included elsewhere.
    pub fn fragment() -> Self {
        Self::default()
    }
}

/// Errors raised while running the converter.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to run converter {}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to send input to converter {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("converter exited with status {code}: {stderr}")]
    Failed { code: i32, stderr: String },

    #[error("converter produced output that is not valid UTF-8")]
    InvalidOutput,

    #[error("{0}")]
    Other(String),
}

/// Text-in, text-out Markdown to LaTeX conversion.
///
/// A failure is fatal for the export that requested it.
pub trait Converter {
    fn convert(&self, markdown: &str, options: &ConvertOptions) -> Result<String, ConvertError>;
}

impl<F> Converter for F
where
    F: Fn(&str, &ConvertOptions) -> Result<String, ConvertError>,
{
    fn convert(&self, markdown: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
        self(markdown, options)
    }
}
