//! LaTeX export: postprocessing, document assembly, and the orchestrators
//! that tie the pipeline together for one note or a whole folder.

mod assembler;
mod multi;
mod references;
mod single;

use thiserror::Error;

use crate::convert::{ConvertError, Converter};
use crate::domain::StyleConfig;
use crate::infra::FsError;
use crate::preprocess::NoteResolver;

pub use assembler::{
    DocumentHeader, PREAMBLE_INPUT_NAME, assemble_multi, assemble_single, sort_by_order,
};
pub use multi::{ExportedFile, FolderExport, NoteInput, export_folder};
pub use references::{postprocess, replace_placeholders, restore_warning_comments};
pub use single::{NoteExport, export_note};

/// Loads preamble text by the path a style names.
pub trait PreambleLoader {
    fn load(&self, path: &str) -> Result<String, PreambleError>;
}

impl<F> PreambleLoader for F
where
    F: Fn(&str) -> Result<String, PreambleError>,
{
    fn load(&self, path: &str) -> Result<String, PreambleError> {
        self(path)
    }
}

/// Errors from a preamble loader. Exports turn these into warnings.
#[derive(Debug, Error)]
pub enum PreambleError {
    #[error("preamble not found: {path}")]
    NotFound { path: String },

    #[error("failed to read preamble {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: FsError,
    },
}

/// Errors that abort an export. Nothing is written when one occurs.
#[derive(Debug, Error)]
pub enum ExportError {
    /// `name` is the folder note being converted; `None` for single-note exports.
    #[error("conversion failed{}: {source}", for_note(.name))]
    Conversion {
        name: Option<String>,
        #[source]
        source: ConvertError,
    },
}

fn for_note(name: &Option<String>) -> String {
    name.as_ref().map(|name| format!(" for {name}")).unwrap_or_default()
}

/// Collaborators and style for one export run.
pub struct ExportOptions<'a> {
    /// Base style; note frontmatter may override it for single exports.
    pub style: StyleConfig,
    pub resolver: &'a dyn NoteResolver,
    pub preamble_loader: &'a dyn PreambleLoader,
    pub converter: &'a dyn Converter,
}

impl std::fmt::Debug for ExportOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportOptions")
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

/// Loads the style's preamble, recording a warning when that fails.
fn load_preamble(
    style: &StyleConfig,
    loader: &dyn PreambleLoader,
    warnings: &mut Vec<String>,
) -> String {
    if style.preamble.is_empty() {
        return String::new();
    }

    match loader.load(&style.preamble) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!("{err}");
            warnings.push(format!("Could not load preamble: {}", style.preamble));
            String::new()
        }
    }
}
