//! Folder export: a main document that inputs one fragment per note.

use std::path::{Path, PathBuf};

use crate::convert::ConvertOptions;
use crate::export::{
    DocumentHeader, ExportError, ExportOptions, PREAMBLE_INPUT_NAME, assemble_multi, load_preamble,
    postprocess, sort_by_order,
};
use crate::infra::{FsError, extract_frontmatter, write_output};
use crate::preprocess::preprocess;

/// Main document file name within the output folder.
const MAIN_FILE: &str = "main.tex";

/// One note to export, named by its file stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteInput {
    pub name: String,
    pub content: String,
}

impl NoteInput {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// A converted fragment, written as `<name>.tex`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub name: String,
    pub latex: String,
}

/// The products of a folder export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderExport {
    /// Main document, inputs each file in order.
    pub main: String,
    /// Fragments in the order `main` inputs them.
    pub files: Vec<ExportedFile>,
    /// Loaded preamble text; empty when there is none.
    pub preamble: String,
    /// Diagnostics, each prefixed with the note it came from.
    pub warnings: Vec<String>,
}

impl FolderExport {
    /// Writes `main.tex`, `preamble.tex` (when non-empty), and every
    /// fragment into `dir`. Returns the main document's path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, FsError> {
        let main_path = dir.join(MAIN_FILE);
        write_output(&main_path, &self.main)?;

        if !self.preamble.is_empty() {
            write_output(&dir.join(format!("{PREAMBLE_INPUT_NAME}.tex")), &self.preamble)?;
        }

        for file in &self.files {
            write_output(&dir.join(format!("{}.tex", file.name)), &file.latex)?;
        }

        tracing::info!(files = self.files.len(), "wrote {}", dir.display());
        Ok(main_path)
    }
}

/// Exports several notes as one document.
///
/// Inputs are ordered by the style's `order` list first. Each note's
/// frontmatter is dropped; only the base style applies. The first
/// conversion failure aborts the whole export.
pub fn export_folder(
    mut files: Vec<NoteInput>,
    options: &ExportOptions<'_>,
) -> Result<FolderExport, ExportError> {
    sort_by_order(&mut files, &options.style.order, |file| file.name.as_str());

    let mut warnings = Vec::new();
    let mut outputs = Vec::with_capacity(files.len());

    for file in files {
        tracing::debug!(name = %file.name, "exporting");
        let body = extract_frontmatter(&file.content).body;

        let preprocessed = preprocess(body, options.resolver);
        warnings.extend(
            preprocessed
                .warnings
                .iter()
                .map(|warning| format!("{}: {warning}", file.name)),
        );

        let raw = options
            .converter
            .convert(&preprocessed.text, &ConvertOptions::fragment())
            .map_err(|source| ExportError::Conversion {
                name: Some(file.name.clone()),
                source,
            })?;

        outputs.push(ExportedFile {
            latex: postprocess(&raw),
            name: file.name,
        });
    }

    let preamble = load_preamble(&options.style, options.preamble_loader, &mut warnings);
    let names: Vec<&str> = outputs.iter().map(|file| file.name.as_str()).collect();
    let main = assemble_multi(
        &names,
        &DocumentHeader::from_style(&options.style),
        !preamble.is_empty(),
    );

    Ok(FolderExport {
        main,
        files: outputs,
        preamble,
        warnings,
    })
}
