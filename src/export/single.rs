//! Single-note export: one standalone `.tex` document.

use crate::convert::ConvertOptions;
use crate::domain::merge;
use crate::export::{
    DocumentHeader, ExportError, ExportOptions, assemble_single, load_preamble, postprocess,
};
use crate::infra::{extract_frontmatter, parse_frontmatter_override};
use crate::preprocess::preprocess;

/// A fully assembled document plus non-fatal diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteExport {
    pub latex: String,
    pub warnings: Vec<String>,
}

/// Exports one note's raw text as a standalone LaTeX document.
///
/// The note's `latex:` frontmatter overrides the base style. Unresolved
/// embeds and a missing preamble become warnings; a converter failure
/// aborts the export.
pub fn export_note(content: &str, options: &ExportOptions<'_>) -> Result<NoteExport, ExportError> {
    let split = extract_frontmatter(content);
    let overrides = parse_frontmatter_override(split.frontmatter);
    let style = merge(&options.style, &overrides);
    tracing::debug!(?style, "resolved style");

    let preprocessed = preprocess(split.body, options.resolver);
    let mut warnings = preprocessed.warnings;

    let raw = options
        .converter
        .convert(&preprocessed.text, &ConvertOptions::fragment())
        .map_err(|source| ExportError::Conversion { name: None, source })?;
    let body = postprocess(&raw);

    let preamble = load_preamble(&style, options.preamble_loader, &mut warnings);
    let latex = assemble_single(
        body.trim_end(),
        &DocumentHeader::from_style(&style),
        preamble.trim_end(),
    );

    Ok(NoteExport { latex, warnings })
}
