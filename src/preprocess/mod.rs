//! Markdown-side transforms applied before the converter runs.
//!
//! Stages run in a fixed order:
//!
//! 1. wikilinks become placeholders (so embedded content is never re-scanned)
//! 2. embed placeholders are resolved against other notes
//! 3. callouts become environments
//! 4. math blocks become equation environments
//!
//! Unresolved embeds leave inline markers and are reported as warnings by
//! stage 2. Later stages pass those markers through untouched.

mod callouts;
mod embeds;
mod equations;
pub mod placeholder;
mod wikilinks;

pub use callouts::{CALLOUT_ENVIRONMENTS, FALLBACK_ENVIRONMENT, environment_for, transform_callouts};
pub use embeds::{NoteResolver, extract_block, resolve_embeds, resolve_embeds_with_warnings};
pub use equations::{
    EquationBlock, InnerEnvironment, equation_labels, scan_equation_blocks, transform_equations,
};
pub use wikilinks::transform_wikilinks;

/// Converter-ready text plus the diagnostics gathered on the way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Preprocessed {
    pub text: String,
    /// `Could not resolve <ref>` entries, in document order.
    pub warnings: Vec<String>,
}

/// Runs every preprocessing stage over a note body.
pub fn preprocess<R>(body: &str, resolver: &R) -> Preprocessed
where
    R: NoteResolver + ?Sized,
{
    let text = transform_wikilinks(body);
    tracing::debug!(bytes = text.len(), "wikilinks rewritten");

    let (text, warnings) = resolve_embeds_with_warnings(&text, resolver);
    tracing::debug!(unresolved = warnings.len(), "embeds resolved");

    let text = transform_callouts(&text);
    tracing::debug!("callouts rewritten");

    let text = transform_equations(&text);
    tracing::debug!("equations rewritten");

    Preprocessed { text, warnings }
}
