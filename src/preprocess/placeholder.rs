//! In-band sentinels carried through the markdown converter.
//!
//! Three textual forms travel inside the intermediate text:
//!
//! | Sentinel            | Form                                   | Consumed by            |
//! |---------------------|----------------------------------------|------------------------|
//! | equation reference  | `{{EQREF:<label>}}`                    | export postprocessor   |
//! | embed               | `{{EMBED:<target>[#^<anchor>]}}`       | embed resolver         |
//! | unresolved warning  | `% WARNING: Could not resolve <ref>`   | export postprocessor   |
//!
//! Embed placeholders never reach the converter. Equation references do,
//! and may come back with their braces and label characters backslash-escaped;
//! the postprocessor accepts both forms.

use std::ops::Range;

pub const EQREF_OPEN: &str = "{{EQREF:";
pub const EMBED_OPEN: &str = "{{EMBED:";
pub const PLACEHOLDER_CLOSE: &str = "}}";
pub const WARNING_MARKER: &str = "% WARNING: ";

const UNRESOLVED: &str = "Could not resolve ";

/// Builds an equation-reference placeholder for `label`.
pub fn equation_reference(label: &str) -> String {
    format!("{EQREF_OPEN}{label}{PLACEHOLDER_CLOSE}")
}

/// Builds an embed placeholder for `target`, with `#^anchor` when present.
pub fn embed(target: &str, anchor: Option<&str>) -> String {
    match anchor {
        Some(anchor) => format!("{EMBED_OPEN}{target}#^{anchor}{PLACEHOLDER_CLOSE}"),
        None => format!("{EMBED_OPEN}{target}{PLACEHOLDER_CLOSE}"),
    }
}

/// Describes an embed that could not be resolved: `Could not resolve <ref>`.
pub fn unresolved(reference: &str) -> String {
    format!("{UNRESOLVED}{reference}")
}

/// Builds the inline marker left where an embed could not be resolved.
pub fn unresolved_warning(reference: &str) -> String {
    format!("{WARNING_MARKER}{}", unresolved(reference))
}

/// An embed placeholder located in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedPlaceholder<'a> {
    /// Byte range of the whole placeholder.
    pub range: Range<usize>,
    /// `target` or `target#^anchor`.
    pub payload: &'a str,
}

impl<'a> EmbedPlaceholder<'a> {
    /// Splits the payload into the note target and the optional anchor.
    pub fn target_and_anchor(&self) -> (&'a str, Option<&'a str>) {
        match self.payload.split_once("#^") {
            Some((target, anchor)) => (target, Some(anchor)),
            None => (self.payload, None),
        }
    }
}

/// Finds every embed placeholder, left to right.
///
/// The payload must be non-empty and contain no `}`.
pub fn find_embeds(text: &str) -> Vec<EmbedPlaceholder<'_>> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(offset) = text[pos..].find(EMBED_OPEN) {
        let start = pos + offset;
        let payload_start = start + EMBED_OPEN.len();
        let payload_len = text[payload_start..].find('}').unwrap_or(0);
        let payload_end = payload_start + payload_len;

        if payload_len > 0 && text[payload_end..].starts_with(PLACEHOLDER_CLOSE) {
            let end = payload_end + PLACEHOLDER_CLOSE.len();
            found.push(EmbedPlaceholder {
                range: start..end,
                payload: &text[payload_start..payload_end],
            });
            pos = end;
        } else {
            pos = start + 1;
        }
    }

    found
}
