//! Embed resolution: splices anchored math blocks from other notes.

use crate::preprocess::equations::scan_equation_blocks;
use crate::preprocess::placeholder::{self, EmbedPlaceholder, find_embeds};

/// Looks up the raw text of the note a link target names.
///
/// Implementations may block on I/O. `None` means not found.
pub trait NoteResolver {
    fn resolve(&self, target: &str) -> Option<String>;
}

impl<F> NoteResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, target: &str) -> Option<String> {
        self(target)
    }
}

/// Extracts the math block labelled `anchor`, fences and label line included.
///
/// The first matching block wins; duplicates are logged.
pub fn extract_block<'a>(content: &'a str, anchor: &str) -> Option<&'a str> {
    let mut matches = scan_equation_blocks(content)
        .into_iter()
        .filter(|block| block.label == Some(anchor));

    let first = matches.next()?;
    let duplicates = matches.count();
    if duplicates > 0 {
        tracing::warn!(
            "anchor ^{anchor} labels {} blocks; embedding the first",
            duplicates + 1
        );
    }

    Some(&content[first.span])
}

/// Replaces every embed placeholder with the block it names.
///
/// Unresolvable embeds (missing note, missing or absent anchor) become an
/// inline `% WARNING: Could not resolve ...` marker. Resolved content is
/// inserted literally.
pub fn resolve_embeds<R>(text: &str, resolver: &R) -> String
where
    R: NoteResolver + ?Sized,
{
    resolve_embeds_with_warnings(text, resolver).0
}

/// Like [`resolve_embeds`], also returning `Could not resolve <ref>` for
/// each unresolved embed in document order.
pub fn resolve_embeds_with_warnings<R>(text: &str, resolver: &R) -> (String, Vec<String>)
where
    R: NoteResolver + ?Sized,
{
    let mut out = String::with_capacity(text.len());
    let mut warnings = Vec::new();
    let mut last = 0;

    for embed in find_embeds(text) {
        out.push_str(&text[last..embed.range.start]);
        match resolve_one(&embed, resolver) {
            Some(block) => out.push_str(&block),
            None => {
                tracing::debug!("unresolved embed {}", embed.payload);
                warnings.push(placeholder::unresolved(embed.payload));
                out.push_str(&placeholder::unresolved_warning(embed.payload));
            }
        }
        last = embed.range.end;
    }

    out.push_str(&text[last..]);
    (out, warnings)
}

fn resolve_one<R>(embed: &EmbedPlaceholder<'_>, resolver: &R) -> Option<String>
where
    R: NoteResolver + ?Sized,
{
    let (target, anchor) = embed.target_and_anchor();
    let anchor = anchor.filter(|a| !a.is_empty())?;
    let content = resolver.resolve(target)?;
    extract_block(&content, anchor).map(str::to_string)
}
