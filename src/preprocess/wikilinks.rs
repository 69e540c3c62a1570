//! Rewrites `[[...]]` references into placeholders or plain text.

use crate::domain::{ParsedReference, ReferenceKind};
use crate::preprocess::placeholder;

/// A reference-syntax token located in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token {
    start: usize,
    end: usize,
}

/// Replaces every reference-syntax occurrence in `text`.
///
/// - `![[target#^anchor]]` becomes an embed placeholder.
/// - `[[target#^anchor|...]]` becomes an equation-reference placeholder.
/// - `[[target|display]]` becomes its display text, or the target.
pub fn transform_wikilinks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for token in find_tokens(text) {
        out.push_str(&text[last..token.start]);
        out.push_str(&replacement(&ParsedReference::parse(
            &text[token.start..token.end],
        )));
        last = token.end;
    }

    out.push_str(&text[last..]);
    out
}

fn replacement(parsed: &ParsedReference) -> String {
    match (parsed.kind, &parsed.anchor) {
        (ReferenceKind::Embed, anchor) => placeholder::embed(&parsed.target, anchor.as_deref()),
        (ReferenceKind::Reference, Some(anchor)) => placeholder::equation_reference(anchor),
        (ReferenceKind::Reference, None) => parsed
            .display
            .clone()
            .unwrap_or_else(|| parsed.target.clone()),
    }
}

/// Finds non-overlapping `!?[[body]]` tokens left to right.
///
/// The body must be non-empty and contain no `]`.
fn find_tokens(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(offset) = text[pos..].find("[[") {
        let open = pos + offset;
        let body_start = open + 2;
        let body_len = text[body_start..].find(']').unwrap_or(0);
        let body_end = body_start + body_len;

        if body_len > 0 && text[body_end..].starts_with("]]") {
            let start = if open > pos && text[..open].ends_with('!') {
                open - 1
            } else {
                open
            };
            let end = body_end + 2;
            tokens.push(Token { start, end });
            pos = end;
        } else {
            pos = open + 1;
        }
    }

    tokens
}
