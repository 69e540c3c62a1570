//! Frontmatter splitting and the `latex` style override it may carry.

use serde::Deserialize;

use crate::domain::StyleOverride;

/// A note split into its leading metadata block and its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitNote<'a> {
    /// Metadata between the delimiters, without the delimiter lines.
    /// Empty when the note has no leading block.
    pub frontmatter: &'a str,
    pub body: &'a str,
}

/// Splits a leading `---` delimited block from markdown content.
///
/// Both delimiter lines must be exactly `---`, ending in `\n`, `\r\n`, or
/// (for the closing one) end of input. Without a complete leading block the
/// whole input is returned as the body.
///
/// # Format
/// ```text
/// ---
/// title: Note Title
/// latex:
///   documentclass: report
/// ---
/// Body content here...
/// ```
pub fn extract_frontmatter(content: &str) -> SplitNote<'_> {
    let no_block = SplitNote {
        frontmatter: "",
        body: content,
    };

    let after_opening = if content.starts_with("---\r\n") {
        5
    } else if content.starts_with("---\n") {
        4
    } else {
        return no_block;
    };

    let rest = &content[after_opening..];
    let Some(closing_pos) = find_closing_delimiter(rest) else {
        return no_block;
    };

    let after_closing = &rest[closing_pos + 3..];
    let body = after_closing
        .strip_prefix("\r\n")
        .or_else(|| after_closing.strip_prefix('\n'))
        .unwrap_or(after_closing);

    let frontmatter = &rest[..closing_pos];
    let frontmatter = frontmatter
        .strip_suffix("\r\n")
        .or_else(|| frontmatter.strip_suffix('\n'))
        .unwrap_or(frontmatter);

    SplitNote { frontmatter, body }
}

/// Reads the style override nested under the `latex` key.
///
/// Unrelated keys are ignored. Missing or malformed metadata yields an
/// empty override.
pub fn parse_frontmatter_override(frontmatter: &str) -> StyleOverride {
    #[derive(Deserialize)]
    struct Namespaced {
        latex: Option<StyleOverride>,
    }

    if frontmatter.trim().is_empty() {
        return StyleOverride::default();
    }

    match serde_yaml::from_str::<Namespaced>(frontmatter) {
        Ok(Namespaced {
            latex: Some(overrides),
        }) => overrides.normalized(),
        Ok(_) => StyleOverride::default(),
        Err(err) => {
            tracing::debug!("ignoring malformed frontmatter: {err}");
            StyleOverride::default()
        }
    }
}

/// Finds the position of the closing `---` delimiter.
///
/// The closing delimiter must:
/// - Appear at the start of a line
/// - Be exactly `---` followed by newline or EOF
fn find_closing_delimiter(content: &str) -> Option<usize> {
    let bytes = content.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        if content[pos..].starts_with("---") {
            let after = pos + 3;
            if after >= bytes.len()
                || bytes[after] == b'\n'
                || (bytes[after] == b'\r' && bytes.get(after + 1) == Some(&b'\n'))
            {
                return Some(pos);
            }
        }

        match content[pos..].find('\n') {
            Some(newline_offset) => pos += newline_offset + 1,
            None => break,
        }
    }

    None
}
