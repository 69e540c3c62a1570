//! Postprocessing of converter output.
//!
//! The converter escapes the braces of an equation-reference placeholder and
//! some label characters, so `{{EQREF:eq_1}}` may come back as
//! `\{\{EQREF:eq\_1\}\}`. Both forms are accepted.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static EQREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\\\{|\{){2}EQREF:(.*?)(?:\\\}|\}){2}").unwrap());

static LABEL_ESCAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([_#%$&{}-])").unwrap());

static ESCAPED_WARNING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\\% WARNING: (Could not resolve .*)$").unwrap()
});

/// Replaces every equation-reference placeholder with `\eqref{label}`.
///
/// # Examples
///
/// ```
/// use notetex::export::replace_placeholders;
///
/// assert_eq!(
///     replace_placeholders(r"see \{\{EQREF:eq\_1\}\}"),
///     r"see \eqref{eq_1}"
/// );
/// ```
pub fn replace_placeholders(text: &str) -> String {
    EQREF_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let label = LABEL_ESCAPE_RE.replace_all(&caps[1], "$1");
            format!("\\eqref{{{label}}}")
        })
        .into_owned()
}

/// Turns escaped unresolved-embed markers at line start back into comments.
///
/// Markers in the middle of a line stay escaped, since a comment there
/// would swallow the rest of the line.
pub fn restore_warning_comments(text: &str) -> String {
    ESCAPED_WARNING_RE
        .replace_all(text, |caps: &Captures<'_>| {
            format!("% WARNING: {}", unescape_reference(&caps[1]))
        })
        .into_owned()
}

/// Applies every postprocessing step to converter output.
pub fn postprocess(latex: &str) -> String {
    restore_warning_comments(&replace_placeholders(latex))
}

fn unescape_reference(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }
    let text = text.replace("\\^{}", "^");
    Cow::Owned(LABEL_ESCAPE_RE.replace_all(&text, "$1").into_owned())
}
