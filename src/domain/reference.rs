//! Reference syntax: `[[target#^anchor|display]]` and its embed form `![[...]]`.

/// Whether a reference links to content or pulls it inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// `[[...]]`: a mention of another note or a numbered object.
    Reference,
    /// `![[...]]`: inline the anchored block of another note.
    Embed,
}

/// One parsed occurrence of the reference syntax.
///
/// An empty `target` denotes the current document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    pub kind: ReferenceKind,
    pub target: String,
    pub anchor: Option<String>,
    pub display: Option<String>,
}

impl ParsedReference {
    /// Parses a single token such as `[[Note#^eq-1|Equation 1]]`.
    ///
    /// Never fails: malformed input degrades to best-effort fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use notetex::domain::{ParsedReference, ReferenceKind};
    ///
    /// let parsed = ParsedReference::parse("[[Note#^eq-1|Equation 1]]");
    /// assert_eq!(parsed.kind, ReferenceKind::Reference);
    /// assert_eq!(parsed.target, "Note");
    /// assert_eq!(parsed.anchor.as_deref(), Some("eq-1"));
    /// assert_eq!(parsed.display.as_deref(), Some("Equation 1"));
    /// ```
    pub fn parse(token: &str) -> Self {
        let (kind, rest) = match token.strip_prefix('!') {
            Some(rest) => (ReferenceKind::Embed, rest),
            None => (ReferenceKind::Reference, token),
        };
        let inner = rest.strip_prefix("[[").unwrap_or(rest);
        let inner = inner.strip_suffix("]]").unwrap_or(inner);

        let (path, display) = match inner.split_once('|') {
            Some((path, display)) => (path.trim(), non_empty(display.trim())),
            None => (inner.trim(), None),
        };

        let (target, anchor) = match path.split_once('#') {
            Some((target, anchor)) => {
                let anchor = anchor.strip_prefix('^').unwrap_or(anchor);
                (target, non_empty(anchor))
            }
            None => (path, None),
        };

        Self {
            kind,
            target: target.to_string(),
            anchor,
            display,
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
