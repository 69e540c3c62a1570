//! Wraps converted bodies into complete LaTeX documents.

use crate::domain::{DEFAULT_DOCUMENT_CLASS, StyleConfig};

/// File name (without extension) the main document inputs for its preamble.
pub const PREAMBLE_INPUT_NAME: &str = "preamble";

/// The `\documentclass` line of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentHeader<'a> {
    pub document_class: &'a str,
    pub class_options: &'a [String],
}

impl<'a> DocumentHeader<'a> {
    pub fn from_style(style: &'a StyleConfig) -> Self {
        Self {
            document_class: &style.document_class,
            class_options: &style.class_options,
        }
    }

    fn class_line(&self) -> String {
        let class = if self.document_class.trim().is_empty() {
            DEFAULT_DOCUMENT_CLASS
        } else {
            self.document_class
        };

        if self.class_options.is_empty() {
            format!("\\documentclass{{{class}}}")
        } else {
            format!("\\documentclass[{}]{{{class}}}", self.class_options.join(","))
        }
    }
}

/// Builds a standalone document around `body`.
///
/// # Examples
///
/// ```
/// use notetex::export::{DocumentHeader, assemble_single};
///
/// let header = DocumentHeader { document_class: "article", class_options: &[] };
/// let doc = assemble_single("Hello", &header, "");
///
/// assert!(doc.starts_with("\\documentclass{article}\n"));
/// assert!(doc.contains("\\begin{document}\n\nHello\n\n\\end{document}"));
/// ```
pub fn assemble_single(body: &str, header: &DocumentHeader<'_>, preamble: &str) -> String {
    let mut parts = vec![header.class_line()];
    if !preamble.is_empty() {
        parts.push(preamble.to_string());
    }
    parts.push(String::new());
    parts.push("\\begin{document}".to_string());
    parts.push(String::new());
    parts.push(body.to_string());
    parts.push(String::new());
    parts.push("\\end{document}".to_string());

    let mut doc = parts.join("\n");
    doc.push('\n');
    doc
}

/// Builds a main document that inputs each named file in order.
pub fn assemble_multi<S>(names: &[S], header: &DocumentHeader<'_>, has_preamble: bool) -> String
where
    S: AsRef<str>,
{
    let mut parts = vec![header.class_line()];
    if has_preamble {
        parts.push(format!("\\input{{{PREAMBLE_INPUT_NAME}}}"));
    }
    parts.push(String::new());
    parts.push("\\begin{document}".to_string());
    parts.push(String::new());
    parts.extend(
        names
            .iter()
            .map(|name| format!("\\input{{{}}}", name.as_ref())),
    );
    parts.push(String::new());
    parts.push("\\end{document}".to_string());

    let mut doc = parts.join("\n");
    doc.push('\n');
    doc
}

/// Sorts items by their position in `order`.
///
/// Unlisted items follow every listed one. Ties are broken by name, ignoring
/// case, then by exact name. With an empty `order` this is a plain sort by
/// name.
pub fn sort_by_order<T, F>(items: &mut [T], order: &[String], name: F)
where
    F: Fn(&T) -> &str,
{
    let rank = |item: &T| {
        let item_name = name(item);
        order
            .iter()
            .position(|listed| listed.as_str() == item_name)
            .unwrap_or(usize::MAX)
    };

    items.sort_by(|a, b| {
        rank(a)
            .cmp(&rank(b))
            .then_with(|| name(a).to_lowercase().cmp(&name(b).to_lowercase()))
            .then_with(|| name(a).cmp(name(b)))
    });
}
