//! Builder for test notes with optional `latex:` frontmatter.

/// Builder for markdown notes as they appear in a vault.
#[derive(Debug, Default)]
pub struct TestNote {
    document_class: Option<String>,
    class_options: Vec<String>,
    preamble: Option<String>,
    extra_frontmatter: Vec<(String, String)>,
    body: String,
}

#[allow(dead_code)]
impl TestNote {
    /// Creates a note with the given body and no frontmatter.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    /// Sets `latex.documentclass`.
    pub fn document_class(mut self, class: impl Into<String>) -> Self {
        self.document_class = Some(class.into());
        self
    }

    /// Appends to `latex.classoptions`.
    pub fn class_option(mut self, option: impl Into<String>) -> Self {
        self.class_options.push(option.into());
        self
    }

    /// Sets `latex.preamble`.
    pub fn preamble(mut self, path: impl Into<String>) -> Self {
        self.preamble = Some(path.into());
        self
    }

    /// Adds an unrelated top-level frontmatter key.
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_frontmatter.push((key.into(), value.into()));
        self
    }

    fn has_latex(&self) -> bool {
        self.document_class.is_some() || !self.class_options.is_empty() || self.preamble.is_some()
    }

    /// Renders the note as markdown text.
    pub fn to_markdown(&self) -> String {
        if !self.has_latex() && self.extra_frontmatter.is_empty() {
            return self.body.clone();
        }

        let mut out = String::from("---\n");
        for (key, value) in &self.extra_frontmatter {
            out.push_str(&format!("{key}: {value}\n"));
        }
        if self.has_latex() {
            out.push_str("latex:\n");
            if let Some(class) = &self.document_class {
                out.push_str(&format!("  documentclass: {class}\n"));
            }
            if !self.class_options.is_empty() {
                out.push_str("  classoptions:\n");
                for option in &self.class_options {
                    out.push_str(&format!("    - {option}\n"));
                }
            }
            if let Some(preamble) = &self.preamble {
                out.push_str(&format!("  preamble: {preamble}\n"));
            }
        }
        out.push_str("---\n");
        out.push_str(&self.body);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_note_has_no_frontmatter() {
        assert_eq!(TestNote::new("Body").to_markdown(), "Body");
    }

    #[test]
    fn latex_keys_are_nested() {
        let markdown = TestNote::new("Body")
            .meta("title", "Notes")
            .document_class("report")
            .class_option("12pt")
            .to_markdown();

        assert_eq!(
            markdown,
            "---\ntitle: Notes\nlatex:\n  documentclass: report\n  classoptions:\n    - 12pt\n---\nBody"
        );
    }
}
