//! Style definition files on disk.

use std::path::Path;

use crate::domain::{StyleConfig, parse_style_definition};
use crate::infra::fs::read_text;

/// Conventional style file name looked up in an exported folder.
pub const FOLDER_STYLE_FILE: &str = "style.yaml";

/// Loads a style definition, falling back to defaults.
///
/// Missing, unreadable, or malformed files all yield `StyleConfig::default()`.
pub fn load_style(path: &Path) -> StyleConfig {
    match read_text(path) {
        Ok(text) => parse_style_definition(&text),
        Err(err) => {
            tracing::debug!("using default style: {err}");
            StyleConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn reads_style_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(FOLDER_STYLE_FILE);
        std::fs::write(
            &path,
            "documentclass: book\nclassoptions:\n  - 12pt\norder: [intro, body]\nauthor: ignored\n",
        )
        .unwrap();

        let style = load_style(&path);

        assert_eq!(style.document_class, "book");
        assert_eq!(style.class_options, vec!["12pt"]);
        assert_eq!(style.order, vec!["intro", "body"]);
        assert_eq!(style.preamble, "");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(load_style(&dir.path().join("nope.yaml")), StyleConfig::default());
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("style.yaml");
        std::fs::write(&path, "documentclass: [unclosed\n").unwrap();

        assert_eq!(load_style(&path), StyleConfig::default());
    }
}
