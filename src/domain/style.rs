//! Style configuration: document class, class options, preamble, and file order.

use serde::Deserialize;

/// Document class used when neither the style nor the note names one.
pub const DEFAULT_DOCUMENT_CLASS: &str = "article";

/// Resolved formatting intent for one export.
///
/// `document_class` is never empty. An empty `order` means no explicit
/// ordering was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    /// Path to a preamble file, or empty for none.
    pub preamble: String,
    pub document_class: String,
    /// Class options in declaration order.
    pub class_options: Vec<String>,
    /// Note names in the order a multi-file export should include them.
    pub order: Vec<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            preamble: String::new(),
            document_class: DEFAULT_DOCUMENT_CLASS.to_string(),
            class_options: Vec::new(),
            order: Vec::new(),
        }
    }
}

/// A partial style, as read from a style file or a note's frontmatter.
///
/// Absent fields inherit from the base style when merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StyleOverride {
    pub preamble: Option<String>,
    #[serde(rename = "documentclass")]
    pub document_class: Option<String>,
    #[serde(rename = "classoptions")]
    pub class_options: Option<Vec<String>>,
    pub order: Option<Vec<String>>,
}

impl StyleOverride {
    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Parses a style override from YAML text.
    ///
    /// Malformed or non-mapping input yields an empty override. An empty
    /// `documentclass` is treated as absent.
    pub fn from_yaml(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::default();
        }

        match serde_yaml::from_str::<Self>(text) {
            Ok(parsed) => parsed.normalized(),
            Err(err) => {
                tracing::debug!("ignoring malformed style definition: {err}");
                Self::default()
            }
        }
    }

    pub(crate) fn normalized(mut self) -> Self {
        if self
            .document_class
            .as_deref()
            .is_some_and(|class| class.trim().is_empty())
        {
            self.document_class = None;
        }
        self
    }
}

/// Merges an override into a base style.
///
/// Each field present in `overrides` replaces the base field wholesale;
/// lists are replaced, never concatenated.
///
/// # Examples
///
/// ```
/// use notetex::domain::{StyleConfig, StyleOverride, merge};
///
/// let base = StyleConfig {
///     class_options: vec!["12pt".to_string()],
///     ..StyleConfig::default()
/// };
/// let overrides = StyleOverride {
///     class_options: Some(vec!["a4paper".to_string()]),
///     ..StyleOverride::default()
/// };
///
/// assert_eq!(merge(&base, &overrides).class_options, vec!["a4paper"]);
/// ```
pub fn merge(base: &StyleConfig, overrides: &StyleOverride) -> StyleConfig {
    StyleConfig {
        preamble: overrides
            .preamble
            .clone()
            .unwrap_or_else(|| base.preamble.clone()),
        document_class: overrides
            .document_class
            .clone()
            .unwrap_or_else(|| base.document_class.clone()),
        class_options: overrides
            .class_options
            .clone()
            .unwrap_or_else(|| base.class_options.clone()),
        order: overrides.order.clone().unwrap_or_else(|| base.order.clone()),
    }
}

/// Parses a complete style definition, filling unset keys with defaults.
///
/// Recognizes `preamble`, `documentclass`, `classoptions`, and `order`.
/// Unknown keys are ignored and malformed input yields the default style.
pub fn parse_style_definition(text: &str) -> StyleConfig {
    merge(&StyleConfig::default(), &StyleOverride::from_yaml(text))
}
