//! Display math: `$$ ... $$` blocks with an optional `^label` line.
//!
//! ```text
//! $$                         \begin{equation}\label{eq-energy}
//! E = mc^2           ==>     E = mc^2
//! $$                         \end{equation}
//! ^eq-energy
//! ```

use std::ops::Range;

const FENCE: &str = "$$";

/// Alignment-family environments recognized inside a math block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InnerEnvironment {
    Align,
    Aligned,
    Gather,
    Gathered,
    Multline,
}

impl InnerEnvironment {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "align" => Some(Self::Align),
            "aligned" => Some(Self::Aligned),
            "gather" => Some(Self::Gather),
            "gathered" => Some(Self::Gathered),
            "multline" => Some(Self::Multline),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Align => "align",
            Self::Aligned => "aligned",
            Self::Gather => "gather",
            Self::Gathered => "gathered",
            Self::Multline => "multline",
        }
    }

    /// The environment emitted in place of this one.
    ///
    /// `aligned` only works nested inside another math environment and
    /// cannot carry a label, so it becomes `align`.
    pub fn standalone(self) -> Self {
        match self {
            Self::Aligned => Self::Align,
            other => other,
        }
    }
}

/// A fenced math span located in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquationBlock<'a> {
    /// From the opening fence through the label (or the closing fence when
    /// there is no label).
    pub span: Range<usize>,
    /// Raw content between the fences.
    pub math: &'a str,
    pub label: Option<&'a str>,
    pub inner: Option<InnerEnvironment>,
}

/// Scans text for display math blocks, left to right.
///
/// A block is `$$`, content, `$$`. If the line right after the closing fence
/// starts with `^name` (letters, digits, `-`, `_`), the name is the block's
/// label and the rest of that line stays as text.
pub fn scan_equation_blocks(text: &str) -> Vec<EquationBlock<'_>> {
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(offset) = text[pos..].find(FENCE) {
        let open = pos + offset;
        let content_start = open + FENCE.len();
        let Some(close_offset) = text[content_start..].find(FENCE) else {
            break;
        };
        let close = content_start + close_offset;
        let fence_end = close + FENCE.len();

        let (label, end) = match trailing_label(text, fence_end) {
            Some((label, end)) => (Some(label), end),
            None => (None, fence_end),
        };

        let math = &text[content_start..close];
        blocks.push(EquationBlock {
            span: open..end,
            math,
            label,
            inner: detect_inner_environment(math),
        });
        pos = end;
    }

    blocks
}

/// Rewrites every math block as a LaTeX math environment.
pub fn transform_equations(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for block in scan_equation_blocks(text) {
        out.push_str(&text[last..block.span.start]);
        out.push_str(&render_block(&block));
        last = block.span.end;
    }

    out.push_str(&text[last..]);
    out
}

/// Returns the label names of every labelled block, in order.
pub fn equation_labels(text: &str) -> Vec<&str> {
    scan_equation_blocks(text)
        .into_iter()
        .filter_map(|block| block.label)
        .collect()
}

fn render_block(block: &EquationBlock<'_>) -> String {
    let label = block
        .label
        .map(|name| format!("\\label{{{name}}}"))
        .unwrap_or_default();
    let math = block.math.trim();

    let (env, body) = match block.inner {
        None => ("equation", math.to_string()),
        Some(inner) => {
            let begin = format!("\\begin{{{}}}", inner.name());
            let end = format!("\\end{{{}}}", inner.name());
            let body = remove_first(&remove_first(math, &begin), &end);
            (inner.standalone().name(), body.trim().to_string())
        }
    };

    format!("\\begin{{{env}}}{label}\n{body}\n\\end{{{env}}}")
}

/// Finds the first `\begin{...}` naming a recognized environment.
fn detect_inner_environment(math: &str) -> Option<InnerEnvironment> {
    const BEGIN: &str = "\\begin{";

    let mut pos = 0;
    while let Some(offset) = math[pos..].find(BEGIN) {
        let name_start = pos + offset + BEGIN.len();
        if let Some(name_len) = math[name_start..].find('}') {
            if let Some(env) = InnerEnvironment::from_name(&math[name_start..name_start + name_len]) {
                return Some(env);
            }
        }
        pos = name_start;
    }
    None
}

/// Parses `^label` on the line after `at`, returning the label and its end.
///
/// The label is the longest run of label characters; whatever follows it on
/// the line stays in the text.
fn trailing_label(text: &str, at: usize) -> Option<(&str, usize)> {
    let rest = &text[at..];
    let after_space = rest.trim_start_matches([' ', '\t']);
    let line = after_space
        .strip_prefix("\r\n")
        .or_else(|| after_space.strip_prefix('\n'))?;
    let name_part = line.strip_prefix('^')?;

    let name_len = name_part
        .find(|c: char| !is_label_char(c))
        .unwrap_or(name_part.len());
    if name_len == 0 {
        return None;
    }

    let name_start = text.len() - name_part.len();
    Some((&name_part[..name_len], name_start + name_len))
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn remove_first(haystack: &str, needle: &str) -> String {
    haystack.replacen(needle, "", 1)
}
