//! Callouts: `> [!type] Title` blockquotes become LaTeX environments.
//!
//! ```text
//! > [!theorem] Pythagorean Theorem       \begin{theorem}[Pythagorean Theorem]
//! > a² + b² = c².                 ==>    a² + b² = c².
//!                                        \end{theorem}
//! ```
//!
//! Nested callouts are not supported: inner markers stay in the body as text.

/// Callout types with a dedicated environment. Lookup is case-insensitive.
pub const CALLOUT_ENVIRONMENTS: &[(&str, &str)] = &[
    ("theorem", "theorem"),
    ("lemma", "lemma"),
    ("proposition", "proposition"),
    ("corollary", "corollary"),
    ("definition", "definition"),
    ("proof", "proof"),
    ("remark", "remark"),
    ("example", "example"),
    ("exercise", "exercise"),
];

/// Environment used for callout types missing from the table.
pub const FALLBACK_ENVIRONMENT: &str = "notebox";

/// Returns the environment a callout type maps to.
///
/// # Examples
///
/// ```
/// use notetex::preprocess::environment_for;
///
/// assert_eq!(environment_for("Theorem"), "theorem");
/// assert_eq!(environment_for("warning"), "notebox");
/// ```
pub fn environment_for(callout_type: &str) -> &'static str {
    let wanted = callout_type.trim().to_lowercase();
    CALLOUT_ENVIRONMENTS
        .iter()
        .find(|(kind, _)| *kind == wanted)
        .map_or(FALLBACK_ENVIRONMENT, |(_, env)| *env)
}

/// Rewrites every callout in `text` as a LaTeX environment.
///
/// A callout runs from its header line through the following contiguous
/// `>` lines. Other lines pass through unchanged.
pub fn transform_callouts(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let Some((callout_type, title)) = parse_header(lines[i]) else {
            out.push(lines[i].to_string());
            i += 1;
            continue;
        };

        i += 1;
        let mut body = Vec::new();
        while i < lines.len() && lines[i].starts_with('>') {
            body.push(strip_quote_marker(lines[i]));
            i += 1;
        }

        let env = environment_for(callout_type);
        if title.is_empty() {
            out.push(format!("\\begin{{{env}}}"));
        } else {
            out.push(format!("\\begin{{{env}}}[{title}]"));
        }
        out.push(body.join("\n").trim().to_string());
        out.push(format!("\\end{{{env}}}"));
    }

    out.join("\n")
}

/// Parses `> [!type] title`, returning the type and the trimmed title.
fn parse_header(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('>')?.trim_start();
    let rest = rest.strip_prefix("[!")?;
    let close = rest.find(']')?;
    let callout_type = &rest[..close];
    if callout_type.is_empty() {
        return None;
    }
    Some((callout_type, rest[close + 1..].trim()))
}

fn strip_quote_marker(line: &str) -> &str {
    let rest = &line[1..];
    rest.strip_prefix([' ', '\t']).unwrap_or(rest)
}
