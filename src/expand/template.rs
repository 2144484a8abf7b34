//! Expansion of all-caps enumeration templates
//!
//! Grammar (informal):
//!
//! ```text
//! Template     = Alternative { "," Alternative }
//! Alternative  = { Static | Group }
//! Group        = "{" Template "}"      every alternative in turn
//!              | "[" Template "]"      nothing, then every alternative
//! ```
//!
//! Several groups in one alternative form a cartesian product, earlier
//! groups varying slowest. A group without a depth-0 comma is split on
//! whitespace instead, and a bare digit run (`{1234}`) on characters.

use thiserror::Error;

/// Structural problems in a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unclosed '{opener}' opened at offset {offset}")]
    Unclosed { opener: char, offset: usize },
    #[error("unexpected '{closer}' at offset {offset}")]
    UnexpectedCloser { closer: char, offset: usize },
}

impl TemplateError {
    /// Byte offset of the offending separator within the template
    pub fn offset(&self) -> usize {
        match self {
            Self::Unclosed { offset, .. } | Self::UnexpectedCloser { offset, .. } => *offset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupKind {
    All,
    Optional,
}

#[derive(Debug)]
enum Segment<'a> {
    Static(&'a str),
    Group {
        kind: GroupKind,
        inner: &'a str,
        offset: usize,
    },
}

fn is_opener(c: char) -> bool {
    matches!(c, '{' | '[')
}

fn is_closer(c: char) -> bool {
    matches!(c, '}' | ']')
}

/// Check whether `text` looks like an all-caps template: only capitals,
/// digits, `_`, commas, whitespace and separators, with at least one group.
pub fn is_template(text: &str) -> bool {
    let allowed = |c: char| {
        c.is_ascii_uppercase()
            || c.is_ascii_digit()
            || c == '_'
            || c == ','
            || c.is_whitespace()
            || is_opener(c)
            || is_closer(c)
    };
    text.chars().all(allowed) && text.chars().any(is_opener)
}

/// Expand a template into its concrete members, in source order.
///
/// ```
/// use refcard::expand_template;
///
/// let members = expand_template("TESS_{CONTROL, EVALUATION}_SHADER_BIT").unwrap();
/// assert_eq!(members, ["TESS_CONTROL_SHADER_BIT", "TESS_EVALUATION_SHADER_BIT"]);
/// ```
pub fn expand_template(template: &str) -> Result<Vec<String>, TemplateError> {
    alternatives(template, 0)
}

/// Expand every depth-0 alternative of `text`; `base` is the byte offset of
/// `text` within the whole template, for error reporting.
fn alternatives(text: &str, base: usize) -> Result<Vec<String>, TemplateError> {
    let parts = split_alternatives(text, base)?;
    let mut members = Vec::new();
    for (offset, part) in parts {
        let trimmed = part.trim_start();
        let offset = offset + (part.len() - trimmed.len());
        let trimmed = trimmed.trim_end();
        if trimmed.is_empty() {
            continue;
        }
        members.extend(expand_alternative(trimmed, offset)?);
    }
    Ok(members)
}

/// Split on depth-0 commas; without any, fall back to whitespace and then to
/// single digits.
fn split_alternatives(text: &str, base: usize) -> Result<Vec<(usize, &str)>, TemplateError> {
    let commas = level_positions(text, base, |c| c == ',')?;
    if !commas.is_empty() {
        return Ok(split_at_positions(text, base, &commas));
    }

    let spaces = level_positions(text.trim(), base, char::is_whitespace)?;
    if !spaces.is_empty() {
        let lead = text.len() - text.trim_start().len();
        return Ok(split_at_positions(text.trim(), base + lead, &spaces)
            .into_iter()
            .filter(|(_, part)| !part.trim().is_empty())
            .collect());
    }

    let trimmed = text.trim();
    if trimmed.len() > 1 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        let lead = text.len() - text.trim_start().len();
        return Ok(trimmed
            .char_indices()
            .map(|(i, c)| (base + lead + i, &trimmed[i..i + c.len_utf8()]))
            .collect());
    }

    Ok(vec![(base, text)])
}

/// Byte positions (relative to `text`) of depth-0 characters matching `pred`.
fn level_positions(
    text: &str,
    base: usize,
    pred: impl Fn(char) -> bool,
) -> Result<Vec<usize>, TemplateError> {
    let mut depth = 0usize;
    let mut positions = Vec::new();
    for (i, c) in text.char_indices() {
        if is_opener(c) {
            depth += 1;
        } else if is_closer(c) {
            depth = depth.checked_sub(1).ok_or(TemplateError::UnexpectedCloser {
                closer: c,
                offset: base + i,
            })?;
        } else if depth == 0 && pred(c) {
            positions.push(i);
        }
    }
    Ok(positions)
}

fn split_at_positions<'a>(text: &'a str, base: usize, positions: &[usize]) -> Vec<(usize, &'a str)> {
    let mut parts = Vec::with_capacity(positions.len() + 1);
    let mut start = 0;
    for &pos in positions {
        parts.push((base + start, &text[start..pos]));
        start = pos + text[pos..].chars().next().map_or(1, char::len_utf8);
    }
    parts.push((base + start, &text[start..]));
    parts
}

/// Cut one alternative into static runs and top-level groups.
fn segments(text: &str, base: usize) -> Result<Vec<Segment<'_>>, TemplateError> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut static_start = 0;
    let mut group: Option<(GroupKind, char, usize)> = None;

    for (i, c) in text.char_indices() {
        if is_opener(c) {
            if depth == 0 {
                if static_start < i {
                    segments.push(Segment::Static(&text[static_start..i]));
                }
                let kind = if c == '[' {
                    GroupKind::Optional
                } else {
                    GroupKind::All
                };
                group = Some((kind, c, i));
            }
            depth += 1;
        } else if is_closer(c) {
            if depth == 0 {
                return Err(TemplateError::UnexpectedCloser {
                    closer: c,
                    offset: base + i,
                });
            }
            depth -= 1;
            if depth == 0 {
                if let Some((kind, _, open)) = group.take() {
                    segments.push(Segment::Group {
                        kind,
                        inner: &text[open + 1..i],
                        offset: base + open + 1,
                    });
                }
                static_start = i + c.len_utf8();
            }
        }
    }

    if let Some((_, opener, open)) = group {
        return Err(TemplateError::Unclosed {
            opener,
            offset: base + open,
        });
    }
    if static_start < text.len() {
        segments.push(Segment::Static(&text[static_start..]));
    }
    Ok(segments)
}

fn expand_alternative(text: &str, base: usize) -> Result<Vec<String>, TemplateError> {
    let mut members = vec![String::new()];
    for segment in segments(text, base)? {
        match segment {
            Segment::Static(run) => {
                let run = run.trim();
                for member in &mut members {
                    member.push_str(run);
                }
            }
            Segment::Group {
                kind,
                inner,
                offset,
            } => {
                let mut choices = Vec::new();
                if kind == GroupKind::Optional {
                    choices.push(String::new());
                }
                choices.extend(alternatives(inner, offset)?);
                members = members
                    .iter()
                    .flat_map(|prefix| choices.iter().map(move |choice| format!("{prefix}{choice}")))
                    .collect();
            }
        }
    }
    Ok(members)
}
