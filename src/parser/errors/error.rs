//! Syntax error type
//!
//! Provides rich error information including:
//! - Error kind for categorization
//! - Hints/suggestions for fixes
//! - Related source locations (e.g. where an unclosed bracket was opened)

use text_size::{TextRange, TextSize};
use thiserror::Error;

use super::codes::ErrorKind;

/// Related location information for an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    /// Description of this related location
    pub message: String,
    /// Source range
    pub range: TextRange,
}

impl RelatedInfo {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// A syntax error found while parsing one value of a cell.
///
/// Ranges are byte offsets into the normalized cell text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} [{}]: {message}", .kind.code())]
pub struct SyntaxError {
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Source location
    pub range: TextRange,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
    /// Related source locations
    pub related: Vec<RelatedInfo>,
}

impl SyntaxError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, range: TextRange) -> Self {
        Self {
            kind,
            message: message.into(),
            range,
            hint: None,
            related: vec![],
        }
    }

    /// Create an error at a specific offset with zero-width range
    pub fn at_offset(kind: ErrorKind, message: impl Into<String>, offset: TextSize) -> Self {
        Self::new(kind, message, TextRange::empty(offset))
    }

    pub fn builder(kind: ErrorKind) -> SyntaxErrorBuilder {
        SyntaxErrorBuilder::new(kind)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }

    pub fn has_related(&self) -> bool {
        !self.related.is_empty()
    }

    /// Format the error with hint and related locations, one per line
    pub fn format_detailed(&self) -> String {
        let mut out = format!(
            "{} at {}..{}",
            self,
            u32::from(self.range.start()),
            u32::from(self.range.end())
        );
        if let Some(hint) = &self.hint {
            out.push_str(&format!("\n  hint: {hint}"));
        }
        for info in &self.related {
            out.push_str(&format!(
                "\n  note: {} at {}..{}",
                info.message,
                u32::from(info.range.start()),
                u32::from(info.range.end())
            ));
        }
        out
    }
}

/// Builder for [`SyntaxError`]
#[derive(Debug)]
pub struct SyntaxErrorBuilder {
    kind: ErrorKind,
    message: Option<String>,
    range: TextRange,
    hint: Option<String>,
    related: Vec<RelatedInfo>,
}

impl SyntaxErrorBuilder {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            range: TextRange::empty(TextSize::new(0)),
            hint: None,
            related: vec![],
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn range(mut self, range: TextRange) -> Self {
        self.range = range;
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn related(mut self, message: impl Into<String>, range: TextRange) -> Self {
        self.related.push(RelatedInfo::new(message, range));
        self
    }

    /// Build the error; without an explicit message the kind's description is used
    pub fn build(self) -> SyntaxError {
        let message = self.message.unwrap_or_else(|| self.kind.to_string());
        SyntaxError {
            kind: self.kind,
            message,
            range: self.range,
            hint: self.hint,
            related: self.related,
        }
    }
}
