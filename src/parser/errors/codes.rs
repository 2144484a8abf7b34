//! Error kinds for parser diagnostics
//!
//! Codes follow a naming convention: E{category}{number}
//! - E02xx: Structural errors (unterminated separator groups)
//! - E03xx: Cross-reference errors
//! - E04xx: Cell-level errors

use thiserror::Error;

/// The categories of parse errors.
///
/// Anything not listed here is not an error: unrecognized prose is kept as
/// an `Other` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// Unterminated `[...]` section or table reference group
    #[error("malformed section reference")]
    MalformedSectionDef,
    /// Unterminated `{...}` placeholder group
    #[error("malformed identifier template")]
    MalformedMultiIndent,
    /// `for`/`in` with nothing after it in a `See` phrase
    #[error("unterminated See clause")]
    UnterminatedSeeClause,
    /// Cell without `:` or without values after it
    #[error("empty parameter list")]
    EmptyParams,
}

impl ErrorKind {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedSectionDef => "E0201",
            Self::MalformedMultiIndent => "E0202",
            Self::UnterminatedSeeClause => "E0301",
            Self::EmptyParams => "E0401",
        }
    }

    /// Structural errors abort the current value only
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::MalformedSectionDef | Self::MalformedMultiIndent)
    }
}
