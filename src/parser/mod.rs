//! Recursive-descent parser for parameter cells
//!
//! ## Architecture
//!
//! ```text
//! Raw cell
//!     ↓
//! Preprocessor → normalized text
//!     ↓
//! Lexer (logos) → lossless tokens with TokenKind
//!     ↓
//! Params grammar → names + depth-0 value slices
//!     ↓
//! Enum grammar → one classified Enum per value (See, Table, MultiIdent, ...)
//!     ↓
//! Post-processing → merged bitwise formulas, absorbed index declarations
//! ```
//!
//! Parsing is total: every cell yields a [`Params`], and structural problems
//! are reported next to it as [`SyntaxError`]s.

#[allow(clippy::module_inception)]
mod parser;

pub mod errors;
pub mod grammar;
mod lexer;
mod options;
pub mod prefix;
mod token_kind;

pub use errors::{ErrorKind, RelatedInfo, SyntaxError};
pub use lexer::{Lexer, Token, source_text, tokenize};
pub use options::ParseOptions;
pub use parser::Parser;
pub use token_kind::TokenKind;

use crate::preprocess::normalize;
use crate::syntax::{Enum, Params, SectionHeading};
use grammar::CellParser;
use std::borrow::Cow;
use text_size::{TextRange, TextSize};

/// Parse result: the parsed cell and any errors found on the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub params: Params,
    pub errors: Vec<SyntaxError>,
}

impl ParseResult {
    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_error(&self, kind: ErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }

    pub fn into_params(self) -> Params {
        self.params
    }
}

/// Parse a cell with default options
///
/// ```
/// use refcard::{Enum, SectionRef, parse_params};
///
/// let result = parse_params("target: TEXTURE_2D, [Table 8.14]");
/// assert!(result.ok());
/// assert_eq!(result.params.names, ["target"]);
/// assert_eq!(result.params.values[1], Enum::TableRef(SectionRef::with_minor(8, 14)));
/// ```
pub fn parse_params(cell: &str) -> ParseResult {
    parse_params_with(cell, &ParseOptions::default())
}

pub fn parse_params_with(cell: &str, options: &ParseOptions<'_>) -> ParseResult {
    let text = if options.normalize {
        Cow::Owned(normalize(cell))
    } else {
        Cow::Borrowed(cell)
    };
    let tokens = tokenize(&text);
    let result = grammar::parse_cell(&tokens, options);
    tracing::trace!(
        names = result.params.names.len(),
        values = result.params.values.len(),
        errors = result.errors.len(),
        "parsed cell"
    );
    result
}

/// Classify a single value with default options.
///
/// The text is taken as one value: commas are not split points here.
pub fn parse_enum(value: &str) -> Enum {
    let options = ParseOptions {
        split_leading_table: false,
        ..ParseOptions::default()
    };
    parse_enum_with(value, &options).0
}

/// Classify a single value, returning any errors alongside.
pub fn parse_enum_with(value: &str, options: &ParseOptions<'_>) -> (Enum, Vec<SyntaxError>) {
    let tokens = tokenize(value);
    let mut p = Parser::new(&tokens);
    let mut values = Vec::new();
    grammar::parse_value(&mut p, options, &mut values);
    let errors = p.finish();

    let value = match values.len() {
        0 => Enum::Other(String::new()),
        1 => values.remove(0),
        _ => Enum::Other(value.trim().to_string()),
    };
    (value, errors)
}

/// Parse a section heading line such as `Buffer Object Queries [6, 6.7]`.
pub fn parse_section_heading(line: &str) -> Result<SectionHeading, SyntaxError> {
    let tokens = tokenize(line);
    let Some(bracket) = tokens.iter().rposition(|t| t.kind == TokenKind::L_BRACKET) else {
        return Err(SyntaxError::builder(ErrorKind::MalformedSectionDef)
            .message("expected '[' starting the section reference")
            .range(TextRange::empty(TextSize::of(line)))
            .build());
    };

    let mut p = Parser::new(&tokens);
    p.reset(bracket);
    let section = grammar::parse_section_def(&mut p)?;
    p.skip_trivia();
    let (Some(section), true) = (section, p.at_eof()) else {
        return Err(SyntaxError::builder(ErrorKind::MalformedSectionDef)
            .message("expected section numbers in the trailing brackets")
            .range(p.range_between(bracket, tokens.len()))
            .build());
    };

    Ok(SectionHeading {
        title: source_text(&tokens[..bracket]).trim().to_string(),
        section,
    })
}
