//! Prefix parsers over raw token slices
//!
//! Each function parses the shape at the start of `tokens` and reports how
//! many tokens it consumed, so callers can drive the primitives directly.
//!
//! ```
//! use refcard::parser::{prefix, tokenize};
//! use refcard::SectionRef;
//!
//! let tokens = tokenize("8.14-16 and more");
//! let (section, consumed) = prefix::section_ref(&tokens).unwrap();
//! assert_eq!(section, SectionRef::with_range(8, 14, 16));
//! assert_eq!(consumed, 5);
//! ```

use super::errors::SyntaxError;
use super::grammar::{self, CellParser};
use super::lexer::Token;
use super::parser::Parser;
use crate::syntax::{MultiIdent, Recipy, SectionDef, SectionRef, SeeDecl};

fn run<'t, 'a, T>(
    tokens: &'t [Token<'a>],
    rule: impl FnOnce(&mut Parser<'t, 'a>) -> Option<T>,
) -> Option<(T, usize)> {
    let mut p = Parser::new(tokens);
    let parsed = rule(&mut p)?;
    Some((parsed, p.consumed()))
}

fn try_run<'t, 'a, T>(
    tokens: &'t [Token<'a>],
    rule: impl FnOnce(&mut Parser<'t, 'a>) -> Result<Option<T>, SyntaxError>,
) -> Result<Option<(T, usize)>, SyntaxError> {
    let mut p = Parser::new(tokens);
    Ok(rule(&mut p)?.map(|parsed| (parsed, p.consumed())))
}

pub fn section_ref(tokens: &[Token<'_>]) -> Option<(SectionRef, usize)> {
    run(tokens, grammar::parse_section_ref)
}

pub fn section_def(tokens: &[Token<'_>]) -> Result<Option<(SectionDef, usize)>, SyntaxError> {
    try_run(tokens, grammar::parse_section_def)
}

pub fn multi_ident(tokens: &[Token<'_>]) -> Result<Option<(MultiIdent, usize)>, SyntaxError> {
    try_run(tokens, grammar::parse_multi_ident)
}

pub fn recipy(tokens: &[Token<'_>]) -> Option<(Recipy, usize)> {
    run(tokens, grammar::parse_recipy)
}

/// Parse a `See` phrase; it always runs to the end of `tokens`.
pub fn see_decl(tokens: &[Token<'_>]) -> Result<Option<(SeeDecl, usize)>, SyntaxError> {
    try_run(tokens, |p| {
        p.skip_trivia();
        grammar::parse_see_decl(p)
    })
}
