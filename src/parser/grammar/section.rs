//! Section citations
//!
//! ```text
//! SectionRef      = Number ["." (Number "-" Number | Number)]
//! SectionDef      = "[" SectionRef {"," SectionRef} "]"
//! TableDelegation = "[" ["See"] ("Table" | "Tables") SectionRef {"," SectionRef} "]"
//! ```
//!
//! No trivia is allowed inside a `SectionRef`.

use super::{CellParser, parse_number};
use crate::parser::errors::{ErrorKind, SyntaxError};
use crate::parser::token_kind::TokenKind;
use crate::syntax::{Enum, SectionDef, SectionRef};
use text_size::TextRange;

pub fn parse_section_ref<P: CellParser>(p: &mut P) -> Option<SectionRef> {
    let start = p.get_pos();
    let Some(major) = parse_number(p) else {
        p.reset(start);
        return None;
    };

    let before_dot = p.get_pos();
    if !p.eat(TokenKind::DOT) {
        return Some(SectionRef::new(major));
    }
    let Some(minor) = parse_number(p) else {
        p.reset(before_dot);
        return Some(SectionRef::new(major));
    };

    // A `-` after the first post-dot number turns it into a range
    let before_minus = p.get_pos();
    if p.eat(TokenKind::MINUS) {
        if let Some(end) = parse_number(p) {
            return Some(SectionRef::with_range(major, minor, end));
        }
        p.reset(before_minus);
    }
    Some(SectionRef::with_minor(major, minor))
}

/// Comma-separated refs after the first one; stops before anything else.
fn parse_more_refs<P: CellParser>(p: &mut P, refs: &mut Vec<SectionRef>) {
    loop {
        let checkpoint = p.get_pos();
        p.skip_trivia();
        if !p.eat(TokenKind::COMMA) {
            p.reset(checkpoint);
            return;
        }
        p.skip_trivia();
        match parse_section_ref(p) {
            Some(section) => refs.push(section),
            None => {
                p.reset(checkpoint);
                return;
            }
        }
    }
}

/// Consume the closing `]` of a group opened at `opened`.
fn expect_closing_bracket<P: CellParser>(p: &mut P, opened: TextRange) -> Result<(), SyntaxError> {
    p.skip_trivia();
    if p.eat(TokenKind::R_BRACKET) {
        return Ok(());
    }
    let found = if p.at_eof() {
        "end of value".to_string()
    } else {
        p.current_kind().describe().to_string()
    };
    Err(SyntaxError::builder(ErrorKind::MalformedSectionDef)
        .message(format!("expected ']' to close section reference, found {found}"))
        .range(p.current_range())
        .hint("add the missing ']'")
        .related("'[' opened here", opened)
        .build())
}

/// Parse a bracketed section list.
///
/// A bracket that does not start with a section number is not a
/// `SectionDef` (`Ok(None)`); a recognized list missing its `]` is an error.
pub fn parse_section_def<P: CellParser>(p: &mut P) -> Result<Option<SectionDef>, SyntaxError> {
    let start = p.get_pos();
    if !p.at(TokenKind::L_BRACKET) {
        return Ok(None);
    }
    let opened = p.current_range();
    p.bump();
    p.skip_trivia();

    let Some(defining) = parse_section_ref(p) else {
        p.reset(start);
        return Ok(None);
    };
    let mut rest = Vec::new();
    parse_more_refs(p, &mut rest);

    p.skip_trivia();
    if !p.at_eof() && !p.at(TokenKind::R_BRACKET) {
        // `[0..MAX]` and friends: bracketed, but not a citation
        p.reset(start);
        return Ok(None);
    }
    expect_closing_bracket(p, opened)?;
    Ok(Some(SectionDef::new(defining, rest)))
}

/// Parse `[Table 8.14]`, `[Tables 8.14, 8.15]` or `[See Table 8.14]`.
pub fn parse_table_delegation<P: CellParser>(p: &mut P) -> Result<Option<Enum>, SyntaxError> {
    let start = p.get_pos();
    if !p.at(TokenKind::L_BRACKET) {
        return Ok(None);
    }
    let opened = p.current_range();
    p.bump();
    p.skip_trivia();
    if p.eat(TokenKind::SEE_KW) {
        p.skip_trivia();
    }
    if !p.eat(TokenKind::TABLE_KW) && !p.eat(TokenKind::TABLES_KW) {
        p.reset(start);
        return Ok(None);
    }
    p.skip_trivia();

    let Some(first) = parse_section_ref(p) else {
        return Err(SyntaxError::builder(ErrorKind::MalformedSectionDef)
            .message("expected section number after 'Table'")
            .range(p.current_range())
            .related("'[' opened here", opened)
            .build());
    };
    let mut refs = vec![first];
    parse_more_refs(p, &mut refs);
    expect_closing_bracket(p, opened)?;

    tracing::trace!(count = refs.len(), "table delegation");
    Ok(Some(match refs.len() {
        1 => Enum::TableRef(first),
        _ => Enum::TableRefs(refs),
    }))
}
