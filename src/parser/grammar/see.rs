//! `See` cross-references
//!
//! ```text
//! SeeDecl = "See" MultiIdent ["for" MultiIdent] ["in" Recipy] {annotation}
//! ```
//!
//! `for` binds to the identifier right before it. Anything left after the
//! last clause is an annotation ("above", "(Table 8.3)") and is dropped.
//! `See` followed by prose instead of an identifier is not a declaration.

use super::multi_ident::{parse_multi_ident, parse_recipy};
use super::CellParser;
use crate::parser::errors::{ErrorKind, SyntaxError};
use crate::parser::token_kind::TokenKind;
use crate::syntax::SeeDecl;

fn unterminated<P: CellParser>(p: &P, keyword: &str) -> SyntaxError {
    SyntaxError::builder(ErrorKind::UnterminatedSeeClause)
        .message(format!("expected identifier after '{keyword}'"))
        .range(p.current_range())
        .build()
}

pub fn parse_see_decl<P: CellParser>(p: &mut P) -> Result<Option<SeeDecl>, SyntaxError> {
    let start = p.get_pos();
    if !p.eat(TokenKind::SEE_KW) {
        return Ok(None);
    }
    p.skip_trivia();
    let Some(subject) = parse_multi_ident(p)? else {
        p.reset(start);
        return Ok(None);
    };

    let checkpoint = p.get_pos();
    p.skip_trivia();
    let target = if p.eat(TokenKind::FOR_KW) {
        p.skip_trivia();
        let Some(target) = parse_multi_ident(p)? else {
            return Err(unterminated(p, "for"));
        };
        Some(target)
    } else {
        p.reset(checkpoint);
        None
    };

    let checkpoint = p.get_pos();
    p.skip_trivia();
    let recipy = if p.eat(TokenKind::IN_KW) {
        p.skip_trivia();
        let Some(recipy) = parse_recipy(p) else {
            return Err(unterminated(p, "in"));
        };
        Some(recipy)
    } else {
        p.reset(checkpoint);
        None
    };

    p.skip_trivia();
    if !p.at_eof() {
        let start = p.get_pos();
        while !p.at_eof() {
            p.bump();
        }
        tracing::debug!(
            annotation = %p.text_between(start, p.get_pos()),
            "ignoring trailing text after See clause"
        );
    }

    Ok(Some(match (target, recipy) {
        (None, None) => SeeDecl::Delegation(subject),
        (Some(target), None) => SeeDecl::ParamDelegation(subject, target),
        (target, Some(recipy)) => SeeDecl::Fallback(subject, target, Some(recipy)),
    }))
}
