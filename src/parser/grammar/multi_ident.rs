//! Templated identifiers
//!
//! ```text
//! MultiIdent = ident {OpeningSep {ident} ClosingSep} [ident]
//! Recipy     = ident
//! ```
//!
//! The separator group must follow the base without whitespace, and the
//! suffix must follow the closer the same way. Either closer ends either
//! opener.
//!
//! Alternatives are separated by commas or whitespace. A group holding one
//! compact run of lower-case letters or digits lists one alternative per
//! character, as in `GetTexParameter{if}v` or `Uniform{1234}`. Adjacent
//! groups multiply: `Uniform{1234}{i f d ui}` has sixteen alternatives.
//!
//! A closed group holding anything other than words (`FOO_{A: B}`) is prose,
//! so the rule backs off and leaves the value to the caller.

use super::CellParser;
use crate::base::Ident;
use crate::parser::errors::{ErrorKind, SyntaxError};
use crate::parser::token_kind::TokenKind;
use crate::syntax::{MultiIdent, Recipy};
use indexmap::IndexSet;

pub fn parse_multi_ident<P: CellParser>(p: &mut P) -> Result<Option<MultiIdent>, SyntaxError> {
    if !p.current_kind().is_ident() || p.at_eof() {
        return Ok(None);
    }
    let start = p.get_pos();
    let base = Ident::from(p.current_text());
    p.bump();

    let mut expansions: IndexSet<Ident> = IndexSet::new();
    let mut grouped = false;
    while p.at_any(&[TokenKind::L_BRACE, TokenKind::L_BRACKET]) {
        let Some(group) = parse_group(p)? else {
            tracing::trace!(%base, "separator group holds prose, not an identifier template");
            p.reset(start);
            return Ok(None);
        };
        expansions = product(expansions, group);
        grouped = true;
    }

    let suffix = if grouped && p.current_kind().is_ident() && !p.at_eof() {
        let suffix = Ident::from(p.current_text());
        p.bump();
        Some(suffix)
    } else {
        None
    };

    Ok(Some(MultiIdent {
        base,
        expansions,
        suffix,
    }))
}

/// One `{...}` or `[...]` group. `Ok(None)` when the group closes but holds
/// something other than identifiers.
fn parse_group<P: CellParser>(p: &mut P) -> Result<Option<Vec<Ident>>, SyntaxError> {
    let opened = p.current_range();
    let opener = p.current_text().to_string();
    p.bump();

    let mut words: Vec<Ident> = Vec::new();
    let mut separated = false;
    let mut foreign = false;
    loop {
        if p.at_eof() {
            return Err(SyntaxError::builder(ErrorKind::MalformedMultiIndent)
                .message(format!("unterminated '{opener}' in identifier template"))
                .range(p.current_range())
                .hint("add the missing closing separator")
                .related(format!("'{opener}' opened here"), opened)
                .build());
        }
        let kind = p.current_kind();
        if kind.is_closing_sep() {
            p.bump();
            break;
        }
        if kind.is_trivia() || kind == TokenKind::COMMA {
            separated = true;
        } else if kind.is_ident() || kind.is_keyword() || kind == TokenKind::NUMBER {
            words.push(Ident::from(p.current_text()));
        } else {
            foreign = true;
        }
        p.bump();
    }
    if foreign {
        return Ok(None);
    }

    let compact = matches!(words.as_slice(), [word] if !separated && is_compact(word));
    Ok(Some(if compact {
        words[0].chars().map(|c| Ident::from(c.to_string())).collect()
    } else {
        words
    }))
}

/// Every alternative of `left` joined with every alternative of `right`.
/// An empty side leaves the other unchanged.
fn product(left: IndexSet<Ident>, right: Vec<Ident>) -> IndexSet<Ident> {
    if left.is_empty() {
        return right.into_iter().collect();
    }
    if right.is_empty() {
        return left;
    }
    left.iter()
        .flat_map(|head| right.iter().map(move |tail| Ident::from(format!("{head}{tail}"))))
        .collect()
}

/// `if`, `sifd`, `1234`: one alternative per character
fn is_compact(word: &str) -> bool {
    word.len() > 1
        && (word.bytes().all(|b| b.is_ascii_lowercase()) || word.bytes().all(|b| b.is_ascii_digit()))
}

pub fn parse_recipy<P: CellParser>(p: &mut P) -> Option<Recipy> {
    if p.at_eof() || !p.current_kind().is_ident() {
        return None;
    }
    let label = Recipy(Ident::from(p.current_text()));
    p.bump();
    Some(label)
}
