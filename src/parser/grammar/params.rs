//! Cell level grammar
//!
//! ```text
//! Params = Names ":" Value {"," Value}
//! Names  = ident {"," ident}
//! ```
//!
//! Splitting only happens at depth 0. Depth counts matched bracket pairs of
//! either kind; an opener that is never closed does not shield the commas
//! after it, so one broken value cannot swallow the rest of the cell.

use super::enumeration::{parse_index_declaration, parse_value};
use crate::base::{ANONYMOUS_PARAM, Ident};
use crate::expand::{Expansion, SymbolicRange, split_placeholder};
use crate::parser::errors::{ErrorKind, SyntaxError};
use crate::parser::lexer::{Token, tokenize};
use crate::parser::options::ParseOptions;
use crate::parser::parser::Parser;
use crate::parser::token_kind::TokenKind;
use crate::parser::ParseResult;
use crate::syntax::{Enum, Family, Params};
use text_size::TextRange;

/// Parse a whole tokenized cell.
pub fn parse_cell(tokens: &[Token<'_>], options: &ParseOptions<'_>) -> ParseResult {
    let mut errors = Vec::new();
    let end = tokens.last().map(|t| t.range().end()).unwrap_or_default();
    let depths = depths(tokens);

    let colon = tokens
        .iter()
        .zip(&depths)
        .position(|(t, &depth)| t.kind == TokenKind::COLON && depth == 0);

    let (names, value_tokens) = match colon {
        Some(index) => (parse_names(&tokens[..index], &depths[..index]), &tokens[index + 1..]),
        None => {
            errors.push(
                SyntaxError::new(
                    ErrorKind::EmptyParams,
                    "missing ':' between parameter names and values",
                    TextRange::up_to(end),
                )
                .with_hint("the whole cell is read as values of an anonymous parameter"),
            );
            (Vec::new(), tokens)
        }
    };
    let names = if names.is_empty() {
        vec![Ident::from(ANONYMOUS_PARAM)]
    } else {
        names
    };

    let mut values = Vec::new();
    for segment in split_values(value_tokens) {
        let mut p = Parser::new(segment);
        parse_value(&mut p, options, &mut values);
        errors.extend(p.finish());
    }

    if values.is_empty() {
        if colon.is_some() {
            errors.push(SyntaxError::at_offset(
                ErrorKind::EmptyParams,
                "no values after ':'",
                end,
            ));
        }
        values.push(Enum::Other(String::new()));
    }

    let values = absorb_index_declarations(merge_bitwise(values));
    ParseResult {
        params: Params { names, values },
        errors,
    }
}

/// Depth of every token, counting matched bracket pairs only.
fn depths(tokens: &[Token<'_>]) -> Vec<usize> {
    let mut matched = vec![false; tokens.len()];
    let mut open = Vec::new();
    for (index, token) in tokens.iter().enumerate() {
        if token.kind.is_opening_sep() {
            open.push(index);
        } else if token.kind.is_closing_sep() {
            if let Some(opener) = open.pop() {
                matched[opener] = true;
                matched[index] = true;
            }
        }
    }

    let mut depth = 0usize;
    tokens
        .iter()
        .zip(&matched)
        .map(|(token, &matched)| {
            if matched && token.kind.is_closing_sep() {
                depth = depth.saturating_sub(1);
            }
            let current = depth;
            if matched && token.kind.is_opening_sep() {
                depth += 1;
            }
            current
        })
        .collect()
}

fn trim_trivia<'t, 'a>(mut tokens: &'t [Token<'a>]) -> &'t [Token<'a>] {
    while let [first, rest @ ..] = tokens {
        if !first.kind.is_trivia() {
            break;
        }
        tokens = rest;
    }
    while let [rest @ .., last] = tokens {
        if !last.kind.is_trivia() {
            break;
        }
        tokens = rest;
    }
    tokens
}

fn split_at_depth_zero<'t, 'a>(tokens: &'t [Token<'a>], depths: &[usize]) -> Vec<&'t [Token<'a>]> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (index, (token, &depth)) in tokens.iter().zip(depths).enumerate() {
        if token.kind == TokenKind::COMMA && depth == 0 {
            segments.push(&tokens[start..index]);
            start = index + 1;
        }
    }
    segments.push(&tokens[start..]);
    segments
        .into_iter()
        .map(trim_trivia)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Split a value list on depth-0 commas, dropping empty values.
pub fn split_values<'t, 'a>(tokens: &'t [Token<'a>]) -> Vec<&'t [Token<'a>]> {
    split_at_depth_zero(tokens, &depths(tokens))
}

fn parse_names(tokens: &[Token<'_>], depths: &[usize]) -> Vec<Ident> {
    split_at_depth_zero(tokens, depths)
        .into_iter()
        .map(|segment| {
            let text: Vec<&str> = segment
                .iter()
                .filter(|t| !t.kind.is_trivia())
                .map(|t| t.text)
                .collect();
            Ident::from(text.join(" "))
        })
        .collect()
}

/// `Bitwise OR of A, B, or C` reads as one formula: the values listed after
/// a bitwise value are its operands.
fn merge_bitwise(values: Vec<Enum>) -> Vec<Enum> {
    let mut merged: Vec<Enum> = Vec::with_capacity(values.len());
    for value in values {
        if let Some(Enum::Bitwise(formula)) = merged.last_mut() {
            let extended = match &value {
                Enum::Or(continuation) => Some(formula.or(continuation)),
                Enum::Variant(name) => Some(formula.then(name)),
                Enum::Other(text) => Some(formula.then(text)),
                Enum::Family(family) => Some(formula.then(&family.template)),
                _ => None,
            };
            if let Some(extended) = extended {
                tracing::trace!(operand = %value, "operand folded into bitwise formula");
                *formula = extended;
                continue;
            }
        }
        merged.push(value);
    }
    merged
}

/// Fold `FOOi, i = [0..MAX_FOO-1]` into one family with an explicit range.
fn absorb_index_declarations(values: Vec<Enum>) -> Vec<Enum> {
    let mut absorbed: Vec<Enum> = Vec::with_capacity(values.len());
    for value in values {
        if let Enum::Other(text) = &value {
            if let Some(previous) = absorbed.last_mut() {
                if let Some(family) = absorb_index_declaration(previous, text) {
                    tracing::debug!(declaration = %text, "index declaration absorbed into family");
                    *previous = family;
                    continue;
                }
            }
        }
        absorbed.push(value);
    }
    absorbed
}

fn absorb_index_declaration(previous: &Enum, declaration: &str) -> Option<Enum> {
    let signature = match previous {
        Enum::Other(text) => text.as_str(),
        Enum::Family(family) => family.template.as_str(),
        _ => return None,
    };
    let (prefix, placeholder) = split_placeholder(signature)?;

    let tokens = tokenize(declaration);
    let mut p = Parser::new(&tokens);
    let (declared, start, end) = parse_index_declaration(&mut p)?;
    if declared != placeholder {
        return None;
    }

    Some(Enum::Family(Family {
        template: signature.to_string(),
        members: Expansion::Range(SymbolicRange::new(prefix, placeholder, start, end)),
    }))
}
