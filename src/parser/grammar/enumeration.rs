//! Classification of one comma-delimited value
//!
//! Shapes are tried in a fixed order and the first match wins:
//!
//! ```text
//! TableRef / TableRefs   "[" ["See"] ("Table" | "Tables") ...
//! See                    "See" ...
//! Bitwise                "Bitwise" Formula
//! Or                     "or" Formula
//! Variant                a single [A-Z_]+ word
//! Family                 an all-caps template, or a single registered signature
//! Other                  anything else, verbatim
//! ```

use super::section::parse_table_delegation;
use super::see::parse_see_decl;
use super::{CellParser, parse_number};
use crate::base::Ident;
use crate::expand::{Bound, Expansion, expand_template, is_template};
use crate::parser::errors::{ErrorKind, SyntaxError};
use crate::parser::options::ParseOptions;
use crate::parser::token_kind::TokenKind;
use crate::syntax::{Enum, Family, Formula};
use text_size::{TextRange, TextSize};

/// Parse one value into `values`.
///
/// Usually pushes a single [`Enum`]. A leading table delegation followed by
/// more text pushes the table and the classified remainder when
/// `split_leading_table` is set.
pub fn parse_value<P: CellParser>(p: &mut P, options: &ParseOptions<'_>, values: &mut Vec<Enum>) {
    p.skip_trivia();
    let start = p.get_pos();

    match parse_table_delegation(p) {
        Ok(Some(table)) => {
            p.skip_trivia();
            if p.at_eof() {
                values.push(table);
            } else if options.split_leading_table {
                tracing::debug!(%table, "splitting leading table reference off the value");
                values.push(table);
                values.push(classify(p, options));
            } else {
                values.push(Enum::Other(remainder(p, start)));
            }
        }
        Ok(None) => values.push(classify(p, options)),
        Err(error) => {
            p.error(error);
            let raw = remainder(p, start);
            tracing::debug!(value = %raw, "malformed table reference kept as text");
            values.push(Enum::Other(raw));
        }
    }
}

/// Consume the rest of the value and return its verbatim text.
fn remainder<P: CellParser>(p: &mut P, start: usize) -> String {
    while !p.at_eof() {
        p.bump();
    }
    p.text_between(start, p.get_pos()).trim().to_string()
}

fn classify<P: CellParser>(p: &mut P, options: &ParseOptions<'_>) -> Enum {
    let start = p.get_pos();

    if p.at(TokenKind::SEE_KW) {
        return match parse_see_decl(p) {
            Ok(Some(decl)) => {
                tracing::trace!(%decl, "see declaration");
                Enum::See(decl)
            }
            Ok(None) => Enum::Other(remainder(p, start)),
            Err(error) => {
                p.error(error);
                Enum::Other(remainder(p, start))
            }
        };
    }

    if p.eat(TokenKind::BITWISE_KW) {
        let formula = Formula::new(&remainder(p, start + 1));
        return Enum::Bitwise(formula);
    }

    if p.eat(TokenKind::OR_KW) {
        let formula = Formula::new(&remainder(p, start + 1));
        return Enum::Or(formula);
    }

    if p.at(TokenKind::UPPER_IDENT) {
        let name = Ident::from(p.current_text());
        p.bump();
        p.skip_trivia();
        if p.at_eof() {
            tracing::trace!(%name, "variant");
            return Enum::Variant(name);
        }
        p.reset(start);
    }

    let single_word = !p.at_eof() && p.current_kind().is_ident() && {
        p.bump();
        p.skip_trivia();
        let alone = p.at_eof();
        p.reset(start);
        alone
    };
    let value_start = p.current_range().start();
    let raw = remainder(p, start);

    if is_template(&raw) {
        return match expand_template(&raw) {
            Ok(members) => family_from_template(&raw, members),
            Err(error) => {
                let offset = value_start + TextSize::new(error.offset() as u32);
                p.error(
                    SyntaxError::builder(ErrorKind::MalformedMultiIndent)
                        .message(error.to_string())
                        .range(TextRange::at(offset, TextSize::new(1)))
                        .build(),
                );
                Enum::Other(raw)
            }
        };
    }

    if single_word {
        if let Some(rule) = options.library.lookup(&raw) {
            tracing::trace!(signature = %raw, "family from pattern library");
            return Enum::Family(Family {
                template: raw,
                members: rule.expansion(),
            });
        }
    }

    Enum::Other(raw)
}

fn family_from_template(raw: &str, members: Vec<String>) -> Enum {
    let members: Vec<String> = members.into_iter().filter(|m| !m.is_empty()).collect();
    if members.is_empty() {
        return Enum::Other(raw.to_string());
    }
    let template = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    tracing::trace!(%template, count = members.len(), "family from template");
    Enum::Family(Family {
        template,
        members: Expansion::literal(members),
    })
}

/// Parse an index declaration such as `i = [0..MAX_CLIP_DISTANCES-1]`.
///
/// Returns the placeholder letter, the first index and the last index.
pub fn parse_index_declaration<P: CellParser>(p: &mut P) -> Option<(char, u32, Bound)> {
    p.skip_trivia();
    if !p.at(TokenKind::IDENT) {
        return None;
    }
    let mut letters = p.current_text().chars();
    let placeholder = letters.next().filter(|c| c.is_ascii_lowercase())?;
    if letters.next().is_some() {
        return None;
    }
    p.bump();
    p.skip_trivia();
    if !(p.at(TokenKind::TEXT) && p.current_text() == "=") {
        return None;
    }
    p.bump();
    p.skip_trivia();
    if !p.eat(TokenKind::L_BRACKET) {
        return None;
    }
    p.skip_trivia();
    let start = parse_number(p)?;
    if !(p.eat(TokenKind::DOT) && p.eat(TokenKind::DOT)) {
        return None;
    }

    let limit = if p.current_kind().is_ident() && !p.at_eof() {
        let limit = Ident::from(p.current_text());
        p.bump();
        Some(limit)
    } else {
        None
    };
    let base = match &limit {
        Some(_) => 0,
        None => i64::from(parse_number(p)?),
    };

    let offset = if p.eat(TokenKind::MINUS) {
        -i64::from(parse_number(p)?)
    } else if p.at(TokenKind::TEXT) && p.current_text() == "+" {
        p.bump();
        i64::from(parse_number(p)?)
    } else {
        0
    };

    p.skip_trivia();
    if !p.eat(TokenKind::R_BRACKET) {
        return None;
    }
    p.skip_trivia();
    if !p.at_eof() {
        return None;
    }

    let end = match limit {
        Some(limit) => Bound {
            limits: vec![limit],
            offset,
        },
        None => Bound::constant(base + offset),
    };
    Some((placeholder, start, end))
}
