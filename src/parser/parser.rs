//! Parser state over the tokens of one value
//!
//! Grammar rules live in [`super::grammar`] and drive the parser through the
//! [`CellParser`] trait. Every rule works on a token slice that belongs to a
//! single comma-delimited value, so "end of input" means "end of value".

use super::errors::SyntaxError;
use super::grammar::CellParser;
use super::lexer::{Token, source_text};
use super::token_kind::TokenKind;
use text_size::{TextRange, TextSize};

/// The parser state
pub struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    errors: Vec<SyntaxError>,
}

impl<'t, 'a> Parser<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Number of tokens consumed so far
    pub fn consumed(&self) -> usize {
        self.pos
    }

    pub fn finish(self) -> Vec<SyntaxError> {
        self.errors
    }

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }
}

impl CellParser for Parser<'_, '_> {
    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current_kind(&self) -> TokenKind {
        self.current().map(|t| t.kind).unwrap_or(TokenKind::ERROR)
    }

    fn current_text(&self) -> &str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    fn current_range(&self) -> TextRange {
        match self.current() {
            Some(token) => token.range(),
            None => TextRange::empty(self.end_offset()),
        }
    }

    fn at(&self, kind: TokenKind) -> bool {
        !self.at_eof() && self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[TokenKind]) -> bool {
        !self.at_eof() && kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek_kind(&self, n: usize) -> TokenKind {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::ERROR)
    }

    // =========================================================================
    // Position tracking
    // =========================================================================

    fn get_pos(&self) -> usize {
        self.pos
    }

    fn reset(&mut self, pos: usize) {
        self.pos = pos.min(self.tokens.len());
    }

    fn end_offset(&self) -> TextSize {
        self.tokens
            .last()
            .map(|t| t.range().end())
            .unwrap_or_default()
    }

    fn text_between(&self, start: usize, end: usize) -> String {
        let end = end.min(self.tokens.len());
        source_text(&self.tokens[start.min(end)..end])
    }

    fn range_between(&self, start: usize, end: usize) -> TextRange {
        let end = end.min(self.tokens.len());
        match (self.tokens.get(start), end.checked_sub(1).and_then(|i| self.tokens.get(i))) {
            (Some(first), Some(last)) if start < end => {
                TextRange::new(first.offset, last.range().end())
            }
            _ => TextRange::empty(self.end_offset()),
        }
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if !self.at_eof() {
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_trivia(&mut self) {
        while self.current().is_some_and(|t| t.kind.is_trivia()) {
            self.bump();
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, error: SyntaxError) {
        tracing::debug!(code = error.kind.code(), message = %error.message, "syntax error");
        self.errors.push(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;

    #[test]
    fn test_peek_skips_trivia() {
        let tokens = tokenize("See  X for Y");
        let p = Parser::new(&tokens);
        assert_eq!(p.peek_kind(0), TokenKind::SEE_KW);
        assert_eq!(p.peek_kind(1), TokenKind::UPPER_IDENT);
        assert_eq!(p.peek_kind(2), TokenKind::FOR_KW);
        assert_eq!(p.peek_kind(9), TokenKind::ERROR);
    }

    #[test]
    fn test_eat_and_reset() {
        let tokens = tokenize("[Table 8]");
        let mut p = Parser::new(&tokens);
        assert!(p.eat(TokenKind::L_BRACKET));
        assert!(!p.eat(TokenKind::NUMBER));
        assert!(p.eat(TokenKind::TABLE_KW));
        p.skip_trivia();
        assert_eq!(p.current_text(), "8");
        p.reset(0);
        assert_eq!(p.consumed(), 0);
    }

    #[test]
    fn test_text_and_range_between() {
        let tokens = tokenize("a, b c");
        let p = Parser::new(&tokens);
        assert_eq!(p.text_between(3, 6), "b c");
        assert_eq!(
            p.range_between(3, 6),
            TextRange::new(TextSize::new(3), TextSize::new(6))
        );
        assert_eq!(p.range_between(6, 6), TextRange::empty(TextSize::new(6)));
    }

    #[test]
    fn test_at_eof_is_never_at_error() {
        let tokens = tokenize("");
        let p = Parser::new(&tokens);
        assert!(p.at_eof());
        assert!(!p.at(TokenKind::ERROR));
        assert_eq!(p.current_range(), TextRange::empty(TextSize::new(0)));
    }
}
