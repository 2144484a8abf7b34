//! Logos-based lexer for parameter cells
//!
//! The lexer is lossless: whitespace is kept as a trivia token, and every
//! character of the input belongs to exactly one token. Concatenating the
//! texts of a token run gives back the source text of that run, which is how
//! verbatim `Other` values are produced.

use super::token_kind::TokenKind;
use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Rebuild the source text of a token run
pub fn source_text(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.text).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    // =========================================================================
    // WORDS
    // =========================================================================
    #[regex(r"[A-Z_]+", priority = 3)]
    UpperIdent,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Number,

    #[regex(r"[^ \t\r\nA-Za-z0-9_{}\[\],:.\-]+")]
    Text,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,

    // =========================================================================
    // KEYWORDS (longest match wins, so `Seed` stays an identifier)
    // =========================================================================
    #[token("See")]
    SeeKw,
    #[token("for")]
    ForKw,
    #[token("in")]
    InKw,
    #[token("or")]
    OrKw,
    #[token("Bitwise")]
    BitwiseKw,
    #[token("Table")]
    TableKw,
    #[token("Tables")]
    TablesKw,
    #[token("plus")]
    PlusKw,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => TokenKind::WHITESPACE,

            UpperIdent => TokenKind::UPPER_IDENT,
            Ident => TokenKind::IDENT,
            Number => TokenKind::NUMBER,
            Text => TokenKind::TEXT,

            LBrace => TokenKind::L_BRACE,
            RBrace => TokenKind::R_BRACE,
            LBracket => TokenKind::L_BRACKET,
            RBracket => TokenKind::R_BRACKET,
            Comma => TokenKind::COMMA,
            Colon => TokenKind::COLON,
            Dot => TokenKind::DOT,
            Minus => TokenKind::MINUS,

            SeeKw => TokenKind::SEE_KW,
            ForKw => TokenKind::FOR_KW,
            InKw => TokenKind::IN_KW,
            OrKw => TokenKind::OR_KW,
            BitwiseKw => TokenKind::BITWISE_KW,
            TableKw => TokenKind::TABLE_KW,
            TablesKw => TokenKind::TABLES_KW,
            PlusKw => TokenKind::PLUS_KW,
        }
    }
}
