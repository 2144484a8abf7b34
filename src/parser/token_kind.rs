//! Token kinds produced by the lexer

/// All token kinds of a parameter cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,

    // =========================================================================
    // WORDS
    // =========================================================================
    IDENT,       // TexImage1D, internalformat
    UPPER_IDENT, // TEXTURE_WIDTH (exactly [A-Z_]+)
    NUMBER,      // 14
    TEXT,        // any other run of prose characters

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,   // {
    R_BRACE,   // }
    L_BRACKET, // [
    R_BRACKET, // ]
    COMMA,     // ,
    COLON,     // :
    DOT,       // .
    MINUS,     // -

    // =========================================================================
    // KEYWORDS (case-sensitive, whole words only)
    // =========================================================================
    SEE_KW,
    FOR_KW,
    IN_KW,
    OR_KW,
    BITWISE_KW,
    TABLE_KW,
    TABLES_KW,
    PLUS_KW,

    // Special
    ERROR,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE)
    }

    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::SEE_KW as u16) && (self as u16) <= (Self::PLUS_KW as u16)
    }

    /// Identifiers of either case
    pub fn is_ident(self) -> bool {
        matches!(self, Self::IDENT | Self::UPPER_IDENT)
    }

    /// `{` or `[`
    pub fn is_opening_sep(self) -> bool {
        matches!(self, Self::L_BRACE | Self::L_BRACKET)
    }

    /// `}` or `]`
    pub fn is_closing_sep(self) -> bool {
        matches!(self, Self::R_BRACE | Self::R_BRACKET)
    }

    /// Human-readable name used in error messages
    pub fn describe(self) -> &'static str {
        match self {
            Self::WHITESPACE => "whitespace",
            Self::IDENT | Self::UPPER_IDENT => "identifier",
            Self::NUMBER => "number",
            Self::TEXT => "text",
            Self::L_BRACE => "'{'",
            Self::R_BRACE => "'}'",
            Self::L_BRACKET => "'['",
            Self::R_BRACKET => "']'",
            Self::COMMA => "','",
            Self::COLON => "':'",
            Self::DOT => "'.'",
            Self::MINUS => "'-'",
            Self::SEE_KW => "'See'",
            Self::FOR_KW => "'for'",
            Self::IN_KW => "'in'",
            Self::OR_KW => "'or'",
            Self::BITWISE_KW => "'Bitwise'",
            Self::TABLE_KW => "'Table'",
            Self::TABLES_KW => "'Tables'",
            Self::PLUS_KW => "'plus'",
            Self::ERROR => "invalid character",
        }
    }
}
