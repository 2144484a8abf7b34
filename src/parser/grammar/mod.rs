//! Grammar rules for parameter cells
//!
//! Rules are free functions generic over [`CellParser`], organized by the
//! shape they recognize:
//! - `section` - `SectionRef`, `SectionDef`, table delegations, headings
//! - `multi_ident` - templated identifiers and `Recipy` labels
//! - `see` - `See ...` cross-references
//! - `enumeration` - classification of one value into an `Enum`
//! - `params` - splitting a cell into names and values, post-processing
//!
//! Rules that may or may not apply return `Result<Option<T>, SyntaxError>`:
//! `Ok(None)` means "not this shape" and leaves the position where it was,
//! `Err` means the shape was recognized but is structurally broken.

pub mod enumeration;
pub mod multi_ident;
pub mod params;
pub mod section;
pub mod see;

pub use enumeration::{parse_index_declaration, parse_value};
pub use multi_ident::{parse_multi_ident, parse_recipy};
pub use params::{parse_cell, split_values};
pub use section::{parse_section_def, parse_section_ref, parse_table_delegation};
pub use see::parse_see_decl;

use super::errors::SyntaxError;
use super::token_kind::TokenKind;
use text_size::{TextRange, TextSize};

/// Trait for grammar operations
///
/// This trait defines the interface between the grammar rules and the
/// parser state.
pub trait CellParser {
    // Token inspection
    fn current_kind(&self) -> TokenKind;
    fn current_text(&self) -> &str;
    fn current_range(&self) -> TextRange;
    fn at(&self, kind: TokenKind) -> bool;
    fn at_any(&self, kinds: &[TokenKind]) -> bool;
    fn at_eof(&self) -> bool;

    /// Peek at the kind of the nth token ahead (skipping trivia)
    fn peek_kind(&self, n: usize) -> TokenKind;

    // Position tracking
    fn get_pos(&self) -> usize;
    fn reset(&mut self, pos: usize);
    fn end_offset(&self) -> TextSize;

    /// Verbatim source text of the tokens in `start..end`
    fn text_between(&self, start: usize, end: usize) -> String;
    fn range_between(&self, start: usize, end: usize) -> TextRange;

    // Token consumption
    fn bump(&mut self);
    fn eat(&mut self, kind: TokenKind) -> bool;

    // Trivia handling
    fn skip_trivia(&mut self);

    // Error handling
    fn error(&mut self, error: SyntaxError);
}

/// Parse a decimal number token into `u32`
fn parse_number<P: CellParser>(p: &mut P) -> Option<u32> {
    if !p.at(TokenKind::NUMBER) {
        return None;
    }
    let value = p.current_text().parse().ok()?;
    p.bump();
    Some(value)
}
