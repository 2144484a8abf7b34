use smol_str::SmolStr;

/// Identifier text. Enumerant names are short, so inline storage avoids
/// most allocations.
pub type Ident = SmolStr;

/// Name used when a cell carries values but no parameter name list.
pub const ANONYMOUS_PARAM: &str = "_";

/// Check whether `text` is a non-empty run of `[A-Z_]` characters.
///
/// This is the shape of a plain enumerant such as `TEXTURE_2D` minus digits:
/// the grammar only treats values made entirely of capitals and underscores
/// as bare variants.
pub fn is_upper_ident(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_uppercase() || b == b'_')
}
