//! Foundation types for the refcard grammar engine.
//!
//! This module provides the primitives shared by every other layer:
//! - [`Ident`] - Cheaply clonable identifier text
//! - [`TextRange`], [`TextSize`] - Byte offsets into a normalized cell
//! - [`ANONYMOUS_PARAM`] - Placeholder name for cells without a name list
//!
//! This module has NO dependencies on other refcard modules.

mod ident;

pub use ident::{ANONYMOUS_PARAM, Ident, is_upper_ident};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
