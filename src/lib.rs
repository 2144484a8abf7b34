//! # refcard
//!
//! Grammar engine for the "Parameters" column of graphics API reference
//! tables. A cell such as
//!
//! ```text
//! pname: TEXTURE_{WIDTH, HEIGHT, DEPTH}, [Table 8.14], See TexImage1D
//! ```
//!
//! is turned into a typed [`Params`] value listing the parameter names and
//! one classified [`Enum`] per legal-value description.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! batch      → Multi-cell driver (sequential and rayon-parallel)
//!   ↓
//! parser     → Logos lexer, recursive-descent grammar, errors
//!   ↓
//! expand     → MultiIdent/template expansion, Pattern Library
//!   ↓
//! syntax     → Result model (Params, Enum, SeeDecl, SectionRef, ...)
//!   ↓
//! preprocess → Textual normalization of raw cells
//!   ↓
//! base       → Primitives (Ident, TextRange, TextSize)
//! ```

/// Foundation types: identifiers and text ranges
pub mod base;

/// Raw cell normalization
pub mod preprocess;

/// Result model produced by the parser
pub mod syntax;

/// Expansion of templated identifier families
pub mod expand;

/// Parser: Logos lexer, recursive-descent grammar, errors
pub mod parser;

/// Batch parsing of many cells
pub mod batch;

pub use base::{Ident, TextRange, TextSize};
pub use batch::{par_parse_cells, par_parse_cells_with, parse_cells, parse_cells_with};
pub use expand::{Expansion, PatternLibrary, SymbolicRange, expand, expand_template};
pub use parser::{
    ErrorKind, ParseOptions, ParseResult, SyntaxError, parse_enum, parse_enum_with, parse_params,
    parse_params_with, parse_section_heading,
};
pub use preprocess::normalize;
pub use syntax::{
    Enum, Family, Formula, MultiIdent, Params, Recipy, SectionDef, SectionHeading, SectionRef,
    SeeDecl,
};
