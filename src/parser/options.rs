//! Parsing options

use crate::expand::PatternLibrary;

/// Options controlling how a cell is parsed
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions<'a> {
    /// Run the textual preprocessor before tokenizing
    pub normalize: bool,
    /// Registry consulted for families like `CLIP_DISTANCEi`
    pub library: &'a PatternLibrary,
    /// Split `[Table 6.1] TEXTURE_1D` into a table reference and a value
    pub split_leading_table: bool,
}

impl Default for ParseOptions<'static> {
    fn default() -> Self {
        Self {
            normalize: true,
            library: PatternLibrary::builtin(),
            split_leading_table: true,
        }
    }
}

impl<'a> ParseOptions<'a> {
    /// Default options with a custom pattern library
    pub fn with_library(library: &'a PatternLibrary) -> Self {
        Self {
            library,
            ..ParseOptions::default()
        }
    }
}
