//! Property-based tests for the cell parser
//!
//! These tests check the guarantees every caller relies on: parsing is
//! total, normalization is idempotent and the lexer never loses text.

use proptest::prelude::*;
use refcard::parser::{TokenKind, source_text, tokenize};
use refcard::{Enum, ParseOptions, normalize, parse_enum, parse_params, parse_params_with};

/// Cell-like text built from the words and separators the grammar cares about
fn cell_soup() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        proptest::sample::select(vec![
            "The ",
            "Bitwise ",
            "OR of ",
            "or ",
            "plus ",
            ", ",
            ",",
            ": ",
            "See ",
            "for ",
            "in ",
            "[Table ",
            "8.14",
            "-16",
            "]",
            "{",
            "}",
            "{1234}",
            "{if}",
            "TEXTURE_",
            "WIDTH",
            "CLIP_DISTANCEi",
            "i = [0..MAX-1]",
            "level ",
            " ",
        ]),
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn parse_params_is_total(cell in "\\PC{0,80}") {
        let result = parse_params(&cell);
        prop_assert!(!result.params.names.is_empty());
        prop_assert!(!result.params.values.is_empty());
    }

    #[test]
    fn parse_params_is_total_on_grammar_soup(cell in cell_soup()) {
        for normalize in [true, false] {
            let options = ParseOptions { normalize, ..ParseOptions::default() };
            let result = parse_params_with(&cell, &options);
            prop_assert!(!result.params.names.is_empty());
            prop_assert!(!result.params.values.is_empty());
        }
    }

    #[test]
    fn parse_enum_is_total(value in "\\PC{0,60}") {
        let _ = parse_enum(&value);
    }

    #[test]
    fn normalize_is_idempotent(cell in cell_soup()) {
        let once = normalize(&cell);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn all_caps_words_are_variants(word in "[A-Z_]{1,24}") {
        prop_assert_eq!(parse_enum(&word), Enum::Variant(word.as_str().into()));
    }

    #[test]
    fn lexer_is_lossless(text in "\\PC{0,80}") {
        let tokens = tokenize(&text);
        prop_assert_eq!(source_text(&tokens), text.clone());
        prop_assert!(tokens.iter().all(|t| t.kind != TokenKind::ERROR));
    }
}
