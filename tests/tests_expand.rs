//! Expansion Tests - Templates and the Pattern Library
//!
//! Families parsed out of cells expand either into literal member lists or
//! into symbolic ranges that the caller materializes once limits are known.

use refcard::expand::{Bound, FamilyRule, TemplateError, is_template, split_placeholder};
use refcard::{
    Enum, Expansion, MultiIdent, PatternLibrary, SymbolicRange, expand, expand_template,
    parse_enum, parse_params,
};
use rstest::rstest;

// ============================================================================
// Templates
// ============================================================================

#[rstest]
#[case("TEXTURE_{WIDTH, HEIGHT}", &["TEXTURE_WIDTH", "TEXTURE_HEIGHT"])]
#[case("[UN]PACK_SWAP_BYTES", &["PACK_SWAP_BYTES", "UNPACK_SWAP_BYTES"])]
#[case(
    "[UN]PACK_{ALIGNMENT, SKIP_{ROWS, PIXELS}}",
    &[
        "PACK_ALIGNMENT",
        "PACK_SKIP_ROWS",
        "PACK_SKIP_PIXELS",
        "UNPACK_ALIGNMENT",
        "UNPACK_SKIP_ROWS",
        "UNPACK_SKIP_PIXELS",
    ]
)]
#[case("COLOR_{RED GREEN}", &["COLOR_RED", "COLOR_GREEN"])]
#[case("A, B_{X, Y}", &["A", "B_X", "B_Y"])]
fn test_expand_template(#[case] template: &str, #[case] expected: &[&str]) {
    assert!(is_template(template));
    assert_eq!(expand_template(template).unwrap(), expected);
}

#[test]
fn test_expand_template_errors() {
    assert!(matches!(
        expand_template("TEXTURE_{WIDTH"),
        Err(TemplateError::Unclosed { opener: '{', offset: 8 })
    ));
    assert!(matches!(
        expand_template("TEXTURE_}"),
        Err(TemplateError::UnexpectedCloser { closer: '}', .. })
    ));
}

#[test]
fn test_family_value_lists_every_member() {
    let result = parse_params("pname: [UN]PACK_{ROW_LENGTH, ALIGNMENT}");
    let Enum::Family(family) = &result.params.values[0] else {
        panic!("expected a family");
    };
    assert_eq!(family.members.as_literal().unwrap().len(), 4);
}

// ============================================================================
// MultiIdent expansion
// ============================================================================

#[test]
fn test_expand_multi_ident() {
    let ident = MultiIdent::templated("TEXTURE_", ["WIDTH", "HEIGHT", "DEPTH"], None);
    assert_eq!(
        expand(&ident, PatternLibrary::builtin()),
        Expansion::literal(["TEXTURE_WIDTH", "TEXTURE_HEIGHT", "TEXTURE_DEPTH"])
    );
}

#[test]
fn test_expand_plain_identifier_is_singleton() {
    let ident = MultiIdent::plain("TexImage1D");
    assert_eq!(
        expand(&ident, &PatternLibrary::empty()),
        Expansion::literal(["TexImage1D"])
    );
}

// ============================================================================
// Pattern Library
// ============================================================================

#[rstest]
#[case("CLIP_DISTANCEi")]
#[case("TEXTUREi")]
#[case("COLOR_ATTACHMENTi")]
#[case("DRAW_BUFFERi")]
fn test_builtin_families(#[case] signature: &str) {
    let library = PatternLibrary::builtin();
    assert!(library.contains(signature));
    assert!(matches!(library.lookup(signature), Some(FamilyRule::Range(_))));
}

#[test]
fn test_texture_family_materializes_with_largest_limit() {
    let Enum::Family(family) = parse_enum("TEXTUREi") else {
        panic!("expected a family");
    };
    let members = family
        .members
        .materialize(|limit| match limit {
            "MAX_TEXTURE_COORDS" => Some(2),
            "MAX_COMBINED_TEXTURE_IMAGE_UNITS" => Some(3),
            _ => None,
        })
        .expect("limits known");
    assert_eq!(members, ["TEXTURE0", "TEXTURE1", "TEXTURE2"]);
}

#[test]
fn test_unknown_limit_stays_symbolic() {
    let range = SymbolicRange::new("DRAW_BUFFER", 'i', 0, Bound::last_index_of("MAX_DRAW_BUFFERS"));
    assert_eq!(range.materialize(|_| None), None);
    assert_eq!(range.materialize(|_| Some(0)), Some(vec![]));
    assert_eq!(range.to_string(), "DRAW_BUFFERi, i = [0..MAX_DRAW_BUFFERS-1]");
}

#[test]
fn test_custom_range_family() {
    let library = PatternLibrary::builder()
        .range("VERTEX_ATTRIB_ARRAY", 'i', 0, Bound::last_index_of("MAX_VERTEX_ATTRIBS"))
        .build();
    let ident = MultiIdent::plain("VERTEX_ATTRIB_ARRAYi");
    let expansion = expand(&ident, &library);
    assert_eq!(
        expansion.as_range().map(SymbolicRange::signature),
        Some("VERTEX_ATTRIB_ARRAYi".into())
    );
    assert_eq!(split_placeholder("VERTEX_ATTRIB_ARRAYi"), Some(("VERTEX_ATTRIB_ARRAY", 'i')));
}
