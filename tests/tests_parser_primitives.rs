//! Parser Tests - Primitive Prefix Parsers
//!
//! `SectionRef`, `SectionDef`, `MultiIdent`, `Recipy` and `SeeDecl` parsed
//! from the start of a token slice, reporting how many tokens they consumed.

use refcard::parser::{prefix, tokenize};
use refcard::{
    ErrorKind, MultiIdent, PatternLibrary, Recipy, SectionDef, SectionRef, SeeDecl, expand,
    parse_section_heading,
};
use rstest::rstest;

// ============================================================================
// SectionRef
// ============================================================================

#[rstest]
#[case("8", SectionRef::new(8), 1)]
#[case("8.14", SectionRef::with_minor(8, 14), 3)]
#[case("8.14-16", SectionRef::with_range(8, 14, 16), 5)]
#[case("8.14-x", SectionRef::with_minor(8, 14), 3)]
#[case("8.x", SectionRef::new(8), 1)]
#[case("23.18]", SectionRef::with_minor(23, 18), 3)]
fn test_section_ref_prefix(
    #[case] input: &str,
    #[case] expected: SectionRef,
    #[case] consumed: usize,
) {
    let tokens = tokenize(input);
    assert_eq!(prefix::section_ref(&tokens), Some((expected, consumed)));
}

#[rstest]
#[case("")]
#[case("x.1")]
#[case(" 8")]
fn test_section_ref_needs_leading_number(#[case] input: &str) {
    assert_eq!(prefix::section_ref(&tokenize(input)), None);
}

#[test]
fn test_section_ref_display() {
    assert_eq!(SectionRef::with_range(8, 14, 16).to_string(), "8.14-16");
    assert_eq!(SectionRef::with_minor(8, 14).to_string(), "8.14");
}

// ============================================================================
// SectionDef
// ============================================================================

#[test]
fn test_section_def_pair() {
    let tokens = tokenize("[10.4, 23.18] trailing");
    let (section, consumed) = prefix::section_def(&tokens)
        .expect("well formed")
        .expect("a section list");
    assert_eq!(section.defining(), &SectionRef::with_minor(10, 4));
    assert_eq!(section.supplementary(), Some(&SectionRef::with_minor(23, 18)));
    assert_eq!(consumed, 10);
    assert_eq!(section.to_string(), "[10.4, 23.18]");
}

#[test]
fn test_section_def_unterminated() {
    let error = prefix::section_def(&tokenize("[10.4, 23.18"))
        .expect_err("missing bracket");
    assert_eq!(error.kind, ErrorKind::MalformedSectionDef);
    assert!(error.has_hint());
}

#[rstest]
#[case("[0..MAX-1]")]
#[case("[x]")]
#[case("10.4")]
fn test_not_a_section_def(#[case] input: &str) {
    assert_eq!(prefix::section_def(&tokenize(input)), Ok(None));
}

// ============================================================================
// Section Headings
// ============================================================================

#[test]
fn test_section_heading() {
    let heading = parse_section_heading("Buffer Object Queries [6, 6.7]").expect("heading");
    assert_eq!(heading.title, "Buffer Object Queries");
    assert_eq!(
        heading.section,
        SectionDef::new(SectionRef::new(6), [SectionRef::with_minor(6, 7)])
    );
    assert_eq!(heading.to_string(), "Buffer Object Queries [6, 6.7]");
}

#[rstest]
#[case("Buffer Object Queries [6, 6.7")]
#[case("Buffer Object Queries")]
#[case("Buffer Object Queries [see above]")]
#[case("Buffer Object Queries [6] extra")]
fn test_malformed_section_heading(#[case] input: &str) {
    let error = parse_section_heading(input).expect_err("malformed heading");
    assert_eq!(error.kind, ErrorKind::MalformedSectionDef);
}

// ============================================================================
// MultiIdent
// ============================================================================

#[test]
fn test_multi_ident_plain() {
    let tokens = tokenize("TexImage1D for");
    assert_eq!(
        prefix::multi_ident(&tokens),
        Ok(Some((MultiIdent::plain("TexImage1D"), 1)))
    );
}

#[test]
fn test_multi_ident_group_and_suffix() {
    let tokens = tokenize("TEXTURE_{WIDTH, HEIGHT}_ARB");
    let (ident, consumed) = prefix::multi_ident(&tokens).unwrap().unwrap();
    assert_eq!(
        ident,
        MultiIdent::templated("TEXTURE_", ["WIDTH", "HEIGHT"], Some("_ARB".into()))
    );
    assert_eq!(consumed, 8);
    assert_eq!(ident.to_string(), "TEXTURE_{WIDTH, HEIGHT}_ARB");
}

#[test]
fn test_multi_ident_duplicates_collapse() {
    let (ident, _) = prefix::multi_ident(&tokenize("A_{X, Y, X}")).unwrap().unwrap();
    assert_eq!(ident.expansions.len(), 2);
}

#[test]
fn test_multi_ident_compact_group_lists_characters() {
    let (ident, _) = prefix::multi_ident(&tokenize("GetTexParameter{if}v")).unwrap().unwrap();
    assert_eq!(
        ident,
        MultiIdent::templated("GetTexParameter", ["i", "f"], Some("v".into()))
    );
    let members = expand(&ident, PatternLibrary::builtin());
    assert_eq!(
        members.as_literal().unwrap().iter().collect::<Vec<_>>(),
        ["GetTexParameteriv", "GetTexParameterfv"]
    );
}

#[test]
fn test_multi_ident_space_separated_group() {
    let (ident, _) = prefix::multi_ident(&tokenize("Uniform{1 2 3 4}")).unwrap().unwrap();
    assert_eq!(ident, MultiIdent::templated("Uniform", ["1", "2", "3", "4"], None));
}

#[test]
fn test_multi_ident_lenient_closer() {
    let (ident, _) = prefix::multi_ident(&tokenize("FOO_{A, B]")).unwrap().unwrap();
    assert_eq!(ident, MultiIdent::templated("FOO_", ["A", "B"], None));
}

#[test]
fn test_multi_ident_empty_group() {
    let (ident, consumed) = prefix::multi_ident(&tokenize("FOO_{}")).unwrap().unwrap();
    assert!(!ident.is_templated());
    assert_eq!(consumed, 3);
    assert_eq!(
        expand(&ident, PatternLibrary::builtin()).as_literal().unwrap().len(),
        1
    );
}

#[rstest]
#[case("FOO_{A, B")]
#[case("FOO_{A: B")]
#[case("Uniform{1234}{i f")]
fn test_multi_ident_malformed(#[case] input: &str) {
    let error = prefix::multi_ident(&tokenize(input)).expect_err("malformed group");
    assert_eq!(error.kind, ErrorKind::MalformedMultiIndent);
    assert!(error.has_related());
}

#[rstest]
#[case("FOO_{A: B}")]
#[case("range[0..7]")]
fn test_multi_ident_backs_off_from_prose_group(#[case] input: &str) {
    assert_eq!(prefix::multi_ident(&tokenize(input)), Ok(None));
}

#[test]
fn test_multi_ident_groups_multiply() {
    let tokens = tokenize("Uniform{1234}{i f d ui}v");
    let (ident, consumed) = prefix::multi_ident(&tokens).unwrap().unwrap();
    assert_eq!(consumed, tokens.len());
    assert_eq!(ident.expansions.len(), 16);
    assert_eq!(ident.expansions.first().map(|e| e.as_str()), Some("1i"));
    assert_eq!(ident.expansions.last().map(|e| e.as_str()), Some("4ui"));
    assert_eq!(ident.suffix.as_deref(), Some("v"));
}

#[test]
fn test_multi_ident_needs_identifier() {
    assert_eq!(prefix::multi_ident(&tokenize("{A}")), Ok(None));
}

// ============================================================================
// Recipy and SeeDecl
// ============================================================================

#[test]
fn test_recipy() {
    assert_eq!(
        prefix::recipy(&tokenize("table above")),
        Some((Recipy("table".into()), 1))
    );
    assert_eq!(prefix::recipy(&tokenize("8")), None);
}

#[test]
fn test_see_decl_consumes_annotation() {
    let tokens = tokenize("See TexImage2D above");
    let (decl, consumed) = prefix::see_decl(&tokens).unwrap().unwrap();
    assert_eq!(decl, SeeDecl::Delegation(MultiIdent::plain("TexImage2D")));
    assert_eq!(consumed, tokens.len());
    assert_eq!(decl.to_string(), "See TexImage2D");
}

#[test]
fn test_see_decl_for_binds_to_preceding_ident() {
    let tokens = tokenize("See internalformat for TexImage3D");
    let (decl, _) = prefix::see_decl(&tokens).unwrap().unwrap();
    assert_eq!(decl.subject(), &MultiIdent::plain("internalformat"));
    assert_eq!(decl.to_string(), "See internalformat for TexImage3D");
}

#[test]
fn test_see_decl_requires_see() {
    assert_eq!(prefix::see_decl(&tokenize("TexImage2D")), Ok(None));
}

#[test]
fn test_see_decl_prose_is_not_a_declaration() {
    assert_eq!(prefix::see_decl(&tokenize("See Table 6.2")), Ok(None));
}

#[test]
fn test_see_decl_unterminated() {
    let error = prefix::see_decl(&tokenize("See X for ")).expect_err("dangling for");
    assert_eq!(error.kind, ErrorKind::UnterminatedSeeClause);
}
