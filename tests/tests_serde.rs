//! Serialization of the result model (requires the `serde` feature)

#![cfg(feature = "serde")]

use refcard::{Enum, Params, SectionRef, parse_params};

#[test]
fn test_params_roundtrip_through_json() {
    let params = parse_params(
        "pname: TEXTURE_{WIDTH, HEIGHT}, [Table 8.14], See internalformat for TexImage3D, CLIP_DISTANCEi",
    )
    .into_params();

    let json = serde_json::to_string(&params).expect("serialize");
    let back: Params = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, params);
}

#[test]
fn test_table_ref_json_shape() {
    let value = Enum::TableRef(SectionRef::with_minor(8, 14));
    let json = serde_json::to_value(&value).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({ "TableRef": { "major": 8, "minor": 14, "range": null } })
    );
}
