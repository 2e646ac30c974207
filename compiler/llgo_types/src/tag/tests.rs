use super::*;

#[test]
fn tag_values_in_expected_ranges() {
    assert!((Tag::Basic as u8) < 16);

    assert!((16..32).contains(&(Tag::Pointer as u8)));
    assert!((16..32).contains(&(Tag::Slice as u8)));

    assert!((32..48).contains(&(Tag::Array as u8)));
    assert!((32..48).contains(&(Tag::Chan as u8)));

    assert!((48..80).contains(&(Tag::Signature as u8)));
    assert!((48..80).contains(&(Tag::Tuple as u8)));

    assert!((80..96).contains(&(Tag::Named as u8)));
    assert!((96..112).contains(&(Tag::TypeParam as u8)));
}

#[test]
fn uses_extra_is_correct() {
    // Basic kind and single child live in `data`
    assert!(!Tag::Basic.uses_extra());
    assert!(!Tag::Pointer.uses_extra());
    assert!(!Tag::Slice.uses_extra());
    assert!(!Tag::TypeParam.uses_extra());

    assert!(Tag::Array.uses_extra());
    assert!(Tag::Map.uses_extra());
    assert!(Tag::Struct.uses_extra());
    assert!(Tag::Named.uses_extra());
}

#[test]
fn handles_are_reference_sized_shapes() {
    assert!(Tag::Pointer.is_handle());
    assert!(Tag::Signature.is_handle());
    assert!(Tag::Map.is_handle());
    assert!(Tag::Chan.is_handle());

    assert!(!Tag::Slice.is_handle());
    assert!(!Tag::Interface.is_handle());
    assert!(!Tag::Struct.is_handle());
}

#[test]
fn display_uses_name() {
    assert_eq!(Tag::TypeParam.to_string(), "type parameter");
    assert_eq!(format!("{:?}", Tag::Struct), "Tag::struct");
}
