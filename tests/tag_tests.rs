//! Tests for TagID and TagMatch

use nbt_path::{Error, TagID, TagMatch};

#[test]
fn test_tag_values() {
    assert_eq!(TagID::End as u8, 0);
    assert_eq!(TagID::Byte as u8, 1);
    assert_eq!(TagID::Short as u8, 2);
    assert_eq!(TagID::Int as u8, 3);
    assert_eq!(TagID::Long as u8, 4);
    assert_eq!(TagID::Float as u8, 5);
    assert_eq!(TagID::Double as u8, 6);
    assert_eq!(TagID::ByteArray as u8, 7);
    assert_eq!(TagID::String as u8, 8);
    assert_eq!(TagID::List as u8, 9);
    assert_eq!(TagID::Compound as u8, 10);
    assert_eq!(TagID::IntArray as u8, 11);
    assert_eq!(TagID::LongArray as u8, 12);
}

#[test]
fn test_tag_try_from_roundtrip() {
    for raw in 0u8..=12 {
        let tag = TagID::try_from(raw).unwrap();
        assert_eq!(tag as u8, raw);
    }
    assert!(matches!(TagID::try_from(13u8), Err(Error::InvalidTagType(13))));
    assert!(matches!(TagID::try_from(99u8), Err(Error::InvalidTagType(99))));
}

#[test]
fn test_tag_is_numeric() {
    assert!(TagID::Byte.is_numeric());
    assert!(TagID::Short.is_numeric());
    assert!(TagID::Int.is_numeric());
    assert!(TagID::Long.is_numeric());
    assert!(TagID::Float.is_numeric());
    assert!(TagID::Double.is_numeric());

    assert!(!TagID::End.is_numeric());
    assert!(!TagID::ByteArray.is_numeric());
    assert!(!TagID::String.is_numeric());
    assert!(!TagID::List.is_numeric());
    assert!(!TagID::Compound.is_numeric());
    assert!(!TagID::IntArray.is_numeric());
    assert!(!TagID::LongArray.is_numeric());
}

#[test]
fn test_tag_is_primitive() {
    assert!(TagID::End.is_primitive());
    assert!(TagID::Double.is_primitive());
    assert!(!TagID::ByteArray.is_primitive());
    assert!(!TagID::String.is_primitive());
    assert!(!TagID::Compound.is_primitive());
}

#[test]
fn test_tag_is_array_and_composite() {
    assert!(TagID::ByteArray.is_array());
    assert!(TagID::IntArray.is_array());
    assert!(TagID::LongArray.is_array());
    assert!(!TagID::List.is_array());

    assert!(TagID::List.is_composite());
    assert!(TagID::Compound.is_composite());
    assert!(!TagID::Int.is_composite());
    assert!(!TagID::IntArray.is_composite());
}

#[test]
fn test_tag_match_exact() {
    let int = TagMatch::from(TagID::Int);
    assert_eq!(int, TagMatch::Exact(TagID::Int));
    assert!(int.matches(TagID::Int));
    assert!(!int.matches(TagID::Short));
    assert!(!int.matches(TagID::Long));
}

#[test]
fn test_tag_match_any_numeric() {
    for raw in 0u8..=12 {
        let tag = TagID::try_from(raw).unwrap();
        assert_eq!(TagMatch::AnyNumeric.matches(tag), (1..=6).contains(&raw));
    }
}

#[test]
fn test_tag_match_from_raw() {
    assert_eq!(TagMatch::try_from(99u8).unwrap(), TagMatch::AnyNumeric);
    assert_eq!(
        TagMatch::try_from(TagMatch::ANY_NUMERIC_ID).unwrap(),
        TagMatch::AnyNumeric
    );
    assert_eq!(
        TagMatch::try_from(10u8).unwrap(),
        TagMatch::Exact(TagID::Compound)
    );
    assert!(matches!(
        TagMatch::try_from(42u8),
        Err(Error::InvalidTagType(42))
    ));
}

#[test]
fn test_error_display() {
    assert_eq!(
        Error::InvalidTagType(0x20).to_string(),
        "invalid NBT tag type: 0x20"
    );
    assert_eq!(
        Error::TagMismatch {
            expected: TagID::Int,
            actual: TagID::String,
        }
        .to_string(),
        "tag mismatch: expected 0x03, got 0x08"
    );
}
