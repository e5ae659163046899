//! Encoding, string, and numeric helper behavior across module boundaries.

use stdx::encoding::{from_base64, from_hex, EncodingExtensions};
use stdx::numeric::{range_of_count, u64_from_be_bytes, u64_from_le_bytes, NumericExtensions};
use stdx::strings::StringExtensions;
use stdx::ExtensionError;

#[test]
fn hex_and_string_helpers_agree() {
    let bytes = from_hex("0xdeadbeef").unwrap();
    assert_eq!(bytes.to_hex(), "deadbeef");
    assert!("deadbeef".is_hex());
    assert_eq!("0xdeadbeef".hex_to_bytes().unwrap(), bytes);
}

#[test]
fn base64_binary_round_trip() {
    let data: Vec<u8> = (0..=255).collect();
    assert_eq!(from_base64(&data.to_base64()).unwrap(), data);
}

#[test]
fn decoder_errors_carry_their_source_kind() {
    assert!(matches!(from_hex("abc"), Err(ExtensionError::Hex(_))));
    assert!(matches!(from_base64("%%%"), Err(ExtensionError::Base64(_))));
}

#[test]
fn numeric_conversions_compose_with_encoding() {
    let le = 0xABCDu16.to_le_vec();
    assert_eq!(le.to_hex(), "cdab");
    assert_eq!(u64_from_le_bytes(&le).unwrap(), 0xABCD);
    assert_eq!(u64_from_be_bytes(&0xABCDu16.to_be_vec()).unwrap(), 0xABCD);
}

#[test]
fn range_construction_rejects_unrepresentable_ends() {
    assert_eq!(range_of_count(0, 3).unwrap().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert!(matches!(
        range_of_count(i32::MAX - 1, 3),
        Err(ExtensionError::OutOfRange(_))
    ));
}
