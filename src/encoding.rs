//! Byte-to-text encodings: hex, base64, UTF-8.

use base64::Engine;

use crate::error::{ExtensionError, ExtensionResult};

/// Encoding methods available on anything byte-like.
pub trait EncodingExtensions {
    /// Encodes as lowercase hex without a prefix.
    fn to_hex(&self) -> String;

    /// Encodes as uppercase hex without a prefix.
    fn to_hex_upper(&self) -> String;

    /// Encodes as standard base64 with padding.
    fn to_base64(&self) -> String;

    /// Encodes as URL-safe base64 with padding.
    fn to_base64_url(&self) -> String;

    /// Decodes as strict UTF-8 text.
    fn to_utf8_string(&self) -> ExtensionResult<String>;
}

impl<T: AsRef<[u8]> + ?Sized> EncodingExtensions for T {
    fn to_hex(&self) -> String {
        hex::encode(self)
    }

    fn to_hex_upper(&self) -> String {
        hex::encode_upper(self)
    }

    fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(self)
    }

    fn to_base64_url(&self) -> String {
        base64::engine::general_purpose::URL_SAFE.encode(self)
    }

    fn to_utf8_string(&self) -> ExtensionResult<String> {
        String::from_utf8(self.as_ref().to_vec())
            .map_err(|e| ExtensionError::encoding(format!("invalid UTF-8: {e}")))
    }
}

/// Decodes a hex string, accepting an optional `0x`/`0X` prefix.
pub fn from_hex(hex_str: &str) -> ExtensionResult<Vec<u8>> {
    let digits = hex_str
        .strip_prefix("0x")
        .or_else(|| hex_str.strip_prefix("0X"))
        .unwrap_or(hex_str);
    hex::decode(digits).map_err(ExtensionError::from)
}

/// Decodes a standard base64 string.
pub fn from_base64(base64_str: &str) -> ExtensionResult<Vec<u8>> {
    base64::engine::general_purpose::STANDARD
        .decode(base64_str)
        .map_err(ExtensionError::from)
}

/// Decodes a URL-safe base64 string.
pub fn from_base64_url(base64_str: &str) -> ExtensionResult<Vec<u8>> {
    base64::engine::general_purpose::URL_SAFE
        .decode(base64_str)
        .map_err(ExtensionError::from)
}

/// Returns whether the input is decodable standard base64.
pub fn is_valid_base64(base64_str: &str) -> bool {
    base64::engine::general_purpose::STANDARD
        .decode(base64_str)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let data = [0xabu8, 0xcd, 0x01, 0xef];
        assert_eq!(data.to_hex(), "abcd01ef");
        assert_eq!(data.to_hex_upper(), "ABCD01EF");

        assert_eq!(from_hex("abcd01ef").unwrap(), data);
        assert_eq!(from_hex("0xABCD01EF").unwrap(), data);
        assert_eq!(from_hex("0Xabcd01ef").unwrap(), data);
        assert!(from_hex("not-hex").is_err());
    }

    #[test]
    fn test_base64_round_trip() {
        let data = [0x01u8, 0x02, 0x03, 0x04];
        assert_eq!(data.to_base64(), "AQIDBA==");
        assert_eq!(from_base64("AQIDBA==").unwrap(), data);

        let binary = [0xffu8, 0xfe, 0xfd];
        assert_eq!(from_base64_url(&binary.to_base64_url()).unwrap(), binary);
    }

    #[test]
    fn test_utf8_decoding() {
        assert_eq!("hello".as_bytes().to_utf8_string().unwrap(), "hello");
        assert!(matches!(
            [0xffu8, 0xfe].to_utf8_string(),
            Err(ExtensionError::Encoding(_))
        ));
    }

    #[test]
    fn test_base64_validation() {
        assert!(is_valid_base64("AQIDBA=="));
        assert!(!is_valid_base64("!!not base64!!"));
    }
}
