//! String inspection and manipulation helpers.

use crate::encoding;
use crate::error::ExtensionResult;

/// Extension methods on string slices.
pub trait StringExtensions {
    /// Returns whether the string is a valid hex string: empty counts as
    /// valid, odd lengths do not, and every character must be an ASCII hex
    /// digit.
    fn is_hex(&self) -> bool;

    /// Decodes the string as hex into bytes, accepting an optional
    /// `0x`/`0X` prefix.
    fn hex_to_bytes(&self) -> ExtensionResult<Vec<u8>>;

    /// Trims `prefix` from the start of the string, ignoring ASCII case;
    /// returns the string unchanged when the prefix does not match.
    fn trim_start_ignore_case<'a>(&'a self, prefix: &str) -> &'a str;

    /// Trims `suffix` from the end of the string, ignoring ASCII case;
    /// returns the string unchanged when the suffix does not match.
    fn trim_end_ignore_case<'a>(&'a self, suffix: &str) -> &'a str;
}

impl StringExtensions for str {
    fn is_hex(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        if self.len() % 2 == 1 {
            return false;
        }
        self.chars().all(|c| c.is_ascii_hexdigit())
    }

    fn hex_to_bytes(&self) -> ExtensionResult<Vec<u8>> {
        encoding::from_hex(self)
    }

    fn trim_start_ignore_case<'a>(&'a self, prefix: &str) -> &'a str {
        // get() keeps a mid-char-boundary prefix length from panicking.
        match self.get(..prefix.len()) {
            Some(head) if head.eq_ignore_ascii_case(prefix) => &self[prefix.len()..],
            _ => self,
        }
    }

    fn trim_end_ignore_case<'a>(&'a self, suffix: &str) -> &'a str {
        let Some(start) = self.len().checked_sub(suffix.len()) else {
            return self;
        };
        match self.get(start..) {
            Some(tail) if tail.eq_ignore_ascii_case(suffix) => &self[..start],
            _ => self,
        }
    }
}
