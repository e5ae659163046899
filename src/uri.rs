//! Query-string parsing and merging over [`url::Url`].

use indexmap::IndexMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::error::ExtensionResult;

/// Escape set for query components: the WHATWG query set plus the pair
/// delimiters (`&`, `=`), `%` itself, and `+` so a literal plus survives
/// form-decoding parsers. Space encodes as `%20`.
const QUERY_ENCODE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'&')
    .add(b'=')
    .add(b'%')
    .add(b'+');

/// Returns a new URL with `params` merged into the existing query string.
///
/// The existing query is parsed into an ordered key→value mapping (last
/// occurrence wins for duplicate keys). Each entry of `params` is applied in
/// caller order: an existing key keeps its position and gets the new value,
/// a new key is appended after all existing ones. Keys and values are taken
/// as raw text and percent-encoded on serialization.
///
/// A `None` value serializes as an empty-valued key (`key=`); it is never
/// dropped. Merging an empty `params` returns a clone of the input, so the
/// canonical serialized query is preserved byte-for-byte.
///
/// The input URL is never mutated.
///
/// ```
/// use url::Url;
/// use stdx::uri::with_query;
///
/// let url = Url::parse("http://x/").unwrap();
/// let url = with_query(&url, [("first", Some("1"))]);
/// assert_eq!(url.as_str(), "http://x/?first=1");
/// ```
pub fn with_query<I, K, V>(url: &Url, params: I) -> Url
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut merged: IndexMap<String, Option<String>> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), Some(v.into_owned())))
        .collect();

    let mut changed = false;
    for (key, value) in params {
        merged.insert(
            key.as_ref().to_owned(),
            value.map(|v| v.as_ref().to_owned()),
        );
        changed = true;
    }

    let mut result = url.clone();
    if !changed {
        return result;
    }

    if merged.is_empty() {
        result.set_query(None);
    } else {
        result.set_query(Some(&serialize_query(&merged)));
    }
    result
}

/// Parses the query component of `url` into an ordered key→value mapping.
///
/// Key order follows first appearance; for duplicate keys the last value
/// wins. Keys and values come back percent-decoded.
pub fn query_map(url: &Url) -> IndexMap<String, String> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn serialize_query(pairs: &IndexMap<String, Option<String>>) -> String {
    let mut query = String::new();
    for (key, value) in pairs {
        if !query.is_empty() {
            query.push('&');
        }
        query.extend(utf8_percent_encode(key, QUERY_ENCODE));
        query.push('=');
        if let Some(value) = value {
            query.extend(utf8_percent_encode(value, QUERY_ENCODE));
        }
    }
    query
}

/// Extension methods on [`url::Url`].
pub trait UrlExtensions {
    /// See [`with_query`].
    fn with_query<I, K, V>(&self, params: I) -> Url
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>;

    /// See [`query_map`].
    fn query_map(&self) -> IndexMap<String, String>;
}

impl UrlExtensions for Url {
    fn with_query<I, K, V>(&self, params: I) -> Url
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        with_query(self, params)
    }

    fn query_map(&self) -> IndexMap<String, String> {
        query_map(self)
    }
}

/// Convenience over [`with_query`] for textual input; fails with a URL parse
/// error when `url` is not an absolute URL.
pub fn with_query_str<I, K, V>(url: &str, params: I) -> ExtensionResult<Url>
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let parsed = Url::parse(url)?;
    Ok(with_query(&parsed, params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_to_bare_url() {
        let url = with_query_str("http://x/", [("first", Some("1"))]).unwrap();
        assert_eq!(url.as_str(), "http://x/?first=1");
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let url = with_query_str("http://x/?first=1", [("second#", Some("second?"))]).unwrap();
        assert_eq!(url.query(), Some("first=1&second%23=second%3F"));
    }

    #[test]
    fn test_space_encodes_as_percent20() {
        let url = with_query_str("http://x/", [("q", Some("a b+c"))]).unwrap();
        assert_eq!(url.query(), Some("q=a%20b%2Bc"));
    }

    #[test]
    fn test_last_write_wins_keeps_position() {
        let url = with_query_str(
            "http://x/?a=1&b=2",
            [("a", Some("9")), ("c", Some("3"))],
        )
        .unwrap();
        assert_eq!(url.query(), Some("a=9&b=2&c=3"));
    }

    #[test]
    fn test_none_value_serializes_as_empty() {
        let url = with_query_str("http://x/", [("flag", None::<&str>)]).unwrap();
        assert_eq!(url.query(), Some("flag="));
    }

    #[test]
    fn test_empty_merge_preserves_canonical_form() {
        let original = Url::parse("http://x/?first=1").unwrap();
        let merged = with_query(&original, std::iter::empty::<(&str, Option<&str>)>());
        assert_eq!(merged, original);
        assert_eq!(merged.as_str(), "http://x/?first=1");
    }

    #[test]
    fn test_input_is_not_mutated() {
        let original = Url::parse("http://x/?a=1").unwrap();
        let _ = with_query(&original, [("a", Some("2"))]);
        assert_eq!(original.as_str(), "http://x/?a=1");
    }

    #[test]
    fn test_query_map_last_duplicate_wins() {
        let url = Url::parse("http://x/?a=1&b=2&a=3").unwrap();
        let map = query_map(&url);
        assert_eq!(map.get("a"), Some(&"3".to_string()));
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
