//! URL validation and query-string decoding.

use std::borrow::Cow;
use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::{QueryError, QueryResult};

/// Decoded query string: key to last value seen for that key.
pub type QueryPairs = HashMap<String, String>;

/// Validate `full_url` and return its raw query component, if any.
///
/// `https://example.com` has no query; `https://example.com?` has an empty one.
pub fn extract_query(full_url: &str) -> QueryResult<Option<String>> {
    let url = Url::parse(full_url).map_err(|e| {
        tracing::debug!("Rejected url '{}': {}", full_url, e);
        QueryError::InvalidInput(full_url.to_string())
    })?;

    Ok(url.query().map(str::to_string))
}

/// Split a raw query string into decoded key/value pairs.
///
/// `+` decodes to a space and `%XX` escapes are resolved. Later duplicates
/// overwrite earlier ones.
pub fn decode_pairs(query: &str) -> QueryResult<QueryPairs> {
    let mut pairs = QueryPairs::new();

    for segment in query.split('&').filter(|s| !s.is_empty()) {
        let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
        pairs.insert(decode_component(key)?, decode_component(value)?);
    }

    Ok(pairs)
}

fn decode_component(raw: &str) -> QueryResult<String> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|e| {
            QueryError::MalformedInput(format!("'{}' does not decode to text: {}", raw, e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_query() {
        assert_eq!(
            extract_query("https://example.com/api/user?$top=1").unwrap(),
            Some("$top=1".to_string())
        );
        assert_eq!(extract_query("https://example.com").unwrap(), None);
        assert_eq!(
            extract_query("https://example.com?").unwrap(),
            Some(String::new())
        );
    }

    #[test]
    fn test_invalid_urls() {
        assert!(matches!(extract_query(""), Err(QueryError::InvalidInput(_))));
        assert!(matches!(
            extract_query("example.com"),
            Err(QueryError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_decode_pairs() {
        let pairs = decode_pairs("%24filter=name%20eq%20%27foo%27&a=b+c&flag").unwrap();
        assert_eq!(pairs["$filter"], "name eq 'foo'");
        assert_eq!(pairs["a"], "b c");
        assert_eq!(pairs["flag"], "");
    }

    #[test]
    fn test_later_duplicates_win() {
        let pairs = decode_pairs("top=1&top=2").unwrap();
        assert_eq!(pairs["top"], "2");
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        assert!(matches!(
            decode_pairs("$select=%FF%FE"),
            Err(QueryError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_non_ascii_decodes() {
        let pairs = decode_pairs("$filter=b%C3%A5r%20eq%201").unwrap();
        assert_eq!(pairs["$filter"], "bår eq 1");
    }
}
