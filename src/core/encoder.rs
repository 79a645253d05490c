//! Percent-encoding of URL components.
//!
//! This module provides the encode policy for the components that carry
//! free-form data: path, query and fragment. Every byte outside the allowed
//! class of a component is written as `%XX` with uppercase hex digits.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// RFC 3986 `pchar`: unreserved, sub-delims, `:` and `@`.
const PCHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

/// Bytes left alone in a path: pchar, `/` and `%`.
const PATH: &AsciiSet = &PCHAR.remove(b'/').remove(b'%');

/// Bytes left alone in a query: pchar, `/` and `%`.
const QUERY: &AsciiSet = &PCHAR.remove(b'/').remove(b'%');

/// Bytes left alone in a fragment: pchar, `/`, `?` and `%`.
const FRAGMENT: &AsciiSet = &PCHAR.remove(b'/').remove(b'?').remove(b'%');

/// Component class selecting which characters stay unencoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeClass {
    /// pchar plus `/` and `%`
    Path,
    /// pchar plus `/` and `%`
    Query,
    /// pchar plus `/`, `?` and `%`
    Fragment,
}

impl EncodeClass {
    fn ascii_set(self) -> &'static AsciiSet {
        match self {
            EncodeClass::Path => PATH,
            EncodeClass::Query => QUERY,
            EncodeClass::Fragment => FRAGMENT,
        }
    }
}

/// Percent-encode every character of `input` not allowed by `class`.
///
/// A `%` that does not start a valid `%XX` escape is encoded as `%25`
/// first, so encoding an already encoded value returns it unchanged.
///
/// # Examples
///
/// ```
/// use urlkit::{encode_except, EncodeClass};
///
/// assert_eq!(encode_except("/a b/ü", EncodeClass::Path), "/a%20b/%C3%BC");
/// assert_eq!(encode_except("/100%", EncodeClass::Path), "/100%25");
/// assert_eq!(encode_except("/a%20b", EncodeClass::Path), "/a%20b");
/// ```
pub fn encode_except(input: &str, class: EncodeClass) -> String {
    let repaired = encode_stray_percents(input);
    utf8_percent_encode(&repaired, class.ascii_set()).to_string()
}

/// Replace every `%` not followed by two hex digits with `%25`.
pub fn encode_stray_percents(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    let is_escape = |i: usize| {
        bytes.len() > i + 2 && bytes[i + 1].is_ascii_hexdigit() && bytes[i + 2].is_ascii_hexdigit()
    };

    if !bytes.iter().enumerate().any(|(i, &b)| b == b'%' && !is_escape(i)) {
        return Cow::Borrowed(input);
    }

    let mut output = String::with_capacity(input.len() + 4);
    for (i, c) in input.char_indices() {
        if c == '%' && !is_escape(i) {
            output.push_str("%25");
        } else {
            output.push(c);
        }
    }

    Cow::Owned(output)
}

/// Check if every `%` in the input starts a valid `%XX` escape.
pub fn has_valid_escapes(input: &str) -> bool {
    matches!(encode_stray_percents(input), Cow::Borrowed(_))
}

/// Percent-decode the input, replacing invalid UTF-8 with U+FFFD.
pub fn decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_encoding() {
        let test_cases = vec![
            ("/foo/bar", "/foo/bar"),
            ("/foo bar", "/foo%20bar"),
            ("/ümlaut", "/%C3%BCmlaut"),
            ("/a:b@c;d=e", "/a:b@c;d=e"),
            ("/what?", "/what%3F"),
            ("/hash#tag", "/hash%23tag"),
            ("/<tag>", "/%3Ctag%3E"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(encode_except(input, EncodeClass::Path), expected, "Path encoding failed for: {}", input);
        }
    }

    #[test]
    fn test_fragment_allows_question_mark() {
        assert_eq!(encode_except("section?x=1", EncodeClass::Fragment), "section?x=1");
        assert_eq!(encode_except("a=b?c", EncodeClass::Query), "a=b%3Fc");
    }

    #[test]
    fn test_stray_percent_encoded_once() {
        assert_eq!(encode_except("/100%", EncodeClass::Path), "/100%25");
        assert_eq!(encode_except("/%zz", EncodeClass::Path), "/%25zz");
        assert_eq!(encode_except("/%4", EncodeClass::Path), "/%254");
        assert_eq!(encode_except("q=%", EncodeClass::Query), "q=%25");
    }

    #[test]
    fn test_encoding_is_idempotent() {
        let inputs = vec!["/a b/%C3%BC", "/100%", "/x%2fy", "/ü/?#"];

        for input in inputs {
            let once = encode_except(input, EncodeClass::Path);
            let twice = encode_except(&once, EncodeClass::Path);
            assert_eq!(once, twice, "Encoding not idempotent for: {}", input);
        }
    }

    #[test]
    fn test_lowercase_escapes_are_kept() {
        assert_eq!(encode_except("/x%2fy", EncodeClass::Path), "/x%2fy");
    }

    #[test]
    fn test_has_valid_escapes() {
        assert!(has_valid_escapes("a%20b"));
        assert!(has_valid_escapes("plain"));
        assert!(!has_valid_escapes("a%2"));
        assert!(!has_valid_escapes("%"));
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("a%20b"), "a b");
        assert_eq!(decode("%C3%BC"), "ü");
        assert_eq!(decode("100%"), "100%");
    }
}
