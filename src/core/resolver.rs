//! Relative reference resolution (RFC 3986 section 5).
//!
//! [`resolve_dots`] merges a reference path with a base path and removes
//! dot segments. A `..` segment cancels the nearest earlier segment of the
//! reference itself; only when the reference has nothing left to cancel does
//! it climb out of the base directory, and it never climbs above `/`.

use crate::types::Components;
use crate::url::normalizer::Validator;

/// Resolves references against base URL components.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    validator: Validator<'a>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver that checks absolute references with `validator`.
    pub fn new(validator: Validator<'a>) -> Self {
        Self { validator }
    }

    /// Resolve a reference against a base URL.
    ///
    /// The result is an absolute URL string when the base is absolute. It is
    /// not validated here; build a [`crate::Url`] from it for that.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit::{Resolver, Validator};
    ///
    /// let validator = Validator::default();
    /// let base = validator.absolute_url("https://www.example.com/foo/bar/baz").unwrap();
    /// let resolver = Resolver::new(validator);
    ///
    /// assert_eq!(resolver.resolve("../qux", &base), "https://www.example.com/foo/qux");
    /// assert_eq!(resolver.resolve("//www.google.com", &base), "https://www.google.com");
    /// ```
    pub fn resolve(&self, reference: &str, base: &Components) -> String {
        let reference = reference.trim();
        let root = base.root();

        if reference.is_empty() {
            return match &base.query {
                Some(query) => format!("{root}{}?{query}", base.path),
                None => format!("{root}{}", base.path),
            };
        }

        if let Ok(absolute) = self.validator.absolute_url(reference) {
            return absolute.url();
        }

        if reference.starts_with('#') || reference.starts_with('?') {
            return format!("{root}{}{reference}", base.path);
        }

        // Dot segments only live in the path part of the reference
        let (path, rest) = match reference.find(|c| matches!(c, '?' | '#')) {
            Some(i) => reference.split_at(i),
            None => (reference, ""),
        };

        // A network-path reference brings its own authority; only the path
        // after it takes part in dot removal
        if let Some(network) = path.strip_prefix("//") {
            let (authority, path) = network.split_at(network.find('/').unwrap_or(network.len()));
            let path = if path.is_empty() { String::new() } else { resolve_dots(path, "/") };
            return match base.scheme.as_deref() {
                Some(scheme) => format!("{scheme}://{authority}{path}{rest}"),
                None => format!("//{authority}{path}{rest}"),
            };
        }

        let base_path = if base.path.is_empty() { "/" } else { base.path.as_str() };
        let resolved = resolve_dots(path, base_path);

        format!("{root}{resolved}{rest}")
    }
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::new(Validator::default())
    }
}

/// Merge a reference path with a base path and remove dot segments.
///
/// # Examples
///
/// ```
/// use urlkit::core::resolver::resolve_dots;
///
/// assert_eq!(resolve_dots("../../test", "/foo/bar/baz"), "/test");
/// assert_eq!(resolve_dots("../../../test", "/foo/bar/baz"), "/test");
/// assert_eq!(resolve_dots("bar/./baz", "/foo/bar/baz"), "/foo/bar/bar/baz");
/// ```
pub fn resolve_dots(reference: &str, base_path: &str) -> String {
    let absolute = reference.starts_with('/');
    let mut base_dir = directory_of(base_path);

    // Removed segments become None so a later `..` skips over them
    let mut segments: Vec<Option<&str>> = Vec::new();
    for segment in reference.split('/') {
        match segment {
            "." => {}
            ".." => {
                let previous = segments
                    .iter_mut()
                    .rev()
                    .find(|s| matches!(s, Some(segment) if !segment.is_empty()));

                match previous {
                    Some(slot) => *slot = None,
                    None => base_dir = parent_dir(&base_dir),
                }
            }
            _ => segments.push(Some(segment)),
        }
    }

    let joined = segments.into_iter().flatten().collect::<Vec<_>>().join("/");
    let mut resolved = if absolute {
        joined
    } else {
        format!("{base_dir}{joined}")
    };

    let names_directory = matches!(reference, "." | "..")
        || reference.ends_with("/.")
        || reference.ends_with("/..");
    if names_directory && !resolved.ends_with('/') {
        resolved.push('/');
    }

    resolved
}

/// The base path up to and including its last `/`.
fn directory_of(path: &str) -> String {
    match path.rfind('/') {
        Some(i) => path[..=i].to_string(),
        None => "/".to_string(),
    }
}

/// One directory level up; `/` stays `/`.
fn parent_dir(dir: &str) -> String {
    if dir == "/" {
        return dir.to_string();
    }

    let trimmed = dir.strip_suffix('/').unwrap_or(dir);
    match trimmed.rfind('/') {
        Some(i) => trimmed[..=i].to_string(),
        None => "/".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.example.com/foo/bar/baz";

    fn resolve(reference: &str, base: &str) -> String {
        let resolver = Resolver::default();
        let base = Validator::default().absolute_url(base).unwrap();
        resolver.resolve(reference, &base)
    }

    #[test]
    fn test_resolve_dots() {
        let test_cases = vec![
            ("../../test", "/test"),
            ("../../../test", "/test"),
            (".././../foo/bar", "/foo/bar"),
            ("bar/./baz", "/foo/bar/bar/baz"),
            ("qux", "/foo/bar/qux"),
            ("./qux", "/foo/bar/qux"),
            ("a/b/../c", "/foo/bar/a/c"),
            ("a/../../c", "/foo/c"),
            ("/a/b/../c", "/a/c"),
            ("/../a", "/a"),
            ("", "/foo/bar/"),
        ];

        for (reference, expected) in test_cases {
            assert_eq!(
                resolve_dots(reference, "/foo/bar/baz"),
                expected,
                "Failed for reference: {}",
                reference
            );
        }
    }

    #[test]
    fn test_resolve_dots_keeps_trailing_directory() {
        let test_cases = vec![
            (".", "/foo/bar/"),
            ("..", "/foo/"),
            ("qux/.", "/foo/bar/qux/"),
            ("qux/..", "/foo/bar/"),
            ("../..", "/"),
        ];

        for (reference, expected) in test_cases {
            assert_eq!(
                resolve_dots(reference, "/foo/bar/baz"),
                expected,
                "Failed for reference: {}",
                reference
            );
        }
    }

    #[test]
    fn test_resolve_dots_directory_base() {
        assert_eq!(resolve_dots("qux", "/foo/bar/"), "/foo/bar/qux");
        assert_eq!(resolve_dots("../qux", "/foo/bar/"), "/foo/qux");
        assert_eq!(resolve_dots("qux", "/"), "/qux");
        assert_eq!(resolve_dots("..", "/"), "/");
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir("/"), "/");
        assert_eq!(parent_dir("/foo/"), "/");
        assert_eq!(parent_dir("/foo/bar/"), "/foo/");
    }

    #[test]
    fn test_resolve_references() {
        let test_cases = vec![
            ("//www.google.com", "https://www.google.com"),
            ("//cdn.example.com/lib/../app.js", "https://cdn.example.com/app.js"),
            ("//cdn.example.com/../x", "https://cdn.example.com/x"),
            ("//cdn.example.com/../../x?v=1", "https://cdn.example.com/x?v=1"),
            ("//cdn.example.com/./", "https://cdn.example.com/"),
            ("http://other.example.org/x", "http://other.example.org/x"),
            ("/absolute/path", "https://www.example.com/absolute/path"),
            ("../qux?x=1#top", "https://www.example.com/foo/qux?x=1#top"),
            ("?y=2", "https://www.example.com/foo/bar/baz?y=2"),
            ("#section", "https://www.example.com/foo/bar/baz#section"),
            ("../../../../up", "https://www.example.com/up"),
        ];

        for (reference, expected) in test_cases {
            assert_eq!(resolve(reference, BASE), expected, "Failed for reference: {}", reference);
        }
    }

    #[test]
    fn test_resolve_empty_reference_keeps_query() {
        assert_eq!(resolve("  ", "https://example.com/a/b?q=1#frag"), "https://example.com/a/b?q=1");
    }

    #[test]
    fn test_resolve_against_empty_base_path() {
        assert_eq!(resolve("foo", "https://example.com"), "https://example.com/foo");
    }

    #[test]
    fn test_dots_in_query_are_kept() {
        assert_eq!(
            resolve("a?next=../b", BASE),
            "https://www.example.com/foo/bar/a?next=../b"
        );
    }
}
