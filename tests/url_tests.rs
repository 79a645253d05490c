//! Tests for URL normalization, validation, and component extraction.

use urlkit::*;

#[test]
fn test_url_normalization_basic() {
    let test_cases = vec![
        ("HTTPS://EXAMPLE.COM/", "https://EXAMPLE.COM/"),
        ("HTTP://DOCS.RS/PATH", "http://DOCS.RS/PATH"),
        ("https://Example.Org/Test", "https://Example.Org/Test"),
        ("FTP://FILES.EXAMPLE.COM:21/", "ftp://FILES.EXAMPLE.COM/"),
        ("  https://example.com/padded  ", "https://example.com/padded"),
    ];

    for (input, expected) in test_cases {
        let result = normalize_url(input).unwrap();
        assert_eq!(result, expected, "Normalization failed for: {}", input);
    }
}

#[test]
fn test_url_normalization_idna() {
    let test_cases = vec![
        ("https://café.com/", "https://xn--caf-dma.com/"),
        ("https://münchen.de/karte", "https://xn--mnchen-3ya.de/karte"),
        ("https://москва.рф/", "https://xn--80adxhks.xn--p1ai/"),
    ];

    for (input, expected) in test_cases {
        let result = normalize_url(input).unwrap();
        assert_eq!(result, expected, "IDNA normalization failed for: {}", input);
    }
}

#[test]
fn test_scheme_validation() {
    let valid = vec![
        "https://example.com/",
        "http://example.com/",
        "ftp://example.com/",
        "ws://example.com/",
        "file:///etc/hosts",
        "mailto:test@example.com",
        "data:text/plain,hello",
        "urn:/isbn/0451450523",
    ];

    for url in valid {
        assert!(normalize_url(url).is_ok(), "Should accept scheme: {}", url);
    }

    let invalid = vec!["foo://example.com/", "notascheme:path", "javascript:alert(1)"];

    for url in invalid {
        assert_eq!(
            normalize_url(url).unwrap_err(),
            UrlError::InvalidComponent(Component::Scheme),
            "Should reject scheme: {}",
            url
        );
    }
}

#[test]
fn test_percent_encoding_of_components() {
    let test_cases = vec![
        ("https://example.com/a b", "https://example.com/a%20b"),
        ("https://example.com/ü", "https://example.com/%C3%BC"),
        ("https://example.com/100%", "https://example.com/100%25"),
        ("https://example.com/a%20b", "https://example.com/a%20b"),
        ("https://example.com/?q=a b", "https://example.com/?q=a%20b"),
        ("https://example.com/#a b", "https://example.com/#a%20b"),
        ("https://example.com/#top?x", "https://example.com/#top?x"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(normalize_url(input).unwrap(), expected, "Encoding failed for: {}", input);
    }
}

#[test]
fn test_default_ports_are_dropped() {
    let test_cases = vec![
        ("http://example.com:80/", "http://example.com/"),
        ("https://example.com:443/", "https://example.com/"),
        ("ftp://example.com:21/", "ftp://example.com/"),
        ("http://example.com:443/", "http://example.com:443/"),
        ("https://example.com:8443/", "https://example.com:8443/"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(normalize_url(input).unwrap(), expected, "Port handling failed for: {}", input);
    }
}

#[test]
fn test_invalid_components_are_reported() {
    let test_cases = vec![
        ("https://exa mple.com/", Component::Host),
        ("https://example..com/", Component::Host),
        ("https://example.com:99999/", Component::Port),
        ("https://us:er:x@example.com/", Component::Password),
        ("https://us er@example.com/", Component::User),
        ("a:b/c", Component::Scheme),
    ];

    for (input, component) in test_cases {
        assert_eq!(
            normalize_url(input).unwrap_err(),
            UrlError::InvalidComponent(component),
            "Wrong error for: {}",
            input
        );
    }
}

#[test]
fn test_relative_references() {
    let validator = Validator::default();

    let test_cases = vec![
        ("/path/to/file", "/path/to/file"),
        ("path/to/file", "path/to/file"),
        ("?q=1", "?q=1"),
        ("#frag", "#frag"),
        ("//cdn.example.com/lib.js", "//cdn.example.com/lib.js"),
        ("", ""),
    ];

    for (input, expected) in test_cases {
        let components = validator.validate_url(input, false).unwrap();
        assert_eq!(components.url(), expected, "Relative reference failed for: {}", input);
        assert!(components.is_relative_reference());
    }

    assert!(validator.validate_url("./a:b", false).is_ok());
}

#[test]
fn test_absolute_requirement() {
    let validator = Validator::default();

    let relative = vec!["/path", "//example.com/", "path", "", "?q"];
    for input in relative {
        assert!(
            matches!(validator.absolute_url(input), Err(UrlError::MalformedUrl(_))),
            "Should require an absolute URL: {}",
            input
        );
    }

    assert!(validator.is_absolute_url("https://example.com"));
    assert!(validator.is_absolute_url("mailto:john@example.com"));
    assert!(!validator.is_absolute_url("https://"));
}

#[test]
fn test_url_components() {
    let url = Url::parse("https://api.github.com:8080/repos/rust-lang?per_page=10#top").unwrap();

    assert_eq!(url.scheme(), Some("https"));
    assert_eq!(url.host(), Some("api.github.com"));
    assert_eq!(url.subdomain(), Some("api"));
    assert_eq!(url.domain_label(), Some("github"));
    assert_eq!(url.domain_suffix(), Some("com"));
    assert_eq!(url.port(), Some(8080));
    assert_eq!(url.path(), "/repos/rust-lang");
    assert_eq!(url.query(), Some("per_page=10"));
    assert_eq!(url.fragment(), Some("top"));
    assert_eq!(url.authority().as_deref(), Some("api.github.com:8080"));
}

#[test]
fn test_host_case_is_preserved() {
    let url = Url::parse("HTTP://WWW.EXAMPLE.COM:80/Path").unwrap();

    assert_eq!(url.as_str(), "http://WWW.EXAMPLE.COM/Path");
    assert_eq!(url.host(), Some("WWW.EXAMPLE.COM"));
    assert_eq!(url.subdomain(), Some("WWW"));
    assert_eq!(url.domain_label(), Some("example"));
    assert_eq!(url.domain_suffix(), Some("com"));
    assert_eq!(url.domain().unwrap().to_string(), "example.com");
}

#[test]
fn test_colon_in_first_path_segment_without_authority() {
    for url in ["urn:isbn:0451450523", "news:comp.lang:rust", "urn:example:animal"] {
        assert_eq!(
            normalize_url(url).unwrap_err(),
            UrlError::InvalidComponent(Component::Path),
            "Should reject path of: {}",
            url
        );
    }

    assert_eq!(normalize_url("urn:isbn/0451450523:x").unwrap(), "urn:isbn/0451450523:x");
    assert_eq!(normalize_url("mailto:john@example.com").unwrap(), "mailto:john@example.com");
}

#[test]
fn test_unknown_suffix_still_parses() {
    let url = Url::parse("http://intranet.corp:8080/").unwrap();

    assert_eq!(url.host(), Some("intranet.corp"));
    assert_eq!(url.domain(), None);
    assert_eq!(url.subdomain(), None);
}

#[test]
fn test_ipv6_host() {
    let url = Url::parse("http://[2001:db8::1]:8080/index.html").unwrap();

    assert_eq!(url.host(), Some("[2001:db8::1]"));
    assert_eq!(url.port(), Some(8080));
    assert_eq!(url.domain(), None);
    assert_eq!(url.as_str(), "http://[2001:db8::1]:8080/index.html");
}

#[test]
fn test_empty_authority() {
    let url = Url::parse("file:///etc/hosts").unwrap();

    assert_eq!(url.host(), None);
    assert_eq!(url.path(), "/etc/hosts");
    assert_eq!(url.as_str(), "file:/etc/hosts");
}

#[test]
fn test_normalize_host() {
    let test_cases = vec![
        ("example.com", "example.com"),
        ("Example.COM", "Example.COM"),
        ("café.com", "xn--caf-dma.com"),
        ("[::1]", "[::1]"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(normalize_host(input).unwrap(), expected, "Host normalization failed for: {}", input);
    }

    assert_eq!(normalize_host("").unwrap_err(), UrlError::InvalidComponent(Component::Host));
}
