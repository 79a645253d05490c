//! URL component validation and normalization.
//!
//! Every validator returns the normalized value, or `None` when the value is
//! not valid for its component. [`Validator::validate_url`] runs all of them
//! over one URL and either returns the full normalized component set or the
//! first component that failed.

use std::net::Ipv6Addr;

use tracing::debug;

use crate::core::encoder::{encode_except, has_valid_escapes, EncodeClass};
use crate::core::scheme::SchemeTable;
use crate::core::suffix::SuffixTable;
use crate::error::UrlError;
use crate::idn::{self, Punycode};
use crate::types::{Component, Components};
use crate::url::psl::{Domain, HostSplitter};
use crate::url::utils::{encode_idn_host, split_url};

/// Validates and normalizes URL components.
///
/// The suffix table, scheme table and Punycode capability are passed in;
/// [`Validator::default`] wires the process-wide instances.
#[derive(Clone, Copy)]
pub struct Validator<'a> {
    suffixes: &'a SuffixTable,
    schemes: &'a SchemeTable,
    punycode: &'a dyn Punycode,
}

impl<'a> Validator<'a> {
    /// Create a validator. Punycode comes from the suffix table.
    pub fn new(suffixes: &'a SuffixTable, schemes: &'a SchemeTable) -> Self {
        Self {
            suffixes,
            schemes,
            punycode: suffixes.punycode(),
        }
    }

    /// Replace the Punycode capability used for hosts.
    pub fn with_punycode(mut self, punycode: &'a dyn Punycode) -> Self {
        self.punycode = punycode;
        self
    }

    /// The suffix table this validator uses.
    pub fn suffixes(&self) -> &'a SuffixTable {
        self.suffixes
    }

    /// The scheme table this validator uses.
    pub fn schemes(&self) -> &'a SchemeTable {
        self.schemes
    }

    /// A host splitter over the same suffix table.
    pub fn splitter(&self) -> HostSplitter<'a> {
        HostSplitter::new(self.suffixes)
    }

    /// Trim and lowercase; valid if the scheme is registered.
    pub fn scheme(&self, value: &str) -> Option<String> {
        let scheme = value.trim().to_ascii_lowercase();
        self.schemes.contains(&scheme).then_some(scheme)
    }

    /// Valid if the value uses only userinfo characters other than `:`.
    ///
    /// The value is returned unmodified.
    pub fn user(&self, value: &str) -> Option<String> {
        is_user_info(value).then(|| value.to_string())
    }

    /// Same character rules as [`Validator::user`].
    pub fn password(&self, value: &str) -> Option<String> {
        self.user(value)
    }

    /// Punycode-encode when needed; valid if only `[a-zA-Z0-9-.]` remains
    /// and no label is empty. Bracketed IPv6 literals are accepted as-is.
    ///
    /// ASCII hosts keep their case.
    pub fn host(&self, value: &str) -> Option<String> {
        if let Some(literal) = value.strip_prefix('[') {
            let address = literal.strip_suffix(']')?;
            return address.parse::<Ipv6Addr>().is_ok().then(|| value.to_string());
        }

        let host = self.encode_if_needed(value)?;
        is_valid_host(&host).then_some(host)
    }

    /// Lowercase, Punycode-encoded; valid if it is a known public suffix.
    pub fn domain_suffix(&self, value: &str) -> Option<String> {
        let suffix = self.encode_if_needed(value)?.to_lowercase();
        (is_valid_host(&suffix) && self.suffixes.exists(&suffix)).then_some(suffix)
    }

    /// Lowercase, Punycode-encoded; valid if it is exactly one label
    /// followed by a known public suffix.
    ///
    /// A value with a subdomain in front ("www.example.com") is rejected.
    pub fn domain(&self, value: &str) -> Option<Domain> {
        let domain = self.encode_if_needed(value)?.to_lowercase();
        if !is_valid_host(&domain) {
            return None;
        }

        let suffix = self.suffixes.lookup_suffix(&domain)?;
        let label = domain.strip_suffix(suffix.as_str())?.strip_suffix('.')?;
        Domain::new(label, suffix)
    }

    /// A single label valid as the left part of a registrable domain.
    pub fn domain_label(&self, value: &str) -> Option<String> {
        self.subdomain(value).filter(|label| !label.contains('.'))
    }

    /// Lowercase, Punycode-encoded; valid if only host characters remain.
    pub fn subdomain(&self, value: &str) -> Option<String> {
        let subdomain = self.encode_if_needed(value)?.to_lowercase();
        is_valid_host(&subdomain).then_some(subdomain)
    }

    /// Valid if `0 <= value <= 65535`.
    pub fn port(&self, value: i64) -> Option<u16> {
        u16::try_from(value).ok()
    }

    /// Percent-encode the path and check it fits the rest of the URL.
    ///
    /// - With an authority, a non-empty path must start with `/`.
    /// - Without an authority, it must not start with `//`, and a path not
    ///   starting with `/` must not have a `:` in its first segment.
    pub fn path(&self, value: &str, has_authority: bool) -> Option<String> {
        let path = encode_except(value, EncodeClass::Path);

        if has_authority {
            if !path.is_empty() && !path.starts_with('/') {
                return None;
            }
            return Some(path);
        }

        if path.starts_with("//") {
            return None;
        }

        if !path.starts_with('/') {
            let first_segment = path.split('/').next().unwrap_or_default();
            if first_segment.contains(':') {
                return None;
            }
        }

        Some(path)
    }

    /// Strip one leading `?` and percent-encode.
    pub fn query(&self, value: &str) -> Option<String> {
        let query = value.strip_prefix('?').unwrap_or(value);
        Some(encode_except(query, EncodeClass::Query))
    }

    /// Strip one leading `#` and percent-encode.
    pub fn fragment(&self, value: &str) -> Option<String> {
        let fragment = value.strip_prefix('#').unwrap_or(value);
        Some(encode_except(fragment, EncodeClass::Fragment))
    }

    /// Validate and normalize a whole URL.
    ///
    /// This function:
    /// 1. Punycode-encodes an IDN host found in the raw string
    /// 2. Splits the string into its components
    /// 3. If `require_absolute`, requires a scheme and a string the WHATWG
    ///    parser accepts
    /// 4. Validates every present component; one invalid component fails
    ///    the whole URL
    /// 5. Drops a port equal to the scheme's default port
    ///
    /// An empty input is the empty relative reference unless an absolute
    /// URL is required.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit::Validator;
    ///
    /// let validator = Validator::default();
    /// let components = validator.validate_url("HTTP://WWW.EXAMPLE.COM:80/Path", true).unwrap();
    /// assert_eq!(components.url(), "http://WWW.EXAMPLE.COM/Path");
    /// ```
    pub fn validate_url(&self, raw: &str, require_absolute: bool) -> Result<Components, UrlError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return if require_absolute {
                Err(UrlError::MalformedUrl("empty URL".to_string()))
            } else {
                Ok(Components::default())
            };
        }

        // Step 1: IDN host to ASCII before the generic split
        let input = encode_idn_host(raw, self.punycode);

        // Step 2: Generic split
        let parts = split_url(&input)?;

        // Step 3: Strict absolute check
        if require_absolute {
            if parts.scheme.is_none() {
                return Err(UrlError::MalformedUrl(format!("not an absolute URL: {raw}")));
            }
            url::Url::parse(&input)?;
        }

        // Step 4: Per-component validation
        let scheme = parts
            .scheme
            .as_deref()
            .map(|s| require(Component::Scheme, s, self.scheme(s)))
            .transpose()?;
        let user = parts
            .user
            .as_deref()
            .map(|s| require(Component::User, s, self.user(s)))
            .transpose()?;
        let password = parts
            .password
            .as_deref()
            .map(|s| require(Component::Password, s, self.password(s)))
            .transpose()?;
        let host = parts
            .host
            .as_deref()
            .map(|s| require(Component::Host, s, self.host(s)))
            .transpose()?;
        let port = parts
            .port
            .as_deref()
            .map(|s| {
                let port = s.parse::<i64>().ok().and_then(|n| self.port(n));
                require(Component::Port, s, port)
            })
            .transpose()?;
        let path = require(
            Component::Path,
            &parts.path,
            self.path(&parts.path, host.is_some()),
        )?;
        let query = parts
            .query
            .as_deref()
            .map(|s| require(Component::Query, s, self.query(s)))
            .transpose()?;
        let fragment = parts
            .fragment
            .as_deref()
            .map(|s| require(Component::Fragment, s, self.fragment(s)))
            .transpose()?;

        // Step 5: Default ports are implied by the scheme
        let default_port = scheme.as_deref().and_then(|s| self.schemes.default_port(s));
        let port = port.filter(|p| Some(*p) != default_port);

        Ok(Components {
            scheme,
            user,
            password,
            host,
            port,
            path,
            query,
            fragment,
        })
    }

    /// Validate a URL that must be absolute.
    pub fn absolute_url(&self, raw: &str) -> Result<Components, UrlError> {
        self.validate_url(raw, true)
    }

    /// Check if the string is a valid absolute URL.
    pub fn is_absolute_url(&self, raw: &str) -> bool {
        self.absolute_url(raw).is_ok()
    }

    fn encode_if_needed(&self, value: &str) -> Option<String> {
        if idn::needs_encoding(value) {
            self.punycode.encode(value)
        } else {
            Some(value.to_string())
        }
    }
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Validator::new(SuffixTable::global(), SchemeTable::global())
    }
}

impl std::fmt::Debug for Validator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("suffixes", self.suffixes)
            .field("schemes", &self.schemes.len())
            .finish()
    }
}

fn require<T>(component: Component, value: &str, validated: Option<T>) -> Result<T, UrlError> {
    validated.ok_or_else(|| {
        debug!(%component, value, "Rejected URL component");
        UrlError::InvalidComponent(component)
    })
}

/// Validate a hostname: non-empty, `[a-zA-Z0-9-.]` only, no empty labels.
pub fn is_valid_host(host: &str) -> bool {
    !host.is_empty() && !idn::needs_encoding(host) && host.split('.').all(|label| !label.is_empty())
}

fn is_user_info(value: &str) -> bool {
    value
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b"-._~!$&'()*+,;=%".contains(&b))
        && has_valid_escapes(value)
}

/// Normalize a URL string with the process-wide tables.
///
/// # Examples
///
/// ```
/// use urlkit::normalize_url;
///
/// assert_eq!(normalize_url("HTTPS://Example.com:443/a b").unwrap(), "https://Example.com/a%20b");
/// ```
pub fn normalize_url(url: &str) -> Result<String, UrlError> {
    Validator::default().validate_url(url, false).map(|c| c.url())
}

/// Normalize a host with the process-wide tables.
pub fn normalize_host(host: &str) -> Result<String, UrlError> {
    Validator::default()
        .host(host)
        .ok_or(UrlError::InvalidComponent(Component::Host))
}
