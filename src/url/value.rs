//! The [`Url`] value: a validated URL with typed accessors and setters.

use std::fmt;
use std::str::FromStr;

use tracing::debug;
use url::form_urlencoded;

use crate::core::resolver::Resolver;
use crate::error::UrlError;
use crate::types::{Component, Components};
use crate::url::normalizer::Validator;
use crate::url::psl::{Domain, Host};

/// A parsed and normalized URL.
///
/// The URL is validated when it is built and every setter validates its
/// input again. A setter given an invalid value leaves the URL unchanged.
///
/// A `Url` keeps the [`Validator`] it was parsed with. Setters, port
/// defaults and [`Url::resolve`] use that validator's tables, so a URL
/// parsed with [`Url::parse_with`] stays on its custom tables.
///
/// # Examples
///
/// ```
/// use urlkit::Url;
///
/// let mut url = Url::parse("https://www.example.co.uk/path?q=1").unwrap();
/// assert_eq!(url.subdomain(), Some("www"));
/// assert_eq!(url.domain_suffix(), Some("co.uk"));
///
/// url.set_subdomain(Some("api")).set_port(Some(8443));
/// assert_eq!(url.as_str(), "https://api.example.co.uk:8443/path?q=1");
/// ```
#[derive(Debug, Clone)]
pub struct Url<'a> {
    components: Components,
    host: Option<Host>,
    serialization: String,
    validator: Validator<'a>,
}

impl Url<'static> {
    /// Parse a URL or a relative reference.
    pub fn parse(input: &str) -> Result<Self, UrlError> {
        Self::parse_with(&Validator::default(), input, false)
    }

    /// Parse a URL that must be absolute.
    pub fn parse_absolute(input: &str) -> Result<Self, UrlError> {
        Self::parse_with(&Validator::default(), input, true)
    }

    /// Build a URL from already validated components.
    pub fn from_components(components: Components) -> Self {
        Self::from_components_with(Validator::default(), components)
    }
}

impl<'a> Url<'a> {
    /// Parse with an explicit validator.
    pub fn parse_with(
        validator: &Validator<'a>,
        input: &str,
        require_absolute: bool,
    ) -> Result<Self, UrlError> {
        let components = validator.validate_url(input, require_absolute)?;
        Ok(Self::from_components_with(*validator, components))
    }

    fn from_components_with(validator: Validator<'a>, components: Components) -> Self {
        let splitter = validator.splitter();
        let host = components.host.as_deref().map(|h| Host::parse(h, &splitter));
        let serialization = components.url();

        Self {
            components,
            host,
            serialization,
            validator,
        }
    }

    /// The URL string.
    pub fn as_str(&self) -> &str {
        &self.serialization
    }

    /// All components.
    pub fn components(&self) -> &Components {
        &self.components
    }

    /// The lowercase scheme, if any.
    pub fn scheme(&self) -> Option<&str> {
        self.components.scheme.as_deref()
    }

    /// The percent-encoded user.
    pub fn user(&self) -> Option<&str> {
        self.components.user.as_deref()
    }

    /// The percent-encoded password.
    pub fn password(&self) -> Option<&str> {
        self.components.password.as_deref()
    }

    /// `user[:password]`
    pub fn user_info(&self) -> Option<String> {
        self.components.user_info()
    }

    /// `[userinfo@]host[:port]`
    pub fn authority(&self) -> Option<String> {
        self.components.authority()
    }

    /// The host in ASCII form, with its original case.
    pub fn host(&self) -> Option<&str> {
        self.components.host.as_deref()
    }

    /// Everything left of the registrable domain.
    pub fn subdomain(&self) -> Option<&str> {
        self.host.as_ref()?.subdomain()
    }

    /// The registrable domain, when the host has a known public suffix.
    pub fn domain(&self) -> Option<&Domain> {
        self.host.as_ref()?.domain()
    }

    /// The registrable domain without its public suffix.
    pub fn domain_label(&self) -> Option<&str> {
        self.domain().map(Domain::label)
    }

    /// The public suffix of the registrable domain.
    pub fn domain_suffix(&self) -> Option<&str> {
        self.domain().map(Domain::suffix)
    }

    /// The explicit port. Default ports are never stored.
    pub fn port(&self) -> Option<u16> {
        self.components.port
    }

    /// The explicit port, or the scheme's registered default port.
    pub fn port_or_default(&self) -> Option<u16> {
        self.components.port.or_else(|| {
            let scheme = self.scheme()?;
            self.validator.schemes().default_port(scheme)
        })
    }

    /// The percent-encoded path, possibly empty.
    pub fn path(&self) -> &str {
        &self.components.path
    }

    /// The percent-encoded query, without the `?`.
    pub fn query(&self) -> Option<&str> {
        self.components.query.as_deref()
    }

    /// Decode the query as `application/x-www-form-urlencoded` pairs.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        match self.query() {
            Some(query) => form_urlencoded::parse(query.as_bytes()).into_owned().collect(),
            None => Vec::new(),
        }
    }

    /// The percent-encoded fragment, without the `#`.
    pub fn fragment(&self) -> Option<&str> {
        self.components.fragment.as_deref()
    }

    /// Scheme and authority (`https://example.com:8080`).
    pub fn root(&self) -> String {
        self.components.root()
    }

    /// Check if this is a relative reference.
    pub fn is_relative_reference(&self) -> bool {
        self.components.is_relative_reference()
    }

    /// Resolve a reference against this URL.
    ///
    /// The result is validated with this URL's validator.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit::Url;
    ///
    /// let base = Url::parse("https://www.example.com/foo/bar/baz").unwrap();
    /// assert_eq!(base.resolve("../../test").unwrap().as_str(), "https://www.example.com/test");
    /// ```
    pub fn resolve(&self, reference: &str) -> Result<Url<'a>, UrlError> {
        let resolved = Resolver::new(self.validator).resolve(reference, &self.components);
        Url::parse_with(&self.validator, &resolved, true)
    }

    /// Replace the scheme. A port equal to the new default is dropped.
    pub fn set_scheme(&mut self, scheme: &str) -> &mut Self {
        let validator = self.validator;
        let Some(scheme) = validator.scheme(scheme) else {
            return self.ignored(Component::Scheme, scheme);
        };

        if validator.schemes().default_port(&scheme) == self.components.port {
            self.components.port = None;
        }
        self.components.scheme = Some(scheme);
        self.refresh()
    }

    /// Set or remove the user. Requires a host.
    pub fn set_user(&mut self, user: Option<&str>) -> &mut Self {
        match user {
            Some(value) => match self.validator.user(value) {
                Some(user) if self.components.host.is_some() => self.components.user = Some(user),
                _ => return self.ignored(Component::User, value),
            },
            None => {
                self.components.user = None;
                self.components.password = None;
            }
        }
        self.refresh()
    }

    /// Set or remove the password. Requires a user.
    pub fn set_password(&mut self, password: Option<&str>) -> &mut Self {
        match password {
            Some(value) => match self.validator.password(value) {
                Some(password) if self.components.user.is_some() => {
                    self.components.password = Some(password)
                }
                _ => return self.ignored(Component::Password, value),
            },
            None => self.components.password = None,
        }
        self.refresh()
    }

    /// Replace the host and split it again.
    pub fn set_host(&mut self, host: &str) -> &mut Self {
        let validator = self.validator;
        let Some(validated) = validator.host(host) else {
            return self.ignored(Component::Host, host);
        };

        let splitter = validator.splitter();
        self.replace_host(Host::parse(&validated, &splitter))
    }

    /// Replace or remove the subdomain. Requires a registrable domain.
    pub fn set_subdomain(&mut self, subdomain: Option<&str>) -> &mut Self {
        let subdomain = subdomain.filter(|s| !s.is_empty());
        let validated = match subdomain {
            Some(value) => match self.validator.subdomain(value) {
                Some(validated) => Some(validated),
                None => return self.ignored(Component::Subdomain, value),
            },
            None => None,
        };

        match self.host.as_ref().and_then(|h| h.with_subdomain(validated.as_deref())) {
            Some(host) => self.replace_host(host),
            None => self.ignored(Component::Subdomain, subdomain.unwrap_or_default()),
        }
    }

    /// Replace the registrable domain, keeping the subdomain.
    pub fn set_domain(&mut self, domain: &str) -> &mut Self {
        let Some(validated) = self.validator.domain(domain) else {
            return self.ignored(Component::Domain, domain);
        };

        let host = match &self.host {
            Some(host) => host.with_domain(validated),
            None => Host::from_parts(None, validated),
        };
        self.replace_host(host)
    }

    /// Replace the domain label. Requires a registrable domain.
    pub fn set_domain_label(&mut self, label: &str) -> &mut Self {
        let host = self
            .validator
            .domain_label(label)
            .and_then(|label| self.host.as_ref()?.with_domain_label(&label));

        match host {
            Some(host) => self.replace_host(host),
            None => self.ignored(Component::DomainLabel, label),
        }
    }

    /// Replace the public suffix. Requires a registrable domain.
    pub fn set_domain_suffix(&mut self, suffix: &str) -> &mut Self {
        let host = self
            .validator
            .domain_suffix(suffix)
            .and_then(|suffix| self.host.as_ref()?.with_domain_suffix(&suffix));

        match host {
            Some(host) => self.replace_host(host),
            None => self.ignored(Component::DomainSuffix, suffix),
        }
    }

    /// Set or remove the port. Requires a host; a default port is dropped.
    pub fn set_port(&mut self, port: Option<i64>) -> &mut Self {
        let Some(value) = port else {
            self.components.port = None;
            return self.refresh();
        };

        let validator = self.validator;
        let port = match validator.port(value) {
            Some(port) if self.components.host.is_some() => port,
            _ => return self.ignored(Component::Port, &value.to_string()),
        };

        let default_port = self
            .scheme()
            .and_then(|scheme| validator.schemes().default_port(scheme));
        self.components.port = Some(port).filter(|p| Some(*p) != default_port);
        self.refresh()
    }

    /// Replace the path. A `/` is prepended when the URL has a host.
    pub fn set_path(&mut self, path: &str) -> &mut Self {
        let has_host = self.components.host.is_some();
        let path = if has_host && !path.is_empty() && !path.starts_with('/') {
            format!("/{path}")
        } else {
            path.to_string()
        };

        let validated = self.validator.path(&path, has_host);
        match validated {
            Some(path) => {
                self.components.path = path;
                self.refresh()
            }
            None => self.ignored(Component::Path, &path),
        }
    }

    /// Set or remove the query.
    pub fn set_query(&mut self, query: Option<&str>) -> &mut Self {
        let validator = self.validator;
        self.components.query = query.and_then(|q| validator.query(q));
        self.refresh()
    }

    /// Replace the query with form-encoded pairs.
    pub fn set_query_pairs<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in pairs {
            serializer.append_pair(key.as_ref(), value.as_ref());
        }
        let query = serializer.finish();
        self.set_query(Some(&query))
    }

    /// Set or remove the fragment.
    pub fn set_fragment(&mut self, fragment: Option<&str>) -> &mut Self {
        let validator = self.validator;
        self.components.fragment = fragment.and_then(|f| validator.fragment(f));
        self.refresh()
    }

    fn replace_host(&mut self, host: Host) -> &mut Self {
        let path = &mut self.components.path;
        if !path.is_empty() && !path.starts_with('/') {
            path.insert(0, '/');
        }

        self.components.host = Some(host.as_str().to_string());
        self.host = Some(host);
        self.refresh()
    }

    fn ignored(&mut self, component: Component, value: &str) -> &mut Self {
        debug!(%component, value, "Ignoring invalid URL mutation");
        self
    }

    fn refresh(&mut self) -> &mut Self {
        self.serialization = self.components.url();
        self
    }
}

impl PartialEq for Url<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components && self.host == other.host
    }
}

impl Eq for Url<'_> {}

impl fmt::Display for Url<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialization)
    }
}

impl AsRef<str> for Url<'_> {
    fn as_ref(&self) -> &str {
        &self.serialization
    }
}

impl FromStr for Url<'static> {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Url::parse(s)
    }
}

impl TryFrom<&str> for Url<'static> {
    type Error = UrlError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Url::parse(value)
    }
}
