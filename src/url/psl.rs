//! Public Suffix List integration for host splitting.
//!
//! A host splits into three parts:
//! - `suffix`: the public suffix (can be multi-label like "co.uk")
//! - `domain`: the label immediately left of the suffix, plus the suffix
//! - `subdomain`: everything left of the domain, joined with dots
//!
//! [`Host`] and [`Domain`] are plain values. Replacing a part builds a new
//! value from the remaining parts instead of patching the old one.
//!
//! The host keeps its case and so does the subdomain. The derived domain
//! and suffix are lowercase.

use std::borrow::Cow;
use std::fmt;

use crate::core::suffix::SuffixTable;
use crate::idn;

/// A registrable domain: one label followed by a public suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain {
    label: String,
    suffix: String,
}

impl Domain {
    /// Create a domain from its label and suffix. Both must be non-empty.
    pub fn new(label: impl Into<String>, suffix: impl Into<String>) -> Option<Self> {
        let label = label.into();
        let suffix = suffix.into();

        if label.is_empty() || suffix.is_empty() || label.contains('.') {
            return None;
        }

        Some(Self { label, suffix })
    }

    /// The label left of the suffix ("example" in "example.co.uk").
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The public suffix ("co.uk" in "example.co.uk").
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// A new domain with the label replaced.
    pub fn with_label(&self, label: &str) -> Option<Self> {
        Self::new(label, self.suffix.as_str())
    }

    /// A new domain with the suffix replaced.
    pub fn with_suffix(&self, suffix: &str) -> Option<Self> {
        Self::new(self.label.as_str(), suffix)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.label, self.suffix)
    }
}

/// A host together with its subdomain and registrable domain.
///
/// When a domain is present, `subdomain + "." + domain` (or the domain
/// alone) is the ASCII form of the host, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    host: String,
    subdomain: Option<String>,
    domain: Option<Domain>,
}

impl Host {
    /// Split a host with the given splitter.
    pub fn parse(host: &str, splitter: &HostSplitter<'_>) -> Self {
        let (subdomain, domain) = splitter.split(host);

        Self {
            host: host.to_string(),
            subdomain,
            domain,
        }
    }

    /// Build a host from a subdomain and a registrable domain.
    pub fn from_parts(subdomain: Option<&str>, domain: Domain) -> Self {
        let subdomain = subdomain.filter(|s| !s.is_empty()).map(str::to_string);
        let host = match &subdomain {
            Some(subdomain) => format!("{subdomain}.{domain}"),
            None => domain.to_string(),
        };

        Self {
            host,
            subdomain,
            domain: Some(domain),
        }
    }

    /// The full host string.
    pub fn as_str(&self) -> &str {
        &self.host
    }

    /// Everything left of the registrable domain.
    pub fn subdomain(&self) -> Option<&str> {
        self.subdomain.as_deref()
    }

    /// The registrable domain, if the host has a known public suffix.
    pub fn domain(&self) -> Option<&Domain> {
        self.domain.as_ref()
    }

    /// A new host with the subdomain replaced. Requires a domain.
    pub fn with_subdomain(&self, subdomain: Option<&str>) -> Option<Self> {
        let domain = self.domain.clone()?;
        Some(Self::from_parts(subdomain, domain))
    }

    /// A new host with the registrable domain replaced.
    pub fn with_domain(&self, domain: Domain) -> Self {
        Self::from_parts(self.subdomain.as_deref(), domain)
    }

    /// A new host with the domain label replaced. Requires a domain.
    pub fn with_domain_label(&self, label: &str) -> Option<Self> {
        let domain = self.domain.as_ref()?.with_label(label)?;
        Some(self.with_domain(domain))
    }

    /// A new host with the public suffix replaced. Requires a domain.
    pub fn with_domain_suffix(&self, suffix: &str) -> Option<Self> {
        let domain = self.domain.as_ref()?.with_suffix(suffix)?;
        Some(self.with_domain(domain))
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.host)
    }
}

/// Splits hosts into subdomain and registrable domain.
#[derive(Debug, Clone, Copy)]
pub struct HostSplitter<'a> {
    suffixes: &'a SuffixTable,
}

impl<'a> HostSplitter<'a> {
    /// Create a splitter over the given suffix table.
    pub fn new(suffixes: &'a SuffixTable) -> Self {
        Self { suffixes }
    }

    /// Split a host into `(subdomain, domain)` using the suffix table.
    ///
    /// A host outside `[a-zA-Z0-9-.]` is Punycode-encoded first, so the
    /// split agrees with [`SuffixTable::lookup_suffix`]. Both parts are
    /// `None` when the host has no known public suffix or is a public
    /// suffix itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit::{HostSplitter, SuffixTable};
    ///
    /// let table = SuffixTable::new();
    /// let (subdomain, domain) = HostSplitter::new(&table).split("api.example.co.uk");
    /// assert_eq!(subdomain.as_deref(), Some("api"));
    /// assert_eq!(domain.unwrap().to_string(), "example.co.uk");
    /// ```
    pub fn split(&self, host: &str) -> (Option<String>, Option<Domain>) {
        let Some(host) = self.to_ascii(host) else {
            return (None, None);
        };

        match self.suffixes.lookup_suffix(&host) {
            Some(suffix) => slice_host(&host, suffix.split('.').count()),
            None => (None, None),
        }
    }

    /// Split a host whose public suffix is already known.
    ///
    /// No suffix lookup happens. Host and suffix are compared in their
    /// Punycode form, ignoring ASCII case.
    pub fn split_with_suffix(&self, host: &str, suffix: &str) -> (Option<String>, Option<Domain>) {
        let (Some(host), Some(suffix)) = (self.to_ascii(host), self.to_ascii(suffix)) else {
            return (None, None);
        };

        let suffix_labels = suffix.split('.').count();
        let labels: Vec<&str> = host.split('.').collect();
        if labels.len() <= suffix_labels {
            return (None, None);
        }

        let tail = labels[labels.len() - suffix_labels..].join(".");
        if !tail.eq_ignore_ascii_case(&suffix) {
            return (None, None);
        }

        slice_host(&host, suffix_labels)
    }

    fn to_ascii<'h>(&self, host: &'h str) -> Option<Cow<'h, str>> {
        if idn::needs_encoding(host) {
            self.suffixes.punycode().encode(host).map(Cow::Owned)
        } else {
            Some(Cow::Borrowed(host))
        }
    }
}

/// Cut the host at the label boundary left of a suffix of `suffix_labels` labels.
fn slice_host(host: &str, suffix_labels: usize) -> (Option<String>, Option<Domain>) {
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() <= suffix_labels || labels.iter().any(|label| label.is_empty()) {
        return (None, None);
    }

    let label_index = labels.len() - suffix_labels - 1;
    let domain = Domain::new(
        labels[label_index].to_ascii_lowercase(),
        labels[label_index + 1..].join(".").to_ascii_lowercase(),
    );
    let subdomain = Some(labels[..label_index].join(".")).filter(|s| !s.is_empty());

    match domain {
        Some(domain) => (subdomain, Some(domain)),
        None => (None, None),
    }
}
