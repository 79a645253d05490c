//! Public Suffix List lookups.
//!
//! A [`SuffixTable`] answers two questions: is a key a public suffix
//! ([`SuffixTable::exists`]), and what is the longest public suffix of a
//! host ([`SuffixTable::lookup_suffix`]). A table over the embedded list
//! answers `exists` for common suffixes from a compiled-in subset. The full
//! list is parsed from its source on the first miss and kept for the
//! lifetime of the table. `lookup_suffix` checks exception rules before
//! anything else, so it always loads the full list.
//!
//! A table built from other list text never consults the compiled-in
//! subset; its answers come from that text alone.
//!
//! Rules are stored lowercase and Punycode-encoded. Wildcard rules keep
//! their `*.` prefix and exception rules their `!` prefix, exactly as they
//! appear in the list.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use tracing::info;

use crate::core::fallback::FALLBACK_SUFFIXES;
use crate::error::UrlError;
use crate::idn::{self, Punycode, Uts46};

/// Embedded copy of the Mozilla Public Suffix List.
const EMBEDDED_LIST: &str = include_str!("../../data/public_suffix_list.dat");

fn fallback() -> &'static HashSet<&'static str> {
    static FALLBACK: OnceLock<HashSet<&'static str>> = OnceLock::new();
    FALLBACK.get_or_init(|| FALLBACK_SUFFIXES.iter().copied().collect())
}

enum SuffixSource {
    Embedded,
    Text(String),
}

impl SuffixSource {
    fn text(&self) -> &str {
        match self {
            SuffixSource::Embedded => EMBEDDED_LIST,
            SuffixSource::Text(text) => text,
        }
    }
}

/// Lookup table over the Public Suffix List.
pub struct SuffixTable {
    source: SuffixSource,
    full: OnceLock<HashSet<String>>,
    punycode: Arc<dyn Punycode>,
}

impl SuffixTable {
    /// Create a table over the embedded list.
    pub fn new() -> Self {
        Self::with_source(SuffixSource::Embedded)
    }

    /// Create a table over list text in the Public Suffix List format.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::with_source(SuffixSource::Text(text.into()))
    }

    /// Create a table over a list file in the Public Suffix List format.
    ///
    /// The file is read immediately; its rules are parsed on first use.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, UrlError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(text))
    }

    fn with_source(source: SuffixSource) -> Self {
        Self {
            source,
            full: OnceLock::new(),
            punycode: Arc::new(Uts46),
        }
    }

    /// Replace the Punycode capability used for IDN keys.
    pub fn with_punycode(mut self, punycode: Arc<dyn Punycode>) -> Self {
        self.punycode = punycode;
        self
    }

    /// Process-wide table, built once from [`crate::Config::from_env`].
    pub fn global() -> &'static SuffixTable {
        static GLOBAL: OnceLock<SuffixTable> = OnceLock::new();
        GLOBAL.get_or_init(|| crate::config::Config::from_env().suffix_table())
    }

    /// The Punycode capability of this table.
    pub fn punycode(&self) -> &dyn Punycode {
        self.punycode.as_ref()
    }

    /// Check if the full list has been parsed.
    pub fn is_loaded(&self) -> bool {
        self.full.get().is_some()
    }

    /// Number of rules in the full list. Forces the list to load.
    pub fn len(&self) -> usize {
        self.full().len()
    }

    /// Check if the full list holds no rules. Forces the list to load.
    pub fn is_empty(&self) -> bool {
        self.full().is_empty()
    }

    fn full(&self) -> &HashSet<String> {
        self.full.get_or_init(|| {
            let rules = parse_rules(self.source.text(), self.punycode.as_ref());
            info!(rules = rules.len(), "Loaded public suffix list");
            rules
        })
    }

    /// Check if the key is a public suffix.
    ///
    /// For the embedded list the compiled-in subset is checked first. Then
    /// come the full list and the wildcard rule covering the key. When all three miss, the key is
    /// translated once between its Unicode and Punycode forms and checked
    /// again.
    pub fn exists(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        if self.exists_once(&key) {
            return true;
        }

        let translated = if idn::has_punycode(&key) {
            self.punycode.decode(&key)
        } else if !key.is_ascii() {
            self.punycode.encode(&key)
        } else {
            None
        };

        match translated {
            Some(translated) if translated != key => self.exists_once(&translated),
            _ => false,
        }
    }

    fn exists_once(&self, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }

        if matches!(self.source, SuffixSource::Embedded) && fallback().contains(key) {
            return true;
        }

        let full = self.full();
        if full.contains(key) {
            return true;
        }

        match key.split_once('.') {
            Some((_, parent)) => full.contains(&format!("*.{parent}")),
            None => false,
        }
    }

    /// Check if the key is excluded from a wildcard rule (`!key` in the list).
    pub fn is_exception(&self, key: &str) -> bool {
        self.full().contains(&format!("!{}", key.to_lowercase()))
    }

    /// Find the longest public suffix of a host.
    ///
    /// Returns the suffix in lowercase Punycode form, or `None` when the host
    /// has fewer than two labels or no suffix matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit::SuffixTable;
    ///
    /// let table = SuffixTable::new();
    /// assert_eq!(table.lookup_suffix("www.example.co.uk").as_deref(), Some("co.uk"));
    /// assert_eq!(table.lookup_suffix("localhost"), None);
    /// ```
    pub fn lookup_suffix(&self, host: &str) -> Option<String> {
        let mut host = host.to_lowercase();
        if idn::needs_encoding(&host) {
            if let Some(encoded) = self.punycode.encode(&host) {
                host = encoded;
            }
        }

        let labels: Vec<&str> = host.split('.').collect();
        if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
            return None;
        }

        // Longest candidate first, so the first hit is the longest match.
        for start in 0..labels.len() {
            let candidate = labels[start..].join(".");

            if start + 1 < labels.len() && self.is_exception(&candidate) {
                return Some(labels[start + 1..].join("."));
            }

            if self.exists(&candidate) {
                return Some(candidate);
            }
        }

        None
    }
}

impl Default for SuffixTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SuffixTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source {
            SuffixSource::Embedded => "embedded",
            SuffixSource::Text(_) => "text",
        };

        f.debug_struct("SuffixTable")
            .field("source", &source)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

/// Parse Public Suffix List text into normalized rule keys.
fn parse_rules(text: &str, punycode: &dyn Punycode) -> HashSet<String> {
    text.lines()
        .filter_map(|line| line.split_whitespace().next())
        .filter(|rule| !rule.starts_with("//"))
        .map(|rule| normalize_rule(rule, punycode))
        .collect()
}

fn normalize_rule(rule: &str, punycode: &dyn Punycode) -> String {
    let (prefix, name) = if let Some(name) = rule.strip_prefix('!') {
        ("!", name)
    } else if let Some(name) = rule.strip_prefix("*.") {
        ("*.", name)
    } else {
        ("", rule)
    };

    let name = name.to_lowercase();
    let name = if name.is_ascii() {
        name
    } else {
        punycode.encode(&name).unwrap_or(name)
    };

    format!("{prefix}{name}")
}
