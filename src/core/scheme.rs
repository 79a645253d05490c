//! IANA URI scheme registry and registered default ports.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::UrlError;

/// Embedded copy of the IANA URI scheme registry.
const EMBEDDED_SCHEMES: &str = include_str!("../../data/uri-schemes.txt");

/// Default ports of the schemes that register one.
const DEFAULT_PORTS: &[(&str, u16)] = &[
    ("acap", 674),
    ("afp", 548),
    ("coap", 5683),
    ("coaps", 5684),
    ("dict", 2628),
    ("dns", 53),
    ("ftp", 21),
    ("git", 9418),
    ("gopher", 70),
    ("http", 80),
    ("https", 443),
    ("imap", 143),
    ("ipp", 631),
    ("ipps", 631),
    ("irc", 194),
    ("ircs", 6697),
    ("ldap", 389),
    ("ldaps", 636),
    ("mms", 1755),
    ("msrp", 2855),
    ("msrps", 2855),
    ("mtqp", 1038),
    ("nfs", 111),
    ("nntp", 119),
    ("news", 119),
    ("pop", 110),
    ("redis", 6379),
    ("rediss", 6379),
    ("rsync", 873),
    ("rtmp", 1935),
    ("rtsp", 554),
    ("rtsps", 322),
    ("rtspu", 5005),
    ("sftp", 22),
    ("sip", 5060),
    ("sips", 5061),
    ("smb", 445),
    ("snews", 563),
    ("snmp", 161),
    ("ssh", 22),
    ("stun", 3478),
    ("stuns", 5349),
    ("svn", 3690),
    ("telnet", 23),
    ("tftp", 69),
    ("tn3270", 23),
    ("turn", 3478),
    ("turns", 5349),
    ("vnc", 5900),
    ("wais", 210),
    ("ws", 80),
    ("wss", 443),
    ("xmpp", 5222),
];

/// Key-only lookup table of registered URI schemes.
#[derive(Debug, Clone)]
pub struct SchemeTable {
    schemes: HashSet<String>,
}

impl SchemeTable {
    /// Create a table from the embedded registry.
    pub fn new() -> Self {
        Self::from_text(EMBEDDED_SCHEMES)
    }

    /// Create a table from text holding one scheme per line.
    ///
    /// Empty lines and lines starting with `#` are skipped.
    pub fn from_text(text: &str) -> Self {
        let schemes = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_ascii_lowercase)
            .collect();

        Self { schemes }
    }

    /// Create a table from a file holding one scheme per line.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, UrlError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// Process-wide table, built once from [`crate::Config::from_env`].
    pub fn global() -> &'static SchemeTable {
        static GLOBAL: OnceLock<SchemeTable> = OnceLock::new();
        GLOBAL.get_or_init(|| crate::config::Config::from_env().scheme_table())
    }

    /// Check if the scheme is registered. Case-insensitive.
    pub fn contains(&self, scheme: &str) -> bool {
        self.schemes.contains(&scheme.to_ascii_lowercase())
    }

    /// Number of registered schemes.
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Registered default port of a scheme, if it has one.
    pub fn default_port(&self, scheme: &str) -> Option<u16> {
        let scheme = scheme.to_ascii_lowercase();
        DEFAULT_PORTS
            .iter()
            .find(|(name, _)| *name == scheme)
            .map(|(_, port)| *port)
    }
}

impl Default for SchemeTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_schemes() {
        let table = SchemeTable::new();

        for scheme in ["http", "https", "ftp", "mailto", "file", "data", "ws", "wss", "urn", "sftp"] {
            assert!(table.contains(scheme), "Should know scheme: {}", scheme);
        }

        assert!(table.contains("HTTPS"));
        assert!(!table.contains("notascheme"));
        assert!(!table.contains(""));
    }

    #[test]
    fn test_comments_are_skipped() {
        let table = SchemeTable::from_text("# header\nfoo\n\n  bar  \n");
        assert_eq!(table.len(), 2);
        assert!(table.contains("bar"));
        assert!(!table.contains("# header"));
    }

    #[test]
    fn test_default_ports() {
        let table = SchemeTable::new();

        assert_eq!(table.default_port("http"), Some(80));
        assert_eq!(table.default_port("HTTPS"), Some(443));
        assert_eq!(table.default_port("ftp"), Some(21));
        assert_eq!(table.default_port("mailto"), None);
    }

    #[test]
    fn test_embedded_registry_is_large() {
        assert!(SchemeTable::new().len() > 300);
    }
}
