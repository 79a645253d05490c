//! List configuration loaded from environment variables.
//!
//! The suffix and scheme lists are compiled into the crate. Either can be
//! replaced by a file on disk, for example a freshly downloaded copy of the
//! Public Suffix List:
//!
//! ```bash
//! export URLKIT_SUFFIX_LIST="/usr/share/publicsuffix/public_suffix_list.dat"
//! export URLKIT_SCHEME_LIST="/etc/urlkit/uri-schemes.txt"
//! ```
//!
//! ## Optional Variables
//!
//! - `URLKIT_SUFFIX_LIST` - Public Suffix List file (default: embedded list)
//! - `URLKIT_SCHEME_LIST` - scheme file, one scheme per line (default: embedded IANA registry)
//!
//! A file that cannot be read is logged and the embedded list is used.

use std::env;
use std::path::PathBuf;

use tracing::warn;

use crate::core::scheme::SchemeTable;
use crate::core::suffix::SuffixTable;

/// Environment variable naming a Public Suffix List file.
pub const SUFFIX_LIST_VAR: &str = "URLKIT_SUFFIX_LIST";

/// Environment variable naming a URI scheme list file.
pub const SCHEME_LIST_VAR: &str = "URLKIT_SCHEME_LIST";

/// Where the suffix and scheme tables come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Public Suffix List file; `None` uses the embedded list.
    pub suffix_list: Option<PathBuf>,
    /// Scheme list file; `None` uses the embedded registry.
    pub scheme_list: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or empty variables select the embedded lists.
    pub fn from_env() -> Self {
        Self {
            suffix_list: Self::load_path(SUFFIX_LIST_VAR),
            scheme_list: Self::load_path(SCHEME_LIST_VAR),
        }
    }

    fn load_path(var: &str) -> Option<PathBuf> {
        env::var_os(var)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Build the suffix table this configuration selects.
    pub fn suffix_table(&self) -> SuffixTable {
        match &self.suffix_list {
            Some(path) => SuffixTable::from_file(path).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Falling back to embedded suffix list");
                SuffixTable::new()
            }),
            None => SuffixTable::new(),
        }
    }

    /// Build the scheme table this configuration selects.
    pub fn scheme_table(&self) -> SchemeTable {
        match &self.scheme_list {
            Some(path) => SchemeTable::from_file(path).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Falling back to embedded scheme list");
                SchemeTable::new()
            }),
            None => SchemeTable::new(),
        }
    }
}
