//! urlkit - URL parsing, validation, normalization and resolution
//!
//! This crate splits URL strings into their RFC 3986 components, validates
//! and normalizes each of them, splits hosts into subdomain, registrable
//! domain and public suffix using the Public Suffix List, and resolves
//! relative references against a base URL.
//!
//! # Features
//!
//! - **Normalizing**: schemes are lowercased, IDN hosts Punycode-encoded,
//!   paths, queries and fragments percent-encoded, default ports dropped
//! - **Idempotent**: validating a normalized URL returns the same components
//! - **Public Suffix List**: longest match with wildcard and exception rules,
//!   backed by an embedded copy of the list
//! - **Resolution**: relative references with dot-segment removal that
//!   clamps at the root
//!
//! # Quick Start
//!
//! ```
//! use urlkit::{Url, SuffixTable, HostSplitter};
//!
//! // Parse and normalize a URL
//! let url = Url::parse("HTTPS://www.Example.co.uk:443/a b?q=1")?;
//! assert_eq!(url.as_str(), "https://www.Example.co.uk/a%20b?q=1");
//! assert_eq!(url.domain_suffix(), Some("co.uk"));
//!
//! // Resolve a relative reference
//! let next = url.resolve("../c/./d")?;
//! assert_eq!(next.path(), "/c/d");
//!
//! // Split a host without a URL around it
//! let table = SuffixTable::new();
//! let (subdomain, domain) = HostSplitter::new(&table).split("a.b.example.github.io");
//! assert_eq!(subdomain.as_deref(), Some("a.b"));
//! assert_eq!(domain.unwrap().to_string(), "example.github.io");
//! # Ok::<(), urlkit::UrlError>(())
//! ```
//!
//! # Components
//!
//! | Component     | Example                 | Normalization                  |
//! |---------------|-------------------------|--------------------------------|
//! | scheme        | `https`                 | lowercase, IANA registered     |
//! | user/password | `user:secret`           | unchanged, validated           |
//! | host          | `www.example.co.uk`     | Punycode, case kept            |
//! | port          | `8080`                  | dropped when default           |
//! | path          | `/a%20b`                | percent-encoded                |
//! | query         | `q=1`                   | percent-encoded                |
//! | fragment      | `top`                   | percent-encoded                |
//!
//! # Error Handling
//!
//! Parsing returns `Result<T, UrlError>`. Common error cases:
//!
//! - Strings that cannot be split into components
//! - A component that fails its validator, reported by name
//! - Relative references where an absolute URL is required

// Re-export the URL value and its parts
pub use crate::url::{Domain, Host, HostSplitter, Url};

// Re-export validation and splitting
pub use crate::url::{normalize_host, normalize_url, split_url, UrlParts, Validator};

// Re-export lookup tables and encoding
pub use crate::core::{encode_except, resolve_dots, EncodeClass, Resolver, SchemeTable, SuffixTable};

// Re-export public types
pub use config::Config;
pub use error::UrlError;
pub use idn::{Punycode, Uts46};
pub use types::{Component, Components};

// Module declarations
pub mod config;
pub mod core;
pub mod error;
pub mod idn;
pub mod types;
pub mod url;
