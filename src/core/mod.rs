//! Core lookup and encoding machinery.
//!
//! This module contains the data-driven parts of the crate:
//! - Percent-encoding per URL component
//! - Public Suffix List lookups with a compiled-in fallback
//! - The IANA scheme registry and default ports
//! - Relative reference resolution

pub mod encoder;
pub mod fallback;
pub mod resolver;
pub mod scheme;
pub mod suffix;

// Re-export main functionality
pub use encoder::{decode, encode_except, encode_stray_percents, has_valid_escapes, EncodeClass};
pub use resolver::{resolve_dots, Resolver};
pub use scheme::SchemeTable;
pub use suffix::SuffixTable;
