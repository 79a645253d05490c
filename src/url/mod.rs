//! URL processing and manipulation utilities.
//!
//! This module contains URL-related functionality:
//! - Generic splitting of URI references
//! - Component validation and normalization
//! - Public Suffix List host splitting
//! - The mutable [`Url`] value

pub mod normalizer;
pub mod psl;
pub mod utils;
pub mod value;

// Re-export main functionality
pub use normalizer::{is_valid_host, normalize_host, normalize_url, Validator};
pub use psl::{Domain, Host, HostSplitter};
pub use utils::{encode_idn_host, split_authority, split_url, Authority, UrlParts};
pub use value::Url;
