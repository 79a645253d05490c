//! Error types for URL parsing, validation and list loading.

use thiserror::Error;

use crate::types::Component;

/// Errors that can occur while parsing or validating a URL.
///
/// Lookups against the suffix and scheme tables never produce an error;
/// an unknown suffix or scheme is a normal `None`. The error only surfaces
/// once a component that was required turns out to be invalid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlError {
    /// The input could not be split into components, or it is not an
    /// absolute URL where one was required.
    #[error("Malformed URL: {0}")]
    MalformedUrl(String),

    /// A specific component failed its validator.
    #[error("Invalid URL component: {0}")]
    InvalidComponent(Component),

    /// A configured suffix or scheme list could not be read.
    #[error("Failed to read list file: {0}")]
    Io(String),
}

impl From<url::ParseError> for UrlError {
    fn from(err: url::ParseError) -> Self {
        UrlError::MalformedUrl(err.to_string())
    }
}

impl From<std::io::Error> for UrlError {
    fn from(err: std::io::Error) -> Self {
        UrlError::Io(err.to_string())
    }
}
