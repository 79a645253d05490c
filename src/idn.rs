//! Internationalized domain name support.
//!
//! The suffix table and the validator only need a pair of pure functions
//! that translate between the Unicode and the ASCII (`xn--`) form of a
//! domain. They take the capability as a [`Punycode`] trait object so it
//! can be swapped; [`Uts46`] is the implementation backed by the `idna`
//! crate.

/// Punycode encode/decode capability (RFC 3492 / IDNA).
pub trait Punycode: Send + Sync {
    /// Convert a Unicode domain or label to its ASCII form.
    fn encode(&self, domain: &str) -> Option<String>;

    /// Convert an ASCII (`xn--`) domain or label to its Unicode form.
    fn decode(&self, domain: &str) -> Option<String>;
}

/// UTS #46 processing through the `idna` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uts46;

impl Punycode for Uts46 {
    fn encode(&self, domain: &str) -> Option<String> {
        idna::domain_to_ascii(domain).ok()
    }

    fn decode(&self, domain: &str) -> Option<String> {
        let (unicode, result) = idna::domain_to_unicode(domain);
        result.ok().map(|_| unicode)
    }
}

/// Check if a byte is allowed in an ASCII hostname as this crate accepts it.
#[inline]
pub fn is_host_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'.'
}

/// Check if the host holds anything outside `[a-zA-Z0-9-.]`.
pub fn needs_encoding(host: &str) -> bool {
    !host.bytes().all(is_host_byte)
}

/// Check if any label of the domain is in Punycode form.
pub fn has_punycode(domain: &str) -> bool {
    domain
        .split('.')
        .any(|label| label.len() > 4 && label.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("xn--")))
}
