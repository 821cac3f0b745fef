//! URL Defense wrapper detection and reversal.
//!
//! Email security gateways rewrite links into a wrapper URL that carries the
//! original destination in an obfuscated form. Two generations exist:
//!
//! - v3: `https://urldefense.com/v3/__<payload>__;<signature>!!<rest>`, where
//!   `*` in the payload stands for the next character of the signature.
//! - v2: `https://urldefense.proofpoint.com/v2/url?u=<encoded>&...`, where
//!   reserved characters are spelled as `-XX` tokens.
//!
//! v3 is tried first. Neither matching is not an error.

mod v2;
mod v3;

pub use v2::decode_tokens;
pub use v3::reverse_signature;

/// Result of looking for a wrapped destination in a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrapperOutcome {
    NotWrapped,
    Extracted(String),
}

impl WrapperOutcome {
    pub fn is_wrapped(&self) -> bool {
        matches!(self, WrapperOutcome::Extracted(_))
    }

    /// The embedded URL, if one was recovered.
    pub fn embedded_url(&self) -> Option<&str> {
        match self {
            WrapperOutcome::Extracted(url) => Some(url),
            WrapperOutcome::NotWrapped => None,
        }
    }
}

/// Detects a v3 or v2 wrapper in `url` and recovers the embedded URL.
///
/// Matching is pattern-based over the raw string, so `url` need not parse.
pub fn extract(url: &str) -> WrapperOutcome {
    if let Some(embedded) = v3::extract(url) {
        tracing::debug!(embedded = %embedded, "unwrapped v3 URL Defense link");
        return WrapperOutcome::Extracted(embedded);
    }
    if let Some(embedded) = v2::extract(url) {
        tracing::debug!(embedded = %embedded, "unwrapped v2 URL Defense link");
        return WrapperOutcome::Extracted(embedded);
    }
    WrapperOutcome::NotWrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_url_not_wrapped() {
        assert_eq!(extract("https://example.com"), WrapperOutcome::NotWrapped);
        assert_eq!(extract("not a url"), WrapperOutcome::NotWrapped);
        assert_eq!(extract(""), WrapperOutcome::NotWrapped);
    }

    #[test]
    fn v3_is_extracted() {
        let wrapped = "https://urldefense.com/v3/__https:**example.com*path*q=1__;///?!!ABC!xyz$";
        let out = extract(wrapped);
        assert!(out.is_wrapped());
        assert_eq!(out.embedded_url(), Some("https://example.com/path?q=1"));
    }

    #[test]
    fn v2_is_extracted() {
        let wrapped = "https://urldefense.proofpoint.com/v2/url?u=https-3A-2F-2Fexample.com-2Fpath-3Fk-3Dv&d=DwMF&c=abc";
        assert_eq!(
            extract(wrapped),
            WrapperOutcome::Extracted("https://example.com/path?k=v".to_string())
        );
    }

    #[test]
    fn v3_checked_before_v2() {
        // A v3 link whose payload happens to carry a v2 link.
        let wrapped = "https://urldefense.com/v3/__https://urldefense.proofpoint.com/v2/url?u=https-3A-2F-2Fa.com__;!!x";
        assert_eq!(
            extract(wrapped).embedded_url(),
            Some("https://urldefense.proofpoint.com/v2/url?u=https-3A-2F-2Fa.com")
        );
    }

    #[test]
    fn other_hosts_ignored() {
        assert_eq!(
            extract("https://example.com/v3/__https://a.com__;!!x"),
            WrapperOutcome::NotWrapped
        );
        assert_eq!(
            extract("https://example.com/v2/url?u=https-3A-2F-2Fa.com"),
            WrapperOutcome::NotWrapped
        );
    }
}
