//! v2 wrapper: `urldefense.proofpoint.com/v2/url?u=<encoded>`.

use regex::Regex;
use std::sync::LazyLock;

static V2_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"urldefense\.proofpoint\.com/v2/url\?u=([^&]+)")
        .expect("v2 wrapper pattern is valid")
});

/// `-XX` tokens and the characters they stand for.
const TOKENS: [(&str, char); 5] = [
    ("-3A", ':'),
    ("-2F", '/'),
    ("-3F", '?'),
    ("-3D", '='),
    ("-26", '&'),
];

pub(super) fn extract(url: &str) -> Option<String> {
    let encoded = V2_PATTERN.captures(url)?.get(1)?.as_str();
    Some(decode_tokens(encoded))
}

/// Replaces known `-XX` tokens in one left-to-right pass.
///
/// Output is never rescanned, so a token produced by a replacement stays literal.
pub fn decode_tokens(encoded: &str) -> String {
    let mut out = String::with_capacity(encoded.len());
    let mut rest = encoded;
    while let Some(c) = rest.chars().next() {
        if c == '-' {
            if let Some((token, ch)) = TOKENS.iter().find(|(t, _)| rest.starts_with(t)) {
                out.push(*ch);
                rest = &rest[token.len()..];
                continue;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}
